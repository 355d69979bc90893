//! Byte-offset ranges and line/column conversion.

use super::position::{Position, Span};

pub use text_size::{TextRange, TextSize};

/// A zero-based line/column pair, columns counted in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets of a source text to line/column pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self { line_starts }
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        LineCol {
            line: line as u32,
            col: u32::from(offset - self.line_starts[line]),
        }
    }

    /// Convert a byte range into a line/column [`Span`].
    pub fn span(&self, range: TextRange) -> Span {
        let start = self.line_col(range.start());
        let end = self.line_col(range.end());
        Span::new(
            Position::new(start.line as usize, start.col as usize),
            Position::new(end.line as usize, end.col as usize),
        )
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
