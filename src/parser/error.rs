//! Syntax error type

use text_size::TextRange;
use thiserror::Error;

/// A syntax error with its source range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {range:?}")]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}
