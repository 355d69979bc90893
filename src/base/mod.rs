//! Foundation types for the stubgen toolchain.
//!
//! This module provides fundamental types used throughout the generator:
//! - [`FileId`] - Interned file identifiers
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - Line/column positions for diagnostics
//! - Domain constants (file extension, marker attribute, banner)
//!
//! This module has NO dependencies on other stubgen modules.

pub mod constants;
mod file_id;
mod position;
mod span;

pub use file_id::FileId;
pub use position::{Position, Span};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
