//! Parser for interface declaration files
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser (recursive descent, trivia dropped) → syntax::ast::SourceFile
//!     ↓
//! HIR lowering → InterfaceTable
//! ```
//!
//! Only the declaration surface is understood: `using` directives,
//! namespaces, attributes, interfaces and their members. Other type
//! declarations are recorded by name and their bodies skipped.

#[allow(clippy::module_inception)]
mod parser;

mod error;
mod lexer;
mod syntax_kind;

pub use error::SyntaxError;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse};
pub use syntax_kind::SyntaxKind;
