//! High-level IR (HIR) — from syntax to the semantic interface table.
//!
//! ## Key Types
//!
//! - [`lower`] — build an [`InterfaceTable`](crate::model::InterfaceTable) from parsed files
//! - [`TypeIndex`] — workspace-wide index of declared type names
//! - [`Resolver`] — name resolution within one declaration scope
//!
//! ## Passes
//!
//! ```text
//! SourceFile (per file)
//!     │
//!     ▼
//! declare                ← every interface/class/struct/record/enum name
//!     │
//!     ▼
//! resolve + merge        ← bases, member signatures, marker annotation
//!     │
//!     ▼
//! InterfaceTable
//! ```

mod lower;
mod resolve;

pub use lower::{LowerInput, lower};
pub use resolve::{Resolver, Scope, TypeIndex, TypeTarget};
