//! # stubgen-base
//!
//! Core library for flattening interface hierarchies and synthesizing
//! stub implementations of annotated interfaces.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Workspace loading from disk or memory
//!   ↓
//! synth     → Flattening, import resolution, rendering, batch synthesis
//!   ↓
//! hir       → Lowering syntax to the interface table, name resolution
//!   ↓
//! model     → InterfaceTable, members, type references
//!   ↓
//! syntax    → AST types for declaration files
//!   ↓
//! parser    → Logos lexer, recursive-descent parser
//!   ↓
//! base      → Primitives (FileId, TextRange, Span, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → model → hir → synth → project)
// ============================================================================

/// Foundation types: FileId, TextRange, line/column spans
pub mod base;

/// Parser: Logos lexer, recursive-descent parser
pub mod parser;

/// Syntax: AST types for declaration files
pub mod syntax;

/// Semantic model: interfaces, members, type references
pub mod model;

/// High-level IR: lowering and name resolution
pub mod hir;

/// Synthesis: flattening, imports, rendering, emission
pub mod synth;

/// Project management: workspace loading
pub mod project;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, Position, Span, TextRange, TextSize};

// Re-export the main entry points
pub use model::{InterfaceId, InterfaceSource, InterfaceTable};
pub use project::{LoadError, Workspace};
pub use synth::{BatchOutput, OutputUnit, SynthesisOptions, synthesize, synthesize_all};
