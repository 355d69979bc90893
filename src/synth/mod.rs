//! Synthesis — flatten an interface hierarchy and write its implementation.
//!
//! ## Pipeline
//!
//! ```text
//! flatten          ← all members reachable through the base graph
//!     │
//!     ▼
//! resolve_imports  ← namespaces needed by every mentioned type
//!     │
//!     ▼
//! TypeRenderer     ← short vs. fully-qualified type names
//!     │
//!     ▼
//! synthesize       ← source text for one root interface
//!     │
//!     ▼
//! synthesize_all   ← parallel batch with cancellation
//! ```

mod batch;
mod diagnostics;
mod emit;
pub mod flatten;
pub mod imports;
pub mod naming;
mod options;
pub mod render;

pub use batch::{BatchOutput, synthesize_all, synthesize_table};
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, Severity, codes};
pub use emit::{OutputUnit, synthesize};
pub use flatten::{FlatMember, FlattenedMembers, flatten, flatten_all};
pub use imports::{ImportSet, resolve_imports};
pub use naming::{TypeShape, implementation_name};
pub use options::{Qualification, SynthesisOptions};
pub use render::TypeRenderer;
