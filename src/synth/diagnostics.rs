//! Diagnostics — advisory messages handed to the host while synthesizing.
//!
//! Nothing reported here blocks generation.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{FileId, Span};
use crate::model::{InterfaceDecl, Property};

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        }
    }
}

/// Standard diagnostic codes.
///
/// ## Code Ranges
///
/// - **I0001-I0099**: Informational (generation proceeds unchanged)
pub mod codes {
    /// An indexer was implemented with a throwing stub.
    pub const INDEXER_STUB: &str = "I0001";
}

/// A diagnostic about one member of one interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: &'static str,
    pub message: Arc<str>,
    /// Name of the interface declaring the member.
    pub interface: SmolStr,
    /// Display name of the member.
    pub member: SmolStr,
    pub file: Option<FileId>,
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Advisory raised for every indexer a generated type stubs out.
    pub fn indexer_stub(owner: &InterfaceDecl, indexer: &Property) -> Self {
        let params = indexer
            .parameters
            .iter()
            .map(|p| p.ty.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let member = SmolStr::from(format!("{}[{params}]", indexer.name));
        Self {
            severity: Severity::Info,
            code: codes::INDEXER_STUB,
            message: format!(
                "Indexer '{member}' of interface '{}' is implemented with a stub that throws NotImplementedException",
                owner.name
            )
            .into(),
            interface: owner.name.clone(),
            member,
            file: owner.file,
            span: owner.span,
        }
    }
}

/// Receiver of diagnostics raised during synthesis.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// A sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}
