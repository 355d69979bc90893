//! Batch synthesis over many root interfaces.
//!
//! Candidates share no mutable state, so they are synthesized in parallel.
//! Results keep candidate order.

use rayon::prelude::*;
use tokio_util::sync::CancellationToken;

use super::diagnostics::Diagnostic;
use super::emit::{OutputUnit, synthesize};
use super::options::SynthesisOptions;
use crate::model::{InterfaceId, InterfaceSource, InterfaceTable};

/// Everything produced by one batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub units: Vec<OutputUnit>,
    pub diagnostics: Vec<Diagnostic>,
    /// Candidates that produced no output.
    pub skipped: Vec<InterfaceId>,
}

/// Synthesize every candidate. Returns `None` if `cancel` is signalled
/// before the batch completes; no partial output is returned.
pub fn synthesize_all<S>(
    source: &S,
    candidates: &[InterfaceId],
    options: &SynthesisOptions,
    cancel: &CancellationToken,
) -> Option<BatchOutput>
where
    S: InterfaceSource + Sync + ?Sized,
{
    let results: Vec<Option<(InterfaceId, Option<OutputUnit>, Vec<Diagnostic>)>> = candidates
        .par_iter()
        .map(|&id| {
            if cancel.is_cancelled() {
                return None;
            }
            let mut diagnostics = Vec::new();
            let unit = synthesize(source, id, options, &mut diagnostics);
            Some((id, unit, diagnostics))
        })
        .collect();

    if cancel.is_cancelled() {
        tracing::debug!("synthesis batch cancelled");
        return None;
    }

    let mut output = BatchOutput::default();
    for result in results {
        let (id, unit, diagnostics) = result?;
        match unit {
            Some(unit) => output.units.push(unit),
            None => output.skipped.push(id),
        }
        output.diagnostics.extend(diagnostics);
    }

    tracing::info!(
        candidates = candidates.len(),
        generated = output.units.len(),
        skipped = output.skipped.len(),
        diagnostics = output.diagnostics.len(),
        "synthesis batch complete"
    );
    Some(output)
}

/// Synthesize every annotated interface of `table`.
pub fn synthesize_table(
    table: &InterfaceTable,
    options: &SynthesisOptions,
    cancel: &CancellationToken,
) -> Option<BatchOutput> {
    let candidates: Vec<_> = table.annotated().collect();
    synthesize_all(table, &candidates, options, cancel)
}
