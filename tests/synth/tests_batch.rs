#![allow(clippy::unwrap_used)]

use stubgen::synth::{NullSink, synthesize_all};
use stubgen::{SynthesisOptions, synthesize};
use tokio_util::sync::CancellationToken;

use crate::helpers::synth_helpers::*;

const MANY: &str = r#"
namespace Batch;

[GenerateImplementation] public interface IAlpha { int A { get; set; } }
public interface IPlain { int P { get; set; } }
[GenerateImplementation] public interface IBeta : IPlain { int B { get; set; } }
[GenerateImplementation] public interface IGamma { object this[int i] { get; } }
"#;

#[test]
fn test_batch_keeps_candidate_order() {
    let output = batch_with(&[MANY], &SynthesisOptions::default());
    let names: Vec<_> = output.units.iter().map(|u| u.type_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    assert!(output.skipped.is_empty());
    assert_eq!(output.diagnostics.len(), 1);
}

#[test]
fn test_cancelled_batch_returns_nothing() {
    let workspace = workspace_from(&[MANY]);
    let cancel = CancellationToken::new();
    cancel.cancel();
    assert!(workspace.synthesize(&SynthesisOptions::default(), &cancel).is_none());
}

#[test]
fn test_unannotated_candidate_is_skipped() {
    let workspace = workspace_from(&[MANY]);
    let table = workspace.table();
    let plain = table.lookup("Batch.IPlain").unwrap();
    let beta = table.lookup("Batch.IBeta").unwrap();

    let output = synthesize_all(
        table,
        &[plain, beta],
        &SynthesisOptions::default(),
        &CancellationToken::new(),
    )
    .unwrap();
    assert_eq!(output.skipped, vec![plain]);
    assert_eq!(output.units.len(), 1);
    assert_eq!(data_member_names(&output.units[0].source), vec!["B", "P"]);
}

#[test]
fn test_single_synthesis_matches_batch() {
    let workspace = workspace_from(&[MANY]);
    let table = workspace.table();
    let alpha = table.lookup("Batch.IAlpha").unwrap();

    let single = synthesize(table, alpha, &SynthesisOptions::default(), &mut NullSink).unwrap();
    let batch = batch_with(&[MANY], &SynthesisOptions::default());
    assert_eq!(single, batch.units[0]);
}
