//! Helpers for running synthesis over in-memory sources.

use stubgen::synth::{BatchOutput, Diagnostic};
use stubgen::{OutputUnit, SynthesisOptions, Workspace};
use tokio_util::sync::CancellationToken;

/// Build a workspace from sources named `file0.cs`, `file1.cs`, ...
pub fn workspace_from(sources: &[&str]) -> Workspace {
    let workspace = Workspace::from_sources(
        sources
            .iter()
            .enumerate()
            .map(|(i, text)| (format!("file{i}.cs"), *text)),
    );
    let errors: Vec<_> = workspace.syntax_errors().collect();
    assert!(errors.is_empty(), "fixture has syntax errors: {errors:?}");
    workspace
}

/// Run a full batch with the given options.
pub fn batch_with(sources: &[&str], options: &SynthesisOptions) -> BatchOutput {
    workspace_from(sources)
        .synthesize(options, &CancellationToken::new())
        .expect("batch was not cancelled")
}

/// Synthesize the single annotated interface in `sources`.
pub fn generate_with(sources: &[&str], options: &SynthesisOptions) -> (OutputUnit, Vec<Diagnostic>) {
    let mut output = batch_with(sources, options);
    assert_eq!(output.units.len(), 1, "expected exactly one generated unit");
    (output.units.remove(0), output.diagnostics)
}

pub fn generate(sources: &[&str]) -> (OutputUnit, Vec<Diagnostic>) {
    generate_with(sources, &SynthesisOptions::default())
}

/// Names of the `{ get; ... }` auto-properties declared in generated source.
pub fn data_member_names(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| {
            line.starts_with("public ") && (line.ends_with("set; }") || line.ends_with("init; }"))
        })
        .filter_map(|line| {
            let head = line.split(" {").next()?;
            head.rsplit(' ').next().map(str::to_string)
        })
        .collect()
}
