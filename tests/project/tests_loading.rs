#![allow(clippy::unwrap_used)]

use std::fs;

use stubgen::{LoadError, SynthesisOptions, Workspace};
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use crate::helpers::source_fixtures::*;

#[test]
fn test_load_directory_resolves_across_nested_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("Domain/Base")).unwrap();
    fs::write(dir.path().join("Domain/Base/Entity.cs"), ENTITY).unwrap();
    fs::write(dir.path().join("Domain/Auditable.cs"), AUDITABLE).unwrap();
    fs::write(dir.path().join("Domain/Product.cs"), PRODUCT_MULTIPLE).unwrap();
    fs::write(dir.path().join("README.md"), "# not a declaration").unwrap();

    let workspace = Workspace::load_directory(dir.path()).unwrap();
    assert_eq!(workspace.files().len(), 3);
    assert_eq!(workspace.syntax_errors().count(), 0);

    let output = workspace
        .synthesize(&SynthesisOptions::default(), &CancellationToken::new())
        .unwrap();
    assert_eq!(output.units.len(), 1);
    assert!(output.units[0].source.contains("public required int Id { get; set; }"));
}

#[test]
fn test_load_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Lookup.cs");
    fs::write(&path, LOOKUP_WITH_INDEXER).unwrap();

    let workspace = Workspace::load_file(&path).unwrap();
    let id = workspace.table().lookup("ILookup").unwrap();
    let decl = workspace.table().get(id).unwrap();
    let file = workspace.file(decl.file.unwrap()).unwrap();
    assert_eq!(file.path, path);
}

#[test]
fn test_load_directory_missing() {
    let dir = TempDir::new().unwrap();
    let err = Workspace::load_directory(dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, LoadError::DirectoryNotFound(_)));
}
