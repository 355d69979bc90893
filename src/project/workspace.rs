use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;

use super::error::LoadError;
use super::file_loader;
use crate::base::{FileId, LineIndex};
use crate::hir::{LowerInput, lower};
use crate::model::InterfaceTable;
use crate::parser::{SyntaxError, parse};
use crate::syntax::ast::SourceFile;
use crate::synth::{BatchOutput, SynthesisOptions, synthesize_table};

/// One declaration file held by a [`Workspace`].
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub id: FileId,
    pub path: PathBuf,
    pub text: String,
    pub syntax: SourceFile,
    pub errors: Vec<SyntaxError>,
    pub line_index: LineIndex,
}

/// A set of parsed declaration files and the interface table built from them.
///
/// Syntax errors do not prevent loading: the parser recovers, the errors
/// are kept on the file, and whatever parsed cleanly is lowered.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    files: Vec<LoadedFile>,
    table: InterfaceTable,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workspace from in-memory `(path, text)` pairs.
    pub fn from_sources<P, T>(sources: impl IntoIterator<Item = (P, T)>) -> Self
    where
        P: Into<PathBuf>,
        T: Into<String>,
    {
        let mut workspace = Self::new();
        for (path, text) in sources {
            workspace.push(path.into(), text.into());
        }
        workspace.rebuild();
        workspace
    }

    /// Load a single declaration file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = file_loader::load_file(path)?;
        Ok(Self::from_sources([(path.to_path_buf(), text)]))
    }

    /// Load every declaration file under `path`, recursively.
    ///
    /// Files that cannot be read are collected into one
    /// [`LoadError::Failed`]; nothing is returned in that case.
    pub fn load_directory(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let paths = file_loader::collect_file_paths(path.as_ref())?;
        let mut workspace = Self::new();
        let mut errors = Vec::new();

        for path in paths {
            match file_loader::load_file(&path) {
                Ok(text) => {
                    workspace.push(path, text);
                }
                Err(e) => errors.push(e),
            }
        }

        if let Some(error) = LoadError::aggregate(errors) {
            return Err(error);
        }
        workspace.rebuild();
        Ok(workspace)
    }

    /// Add or replace a file and rebuild the interface table.
    pub fn set_file(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> FileId {
        let path = path.into();
        let text = text.into();
        let id = match self.files.iter().position(|f| f.path == path) {
            Some(index) => {
                let id = FileId::new(index);
                self.files[index] = parse_file(id, path, text);
                id
            }
            None => self.push(path, text),
        };
        self.rebuild();
        id
    }

    pub fn files(&self) -> &[LoadedFile] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&LoadedFile> {
        self.files.get(id.index())
    }

    pub fn table(&self) -> &InterfaceTable {
        &self.table
    }

    /// Every syntax error, with the path of the file it occurred in.
    pub fn syntax_errors(&self) -> impl Iterator<Item = (&Path, &SyntaxError)> {
        self.files
            .iter()
            .flat_map(|file| file.errors.iter().map(move |e| (file.path.as_path(), e)))
    }

    /// Synthesize every annotated interface.
    pub fn synthesize(
        &self,
        options: &SynthesisOptions,
        cancel: &CancellationToken,
    ) -> Option<BatchOutput> {
        synthesize_table(&self.table, options, cancel)
    }

    fn push(&mut self, path: PathBuf, text: String) -> FileId {
        let id = FileId::new(self.files.len());
        self.files.push(parse_file(id, path, text));
        id
    }

    fn rebuild(&mut self) {
        let inputs: Vec<LowerInput<'_>> = self
            .files
            .iter()
            .map(|file| LowerInput {
                file: file.id,
                source: &file.syntax,
                line_index: Some(&file.line_index),
            })
            .collect();
        self.table = lower(&inputs);
    }
}

fn parse_file(id: FileId, path: PathBuf, text: String) -> LoadedFile {
    let parse = parse(&text);
    for error in &parse.errors {
        tracing::warn!(file = %path.display(), "{error}");
    }
    let line_index = LineIndex::new(&text);
    LoadedFile {
        id,
        path,
        text,
        syntax: parse.file,
        errors: parse.errors,
        line_index,
    }
}
