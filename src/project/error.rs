use std::path::PathBuf;

use thiserror::Error;

/// Failure to load declaration files from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Several files failed; `details` has one line per file.
    #[error("Failed to load {count} file(s):\n  {details}")]
    Failed { count: usize, details: String },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Fold per-file errors into one. `None` when there were none.
    pub(crate) fn aggregate(errors: Vec<LoadError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            _ => {
                let details = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n  ");
                Some(Self::Failed {
                    count: errors.len(),
                    details,
                })
            }
        }
    }
}
