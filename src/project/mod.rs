//! Project loading — declaration files from disk or memory into a [`Workspace`].

mod error;
pub mod file_loader;
mod workspace;

pub use error::LoadError;
pub use workspace::{LoadedFile, Workspace};
