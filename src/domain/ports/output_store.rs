use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage errors surfaced by [`OutputStore`] adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid output path {}: {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },
}

/// Port for the writable storage rendered env files land in.
///
/// Paths are relative to the store's root. A write first ensures every
/// parent directory exists (no error if already present), then replaces the
/// whole file. There is no rename-into-place step; the last writer wins.
pub trait OutputStore {
    fn write(&self, path: &Path, content: &str) -> Result<(), StorageError>;

    /// Human-readable location of `path` for status output.
    fn describe(&self, path: &Path) -> String {
        path.display().to_string()
    }
}

impl<T: OutputStore + ?Sized> OutputStore for &T {
    fn write(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        (**self).write(path, content)
    }

    fn describe(&self, path: &Path) -> String {
        (**self).describe(path)
    }
}
