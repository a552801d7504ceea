use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ensure_relative;
use crate::domain::ports::{OutputStore, StorageError};

/// Filesystem store rooted at an output directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf, StorageError> {
        ensure_relative(path)?;
        Ok(self.root.join(path))
    }
}

impl OutputStore for FsStore {
    fn write(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        let full_path = self.resolve(path)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&full_path, content).map_err(|source| StorageError::Write {
            path: full_path.clone(),
            source,
        })?;

        debug!(path = %full_path.display(), bytes = content.len(), "env file written");
        Ok(())
    }

    fn describe(&self, path: &Path) -> String {
        self.root.join(path).display().to_string()
    }
}
