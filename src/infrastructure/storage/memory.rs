use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::ensure_relative;
use crate::domain::ports::{OutputStore, StorageError};

/// In-memory store. Holds the last content written to each path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: RwLock<BTreeMap<PathBuf, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .read()
            .ok()
            .and_then(|files| files.get(path.as_ref()).cloned())
    }

    /// Paths written so far, in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.files.read().map(|files| files.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputStore for MemoryStore {
    fn write(&self, path: &Path, content: &str) -> Result<(), StorageError> {
        ensure_relative(path)?;

        let mut files = self.files.write().map_err(|_| StorageError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::other("memory store lock poisoned"),
        })?;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn describe(&self, path: &Path) -> String {
        format!("memory:{}", path.display())
    }
}
