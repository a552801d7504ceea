//! Output storage adapters
//!
//! - `FsStore`: writes under an injected output directory
//! - `MemoryStore`: keeps files in memory (tests, dry runs)

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use std::path::{Component, Path, PathBuf};

use crate::domain::ports::StorageError;

/// Why `path` cannot be used under a store's root, if it cannot.
pub(crate) fn escape_reason(path: &Path) -> Option<&'static str> {
    if path.as_os_str().is_empty() {
        return Some("path is empty");
    }

    path.components().find_map(|component| match component {
        Component::Normal(_) | Component::CurDir => None,
        Component::ParentDir => Some("parent directory components are not allowed"),
        Component::RootDir | Component::Prefix(_) => {
            Some("path must be relative to the output directory")
        }
    })
}

/// Reject paths that would escape a store's root.
pub(crate) fn ensure_relative(path: &Path) -> Result<(), StorageError> {
    match escape_reason(path) {
        Some(reason) => Err(StorageError::InvalidPath {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// `path` with `.` components dropped, so `./backend/.env` and
/// `backend/.env` compare equal.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
