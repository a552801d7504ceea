use std::path::PathBuf;

use serde::Serialize;

use super::template::TargetKind;

/// A rendered env file and where it goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    pub target: TargetKind,
    /// Path relative to the output store's root
    pub path: PathBuf,
    pub content: String,
}

impl OutputFile {
    pub fn new(target: TargetKind, path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            target,
            path: path.into(),
            content,
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}
