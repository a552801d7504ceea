//! Reading the structured config document from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::domain::models::ConfigDocument;
use crate::domain::ports::DocumentSource;
use crate::domain::{MaterializeError, MaterializeResult};

/// Reads config documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDocumentSource;

impl DocumentSource for FileDocumentSource {
    fn load(&self, path: &Path) -> MaterializeResult<ConfigDocument> {
        read_document(path)
    }
}

/// Document syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` / `.yml` are YAML; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub fn parse(self, source: &str) -> Result<Value, String> {
        match self {
            Self::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(source).map_err(|e| e.to_string()),
        }
    }
}

/// Read and parse the document at `path`.
pub fn read_document(path: &Path) -> MaterializeResult<ConfigDocument> {
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MaterializeError::ConfigNotFound(path.to_path_buf()),
        _ => MaterializeError::ConfigParse {
            path: path.to_path_buf(),
            message: format!("could not read file: {e}"),
        },
    })?;

    parse_document(path, &source)
}

/// Parse `source` as the document found at `path`.
pub fn parse_document(path: &Path, source: &str) -> MaterializeResult<ConfigDocument> {
    let parse_error = |message: String| MaterializeError::ConfigParse {
        path: path.to_path_buf(),
        message,
    };

    let value = DocumentFormat::from_path(path)
        .parse(source)
        .map_err(parse_error)?;

    ConfigDocument::from_value(value)
        .map_err(|kind| parse_error(format!("expected a mapping at the top level, found {kind}")))
}
