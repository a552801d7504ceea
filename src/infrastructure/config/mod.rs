//! Configuration management infrastructure
//!
//! - Reading the config document (JSON or YAML)
//! - Tool settings via figment: defaults, YAML file, CLI overrides
//! - Settings validation

pub mod document;
pub mod loader;
pub mod settings;

pub use document::{read_document, DocumentFormat, FileDocumentSource};
pub use loader::{SettingsError, SettingsLoader};
pub use settings::{Settings, SettingsOverrides};
