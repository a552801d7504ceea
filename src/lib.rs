//! pzenv - env file materializer
//!
//! pzenv reads one structured config document and renders it into the env
//! files of two downstream processes: a backend service (`backend/.env`) and a
//! frontend (`frontend/.env.local`). Each output is a flat list of `KEY=VALUE`
//! lines whose shape is fixed by a versioned target template.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): config document, templates, document and
//!   storage ports, errors
//! - **Service Layer** (`services`): the config materializer
//! - **Infrastructure Layer** (`infrastructure`): document reading, settings,
//!   logging, storage adapters
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use pzenv::domain::models::TemplateRevision;
//! use pzenv::infrastructure::storage::MemoryStore;
//! use pzenv::services::ConfigMaterializer;
//!
//! let materializer = ConfigMaterializer::new(MemoryStore::new(), TemplateRevision::V2);
//! assert_eq!(materializer.templates().len(), 2);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{ConfigDocument, TargetKind, TargetTemplate, TemplateRevision};
pub use domain::ports::{DocumentSource, OutputStore, StorageError};
pub use domain::{MaterializeError, MaterializeResult};
pub use infrastructure::config::{FileDocumentSource, Settings, SettingsError, SettingsLoader};
pub use infrastructure::storage::{FsStore, MemoryStore};
pub use services::{ConfigMaterializer, RunMode};
