//! Port trait definitions (Hexagonal Architecture)
//!
//! - DocumentSource: where the config document is read from
//! - OutputStore: where rendered env files are written
//!
//! Adapters live in `infrastructure::config` and `infrastructure::storage`.

pub mod document_source;
pub mod output_store;

pub use document_source::DocumentSource;
pub use output_store::{OutputStore, StorageError};
