//! Domain layer for env materialization
//!
//! This module contains the config document, the versioned target templates,
//! the storage port and the error taxonomy. It performs no I/O of its own.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{MaterializeError, MaterializeResult};
