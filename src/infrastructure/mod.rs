//! Infrastructure layer module
//!
//! This module contains the adapters and external integrations:
//! - Config document reading and tool settings
//! - Logging infrastructure
//! - Output storage (filesystem and in-memory)
//! - Tool-relative path resolution
//!
//! Storage adapters satisfy the port trait defined in the domain layer.

pub mod config;
pub mod locator;
pub mod logging;
pub mod storage;
