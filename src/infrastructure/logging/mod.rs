//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty (compact) or JSON formatting
//! - `RUST_LOG` filter refinement
//! - stderr only, so stdout carries just the run status

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
