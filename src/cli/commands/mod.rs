//! CLI command implementations.

pub mod materialize;
