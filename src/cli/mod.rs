//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use types::Cli;

use crate::domain::MaterializeError;
use output::{output, RunStatus};

/// Report a failed run on stdout and exit with its code.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    tracing::error!(error = %format!("{err:#}"), "run failed");
    output(&RunStatus::failed(format!("{err:#}")), json_mode);

    let code = err
        .downcast_ref::<MaterializeError>()
        .map_or(1, MaterializeError::exit_code);
    std::process::exit(code);
}
