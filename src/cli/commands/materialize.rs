//! Implementation of the `pzenv` run: settings, logging, then materialize.

use anyhow::{Context, Result};

use crate::cli::output::{output, RunStatus};
use crate::cli::Cli;
use crate::infrastructure::config::{FileDocumentSource, SettingsLoader, SettingsOverrides};
use crate::infrastructure::locator::{default_config_path, default_output_dir};
use crate::infrastructure::logging::LoggerImpl;
use crate::infrastructure::storage::FsStore;
use crate::services::{ConfigMaterializer, RunMode};

impl Cli {
    fn settings_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            revision: self.revision,
            output_dir: self.output_dir.clone(),
        }
    }

    const fn run_mode(&self) -> RunMode {
        if self.dry_run {
            RunMode::DryRun
        } else {
            RunMode::Write
        }
    }
}

pub fn execute(cli: &Cli) -> Result<()> {
    let settings = SettingsLoader::load(cli.settings.as_deref(), &cli.settings_overrides())
        .context("Invalid settings")?;

    LoggerImpl::init(&settings.logging.clone().with_verbosity(cli.verbose))?;

    let output_dir = match &settings.output_dir {
        Some(dir) => dir.clone(),
        None => default_output_dir()?,
    };
    let default_config = default_config_path()?;

    tracing::debug!(
        output_dir = %output_dir.display(),
        default_config = %default_config.display(),
        revision = %settings.revision,
        "resolved run settings"
    );

    let materializer = ConfigMaterializer::new(FsStore::new(output_dir), settings.revision)
        .with_output_paths(settings.output_files());
    let report = materializer.run(
        &FileDocumentSource,
        cli.config.as_deref(),
        &default_config,
        cli.run_mode(),
    )?;

    output(&RunStatus::completed(report), cli.json);
    Ok(())
}
