use std::path::{Path, PathBuf};

use figment::providers::{Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use super::settings::{Settings, SettingsOverrides};
use crate::domain::models::TargetKind;
use crate::infrastructure::logging::logger::parse_log_level;
use crate::infrastructure::storage::{escape_reason, normalize};

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to load settings: {0}")]
    Extract(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output path for {target} env {}: {reason}", path.display())]
    InvalidOutputPath {
        target: TargetKind,
        path: PathBuf,
        reason: &'static str,
    },

    #[error("Backend and frontend env files resolve to the same path: {}", .0.display())]
    DuplicateOutputPath(PathBuf),
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. YAML settings file, when one is given (it must exist)
    /// 3. Command-line overrides
    ///
    /// Environment variables are deliberately not a layer: this tool produces
    /// env files, it does not read them.
    pub fn load(
        settings_file: Option<&Path>,
        overrides: &SettingsOverrides,
    ) -> Result<Settings, SettingsError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(path) = settings_file {
            if !path.is_file() {
                return Err(SettingsError::FileNotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let settings: Settings = figment
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(|e| SettingsError::Extract(e.to_string()))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        if parse_log_level(&settings.logging.level).is_err() {
            return Err(SettingsError::InvalidLogLevel(
                settings.logging.level.clone(),
            ));
        }

        // Same rule the stores enforce, applied before any file is written
        for target in TargetKind::ALL {
            let path = settings.output_file(target);
            if let Some(reason) = escape_reason(path) {
                return Err(SettingsError::InvalidOutputPath {
                    target,
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }

        if normalize(&settings.backend_file) == normalize(&settings.frontend_file) {
            return Err(SettingsError::DuplicateOutputPath(
                settings.backend_file.clone(),
            ));
        }

        Ok(())
    }
}
