//! Tool settings: where env files go and which template revision to use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::models::{TargetKind, TemplateRevision};
use crate::infrastructure::logging::LogConfig;

/// Settings for a materialization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Template revision to render
    pub revision: TemplateRevision,

    /// Root for the output files. `None` resolves next to the tool.
    pub output_dir: Option<PathBuf>,

    /// Backend env file, relative to `output_dir`
    pub backend_file: PathBuf,

    /// Frontend env file, relative to `output_dir`
    pub frontend_file: PathBuf,

    pub logging: LogConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            revision: TemplateRevision::LATEST,
            output_dir: None,
            backend_file: PathBuf::from(TargetKind::Backend.default_path()),
            frontend_file: PathBuf::from(TargetKind::Frontend.default_path()),
            logging: LogConfig::default(),
        }
    }
}

impl Settings {
    pub fn output_file(&self, target: TargetKind) -> &Path {
        match target {
            TargetKind::Backend => &self.backend_file,
            TargetKind::Frontend => &self.frontend_file,
        }
    }

    /// Output file of every target, in processing order.
    pub fn output_files(&self) -> [(TargetKind, &Path); 2] {
        TargetKind::ALL.map(|target| (target, self.output_file(target)))
    }
}

/// Command-line overrides, merged last. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<TemplateRevision>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}
