//! Versioned target templates.
//!
//! A template is an ordered list of `(output key, source key)` pairs. Each
//! revision is built from the previous one plus its additions, so the field
//! lists only ever live in one place.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::document::{ConfigDocument, FieldLookup, ScalarValue};
use crate::domain::errors::{MaterializeError, MaterializeResult};

/// Fields shared by every backend revision, in output order.
const BACKEND_BASE: &[(&str, &str)] = &[
    ("PZ_DIR", "pz_dir"),
    ("PZ_NAME", "pz_name"),
    ("PZ_ADMIN_USER", "pz_admin_user"),
    ("PZ_SERVICE", "pz_service"),
    ("PZ_LOG_PATH", "pz_log_path"),
    ("PZ_MAINTENANCE_LOG_PATH", "pz_maintenance_log_path"),
    ("PZ_INI_PATH", "pz_ini_path"),
    ("PZ_SAVE_PATH", "pz_save_path"),
    ("PZ_STEAMCMD_PATH", "pz_steamcmd_path"),
    ("PZ_RCON_PASSWORD", "pz_rcon_password"),
    ("PZ_RCON_PORT", "pz_rcon_port"),
    ("PZ_RCON_HOST", "pz_rcon_host"),
];

/// Fields shared by every frontend revision, in output order.
const FRONTEND_BASE: &[(&str, &str)] = &[
    ("NEXT_PUBLIC_API_URL", "backend_url"),
    ("NEXT_PUBLIC_SERVER_NAME", "pz_name"),
    ("NEXT_PUBLIC_PZ_LOG_PATH", "pz_log_path"),
    ("NEXT_PUBLIC_PZ_NAME", "pz_name"),
    ("NEXT_PUBLIC_WEBADMIN_URL", "frontend_url"),
];

/// Which downstream process an env file is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Backend,
    Frontend,
}

impl TargetKind {
    pub const ALL: [Self; 2] = [Self::Backend, Self::Frontend];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Frontend => "frontend",
        }
    }

    /// Output path relative to the output directory when no override is set.
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::Backend => "backend/.env",
            Self::Frontend => "frontend/.env.local",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `OUTPUT_KEY=<doc[source_key]>` line of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub output_key: &'static str,
    pub source_key: &'static str,
}

impl FieldMapping {
    pub const fn new(output_key: &'static str, source_key: &'static str) -> Self {
        Self {
            output_key,
            source_key,
        }
    }
}

/// The fixed shape of one output env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTemplate {
    pub kind: TargetKind,
    pub fields: Vec<FieldMapping>,
}

impl TargetTemplate {
    pub fn new(kind: TargetKind, fields: Vec<FieldMapping>) -> Self {
        Self { kind, fields }
    }

    /// Render the template against `doc`.
    ///
    /// Emits one `KEY=VALUE` line per mapping in declaration order, each
    /// terminated by `\n`. Stops at the first source key that is absent or
    /// not a single-line scalar.
    pub fn render(&self, doc: &ConfigDocument) -> MaterializeResult<String> {
        let mut out = String::new();

        for mapping in &self.fields {
            let value = match doc.lookup(mapping.source_key) {
                FieldLookup::Scalar(value) => value,
                FieldLookup::Missing => {
                    return Err(MaterializeError::MissingField {
                        target: self.kind,
                        field: mapping.source_key.to_string(),
                    });
                }
                FieldLookup::NotScalar(kind) => {
                    return Err(self.invalid(mapping, format!("expected a scalar, found {kind}")));
                }
            };

            if let ScalarValue::String(s) = value {
                if s.contains(['\n', '\r']) {
                    return Err(self.invalid(mapping, "value contains a line break".to_string()));
                }
            }

            out.push_str(mapping.output_key);
            out.push('=');
            out.push_str(&value.to_string());
            out.push('\n');
        }

        Ok(out)
    }

    fn invalid(&self, mapping: &FieldMapping, reason: String) -> MaterializeError {
        MaterializeError::InvalidField {
            target: self.kind,
            field: mapping.source_key.to_string(),
            reason,
        }
    }
}

/// A versioned set of target templates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TemplateRevision {
    /// Original field set, no service ports
    #[serde(alias = "V1")]
    V1,
    /// Adds `PORT`, `PZ_ENV_SCRIPT` and `NEXT_PUBLIC_FE_PORT`
    #[default]
    #[serde(alias = "V2")]
    V2,
}

impl TemplateRevision {
    pub const LATEST: Self = Self::V2;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    /// Templates in processing order: backend first, then frontend.
    pub fn templates(self) -> Vec<TargetTemplate> {
        TargetKind::ALL
            .iter()
            .map(|kind| self.template(*kind))
            .collect()
    }

    pub fn template(self, kind: TargetKind) -> TargetTemplate {
        let base = match kind {
            TargetKind::Backend => BACKEND_BASE,
            TargetKind::Frontend => FRONTEND_BASE,
        };

        let mut fields = Vec::with_capacity(base.len() + 2);
        if self >= Self::V2 && kind == TargetKind::Backend {
            fields.push(FieldMapping::new("PORT", "backend_port"));
        }
        fields.extend(base.iter().map(|&(out, src)| FieldMapping::new(out, src)));
        if self >= Self::V2 {
            match kind {
                TargetKind::Backend => fields.push(FieldMapping::new("PZ_ENV_SCRIPT", "pz_env")),
                TargetKind::Frontend => {
                    fields.push(FieldMapping::new("NEXT_PUBLIC_FE_PORT", "frontend_port"));
                }
            }
        }

        TargetTemplate::new(kind, fields)
    }

    /// Every source key any template of this revision reads.
    pub fn required_fields(self) -> BTreeSet<&'static str> {
        self.templates()
            .iter()
            .flat_map(|t| t.fields.iter().map(|m| m.source_key))
            .collect()
    }
}

impl fmt::Display for TemplateRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateRevision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            other => Err(format!("unknown template revision '{other}' (expected v1 or v2)")),
        }
    }
}
