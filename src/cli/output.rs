//! Output formatting utilities for the CLI.
//!
//! A run prints exactly one status line on stdout: the glyph-marked human
//! line, or a single JSON object with `--json`.

use console::style;
use serde::Serialize;

use crate::services::{MaterializeReport, RunMode};

pub const OK_MARKER: &str = "✅ [OK]";
pub const ERROR_MARKER: &str = "❌ [ERROR]";

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Final status of a run.
#[derive(Debug, Serialize)]
pub struct RunStatus {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<MaterializeReport>,
}

impl RunStatus {
    pub fn completed(report: MaterializeReport) -> Self {
        let message = match report.mode {
            RunMode::Write => "Environment Setup Completed".to_string(),
            RunMode::DryRun => format!(
                "Dry run: {} env file(s) rendered, nothing written",
                report.files.len()
            ),
        };

        Self {
            success: true,
            message,
            report: Some(report),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            report: None,
        }
    }
}

impl CommandOutput for RunStatus {
    fn to_human(&self) -> String {
        let marker = if self.success {
            style(OK_MARKER).green().bold()
        } else {
            style(ERROR_MARKER).red().bold()
        };
        format!("{marker} - {}", self.message)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
