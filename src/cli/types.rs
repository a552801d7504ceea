//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::models::TemplateRevision;

#[derive(Parser, Debug)]
#[command(name = "pzenv")]
#[command(
    about = "Materialize backend and frontend env files from a single config template",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Config document (JSON, or YAML by extension). Defaults to
    /// config.template.json next to the pzenv executable
    pub config: Option<PathBuf>,

    /// Directory the env files are written under (defaults to the parent of
    /// the executable's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Template revision to render (v1, v2)
    #[arg(short, long)]
    pub revision: Option<TemplateRevision>,

    /// YAML settings file
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Render and validate without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
