//! Config materializer.
//!
//! Straight-line batch transform: locate the config document, load it once,
//! then render and write each target template in order. The first error
//! aborts the run. Files written for earlier targets stay on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::models::{
    ConfigDocument, OutputFile, TargetKind, TargetTemplate, TemplateRevision,
};
use crate::domain::ports::{DocumentSource, OutputStore};
use crate::domain::{MaterializeError, MaterializeResult};

/// One env file produced by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializedFile {
    pub target: TargetKind,
    pub location: String,
    pub lines: usize,
}

/// What a successful run produced, in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    pub config_path: PathBuf,
    pub revision: TemplateRevision,
    pub mode: RunMode,
    pub files: Vec<MaterializedFile>,
}

/// Whether a run writes its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Write,
    /// Locate, load and render, but write nothing
    DryRun,
}

/// Pick the explicit path when given, otherwise `default_path`.
///
/// The chosen path must exist. An explicit path that is missing is an
/// error; it never falls back to the default.
pub fn locate_config(explicit: Option<&Path>, default_path: &Path) -> MaterializeResult<PathBuf> {
    let path = explicit.unwrap_or(default_path);
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(MaterializeError::ConfigNotFound(path.to_path_buf()))
    }
}

pub fn load_config<D: DocumentSource + ?Sized>(
    source: &D,
    path: &Path,
) -> MaterializeResult<ConfigDocument> {
    let doc = source.load(path)?;
    debug!(path = %path.display(), fields = doc.len(), "config document loaded");
    Ok(doc)
}

pub fn render(doc: &ConfigDocument, template: &TargetTemplate) -> MaterializeResult<String> {
    template.render(doc)
}

/// Renders a config document into per-target env files through an
/// [`OutputStore`].
pub struct ConfigMaterializer<S> {
    store: S,
    revision: TemplateRevision,
    templates: Vec<TargetTemplate>,
    output_paths: BTreeMap<TargetKind, PathBuf>,
}

impl<S: OutputStore> ConfigMaterializer<S> {
    /// Materializer for `revision` writing to the default relative paths.
    pub fn new(store: S, revision: TemplateRevision) -> Self {
        let output_paths = TargetKind::ALL
            .iter()
            .map(|kind| (*kind, PathBuf::from(kind.default_path())))
            .collect();

        Self {
            store,
            revision,
            templates: revision.templates(),
            output_paths,
        }
    }

    #[must_use]
    pub fn with_output_path(mut self, target: TargetKind, path: impl Into<PathBuf>) -> Self {
        self.output_paths.insert(target, path.into());
        self
    }

    #[must_use]
    pub fn with_output_paths<P: Into<PathBuf>>(
        self,
        paths: impl IntoIterator<Item = (TargetKind, P)>,
    ) -> Self {
        paths
            .into_iter()
            .fold(self, |m, (target, path)| m.with_output_path(target, path))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub const fn revision(&self) -> TemplateRevision {
        self.revision
    }

    pub fn templates(&self) -> &[TargetTemplate] {
        &self.templates
    }

    pub fn write_output(&self, path: &Path, content: &str) -> MaterializeResult<()> {
        self.store.write(path, content)?;
        Ok(())
    }

    /// Render every template without writing anything.
    pub fn render_all(&self, doc: &ConfigDocument) -> MaterializeResult<Vec<OutputFile>> {
        self.templates
            .iter()
            .map(|template| {
                Ok(OutputFile::new(
                    template.kind,
                    self.output_path(template.kind),
                    render(doc, template)?,
                ))
            })
            .collect()
    }

    /// Render and write each template in order, stopping at the first error.
    #[instrument(skip(self, doc), fields(revision = %self.revision, fields = doc.len()))]
    pub fn materialize(&self, doc: &ConfigDocument) -> MaterializeResult<Vec<MaterializedFile>> {
        let mut files = Vec::with_capacity(self.templates.len());

        for template in &self.templates {
            let output = OutputFile::new(
                template.kind,
                self.output_path(template.kind),
                render(doc, template)?,
            );
            self.write_output(&output.path, &output.content)?;

            let location = self.store.describe(&output.path);
            info!(
                target_kind = %output.target,
                location = %location,
                lines = output.line_count(),
                "env file materialized"
            );
            files.push(MaterializedFile {
                target: output.target,
                location,
                lines: output.line_count(),
            });
        }

        Ok(files)
    }

    /// Render every template and describe where each file would go.
    pub fn plan(&self, doc: &ConfigDocument) -> MaterializeResult<Vec<MaterializedFile>> {
        Ok(self
            .render_all(doc)?
            .into_iter()
            .map(|output| MaterializedFile {
                target: output.target,
                location: self.store.describe(&output.path),
                lines: output.line_count(),
            })
            .collect())
    }

    /// Locate, load from `source`, then materialize or plan depending on
    /// `mode`.
    pub fn run<D: DocumentSource + ?Sized>(
        &self,
        source: &D,
        explicit: Option<&Path>,
        default_path: &Path,
        mode: RunMode,
    ) -> MaterializeResult<MaterializeReport> {
        let config_path = locate_config(explicit, default_path)?;
        let doc = load_config(source, &config_path)?;
        let files = match mode {
            RunMode::Write => self.materialize(&doc)?,
            RunMode::DryRun => self.plan(&doc)?,
        };

        Ok(MaterializeReport {
            config_path,
            revision: self.revision,
            mode,
            files,
        })
    }

    fn output_path(&self, target: TargetKind) -> PathBuf {
        self.output_paths
            .get(&target)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(target.default_path()))
    }
}
