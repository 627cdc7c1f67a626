//! Stage sequencing over one model directory and one output root.

use crate::constants::DEFAULT_OUTPUT_DIR_NAME;
use crate::error::Result;
use crate::generator::{AggregateKind, ArtifactKind, GenerationReport, Generator, Stage};
use std::path::{Path, PathBuf};

/// Where each stage writes, relative to one output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    extension: String,
}

impl OutputLayout {
    pub fn new<P: Into<PathBuf>>(root: P, extension: &str) -> Self {
        Self { root: root.into(), extension: extension.trim_start_matches('.').to_string() }
    }

    /// `<parent of model_root>/Auto`.
    pub fn default_root(model_root: &Path) -> PathBuf {
        model_root.parent().unwrap_or(model_root).join(DEFAULT_OUTPUT_DIR_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dto_root(&self) -> PathBuf {
        self.root.join("Dto")
    }

    pub fn artifact_root(&self, kind: ArtifactKind) -> PathBuf {
        let dir = match kind {
            ArtifactKind::RepositoryInterface => "IRepository",
            ArtifactKind::Repository => "Repository",
            ArtifactKind::ServiceInterface => "IService",
            ArtifactKind::Service => "Service",
            ArtifactKind::Controller => "Controller",
        };
        self.root.join(dir)
    }

    pub fn aggregate_file(&self, kind: AggregateKind) -> PathBuf {
        let file_name = kind.file_name(&self.extension);
        match kind {
            AggregateKind::RepositoryManagerInterface => self.root.join("IRepository").join(file_name),
            AggregateKind::RepositoryManager => self.root.join("Repository").join(file_name),
            AggregateKind::ServiceManagerInterface => self.root.join("IService").join(file_name),
            AggregateKind::ServiceManager => self.root.join("Service").join(file_name),
            AggregateKind::MappingProfile => self.root.join(file_name),
        }
    }
}

/// Runs the generators in order. A stage error stops the run; files written
/// by earlier stages stay on disk.
pub struct Pipeline<'a> {
    generator: Generator<'a>,
    layout: OutputLayout,
    stages: Vec<Stage>,
}

impl<'a> Pipeline<'a> {
    pub fn new(generator: Generator<'a>, layout: OutputLayout) -> Self {
        Self { generator, layout, stages: Stage::ALL.to_vec() }
    }

    /// Restricts the run to `stages`. Execution order stays the canonical one.
    pub fn with_stages(mut self, stages: &[Stage]) -> Self {
        if !stages.is_empty() {
            self.stages = Stage::ALL.into_iter().filter(|stage| stages.contains(stage)).collect();
        }
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    pub fn run<P: AsRef<Path>>(&self, model_root: P) -> Result<Vec<GenerationReport>> {
        let model_root = model_root.as_ref();
        log::info!(
            "Generating from '{}' into '{}'",
            model_root.display(),
            self.layout.root().display()
        );

        let mut reports = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            log::debug!("Running stage {stage}");
            reports.push(self.run_stage(*stage, model_root)?);
        }
        Ok(reports)
    }

    fn run_stage(&self, stage: Stage, model_root: &Path) -> Result<GenerationReport> {
        match stage {
            Stage::Dto => self.generator.generate_dtos(model_root, self.layout.dto_root()),
            Stage::Artifact(kind) => {
                self.generator.generate_artifacts(kind, model_root, self.layout.artifact_root(kind))
            }
            Stage::Aggregate(kind) => {
                self.generator.generate_aggregate(kind, model_root, self.layout.aggregate_file(kind))
            }
        }
    }
}
