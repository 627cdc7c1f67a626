use crate::error::Result;
use crate::generator::{GenerationReport, Generator, ResolvedModel, SkipReason, Stage};
use crate::template::FileOperation;
use std::fmt::Display;
use std::path::Path;

/// Per-model artifacts: one template, one file per eligible model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    RepositoryInterface,
    Repository,
    ServiceInterface,
    Service,
    Controller,
}

/// What a kind does with models tagged `View`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPolicy {
    Skip,
    AlternateAsset(&'static str),
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::RepositoryInterface,
        ArtifactKind::Repository,
        ArtifactKind::ServiceInterface,
        ArtifactKind::Service,
        ArtifactKind::Controller,
    ];

    pub fn asset_name(&self) -> &'static str {
        match self {
            ArtifactKind::RepositoryInterface => "repository_interface",
            ArtifactKind::Repository => "repository",
            ArtifactKind::ServiceInterface => "service_interface",
            ArtifactKind::Service => "service",
            ArtifactKind::Controller => "controller",
        }
    }

    pub fn view_policy(&self) -> ViewPolicy {
        match self {
            ArtifactKind::Controller => ViewPolicy::AlternateAsset("view_controller"),
            _ => ViewPolicy::Skip,
        }
    }

    /// Type name generated for `model_name`, e.g. `IBookingRepository`.
    pub fn type_name(&self, model_name: &str) -> String {
        match self {
            ArtifactKind::RepositoryInterface => format!("I{model_name}Repository"),
            ArtifactKind::Repository => format!("{model_name}Repository"),
            ArtifactKind::ServiceInterface => format!("I{model_name}Service"),
            ArtifactKind::Service => format!("{model_name}Service"),
            ArtifactKind::Controller => format!("{model_name}Controller"),
        }
    }

    pub fn file_name(&self, model_name: &str, extension: &str) -> String {
        format!("{}.{extension}", self.type_name(model_name))
    }
}

impl Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArtifactKind::RepositoryInterface => "repository-interface",
            ArtifactKind::Repository => "repository",
            ArtifactKind::ServiceInterface => "service-interface",
            ArtifactKind::Service => "service",
            ArtifactKind::Controller => "controller",
        };
        write!(f, "{name}")
    }
}

impl Generator<'_> {
    /// Generates one `kind` file per resolved model under `<output_root>/<Tag>/`.
    pub fn generate_artifacts<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        kind: ArtifactKind,
        model_root: P,
        output_root: Q,
    ) -> Result<GenerationReport> {
        let stage = Stage::Artifact(kind);
        let output_root = output_root.as_ref();

        let Some(template) = self.assets.load(kind.asset_name())? else {
            return Ok(GenerationReport::missing_asset(stage));
        };
        let view_template = match kind.view_policy() {
            ViewPolicy::AlternateAsset(name) => self.assets.load(name)?.map(|body| (name, body)),
            ViewPolicy::Skip => None,
        };

        let mut report = GenerationReport::new(stage);
        for model in self.models(model_root.as_ref())? {
            let Some(resolved) = self.resolve(&model, &mut report)? else {
                continue;
            };

            let (asset_name, body) = if resolved.tag.is_view() {
                match (kind.view_policy(), &view_template) {
                    (ViewPolicy::Skip, _) => {
                        log::debug!("Skipping {kind} for view '{}'", resolved.name);
                        report.record_skipped(&resolved.name, SkipReason::View);
                        continue;
                    }
                    (ViewPolicy::AlternateAsset(_), Some((name, body))) => (*name, body),
                    (ViewPolicy::AlternateAsset(name), None) => {
                        log::warn!(
                            "Skipping {kind} for view '{}': template asset '{name}' is missing",
                            resolved.name
                        );
                        report.record_skipped(&resolved.name, SkipReason::MissingViewTemplate);
                        continue;
                    }
                }
            } else {
                (kind.asset_name(), &template)
            };

            let path = self.write_model_file(
                asset_name,
                body,
                &resolved,
                output_root,
                &kind.file_name(&resolved.name, &self.extension),
            )?;
            report.record_written(Some(resolved.tag), Some(resolved.name), path);
        }

        log::info!("{}", report.summary());
        Ok(report)
    }

    fn write_model_file(
        &self,
        asset_name: &str,
        body: &str,
        resolved: &ResolvedModel,
        output_root: &Path,
        file_name: &str,
    ) -> Result<std::path::PathBuf> {
        let schema_dir = output_root.join(resolved.tag.as_str());
        let mkdir = FileOperation::create_directory(schema_dir.clone());
        log::debug!("{}", mkdir.get_message());
        mkdir.apply()?;

        let content = self.renderer.render(asset_name, body, &resolved.bindings())?;
        let write = FileOperation::write(schema_dir.join(file_name), content);
        log::info!("{}", write.get_message());
        write.apply()?;
        Ok(write.target_path().clone())
    }
}
