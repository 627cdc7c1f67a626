//! Artifact, DTO and aggregate generators.
//!
//! Every generator makes one forward pass over the model directory:
//! enumerate, classify, derive names, render, write. Per-model problems
//! (unresolved schema, views where no view shape exists) are skipped and
//! recorded in the [`GenerationReport`]; catalog, render and I/O failures
//! stop the invocation.

mod aggregate;
mod artifact;
mod dto;
mod report;

pub use aggregate::{AggregateAccumulator, AggregateEntry, AggregateKind};
pub use artifact::{ArtifactKind, ViewPolicy};
pub use dto::DtoProjector;
pub use report::{GeneratedFile, GenerationReport, SkipReason, SkippedModel};

use crate::config::{ConfigV1, Namespaces};
use crate::error::Result;
use crate::ignore::build_ignore_set;
use crate::model::{enumerate_models, ModelDescriptor};
use crate::naming::NamePolicy;
use crate::renderer::{Bindings, MiniJinjaRenderer, Placeholder, TemplateRenderer};
use crate::schema::{Classification, SchemaClassifier, SchemaTag};
use crate::template::TemplateAssets;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// One generator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Dto,
    Artifact(ArtifactKind),
    Aggregate(AggregateKind),
}

impl Stage {
    /// Every stage, in execution order.
    pub const ALL: [Stage; 11] = [
        Stage::Dto,
        Stage::Artifact(ArtifactKind::RepositoryInterface),
        Stage::Artifact(ArtifactKind::Repository),
        Stage::Aggregate(AggregateKind::RepositoryManagerInterface),
        Stage::Aggregate(AggregateKind::RepositoryManager),
        Stage::Artifact(ArtifactKind::ServiceInterface),
        Stage::Artifact(ArtifactKind::Service),
        Stage::Aggregate(AggregateKind::ServiceManagerInterface),
        Stage::Aggregate(AggregateKind::ServiceManager),
        Stage::Artifact(ArtifactKind::Controller),
        Stage::Aggregate(AggregateKind::MappingProfile),
    ];
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Dto => write!(f, "dto"),
            Stage::Artifact(kind) => write!(f, "{kind}"),
            Stage::Aggregate(kind) => write!(f, "{kind}"),
        }
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "-").to_lowercase();
        Stage::ALL.into_iter().find(|stage| stage.to_string() == wanted).ok_or_else(|| {
            let known: Vec<String> = Stage::ALL.iter().map(|stage| stage.to_string()).collect();
            format!("unknown stage '{s}' (expected one of: {})", known.join(", "))
        })
    }
}

/// A model that classified to a schema, with its derived identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    pub name: String,
    pub tag: SchemaTag,
    pub safe_name: String,
    pub parameter_name: String,
}

impl ResolvedModel {
    pub fn bindings(&self) -> Bindings {
        Bindings::new()
            .bind(Placeholder::ModelName, &self.name)
            .bind(Placeholder::Schema, self.tag.as_str())
            .bind(Placeholder::SafeName, &self.safe_name)
            .bind(Placeholder::ParameterName, &self.parameter_name)
    }
}

/// Shared context of all generators.
pub struct Generator<'a> {
    classifier: SchemaClassifier<'a>,
    names: NamePolicy,
    renderer: Box<dyn TemplateRenderer>,
    assets: TemplateAssets,
    namespaces: Namespaces,
    ignore: Vec<String>,
    extension: String,
}

impl<'a> Generator<'a> {
    /// A generator with default naming, namespaces and the MiniJinja renderer.
    pub fn new(classifier: SchemaClassifier<'a>, assets: TemplateAssets) -> Self {
        Self {
            classifier,
            names: NamePolicy::default(),
            renderer: Box::new(MiniJinjaRenderer::new()),
            assets,
            namespaces: Namespaces::default(),
            ignore: Vec::new(),
            extension: crate::constants::DEFAULT_OUTPUT_EXTENSION.to_string(),
        }
    }

    /// A generator configured from `config`, classifying against `catalog`.
    pub fn from_config(config: &ConfigV1, catalog: &'a dyn crate::catalog::SchemaCatalog) -> Self {
        let classifier = SchemaClassifier::new(config.rules.clone(), catalog);
        let assets = TemplateAssets::new(config.template_root(), config.template_suffix.clone());
        Self::new(classifier, assets)
            .with_names(NamePolicy::new(config.namespaces.entities.clone(), config.naming.clone()))
            .with_namespaces(config.namespaces.clone())
            .with_ignore(config.ignore.clone())
            .with_extension(config.extension())
    }

    pub fn with_names(mut self, names: NamePolicy) -> Self {
        self.names = names;
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    fn models(&self, model_root: &Path) -> Result<Vec<ModelDescriptor>> {
        let ignore = build_ignore_set(model_root, &self.ignore)?;
        enumerate_models(model_root, &ignore)
    }

    /// Classifies `model`. Unresolved models are logged, recorded and yield `None`.
    fn resolve(
        &self,
        model: &ModelDescriptor,
        report: &mut GenerationReport,
    ) -> Result<Option<ResolvedModel>> {
        match self.classifier.classify(&model.name)? {
            Classification::Resolved(tag) => Ok(Some(ResolvedModel {
                safe_name: self.names.safe_name(&model.name),
                parameter_name: self.names.parameter_name(&model.name),
                name: model.name.clone(),
                tag,
            })),
            Classification::Unresolved { lookup_key } => {
                log::warn!(
                    "{}: skipping model '{}', no schema found (looked up '{lookup_key}')",
                    report.stage,
                    model.name
                );
                report.record_skipped(&model.name, SkipReason::Unresolved { lookup_key });
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_parse_from_their_names() {
        for stage in Stage::ALL {
            assert_eq!(stage.to_string().parse::<Stage>(), Ok(stage));
        }
        assert_eq!(
            "repository_manager".parse::<Stage>(),
            Ok(Stage::Aggregate(AggregateKind::RepositoryManager))
        );
        assert!("nonsense".parse::<Stage>().unwrap_err().contains("mapping-profile"));
    }

    #[test]
    fn stage_names_are_unique() {
        let names: std::collections::HashSet<String> =
            Stage::ALL.iter().map(|stage| stage.to_string()).collect();
        assert_eq!(names.len(), Stage::ALL.len());
    }

    #[test]
    fn resolved_model_binds_per_model_placeholders() {
        let model = ResolvedModel {
            name: "Range".into(),
            tag: SchemaTag::common(),
            safe_name: "App.Entities.DataModels.Range".into(),
            parameter_name: "rangeObj".into(),
        };
        let bindings = model.bindings();
        assert_eq!(bindings.get(Placeholder::Schema), Some("Common"));
        assert_eq!(bindings.get(Placeholder::ParameterName), Some("rangeObj"));
        assert!(bindings.get(Placeholder::Imports).is_none());
    }
}
