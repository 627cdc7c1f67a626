use crate::generator::Stage;
use crate::schema::SchemaTag;
use std::fmt::Display;
use std::path::PathBuf;

/// Why a model produced no output for a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither the rules nor the catalog know the model.
    Unresolved { lookup_key: String },
    /// Views get no writable repository/service contracts.
    View,
    /// A view model needed the alternate template, which is missing.
    MissingViewTemplate,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Unresolved { lookup_key } => {
                write!(f, "no schema found (looked up '{lookup_key}')")
            }
            SkipReason::View => write!(f, "views have no writable contract"),
            SkipReason::MissingViewTemplate => write!(f, "view template is missing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedModel {
    pub model: String,
    pub reason: SkipReason,
}

/// One written file. Aggregates carry neither schema nor model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub stage: Stage,
    pub schema: Option<SchemaTag>,
    pub model: Option<String>,
    pub path: PathBuf,
}

/// What one generator invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub stage: Stage,
    pub written: Vec<GeneratedFile>,
    pub skipped: Vec<SkippedModel>,
    /// The stage's template asset was missing, so nothing was attempted.
    pub asset_missing: bool,
}

impl GenerationReport {
    pub fn new(stage: Stage) -> Self {
        Self { stage, written: Vec::new(), skipped: Vec::new(), asset_missing: false }
    }

    pub fn missing_asset(stage: Stage) -> Self {
        Self { asset_missing: true, ..Self::new(stage) }
    }

    pub fn record_written(
        &mut self,
        schema: Option<SchemaTag>,
        model: Option<String>,
        path: PathBuf,
    ) {
        self.written.push(GeneratedFile { stage: self.stage, schema, model, path });
    }

    pub fn record_skipped<S: Into<String>>(&mut self, model: S, reason: SkipReason) {
        self.skipped.push(SkippedModel { model: model.into(), reason });
    }

    pub fn skipped_for(&self, model: &str) -> Vec<&SkipReason> {
        self.skipped.iter().filter(|s| s.model == model).map(|s| &s.reason).collect()
    }

    pub fn summary(&self) -> String {
        if self.asset_missing {
            return format!("{}: skipped (template asset missing)", self.stage);
        }
        format!(
            "{}: {} file(s) written, {} model(s) skipped",
            self.stage,
            self.written.len(),
            self.skipped.len()
        )
    }
}
