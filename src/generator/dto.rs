use crate::constants::DTO_SUFFIX;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::generator::{GenerationReport, Generator, Stage};
use crate::schema::SchemaTag;
use crate::template::FileOperation;
use regex::Regex;
use std::path::Path;

/// Access and type modifiers that may precede `class` in a declaration.
const CLASS_DECLARATION: &str = r"^\s*(?:(?:public|internal|protected|private|partial|sealed|abstract|static|unsafe|new|file)\s+)*class\s+([A-Za-z_][A-Za-z0-9_]*)";

/// Projects a model source file onto its DTO shape, line by line.
///
/// - a namespace declaration names the DTO namespace instead, keeping the rest of the line
/// - a class declaration gets the `DTO` suffix on its name
/// - lines with `virtual` (navigation properties) are dropped
/// - whitespace-only lines are dropped
///
/// Every other line, including its line ending, is copied verbatim.
#[derive(Debug, Clone)]
pub struct DtoProjector {
    dto_namespace: String,
    namespace_declaration: Regex,
    class_declaration: Regex,
    virtual_marker: Regex,
}

impl DtoProjector {
    pub fn new<S: Into<String>>(dto_namespace: S) -> Result<Self> {
        Ok(Self {
            dto_namespace: dto_namespace.into(),
            namespace_declaration: compile(r"^\s*namespace\s+[A-Za-z_][A-Za-z0-9_.]*")?,
            class_declaration: compile(CLASS_DECLARATION)?,
            virtual_marker: compile(r"\bvirtual\b")?,
        })
    }

    /// Namespace the DTOs of `tag` are declared in.
    pub fn namespace_for(&self, tag: &SchemaTag) -> String {
        format!("{}.{tag}Schema", self.dto_namespace)
    }

    pub fn project(&self, source: &str, tag: &SchemaTag) -> String {
        let mut projected = String::with_capacity(source.len());
        for raw_line in source.split_inclusive('\n') {
            let (line, ending) = split_line_ending(raw_line);
            if line.trim().is_empty() {
                continue;
            }

            if let Some(declaration) = self.namespace_declaration.find(line) {
                let indent = &line[..line.len() - line.trim_start().len()];
                projected.push_str(indent);
                projected.push_str("namespace ");
                projected.push_str(&self.namespace_for(tag));
                projected.push_str(&line[declaration.end()..]);
            } else if let Some(name) = self.class_declaration.captures(line).and_then(|c| c.get(1)) {
                projected.push_str(&line[..name.end()]);
                projected.push_str(DTO_SUFFIX);
                projected.push_str(&line[name.end()..]);
            } else if self.virtual_marker.is_match(line) {
                continue;
            } else {
                projected.push_str(line);
            }
            projected.push_str(ending);
        }
        projected
    }
}

impl Generator<'_> {
    /// Writes `<output_root>/<Tag>/<Model>DTO<ext>` for every resolved model.
    /// Views get DTOs too.
    pub fn generate_dtos<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        model_root: P,
        output_root: Q,
    ) -> Result<GenerationReport> {
        let output_root = output_root.as_ref();
        let projector = DtoProjector::new(self.namespaces.dto.clone())?;

        let mut report = GenerationReport::new(Stage::Dto);
        for model in self.models(model_root.as_ref())? {
            let Some(resolved) = self.resolve(&model, &mut report)? else {
                continue;
            };

            let source = std::fs::read_to_string(&model.path).map_err(|e| Error::ProcessError {
                source_path: model.path.display().to_string(),
                e: e.to_string(),
            })?;

            let schema_dir = output_root.join(resolved.tag.as_str());
            let mkdir = FileOperation::create_directory(schema_dir.clone());
            log::debug!("{}", mkdir.get_message());
            mkdir.apply()?;

            let file_name =
                format!("{}{DTO_SUFFIX}{}", resolved.name, model.path.dotted_extension());
            let projected = projector.project(&source, &resolved.tag);
            let write = FileOperation::write(schema_dir.join(file_name), projected);
            log::info!("{}", write.get_message());
            write.apply()?;
            let path = write.target_path().clone();
            report.record_written(Some(resolved.tag), Some(resolved.name), path);
        }

        log::info!("{}", report.summary());
        Ok(report)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Other(anyhow::anyhow!("invalid marker {pattern}: {e}")))
}

fn split_line_ending(raw_line: &str) -> (&str, &str) {
    if let Some(line) = raw_line.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw_line.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw_line, "")
    }
}
