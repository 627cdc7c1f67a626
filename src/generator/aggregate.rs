use crate::config::Namespaces;
use crate::error::Result;
use crate::generator::{GenerationReport, Generator, ResolvedModel, SkipReason, Stage};
use crate::renderer::{Bindings, Placeholder};
use crate::schema::SchemaTag;
use crate::template::FileOperation;
use indexmap::IndexSet;
use std::fmt::Display;
use std::path::Path;

/// Generators that fold every model into one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateKind {
    RepositoryManagerInterface,
    RepositoryManager,
    ServiceManagerInterface,
    ServiceManager,
    MappingProfile,
}

/// Lines one model contributes to an aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateEntry {
    pub declaration: Option<String>,
    pub initialization: Option<String>,
    pub instantiation: Option<String>,
}

impl AggregateKind {
    pub const ALL: [AggregateKind; 5] = [
        AggregateKind::RepositoryManagerInterface,
        AggregateKind::RepositoryManager,
        AggregateKind::ServiceManagerInterface,
        AggregateKind::ServiceManager,
        AggregateKind::MappingProfile,
    ];

    pub fn asset_name(&self) -> &'static str {
        match self {
            AggregateKind::RepositoryManagerInterface => "repository_manager_interface",
            AggregateKind::RepositoryManager => "repository_manager",
            AggregateKind::ServiceManagerInterface => "service_manager_interface",
            AggregateKind::ServiceManager => "service_manager",
            AggregateKind::MappingProfile => "mapping_profile",
        }
    }

    /// Views only have a read shape, which the mapping profile still needs.
    pub fn includes_views(&self) -> bool {
        matches!(self, AggregateKind::MappingProfile)
    }

    /// Namespace prefix imported once per schema as `using <prefix>.<Tag>Schema;`.
    pub fn import_prefix<'n>(&self, namespaces: &'n Namespaces) -> &'n str {
        match self {
            AggregateKind::RepositoryManagerInterface | AggregateKind::RepositoryManager => {
                &namespaces.repository_contracts
            }
            AggregateKind::ServiceManagerInterface | AggregateKind::ServiceManager => {
                &namespaces.service_contracts
            }
            AggregateKind::MappingProfile => &namespaces.dto,
        }
    }

    /// Lines contributed by `model`. Implementation managers qualify the concrete type
    /// with its schema namespace, since only contracts are imported.
    pub fn entry(&self, model: &ResolvedModel, namespaces: &Namespaces) -> AggregateEntry {
        let m = &model.name;
        let p = &model.parameter_name;
        let tag = &model.tag;
        match self {
            AggregateKind::RepositoryManagerInterface => AggregateEntry {
                declaration: Some(format!("        I{m}Repository {m} {{ get; }}")),
                ..Default::default()
            },
            AggregateKind::RepositoryManager => AggregateEntry {
                declaration: Some(format!(
                    "        private readonly Lazy<I{m}Repository> _{p}Repository;"
                )),
                initialization: Some(format!(
                    "            _{p}Repository = new Lazy<I{m}Repository>(() => new {}.{tag}Schema.{m}Repository(repositoryContext));",
                    namespaces.repository_implementation
                )),
                instantiation: Some(format!(
                    "        public I{m}Repository {m} => _{p}Repository.Value;"
                )),
            },
            AggregateKind::ServiceManagerInterface => AggregateEntry {
                declaration: Some(format!("        I{m}Service {p}Service {{ get; }}")),
                ..Default::default()
            },
            AggregateKind::ServiceManager => AggregateEntry {
                declaration: Some(format!("        private readonly Lazy<I{m}Service> _{p}Service;")),
                initialization: Some(format!(
                    "            _{p}Service = new Lazy<I{m}Service>(() => new {}.{tag}Schema.{m}Service(repositoryManager, logger, mapper));",
                    namespaces.service_implementation
                )),
                instantiation: Some(format!(
                    "        public I{m}Service {p}Service => _{p}Service.Value;"
                )),
            },
            AggregateKind::MappingProfile => AggregateEntry {
                declaration: Some(format!(
                    "            CreateMap<{}, {m}DTO>().ReverseMap();",
                    model.safe_name
                )),
                ..Default::default()
            },
        }
    }

    /// Output file name, e.g. `IRepositoryManager.cs`.
    pub fn file_name(&self, extension: &str) -> String {
        let stem = match self {
            AggregateKind::RepositoryManagerInterface => "IRepositoryManager",
            AggregateKind::RepositoryManager => "RepositoryManager",
            AggregateKind::ServiceManagerInterface => "IServiceManager",
            AggregateKind::ServiceManager => "ServiceManager",
            AggregateKind::MappingProfile => "MappingProfile",
        };
        format!("{stem}.{extension}")
    }
}

impl Display for AggregateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AggregateKind::RepositoryManagerInterface => "repository-manager-interface",
            AggregateKind::RepositoryManager => "repository-manager",
            AggregateKind::ServiceManagerInterface => "service-manager-interface",
            AggregateKind::ServiceManager => "service-manager",
            AggregateKind::MappingProfile => "mapping-profile",
        };
        write!(f, "{name}")
    }
}

/// Buffers of one aggregate run. Each schema is imported at most once, in first-seen order.
#[derive(Debug, Default)]
pub struct AggregateAccumulator {
    schemas: IndexSet<SchemaTag>,
    imports: Vec<String>,
    declarations: Vec<String>,
    initializations: Vec<String>,
    instantiations: Vec<String>,
}

impl AggregateAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tag: &SchemaTag, prefix: &str, entry: AggregateEntry) {
        if self.schemas.insert(tag.clone()) {
            self.imports.push(format!("using {prefix}.{tag}Schema;"));
        }
        self.declarations.extend(entry.declaration);
        self.initializations.extend(entry.initialization);
        self.instantiations.extend(entry.instantiation);
    }

    pub fn schemas(&self) -> impl Iterator<Item = &SchemaTag> {
        self.schemas.iter()
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn into_bindings(self) -> Bindings {
        Bindings::new()
            .bind(Placeholder::Imports, self.imports.join("\n"))
            .bind(Placeholder::Declarations, self.declarations.join("\n"))
            .bind(Placeholder::Initializations, self.initializations.join("\n"))
            .bind(Placeholder::Instantiations, self.instantiations.join("\n"))
    }
}

impl Generator<'_> {
    /// Folds every eligible model into one `kind` file at `output_file`.
    pub fn generate_aggregate<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        kind: AggregateKind,
        model_root: P,
        output_file: Q,
    ) -> Result<GenerationReport> {
        let stage = Stage::Aggregate(kind);
        let output_file = output_file.as_ref();

        let Some(template) = self.assets.load(kind.asset_name())? else {
            return Ok(GenerationReport::missing_asset(stage));
        };

        let prefix = kind.import_prefix(&self.namespaces);
        let mut report = GenerationReport::new(stage);
        let mut accumulator = AggregateAccumulator::new();
        for model in self.models(model_root.as_ref())? {
            let Some(resolved) = self.resolve(&model, &mut report)? else {
                continue;
            };
            if resolved.tag.is_view() && !kind.includes_views() {
                log::debug!("Leaving view '{}' out of {kind}", resolved.name);
                report.record_skipped(&resolved.name, SkipReason::View);
                continue;
            }
            let entry = kind.entry(&resolved, &self.namespaces);
            accumulator.add(&resolved.tag, prefix, entry);
        }

        if let Some(parent) = output_file.parent() {
            FileOperation::create_directory(parent.to_path_buf()).apply()?;
        }
        let content = self.renderer.render(kind.asset_name(), &template, &accumulator.into_bindings())?;
        let write = FileOperation::write(output_file.to_path_buf(), content);
        log::info!("{}", write.get_message());
        write.apply()?;
        report.record_written(None, None, output_file.to_path_buf());

        log::info!("{}", report.summary());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(name: &str, tag: &str, parameter_name: &str) -> ResolvedModel {
        ResolvedModel {
            name: name.into(),
            tag: SchemaTag::new(tag),
            safe_name: name.into(),
            parameter_name: parameter_name.into(),
        }
    }

    #[test]
    fn shared_schema_is_imported_once() {
        let namespaces = Namespaces::default();
        let kind = AggregateKind::RepositoryManager;
        let prefix = kind.import_prefix(&namespaces);
        let mut accumulator = AggregateAccumulator::new();
        for model in [
            resolved("Booking", "Sales", "booking"),
            resolved("Invoice", "Sales", "invoice"),
            resolved("Range", "Common", "rangeObj"),
        ] {
            accumulator.add(&model.tag, prefix, kind.entry(&model, &namespaces));
        }

        assert_eq!(
            accumulator.imports(),
            &["using App.Repository.Contracts.SalesSchema;", "using App.Repository.Contracts.CommonSchema;"]
        );
        let schemas: Vec<&str> = accumulator.schemas().map(SchemaTag::as_str).collect();
        assert_eq!(schemas, ["Sales", "Common"]);
    }

    #[test]
    fn lazy_backing_fields_use_parameter_name() {
        let entry = AggregateKind::RepositoryManager
            .entry(&resolved("Range", "Common", "rangeObj"), &Namespaces::default());
        assert_eq!(
            entry.declaration.as_deref(),
            Some("        private readonly Lazy<IRangeRepository> _rangeObjRepository;")
        );
        assert_eq!(
            entry.initialization.as_deref(),
            Some(
                "            _rangeObjRepository = new Lazy<IRangeRepository>(() => new App.Repository.Implementation.CommonSchema.RangeRepository(repositoryContext));"
            )
        );
        assert_eq!(
            entry.instantiation.as_deref(),
            Some("        public IRangeRepository Range => _rangeObjRepository.Value;")
        );
    }

    #[test]
    fn interface_managers_only_declare() {
        let entry = AggregateKind::ServiceManagerInterface
            .entry(&resolved("Booking", "Sales", "booking"), &Namespaces::default());
        assert_eq!(entry.declaration.as_deref(), Some("        IBookingService bookingService { get; }"));
        assert!(entry.initialization.is_none());
        assert!(entry.instantiation.is_none());
    }

    #[test]
    fn mapping_profile_uses_safe_name_and_keeps_views() {
        let mut model = resolved("Range", "Common", "rangeObj");
        model.safe_name = "App.Entities.DataModels.Range".into();
        let entry = AggregateKind::MappingProfile.entry(&model, &Namespaces::default());
        assert_eq!(
            entry.declaration.as_deref(),
            Some("            CreateMap<App.Entities.DataModels.Range, RangeDTO>().ReverseMap();")
        );
        assert!(AggregateKind::MappingProfile.includes_views());
        assert!(!AggregateKind::ServiceManager.includes_views());
    }

    #[test]
    fn bindings_join_lines() {
        let namespaces = Namespaces::default();
        let kind = AggregateKind::RepositoryManagerInterface;
        let mut accumulator = AggregateAccumulator::new();
        accumulator.add(
            &SchemaTag::new("Sales"),
            kind.import_prefix(&namespaces),
            kind.entry(&resolved("Booking", "Sales", "booking"), &namespaces),
        );
        accumulator.add(
            &SchemaTag::new("Sales"),
            kind.import_prefix(&namespaces),
            kind.entry(&resolved("Invoice", "Sales", "invoice"), &namespaces),
        );
        let bindings = accumulator.into_bindings();
        assert_eq!(bindings.get(Placeholder::Imports), Some("using App.Repository.Contracts.SalesSchema;"));
        assert_eq!(
            bindings.get(Placeholder::Declarations),
            Some("        IBookingRepository Booking { get; }\n        IInvoiceRepository Invoice { get; }")
        );
        assert_eq!(bindings.get(Placeholder::Initializations), Some(""));
    }
}
