use crate::{
    catalog::{CatalogConfig, SchemaCatalog},
    cli::Args,
    config::{Config, ConfigV1},
    error::{Error, Result},
    generator::{GenerationReport, Generator},
    pipeline::{OutputLayout, Pipeline},
};
use std::path::{Path, PathBuf};

/// Main CLI runner: load configuration, open the catalog, run the pipeline.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<Vec<GenerationReport>> {
        let cwd = std::env::current_dir()?;
        let config = self.load_and_validate_config(&cwd)?;
        let catalog = self.open_catalog(&config, &cwd)?;

        let output_root = self.output_root(&config, &cwd);
        let layout = OutputLayout::new(&output_root, config.extension());
        let generator = Generator::from_config(&config, catalog.as_ref());
        let pipeline = Pipeline::new(generator, layout).with_stages(&self.args.only);

        let reports = pipeline.run(&self.args.model_dir)?;
        for report in &reports {
            println!("{}", report.summary());
        }
        println!("Generation completed successfully in {}.", output_root.display());
        Ok(reports)
    }

    /// Loads the configuration and applies command-line overrides.
    fn load_and_validate_config(&self, cwd: &Path) -> Result<ConfigV1> {
        let config = match &self.args.config {
            Some(path) => Config::from_file(path)?,
            None => Config::load_or_default(cwd)?,
        };
        let mut config = config.into_v1();
        if let Some(templates) = &self.args.templates {
            config.template_dir = cwd.join(templates);
        }
        config.validate()?;
        Ok(config)
    }

    fn open_catalog(&self, config: &ConfigV1, cwd: &Path) -> Result<Box<dyn SchemaCatalog>> {
        match (&self.args.catalog, &config.catalog) {
            (Some(path), _) => CatalogConfig::Snapshot { path: path.clone() }.open(cwd),
            (None, Some(catalog)) => catalog.open(&config.base_dir),
            (None, None) => Err(Error::ConfigValidation(
                "no schema catalog configured; set `catalog` in the configuration or pass --catalog"
                    .into(),
            )),
        }
    }

    fn output_root(&self, config: &ConfigV1, cwd: &Path) -> PathBuf {
        match (&self.args.output_root, &config.output_root) {
            (Some(root), _) => cwd.join(root),
            (None, Some(root)) => config.resolve(root),
            (None, None) => OutputLayout::default_root(&cwd.join(&self.args.model_dir)),
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<Vec<GenerationReport>> {
    let runner = Runner::new(args);
    runner.run()
}
