//! Configuration loading and management

use crate::catalog::CatalogConfig;
use crate::config::types::Namespaces;
use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_OUTPUT_EXTENSION, DEFAULT_TEMPLATE_DIR, DEFAULT_TEMPLATE_SUFFIX,
};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::naming::NamingConfig;
use crate::schema::RuleChain;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Generator configuration
#[derive(Debug, Deserialize)]
pub struct ConfigV1 {
    #[serde(default = "get_default_template_dir")]
    pub template_dir: PathBuf,
    #[serde(default = "get_default_template_suffix")]
    pub template_suffix: String,
    #[serde(default = "get_default_output_extension")]
    pub output_extension: String,
    #[serde(default)]
    pub output_root: Option<PathBuf>,
    #[serde(default)]
    pub namespaces: Namespaces,
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub rules: RuleChain,
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for ConfigV1 {
    fn default() -> Self {
        Self {
            template_dir: get_default_template_dir(),
            template_suffix: get_default_template_suffix(),
            output_extension: get_default_output_extension(),
            output_root: None,
            namespaces: Namespaces::default(),
            naming: NamingConfig::default(),
            rules: RuleChain::default(),
            ignore: Vec::new(),
            catalog: None,
            base_dir: PathBuf::new(),
        }
    }
}

impl ConfigV1 {
    pub fn validate(&self) -> Result<(), Error> {
        if self.template_suffix.is_empty() {
            return Err(Error::ConfigValidation("template_suffix must not be empty".into()));
        }
        if !self.template_suffix.starts_with('.') || self.template_suffix.len() < 2 {
            return Err(Error::ConfigValidation(
                "template_suffix must start with '.' and have at least 1 character after it"
                    .into(),
            ));
        }
        if self.output_extension.trim_start_matches('.').is_empty() {
            return Err(Error::ConfigValidation("output_extension must not be empty".into()));
        }
        if let Some(index) = self.rules.first_empty_rule() {
            return Err(Error::ConfigValidation(format!(
                "rule #{index} has no names or markers to match"
            )));
        }
        Ok(())
    }

    /// Resolves `path` against the configuration directory unless it is absolute.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn template_root(&self) -> PathBuf {
        self.resolve(&self.template_dir)
    }

    /// Extension of generated files, without the leading dot.
    pub fn extension(&self) -> &str {
        self.output_extension.trim_start_matches('.')
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Config {
    #[serde(rename = "v1")]
    V1(ConfigV1),
}

impl Config {
    /// Loads the first configuration file found in `config_dir`.
    pub fn load_config<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = config_dir.join(config_file_name);
            if config_file_path.exists() {
                return Self::from_file(&config_file_path);
            }
        }

        Err(Error::ConfigNotFound {
            config_dir: config_dir.to_str_checked()?.to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    /// Like [`Config::load_config`], but falls back to defaults when no file exists.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        match Self::load_config(config_dir) {
            Err(Error::ConfigNotFound { .. }) => {
                log::debug!("No configuration in {}, using defaults", config_dir.display());
                Ok(Config::V1(ConfigV1 { base_dir: config_dir.to_path_buf(), ..Default::default() }))
            }
            other => other,
        }
    }

    /// Loads an explicit configuration file; `.json` is JSON, anything else YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        log::debug!("Loaded configuration from {}", path.display());

        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let Config::V1(mut config) = config;
        config.base_dir = base_dir;
        Ok(Config::V1(config))
    }

    pub fn into_v1(self) -> ConfigV1 {
        let Config::V1(config) = self;
        config
    }
}

fn get_default_template_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_DIR)
}

fn get_default_template_suffix() -> String {
    DEFAULT_TEMPLATE_SUFFIX.to_string()
}

fn get_default_output_extension() -> String {
    DEFAULT_OUTPUT_EXTENSION.to_string()
}
