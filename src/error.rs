use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk model directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to parse ignore pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[cfg(feature = "postgres")]
    #[error("Database error. Original error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// The template references placeholders that have no binding.
    #[error("Template '{template}' uses unbound placeholders: {placeholders}.")]
    UnboundPlaceholder { template: String, placeholders: String },

    /// The schema catalog could not answer (connectivity, auth, bad snapshot).
    #[error("Schema catalog lookup for '{name}' failed: {reason}.")]
    CatalogError { name: String, reason: String },

    #[error("No configuration file found in '{config_dir}'. Tried: {config_files}.")]
    ConfigNotFound { config_dir: String, config_files: String },

    #[error("Configuration error: {0}.")]
    ConfigValidation(String),

    #[error("Cannot proceed: model directory '{model_dir}' does not exist.")]
    ModelDirDoesNotExistError { model_dir: String },

    #[error("Cannot process the model file: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
