//! Constants used throughout tiergen

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["tiergen.json", "tiergen.yaml", "tiergen.yml"];

/// Default template asset suffix
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".cs.j2";

/// Default template asset directory, relative to the configuration directory
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Default extension of generated files
pub const DEFAULT_OUTPUT_EXTENSION: &str = "cs";

/// Directory created next to the model root when no output root is given
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "Auto";

/// Suffix appended to generated DTO type and file names
pub const DTO_SUFFIX: &str = "DTO";

/// Patterns always excluded from model enumeration
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["**/.DS_Store", "**/bin/**", "**/obj/**"];

/// Namespace defaults used by code-built lines
pub mod namespaces {
    pub const ENTITIES: &str = "App.Entities.DataModels";
    pub const DTO: &str = "App.Domain.Dto";
    pub const REPOSITORY_CONTRACTS: &str = "App.Repository.Contracts";
    pub const REPOSITORY_IMPLEMENTATION: &str = "App.Repository.Implementation";
    pub const SERVICE_CONTRACTS: &str = "App.Service.Contracts";
    pub const SERVICE_IMPLEMENTATION: &str = "App.Service.Implementation";
}

/// Fixed schema tags
pub mod tags {
    pub const COMMON: &str = "Common";
    pub const VIEW: &str = "View";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
