use crate::constants::{exit_codes, verbosity};
use crate::generator::Stage;
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for tiergen.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding the model definition files.
    #[arg(value_name = "MODEL_DIR")]
    pub model_dir: PathBuf,

    /// Root of the generated tree [default: <parent of MODEL_DIR>/Auto].
    #[arg(short, long = "output-root", value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Configuration file [default: first tiergen.{json,yaml,yml} in the current directory].
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Catalog snapshot file, replacing the configured catalog.
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Template asset directory, replacing the configured one.
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Stages to run (comma-separated); all stages when omitted.
    #[arg(long, value_delimiter = ',', value_name = "STAGE")]
    pub only: Vec<Stage>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{AggregateKind, ArtifactKind};

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Warn);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["tiergen", "Models"]);
        assert_eq!(args.model_dir, PathBuf::from("Models"));
        assert!(args.output_root.is_none());
        assert!(args.only.is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "tiergen",
            "Models",
            "--output-root",
            "Auto",
            "--config",
            "tiergen.yaml",
            "--catalog",
            "catalog.json",
            "--templates",
            "assets",
            "--only",
            "dto,repository-manager,controller",
            "-vv",
        ]);
        assert_eq!(args.output_root, Some(PathBuf::from("Auto")));
        assert_eq!(args.config, Some(PathBuf::from("tiergen.yaml")));
        assert_eq!(args.catalog, Some(PathBuf::from("catalog.json")));
        assert_eq!(args.templates, Some(PathBuf::from("assets")));
        assert_eq!(
            args.only,
            vec![
                Stage::Dto,
                Stage::Aggregate(AggregateKind::RepositoryManager),
                Stage::Artifact(ArtifactKind::Controller),
            ]
        );
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn rejects_unknown_stage() {
        assert!(Args::try_parse_from(["tiergen", "Models", "--only", "hooks"]).is_err());
    }
}
