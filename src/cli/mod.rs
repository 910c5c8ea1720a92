//! CLI argument parsing for steerdiff.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! comparison itself lives in the `commands` module.

use crate::config::OutputFormat;
use crate::error::{Result, SteerDiffError};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Steerdiff: compare two Marlin steering files.
///
/// Reports differences in:
/// - the order of executed processors and groups
/// - global parameters
/// - processor parameters (optionally only for processors matching a filter)
#[derive(Parser, Debug)]
#[command(name = "steerdiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First steering file.
    pub first: PathBuf,

    /// Second steering file.
    pub second: PathBuf,

    /// Only compare parameters of processors whose name contains one of
    /// these strings (case-insensitive).
    pub filters: Vec<String>,

    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also report processors that only exist in the second file.
    #[arg(long)]
    pub symmetric: bool,

    /// Exit with status 2 when the files differ.
    #[arg(long)]
    pub exit_code: bool,

    /// YAML file with default options.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    ///
    /// `--help` and `--version` print and exit with status 0; every other
    /// clap failure becomes a usage error.
    pub fn parse_args() -> Result<Self> {
        Self::parse_args_from(std::env::args_os())
    }

    /// Parse arguments from an explicit iterator.
    pub fn parse_args_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let rendered = err.render().to_string();
                let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
                SteerDiffError::Usage(message.trim_end().to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_two_files() {
        let cli = Cli::parse_args_from(["steerdiff", "a.xml", "b.xml"]).unwrap();
        assert_eq!(cli.first, PathBuf::from("a.xml"));
        assert_eq!(cli.second, PathBuf::from("b.xml"));
        assert!(cli.filters.is_empty());
        assert_eq!(cli.format, None);
        assert!(!cli.symmetric);
        assert!(!cli.exit_code);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_filters_after_files() {
        let cli = Cli::parse_args_from(["steerdiff", "a.xml", "b.xml", "ECal", "HCal"]).unwrap();
        assert_eq!(cli.filters, vec!["ECal", "HCal"]);
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::parse_args_from([
            "steerdiff",
            "--format",
            "json",
            "--symmetric",
            "--exit-code",
            "--config",
            "steerdiff.yaml",
            "-vv",
            "a.xml",
            "b.xml",
            "Digi",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.symmetric);
        assert!(cli.exit_code);
        assert_eq!(cli.config, Some(PathBuf::from("steerdiff.yaml")));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.filters, vec!["Digi"]);
    }

    #[test]
    fn missing_second_file_is_a_usage_error() {
        let err = Cli::parse_args_from(["steerdiff", "a.xml"]).unwrap_err();
        assert!(matches!(err, SteerDiffError::Usage(_)));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn no_arguments_is_a_usage_error() {
        let err = Cli::parse_args_from(["steerdiff"]).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn unknown_format_is_a_usage_error() {
        let err = Cli::parse_args_from(["steerdiff", "--format", "yaml", "a.xml", "b.xml"])
            .unwrap_err();
        assert!(matches!(err, SteerDiffError::Usage(_)));
    }
}
