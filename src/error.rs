//! Error types for the steerdiff CLI.
//!
//! Uses thiserror for derive macros. Only hard failures live here; irregular
//! steering content (missing attributes, empty values) degrades to the
//! missing-value sentinel instead of erroring.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for steerdiff operations.
#[derive(Error, Debug)]
pub enum SteerDiffError {
    /// Invalid or insufficient command line arguments.
    #[error("{0}")]
    Usage(String),

    /// A steering file could not be read or is not well-formed markup.
    #[error("failed to load steering file '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The YAML config file could not be read or failed validation.
    #[error("{0}")]
    Config(String),

    /// Writing the report to stdout failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl SteerDiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SteerDiffError::Usage(_) => exit_codes::USER_ERROR,
            SteerDiffError::Parse { .. } => exit_codes::USER_ERROR,
            SteerDiffError::Config(_) => exit_codes::USER_ERROR,
            SteerDiffError::Output(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for steerdiff operations.
pub type Result<T> = std::result::Result<T, SteerDiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_has_correct_exit_code() {
        let err = SteerDiffError::Usage("need two files".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn parse_error_has_correct_exit_code() {
        let err = SteerDiffError::Parse {
            path: PathBuf::from("a.xml"),
            message: "unexpected end of stream".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = SteerDiffError::Config("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn output_error_converts_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = SteerDiffError::from(io);
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(err.to_string(), "failed to write report: pipe closed");
    }

    #[test]
    fn parse_error_message_names_the_file_and_cause() {
        let err = SteerDiffError::Parse {
            path: PathBuf::from("steer/reco.xml"),
            message: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load steering file 'steer/reco.xml': No such file or directory"
        );
    }
}
