//! Config struct definition and default implementation.

use super::types::OutputFormat;
use serde::{Deserialize, Serialize};

/// Defaults for a comparison run.
///
/// Command line flags override these values; command line processor filters,
/// when any are given, replace `processor_filters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report format.
    pub format: OutputFormat,

    /// Also report processors that only exist in the second file.
    pub symmetric_steps: bool,

    /// Exit with a non-zero status when the files differ.
    pub fail_on_difference: bool,

    /// Processor name substrings (case-insensitive) restricting the
    /// parameter comparison. Empty compares every processor.
    pub processor_filters: Vec<String>,
}
