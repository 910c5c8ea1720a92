//! Configuration types for steerdiff.

use serde::{Deserialize, Serialize};

/// How the comparison report is written to stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human readable sections (default).
    #[default]
    Text,
    /// A single JSON document.
    Json,
}
