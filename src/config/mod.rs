//! Configuration model for steerdiff.
//!
//! An optional YAML file (passed with `--config`) supplies defaults for the
//! command line. Unknown fields are ignored and every field has a default,
//! so an empty file is a valid config.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::OutputFormat;
