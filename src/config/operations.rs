//! Config loading, validation, and conversion.

use super::model::Config;
use crate::compare::{CompareOptions, StepDiffMode};
use crate::error::{Result, SteerDiffError};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SteerDiffError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(path).map_err(|e| {
            SteerDiffError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are silently ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SteerDiffError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values. Also applied after command line overrides.
    ///
    /// Validation rules:
    /// - `processor_filters` entries must be non-empty after trimming
    pub fn validate(&self) -> Result<()> {
        if self.processor_filters.iter().any(|f| f.trim().is_empty()) {
            return Err(SteerDiffError::Config(
                "invalid options: processor filters must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Comparison options derived from this config.
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            filters: self.processor_filters.clone(),
            step_mode: if self.symmetric_steps {
                StepDiffMode::Symmetric
            } else {
                StepDiffMode::FirstFileOnly
            },
        }
    }
}
