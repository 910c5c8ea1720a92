//! Structural comparison of two steering files.
//!
//! Four independent checks, each working on its own copies of the extracted maps:
//! - processor execution order (positional, stops at the first divergence)
//! - group execution order (same rules)
//! - global parameters (per-key, trimmed-string equality)
//! - processor parameters, optionally restricted by name filters

mod api;
mod execution;
mod parameters;


// Re-export public API
pub use api::{CompareOptions, ComparisonReport, compare_trees};
pub use execution::{CountMismatch, Divergence, ExecutionOrderDiff, diff_execution_order};
pub use parameters::{
    ParameterDiff, StepDiff, StepDiffMode, diff_global_parameters, diff_parameter_maps,
    diff_step_parameters,
};
