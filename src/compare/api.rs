//! Full comparison of two parsed steering files.

use super::execution::{ExecutionOrderDiff, diff_execution_order};
use super::parameters::{
    ParameterDiff, StepDiff, StepDiffMode, diff_global_parameters, diff_step_parameters,
};
use crate::steering::{ExecKind, SteeringTree, execution_list, extract_steps, filter_steps};
use serde::Serialize;
use tracing::info;

/// Knobs for a comparison run.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Processor name substrings; only affects the parameter comparison.
    pub filters: Vec<String>,
    pub step_mode: StepDiffMode,
}

/// The four report sections, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub processor_order: ExecutionOrderDiff,
    pub group_order: ExecutionOrderDiff,
    pub global_parameters: ParameterDiff,
    pub processor_parameters: StepDiff,
}

impl ComparisonReport {
    /// True when any section reports something.
    pub fn has_differences(&self) -> bool {
        !self.processor_order.is_ok()
            || !self.group_order.is_ok()
            || !self.global_parameters.is_empty()
            || !self.processor_parameters.is_empty()
    }
}

/// Run every comparison over two parsed steering files.
pub fn compare_trees(
    first: &SteeringTree<'_>,
    second: &SteeringTree<'_>,
    options: &CompareOptions,
) -> ComparisonReport {
    let processor_order = diff_execution_order(
        &execution_list(first, ExecKind::Processor),
        &execution_list(second, ExecKind::Processor),
        ExecKind::Processor,
    );
    let group_order = diff_execution_order(
        &execution_list(first, ExecKind::Group),
        &execution_list(second, ExecKind::Group),
        ExecKind::Group,
    );

    let global_parameters = diff_global_parameters(first, second);

    if !options.filters.is_empty() {
        info!(filters = ?options.filters, "restricting processor comparison");
    }
    let first_steps = filter_steps(extract_steps(first), &options.filters);
    let second_steps = filter_steps(extract_steps(second), &options.filters);
    let processor_parameters = diff_step_parameters(&first_steps, &second_steps, options.step_mode);

    ComparisonReport {
        processor_order,
        group_order,
        global_parameters,
        processor_parameters,
    }
}
