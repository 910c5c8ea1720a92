//! Global and per-processor parameter comparison.

use crate::steering::{ParameterMap, StepMap, SteeringTree, global_parameters};
use serde::Serialize;
use tracing::debug;

/// Entries of two parameter maps that are missing from, or differ in, the other map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterDiff {
    pub only_in_first: ParameterMap,
    pub only_in_second: ParameterMap,
}

impl ParameterDiff {
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }
}

/// Per-processor parameters that are missing from, or differ in, the other file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepDiff {
    pub only_in_first: StepMap,
    pub only_in_second: StepMap,
}

impl StepDiff {
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }
}

/// How processors that exist only in the second file are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepDiffMode {
    /// Walk the first file's processors only. Processors unique to the second
    /// file are never reported, even though the Python comparison script
    /// listed them; use `Symmetric` for output closer to that script.
    #[default]
    FirstFileOnly,
    /// Also report processors unique to the second file.
    Symmetric,
}

/// Compare two parameter maps key by key.
///
/// A key counts as equal only when it exists in both maps and the trimmed
/// values match; equal keys are dropped from both sides. Everything else is
/// kept with each side's own value.
pub fn diff_parameter_maps(first: &ParameterMap, second: &ParameterMap) -> ParameterDiff {
    let mut only_in_first = first.clone();
    let mut only_in_second = second.clone();

    for (name, value) in first {
        let equal = second
            .get(name)
            .is_some_and(|other| other.trim() == value.trim());
        if equal {
            only_in_first.remove(name);
            only_in_second.remove(name);
        }
    }

    ParameterDiff {
        only_in_first,
        only_in_second,
    }
}

/// Compare the `<global>` parameters of two steering files.
pub fn diff_global_parameters(
    first: &SteeringTree<'_>,
    second: &SteeringTree<'_>,
) -> ParameterDiff {
    let diff = diff_parameter_maps(&global_parameters(first), &global_parameters(second));
    debug!(
        only_in_first = diff.only_in_first.len(),
        only_in_second = diff.only_in_second.len(),
        "compared global parameters"
    );
    diff
}

/// Compare processor parameters.
///
/// For each processor in `first`: when `second` has it too, parameters equal
/// on both sides are dropped from both results; otherwise the full parameter
/// map is kept in `only_in_first`. A processor whose remaining parameter map
/// is empty is dropped from that side.
pub fn diff_step_parameters(first: &StepMap, second: &StepMap, mode: StepDiffMode) -> StepDiff {
    let mut diff = StepDiff::default();

    for (step, parameters) in first {
        match second.get(step) {
            Some(other) => {
                let ParameterDiff {
                    only_in_first,
                    only_in_second,
                } = diff_parameter_maps(parameters, other);
                insert_non_empty(&mut diff.only_in_first, step, only_in_first);
                insert_non_empty(&mut diff.only_in_second, step, only_in_second);
            }
            None => insert_non_empty(&mut diff.only_in_first, step, parameters.clone()),
        }
    }

    if mode == StepDiffMode::Symmetric {
        for (step, parameters) in second {
            if !first.contains_key(step) {
                insert_non_empty(&mut diff.only_in_second, step, parameters.clone());
            }
        }
    }

    debug!(
        ?mode,
        only_in_first = diff.only_in_first.len(),
        only_in_second = diff.only_in_second.len(),
        "compared processor parameters"
    );
    diff
}

fn insert_non_empty(steps: &mut StepMap, step: &str, parameters: ParameterMap) {
    if !parameters.is_empty() {
        steps.insert(step.to_string(), parameters);
    }
}
