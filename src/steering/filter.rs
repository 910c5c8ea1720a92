//! Processor name filtering.

use super::extract::StepMap;

/// True when `name` contains any filter as a case-insensitive substring.
pub fn name_matches(name: &str, filters: &[String]) -> bool {
    let name = name.to_lowercase();
    filters
        .iter()
        .any(|filter| name.contains(&filter.to_lowercase()))
}

/// Keep only processors whose name matches one of `filters`.
///
/// An empty filter list keeps everything.
pub fn filter_steps(steps: StepMap, filters: &[String]) -> StepMap {
    if filters.is_empty() {
        return steps;
    }

    steps
        .into_iter()
        .filter(|(name, _)| name_matches(name, filters))
        .collect()
}
