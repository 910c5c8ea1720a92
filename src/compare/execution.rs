//! Execution order comparison.

use crate::steering::ExecKind;
use serde::Serialize;

/// The two execution lists have different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountMismatch {
    pub first: usize,
    pub second: usize,
}

/// First position where the execution lists stop agreeing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Divergence {
    /// The second list ended while the first still had entries.
    MoreEntriesInFirst { position: usize },
    /// Different names at the same position.
    NameMismatch {
        position: usize,
        first: String,
        second: String,
    },
}

/// Result of comparing one kind of execution list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionOrderDiff {
    pub kind: ExecKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_mismatch: Option<CountMismatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divergence: Option<Divergence>,
}

impl ExecutionOrderDiff {
    /// True when both lists are identical.
    pub fn is_ok(&self) -> bool {
        self.count_mismatch.is_none() && self.divergence.is_none()
    }
}

/// Compare two execution lists position by position.
///
/// A length difference is recorded and the walk continues. The walk stops at
/// the first position where the second list has run out or the names differ;
/// later positions are never examined. A first list that is a prefix of the
/// second only reports the count mismatch.
pub fn diff_execution_order(
    first: &[String],
    second: &[String],
    kind: ExecKind,
) -> ExecutionOrderDiff {
    let count_mismatch = (first.len() != second.len()).then_some(CountMismatch {
        first: first.len(),
        second: second.len(),
    });

    let mut divergence = None;
    for (position, name) in first.iter().enumerate() {
        let Some(other) = second.get(position) else {
            divergence = Some(Divergence::MoreEntriesInFirst { position });
            break;
        };

        if name != other {
            divergence = Some(Divergence::NameMismatch {
                position,
                first: name.clone(),
                second: other.clone(),
            });
            break;
        }
    }

    ExecutionOrderDiff {
        kind,
        count_mismatch,
        divergence,
    }
}
