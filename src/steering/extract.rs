//! Extraction of processors, globals, and execution lists into plain maps.

use super::document::{SteeringTree, children};
use super::value::{node_name, resolve_value};
use roxmltree::Node;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Parameter name to resolved value.
pub type ParameterMap = BTreeMap<String, String>;

/// Processor name to its effective parameters.
pub type StepMap = BTreeMap<String, ParameterMap>;

/// Which kind of entry an execution list holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecKind {
    Processor,
    Group,
}

impl ExecKind {
    /// Tag name of the entries under `<execute>`.
    pub fn tag_name(self) -> &'static str {
        match self {
            ExecKind::Processor => "processor",
            ExecKind::Group => "group",
        }
    }

    /// Plural noun used in reports.
    pub fn plural(self) -> &'static str {
        match self {
            ExecKind::Processor => "processors",
            ExecKind::Group => "groups",
        }
    }
}

impl fmt::Display for ExecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// Collect every processor and its effective parameters.
///
/// Standalone processors take their own parameters. Processors inside a
/// `<group>` start from a copy of the group's parameters, and their own
/// declarations overwrite or extend that copy. A processor name declared
/// twice keeps the last declaration.
pub fn extract_steps(tree: &SteeringTree<'_>) -> StepMap {
    let mut steps = StepMap::new();

    for processor in tree.top_level("processor") {
        steps.insert(node_name(processor), parameter_map(processor));
    }

    for group in tree.top_level("group") {
        let group_parameters = parameter_map(group);

        for processor in children(group, "processor") {
            let mut parameters = group_parameters.clone();
            parameters.extend(parameter_map(processor));
            steps.insert(node_name(processor), parameters);
        }
    }

    debug!(count = steps.len(), "extracted processors");
    steps
}

/// Flatten all `<global>` parameters into one map; later declarations win.
pub fn global_parameters(tree: &SteeringTree<'_>) -> ParameterMap {
    let globals: ParameterMap = tree
        .global_parameter_nodes()
        .map(|param| (node_name(param), resolve_value(param)))
        .collect();

    debug!(count = globals.len(), "extracted global parameters");
    globals
}

/// Names listed under `<execute>` for one entry kind, in document order.
pub fn execution_list(tree: &SteeringTree<'_>, kind: ExecKind) -> Vec<String> {
    tree.execute_nodes(kind.tag_name()).map(node_name).collect()
}

/// Direct `<parameter>` children of `node`, resolved.
fn parameter_map(node: Node<'_, '_>) -> ParameterMap {
    children(node, "parameter")
        .map(|param| (node_name(param), resolve_value(param)))
        .collect()
}
