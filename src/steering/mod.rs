//! Steering file model for steerdiff.
//!
//! A steering file is an XML document whose root element (`<marlin>`) holds:
//! - `<global>` blocks of `<parameter>` settings
//! - standalone `<processor>` declarations with nested `<parameter>`s
//! - `<group>` declarations with group-level `<parameter>` defaults and member `<processor>`s
//! - an `<execute>` section listing `<processor>`/`<group>` references in run order
//!
//! Parsing is delegated to `roxmltree`; this module only queries the
//! read-only tree and resolves it into plain string maps.

mod document;
mod extract;
mod filter;
mod value;


// Re-export public API
pub use document::{SteeringFile, SteeringTree};
pub use extract::{ExecKind, ParameterMap, StepMap, execution_list, extract_steps, global_parameters};
pub use filter::{filter_steps, name_matches};
pub use value::{MISSING_VALUE, node_name, resolve_value};
