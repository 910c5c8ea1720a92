//! Parameter value resolution.

use roxmltree::Node;

/// Placeholder for a parameter or name that was declared without a usable value.
pub const MISSING_VALUE: &str = "<This Value did not Exist in this file or was empty>";

/// Resolve the value of a `<parameter>` node.
///
/// The `value` attribute wins when it is non-empty after trimming, then the
/// node's inner text, otherwise [`MISSING_VALUE`]. The result is trimmed.
pub fn resolve_value(node: Node<'_, '_>) -> String {
    node.attribute("value")
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| node.text().map(str::trim).filter(|text| !text.is_empty()))
        .unwrap_or(MISSING_VALUE)
        .to_string()
}

/// The `name` attribute of a node, or [`MISSING_VALUE`] when absent.
pub fn node_name(node: Node<'_, '_>) -> String {
    node.attribute("name").unwrap_or(MISSING_VALUE).to_string()
}
