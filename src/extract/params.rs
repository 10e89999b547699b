use tree_sitter::Node;

use crate::util::txt;

/// Sentinel for parameters without a single extractable identifier.
const PARAM_SENTINEL: &str = "param";

/// Best-effort parameter names for a function declaration, in declaration
/// order.
///
/// Extraction is deliberately non-recursive: a direct identifier wins, a
/// default-value pattern contributes its left-hand identifier, and every
/// other pattern (destructuring, rest) degrades to the `"param"` sentinel
/// instead of being expanded into sub-names.
pub(super) fn parameter_names(func: Node, src: &[u8]) -> Vec<String> {
    let Some(params) = func.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut cursor = params.walk();
    for param in params.named_children(&mut cursor) {
        names.push(parameter_name(param, src).to_string());
    }
    names
}

fn parameter_name<'a>(param: Node, src: &'a [u8]) -> &'a str {
    match param.kind() {
        "identifier" => txt(param, src),
        // The typed grammar wraps each parameter; unwrap exactly one level.
        "required_parameter" | "optional_parameter" => {
            match param.child_by_field_name("pattern") {
                Some(pattern) if pattern.kind() == "identifier" => txt(pattern, src),
                _ => PARAM_SENTINEL,
            }
        }
        "assignment_pattern" => match param.child_by_field_name("left") {
            Some(left) if left.kind() == "identifier" => txt(left, src),
            _ => PARAM_SENTINEL,
        },
        _ => PARAM_SENTINEL,
    }
}
