mod exports;
mod params;

use tree_sitter::Node;

use crate::model::{FunctionRecord, Summary};
use crate::util::txt;

/// Walk the whole tree with an explicit work-list and collect declarations.
///
/// The work-list is last-in-first-out and children are pushed in grammar
/// order, so records come out in an unspecified order that does not track
/// source order. Callers comparing summaries must compare them as sets.
pub fn extract_summary(root: Node, src: &[u8]) -> Summary {
    let mut summary = Summary::empty();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        classify(node, src, &mut summary);

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            stack.push(child);
        }
    }

    summary
}

/// Match one node against the recognized declaration shapes.
///
/// Matching is structural, by node kind; anything unrecognized is skipped
/// without comment. Classes, methods, arrow functions, interfaces and type
/// aliases deliberately produce no records.
fn classify(node: Node, src: &[u8], summary: &mut Summary) {
    match node.kind() {
        "export_statement" => exports::classify_export(node, src, summary),
        "function_declaration" | "generator_function_declaration" => {
            // A function wrapped by a named export was already recorded
            // when the export statement itself was classified.
            if !exports::captured_by_named_export(node) {
                summary.functions.push(function_record(node, src, false));
            }
        }
        _ => {}
    }
}

/// Build a function record from a (generator) function declaration node.
pub(crate) fn function_record(node: Node, src: &[u8], is_exported: bool) -> FunctionRecord {
    let fallback = if is_exported { "default" } else { "anon" };
    let name = node
        .child_by_field_name("name")
        .map_or(fallback, |n| txt(n, src))
        .to_string();

    FunctionRecord {
        name,
        params: params::parameter_names(node, src),
        is_exported,
    }
}
