use tree_sitter::Node;

use crate::model::{ExportKind, ExportRecord, Summary};
use crate::util::txt;

/// Classify one `export_statement` node and append its records.
///
/// Shape matching follows the statement's structure, not full grammar
/// validation: default exports first, then a wrapped declaration, then an
/// export clause. `export class` / `export interface` / `export type` fall
/// through every arm and produce nothing.
pub(super) fn classify_export(node: Node, src: &[u8], summary: &mut Summary) {
    if is_default_export(node) {
        summary.exports.push(ExportRecord {
            name: "default".to_string(),
            kind: ExportKind::Default,
        });
        return;
    }

    if let Some(decl) = node.child_by_field_name("declaration") {
        match decl.kind() {
            "function_declaration" | "generator_function_declaration" => {
                let record = super::function_record(decl, src, true);
                summary.exports.push(ExportRecord {
                    name: record.name.clone(),
                    kind: ExportKind::Function,
                });
                summary.functions.push(record);
            }
            "lexical_declaration" | "variable_declaration" => {
                collect_declarators(decl, src, &mut summary.exports);
            }
            _ => {}
        }
        return;
    }

    collect_specifiers(node, src, &mut summary.exports);
}

/// Whether a function declaration was already recorded by its wrapping
/// named export.
///
/// Default exports do not capture the wrapped function as a function
/// export, so their inner declaration is still classified standalone.
pub(super) fn captured_by_named_export(func: Node) -> bool {
    func.parent()
        .is_some_and(|p| p.kind() == "export_statement" && !is_default_export(p))
}

fn is_default_export(node: Node) -> bool {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "default" {
            return true;
        }
    }
    false
}

/// One `const` record per declarator bound to a plain identifier.
/// Destructuring bindings have no single name and are skipped.
fn collect_declarators(decl: Node, src: &[u8], exports: &mut Vec<ExportRecord>) {
    let mut cursor = decl.walk();
    for declarator in decl.named_children(&mut cursor) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let Some(name) = declarator.child_by_field_name("name") else {
            continue;
        };
        if name.kind() == "identifier" {
            exports.push(ExportRecord {
                name: txt(name, src).to_string(),
                kind: ExportKind::Const,
            });
        }
    }
}

/// One `spec` record per specifier in an export clause, named by the
/// exported alias when present. Covers the local (`export { x as y }`),
/// one-level re-export (`export { x } from './m'`) and namespace re-export
/// (`export * as ns from './m'`) forms. A bare `export * from './m'` has
/// no exported name and yields nothing.
fn collect_specifiers(node: Node, src: &[u8], exports: &mut Vec<ExportRecord>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "namespace_export" {
            let mut ns_cursor = child.walk();
            for name in child.named_children(&mut ns_cursor) {
                exports.push(ExportRecord {
                    name: txt(name, src).to_string(),
                    kind: ExportKind::Spec,
                });
            }
            continue;
        }
        if child.kind() != "export_clause" {
            continue;
        }
        let mut spec_cursor = child.walk();
        for spec in child.named_children(&mut spec_cursor) {
            if spec.kind() != "export_specifier" {
                continue;
            }
            let exported = spec
                .child_by_field_name("alias")
                .or_else(|| spec.child_by_field_name("name"));
            if let Some(exported) = exported {
                exports.push(ExportRecord {
                    name: txt(exported, src).to_string(),
                    kind: ExportKind::Spec,
                });
            }
        }
    }
}
