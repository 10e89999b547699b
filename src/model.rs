use serde::Serialize;

/// Category of an exported symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// `export function foo() {}`
    Function,
    /// One binding of `export const a = 1, b = 2;`
    Const,
    /// One specifier of `export { x as y }` / `export { x } from './m'`
    Spec,
    /// `export default ...`
    Default,
}

/// An externally visible symbol.
///
/// Names are not deduplicated: a source file that redeclares the same
/// export produces one record per declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub name: String,
    pub kind: ExportKind,
}

/// A declared function, exported or not.
///
/// `name` falls back to `"anon"` (or `"default"` when exported) for
/// declarations without an identifier. `params` keeps declaration order;
/// non-trivial patterns degrade to the `"param"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    pub params: Vec<String>,
    #[serde(rename = "isExported")]
    pub is_exported: bool,
}

/// Flat declaration summary of one source file.
///
/// Record order reflects traversal order, not source order. Both sequences
/// are always serialized, even when empty — an empty summary is also the
/// failure signal, so consumers cannot distinguish "no declarations" from
/// "could not be parsed".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub exports: Vec<ExportRecord>,
    pub functions: Vec<FunctionRecord>,
}

impl Summary {
    /// The canonical output for every failure path.
    pub fn empty() -> Self {
        Self::default()
    }
}
