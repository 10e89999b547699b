use std::path::Path;

use tree_sitter::{Parser, Tree};

use crate::error::ScanError;
use crate::lang::Dialect;

/// Parse source text under the given dialect.
///
/// A tree whose root contains syntax errors is rejected outright — the
/// extractor never works from a partially recovered tree, so a broken file
/// degrades to the empty summary rather than a truncated one.
pub fn parse_source(source: &str, dialect: Dialect) -> Result<Tree, ScanError> {
    let mut parser = Parser::new();
    parser.set_language(&dialect.tree_sitter_language())?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ScanError::ParseFailed("parser produced no tree".to_string()))?;

    if tree.root_node().has_error() {
        return Err(ScanError::ParseFailed("syntax error".to_string()));
    }

    Ok(tree)
}

/// Read and parse a source file, selecting the dialect from its extension.
pub fn parse_file(path: &Path) -> Result<(Tree, String), ScanError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    let source = std::fs::read_to_string(path).map_err(|e| ScanError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let tree = parse_source(&source, Dialect::from_extension(ext))?;
    Ok((tree, source))
}
