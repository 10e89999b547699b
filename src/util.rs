use tree_sitter::Node;

/// Extract UTF-8 text from a tree-sitter node, returning `""` on failure.
pub fn txt<'a>(node: Node, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Dialect;
    use crate::parser::parse_source;

    #[test]
    fn txt_returns_node_source() {
        let src = "const answer = 42;";
        let tree = parse_source(src, Dialect::Untyped).unwrap();
        let decl = tree.root_node().child(0).unwrap();
        assert_eq!(txt(decl, src.as_bytes()), "const answer = 42;");
    }
}
