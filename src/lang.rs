use tree_sitter::Language;

/// Source dialect selected from the file extension.
///
/// This is the central isolation boundary between extension sniffing and
/// the parser: new dialects plug in here rather than adding `if ext == ...`
/// checks across the codebase. JSX-style embedded markup is enabled in both
/// dialects; `Typed` additionally understands TypeScript syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Typed,
    Untyped,
}

impl Dialect {
    /// Resolve a file extension to a dialect.
    ///
    /// Anything that is not a TypeScript extension falls back to the
    /// untyped dialect; there is no "unsupported extension" outcome.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "ts" | "tsx" => Self::Typed,
            _ => Self::Untyped,
        }
    }

    /// tree-sitter grammar for this dialect.
    pub fn tree_sitter_language(self) -> Language {
        match self {
            // The TSX grammar covers typed syntax and JSX in one parser.
            Self::Typed => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::Untyped => tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}
