/// Errors produced while building a declaration summary.
///
/// These never reach the CLI output: the invocation boundary in `main`
/// projects every variant to the empty summary.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("grammar rejected: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parse failed: {0}")]
    ParseFailed(String),
}
