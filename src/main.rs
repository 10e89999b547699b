//! `declscan` — best-effort declaration summary for TypeScript/JavaScript
//! files.
//!
//! Reads one source file, walks its syntax tree and prints a single JSON
//! line listing exported symbols and declared functions. Every failure
//! (missing input, unreadable file, syntax error) collapses to the empty
//! summary and the process still exits 0: this is a lossy index builder,
//! not a validator.

mod error;
mod extract;
mod lang;
mod model;
mod parser;
mod util;

use std::path::{Path, PathBuf};

use tracing::debug;
use tracing_subscriber::EnvFilter;

use error::ScanError;
use model::Summary;

/// Pick the target path out of the raw arguments.
///
/// Exactly one flag is recognized: `--file <path>`. Everything else is
/// ignored, and a missing or value-less flag means "no input".
fn parse_args(args: &[String]) -> Option<PathBuf> {
    let idx = args.iter().position(|a| a == "--file")?;
    args.get(idx + 1).map(PathBuf::from)
}

fn run(path: &Path) -> Result<Summary, ScanError> {
    let (tree, source) = parser::parse_file(path)?;
    Ok(extract::extract_summary(tree.root_node(), source.as_bytes()))
}

/// Emit the summary as one JSON line on stdout.
///
/// Serialization of `Summary` cannot realistically fail, but the contract
/// says this boundary never does either.
fn print_summary(summary: &Summary) {
    match serde_json::to_string(summary) {
        Ok(line) => println!("{line}"),
        Err(_) => println!(r#"{{"exports":[],"functions":[]}}"#),
    }
}

fn main() {
    // Diagnostics go to stderr and are off unless RUST_LOG asks for them;
    // stdout carries nothing but the summary line.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();

    let summary = match parse_args(&raw) {
        Some(path) => run(&path).unwrap_or_else(|err| {
            debug!(%err, "extraction failed, emitting empty summary");
            Summary::empty()
        }),
        None => {
            debug!("no --file argument, emitting empty summary");
            Summary::empty()
        }
    };

    print_summary(&summary);
}
