//! CLI support for fiql
//!
//! Provides programmatic access to the `fiql` command so other tools can
//! validate filters and run them against JSON without spawning a process.

mod check;
mod docs;

pub use check::{execute_check, CheckOptions, CheckResult, OutputFormat};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),
    /// Evaluation error
    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),
    /// JSON parsing or printing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'fiql docs' to see available categories.")]
    UnknownCategory(String),
}
