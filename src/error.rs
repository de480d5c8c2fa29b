//! Error taxonomy for the planner.
//!
//! Only two variants are recoverable: `CatalogFormat` marks a bad row that
//! the loader reports and skips, and `InvalidInput` marks rejected prompt
//! input that the calling loop re-prompts on. Everything else aborts the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// A malformed catalog row; reported and skipped during load.
    #[error("catalog row {line}: {reason}")]
    CatalogFormat { line: usize, reason: String },

    #[error("catalog file not found at {}", path.display())]
    CatalogMissing { path: PathBuf },

    #[error("no part matching '{query}' in category '{category}'")]
    PartNotFound { category: String, query: String },

    #[error("query '{query}' in category '{category}' is ambiguous: {}", matches.join("; "))]
    AmbiguousPart {
        category: String,
        query: String,
        matches: Vec<String>,
    },

    /// Rejected interactive input; never surfaces past a prompt loop.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
