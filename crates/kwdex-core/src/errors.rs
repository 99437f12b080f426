//! Cross-cutting error types for kwdex.
//!
//! Domain-specific errors (`ParserError`, `CorpusError`, `ConfigError`) are
//! defined in their respective crates. The binary converges them through
//! `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while serializing, persisting or loading a keyword table.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The table could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The table file could not be written.
    #[error("failed to write keyword table to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table file could not be read.
    #[error("failed to read keyword table from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
