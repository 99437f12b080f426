//! Parser error types for kwdex-parser.

use std::path::PathBuf;

/// Errors that can occur while loading a document.
///
/// A document that loads but lacks the expected structure is not an error;
/// extraction simply yields nothing for it.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Decode { path: PathBuf },
}
