use std::path::PathBuf;

/// Errors from corpus enumeration.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// A configured source directory does not exist. Callers log this and
    /// move on to the next directory.
    #[error("source directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },
}
