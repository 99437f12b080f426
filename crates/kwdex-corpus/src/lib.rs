//! # kwdex-corpus
//!
//! Locating documentation pages on disk.
//!
//! - [`CorpusLayout`] turns configuration into the concrete directories of
//!   one `(version, application)` pair.
//! - [`list_documents`] enumerates the pages directly inside one directory.

pub mod error;
pub mod layout;
pub mod walk;

pub use error::CorpusError;
pub use layout::{CorpusLayout, SourceDir};
pub use walk::{DocumentList, list_documents};
