//! # kwdex-parser
//!
//! HTML parsing and keyword extraction for kwdex.
//!
//! Documentation pages are parsed with ast-grep's tree-sitter HTML grammar,
//! lowered into an owned [`Document`], and classified into one of the page
//! layouts the help tool produces. See [`extractor`] for the rules.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let candidates = kwdex_parser::extract_file(Path::new("date.htm")).expect("readable file");
//! for candidate in candidates {
//!     println!("{}: {}", candidate.keyword, candidate.description);
//! }
//! ```

pub mod dom;
pub mod error;
pub mod extractor;
pub mod text;

use std::path::Path;

pub use dom::{Document, NodeId};
pub use error::ParserError;
pub use extractor::{DocumentShape, NoMatchReason, classify, extract, extract_with_shape};
pub use kwdex_core::KeywordCandidate;

/// Read, parse and extract one file.
///
/// # Errors
/// Returns `ParserError` if the file cannot be read or decoded. A page
/// without keyword structure is not an error and yields an empty vector.
pub fn extract_file(path: &Path) -> Result<Vec<KeywordCandidate>, ParserError> {
    let document = Document::from_file(path)?;
    Ok(extract(&document))
}
