//! # kwdex-core
//!
//! Core types and error types for kwdex.
//!
//! This crate provides the foundational types shared across all kwdex crates:
//! - `KeywordCandidate`: what the extractor finds in one document
//! - `KeywordEntry` / `KeywordRecord`: what the table stores per keyword
//! - `KeywordTable`: the `version -> application -> keyword` accumulator and
//!   its JSON layout
//! - Relative path normalization for the `file` field
//! - Cross-cutting error types

pub mod entry;
pub mod errors;
pub mod paths;
pub mod table;

pub use entry::{KeywordCandidate, KeywordEntry, KeywordRecord};
pub use errors::CoreError;
pub use table::KeywordTable;
