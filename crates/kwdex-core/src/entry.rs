use serde::{Deserialize, Serialize};

/// A keyword and its description as found in one document.
///
/// Produced by the extractor; it carries no source location. The pipeline
/// turns it into a [`KeywordEntry`] once it knows where the document lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCandidate {
    pub keyword: String,
    pub description: String,
}

impl KeywordCandidate {
    #[must_use]
    pub fn new(keyword: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            description: description.into(),
        }
    }

    /// Attach the document's relative path.
    #[must_use]
    pub fn into_entry(self, file: impl Into<String>) -> KeywordEntry {
        KeywordEntry {
            keyword: self.keyword,
            description: self.description,
            file: file.into(),
        }
    }
}

/// One output unit of the keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub description: String,
    /// Path relative to the version root, separators normalized.
    pub file: String,
}

impl KeywordEntry {
    /// Split into the map key and the persisted value.
    #[must_use]
    pub fn into_parts(self) -> (String, KeywordRecord) {
        (
            self.keyword,
            KeywordRecord {
                description: self.description,
                file: self.file,
            },
        )
    }

    #[must_use]
    pub fn from_parts(keyword: &str, record: &KeywordRecord) -> Self {
        Self {
            keyword: keyword.to_string(),
            description: record.description.clone(),
            file: record.file.clone(),
        }
    }
}

/// The persisted value stored under a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub description: String,
    pub file: String,
}
