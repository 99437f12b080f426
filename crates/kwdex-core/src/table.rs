//! The keyword table: `version -> application -> keyword -> record`.
//!
//! Within one `(version, application)` bucket a keyword is unique and the
//! last recorded entry wins. Maps are ordered so the serialized table is
//! stable from run to run.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::{KeywordEntry, KeywordRecord};
use crate::errors::CoreError;
use crate::paths::{file_name_of, file_stem_of};

/// Keywords of one application within one version.
pub type ApplicationBucket = BTreeMap<String, KeywordRecord>;

/// Applications of one version.
pub type VersionBucket = BTreeMap<String, ApplicationBucket>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTable {
    /// Corpus root the `file` fields are resolved against (plus the version).
    pub prefix: String,
    #[serde(default)]
    pub versions: BTreeMap<String, VersionBucket>,
}

/// A lookup result with the bucket it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordHit {
    pub version: String,
    pub application: String,
    #[serde(flatten)]
    pub entry: KeywordEntry,
}

impl KeywordTable {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            versions: BTreeMap::new(),
        }
    }

    /// Make sure the `(version, application)` bucket exists, even if it ends
    /// up empty.
    pub fn ensure_bucket(&mut self, version: &str, application: &str) {
        self.versions
            .entry(version.to_string())
            .or_default()
            .entry(application.to_string())
            .or_default();
    }

    /// Insert or overwrite an entry. Returns the record it replaced.
    pub fn record(
        &mut self,
        version: &str,
        application: &str,
        entry: KeywordEntry,
    ) -> Option<KeywordRecord> {
        let (keyword, record) = entry.into_parts();
        let previous = self
            .versions
            .entry(version.to_string())
            .or_default()
            .entry(application.to_string())
            .or_default()
            .insert(keyword.clone(), record);

        if let Some(ref old) = previous {
            tracing::debug!(
                %version,
                %application,
                %keyword,
                replaced = %old.file,
                "keyword redefined; keeping the later entry"
            );
        }
        previous
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Applications recorded for `version`; empty if the version is unknown.
    pub fn applications<'a>(&'a self, version: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.versions
            .get(version)
            .into_iter()
            .flat_map(|apps| apps.keys().map(String::as_str))
    }

    #[must_use]
    pub fn bucket(&self, version: &str, application: &str) -> Option<&ApplicationBucket> {
        self.versions.get(version)?.get(application)
    }

    #[must_use]
    pub fn get(&self, version: &str, application: &str, keyword: &str) -> Option<KeywordEntry> {
        self.bucket(version, application)?
            .get(keyword)
            .map(|record| KeywordEntry::from_parts(keyword, record))
    }

    /// Look up a word the way an editor hover does: keywords are stored
    /// upper-case, so the word is upper-cased first.
    #[must_use]
    pub fn lookup(&self, version: &str, application: &str, word: &str) -> Option<KeywordEntry> {
        let word = word.trim();
        self.get(version, application, &word.to_uppercase())
            .or_else(|| self.get(version, application, word))
    }

    /// First entry whose documentation file has the given file name.
    #[must_use]
    pub fn find_by_file(
        &self,
        version: &str,
        application: &str,
        file_name: &str,
    ) -> Option<KeywordEntry> {
        let wanted = file_name_of(file_name.trim());
        self.bucket(version, application)?
            .iter()
            .find(|(_, record)| file_name_of(&record.file).eq_ignore_ascii_case(wanted))
            .map(|(keyword, record)| KeywordEntry::from_parts(keyword, record))
    }

    /// Resolve a hovered word or a documentation link within one bucket:
    /// the word as a keyword, then the link's file stem as a keyword, then
    /// the first entry documented in a file with that name.
    #[must_use]
    pub fn resolve(&self, version: &str, application: &str, word: &str) -> Option<KeywordEntry> {
        let word = word.trim();
        self.lookup(version, application, word)
            .or_else(|| {
                let stem = file_stem_of(word);
                (stem != word)
                    .then(|| self.lookup(version, application, stem))
                    .flatten()
            })
            .or_else(|| self.find_by_file(version, application, word))
    }

    /// Search every bucket (optionally narrowed to one version and/or
    /// application), resolving the word in each bucket with [`Self::resolve`].
    #[must_use]
    pub fn search(
        &self,
        word: &str,
        version: Option<&str>,
        application: Option<&str>,
    ) -> Vec<KeywordHit> {
        let mut hits = Vec::new();
        for (version_name, apps) in &self.versions {
            if version.is_some_and(|v| v != version_name) {
                continue;
            }
            for application_name in apps.keys() {
                if application.is_some_and(|a| a != application_name) {
                    continue;
                }
                if let Some(entry) = self.resolve(version_name, application_name, word) {
                    hits.push(KeywordHit {
                        version: version_name.clone(),
                        application: application_name.clone(),
                        entry,
                    });
                }
            }
        }
        hits
    }

    /// Iterate `(version, application, keyword, record)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str, &KeywordRecord)> {
        self.versions.iter().flat_map(|(version, apps)| {
            apps.iter().flat_map(move |(application, keywords)| {
                keywords.iter().map(move |(keyword, record)| {
                    (
                        version.as_str(),
                        application.as_str(),
                        keyword.as_str(),
                        record,
                    )
                })
            })
        })
    }

    /// Total number of keywords across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeMap::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize to the persisted JSON layout.
    ///
    /// # Errors
    /// Returns `CoreError::Json` if encoding fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, CoreError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Serialize and write the table to `path`.
    ///
    /// # Errors
    /// Returns `CoreError::Json` or `CoreError::Write`.
    pub fn write_json(&self, path: &Path, pretty: bool) -> Result<(), CoreError> {
        let mut json = self.to_json(pretty)?;
        json.push('\n');
        std::fs::write(path, json).map_err(|source| CoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a previously written table.
    ///
    /// # Errors
    /// Returns `CoreError::Json` for malformed input.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a table file.
    ///
    /// # Errors
    /// Returns `CoreError::Read` or `CoreError::Json`.
    pub fn read_json(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
