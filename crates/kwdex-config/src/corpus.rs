//! Where the documentation corpus lives and how its paths are rendered.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_root() -> String {
    r"C:\Program Files\CMG\Manuals".to_string()
}

fn default_extension() -> String {
    "htm".to_string()
}

fn default_path_separator() -> String {
    "\\".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Manuals root; each version is a directory directly below it.
    #[serde(default = "default_root")]
    pub root: String,

    /// Document file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Separator used for the `file` field of every record.
    #[serde(default = "default_path_separator")]
    pub path_separator: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extension: default_extension(),
            path_separator: default_path_separator(),
        }
    }
}

impl CorpusConfig {
    /// Extension with any leading dot removed.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.extension.trim().trim_start_matches('.')
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.root.trim().is_empty() {
            return Err(ConfigError::invalid("corpus.root", "must not be empty"));
        }
        if self.extension().is_empty() {
            return Err(ConfigError::invalid("corpus.extension", "must not be empty"));
        }
        if self.path_separator.chars().count() != 1 {
            return Err(ConfigError::invalid(
                "corpus.path_separator",
                format!("expected a single character, got {:?}", self.path_separator),
            ));
        }
        Ok(())
    }
}
