//! Where the keyword table is written.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "keywordData.json".to_string()
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output file path, relative to the working directory unless absolute.
    #[serde(default = "default_path")]
    pub path: String,

    /// Indent the JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            pretty: default_pretty(),
        }
    }
}
