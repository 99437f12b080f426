//! # kwdex-config
//!
//! Layered configuration loading for kwdex using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KWDEX_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.kwdex/config.toml`
//! 4. User-level `~/.config/kwdex/config.toml`
//! 5. Built-in defaults (the CMG manuals layout)
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KWDEX_CORPUS__ROOT` -> `corpus.root`,
//! `KWDEX_OUTPUT__PATH` -> `output.path`, etc.
//!
//! # Example file
//!
//! ```toml
//! versions = ["2022.10", "2023.10"]
//!
//! [corpus]
//! root = '/mnt/manuals'
//! path_separator = '/'
//!
//! [[applications]]
//! name = "IMEX"
//! subdirs = ["IMEX/Content/IMEX/Recurrent Data"]
//!
//! [output]
//! path = "keywordData.json"
//! pretty = true
//! ```

mod applications;
mod corpus;
mod error;
mod output;

pub use applications::ApplicationConfig;
pub use corpus::CorpusConfig;
pub use error::ConfigError;
pub use output::OutputConfig;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

fn default_versions() -> Vec<String> {
    vec!["2022.10".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KwdexConfig {
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Version directories below `corpus.root`, processed in this order.
    #[serde(default = "default_versions")]
    pub versions: Vec<String>,
    /// Applications, processed in this order.
    #[serde(default = "applications::default_applications")]
    pub applications: Vec<ApplicationConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for KwdexConfig {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            versions: default_versions(),
            applications: applications::default_applications(),
            output: OutputConfig::default(),
        }
    }
}

impl KwdexConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    /// Returns `ConfigError` on malformed sources or invalid values.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.is_file()
        {
            return Err(ConfigError::invalid(
                "--config",
                format!("{} is not a readable file", path.display()),
            ));
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory, then [`Self::load`].
    ///
    /// # Errors
    /// Returns `ConfigError` on malformed sources or invalid values.
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".kwdex/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file (existence is checked by `load`)
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("KWDEX_").split("__"))
    }

    /// Reject configurations the pipeline cannot run with.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.corpus.validate()?;

        if self.versions.is_empty() {
            return Err(ConfigError::invalid("versions", "at least one version is required"));
        }
        if self.versions.iter().any(|v| v.trim().is_empty()) {
            return Err(ConfigError::invalid("versions", "version names must not be empty"));
        }
        if self.applications.is_empty() {
            return Err(ConfigError::invalid(
                "applications",
                "at least one application is required",
            ));
        }

        let mut seen = HashSet::new();
        for app in &self.applications {
            if app.name.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "applications.name",
                    "application names must not be empty",
                ));
            }
            if !seen.insert(app.name.as_str()) {
                return Err(ConfigError::invalid(
                    "applications.name",
                    format!("duplicate application '{}'", app.name),
                ));
            }
        }
        Ok(())
    }

    /// Subdirectories configured for `name`, if the application exists.
    #[must_use]
    pub fn subdirs_for(&self, name: &str) -> Option<&[String]> {
        self.applications
            .iter()
            .find(|app| app.name == name)
            .map(|app| app.subdirs.as_slice())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kwdex").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = KwdexConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.versions, vec!["2022.10".to_string()]);
        assert_eq!(config.output.path, "keywordData.json");
        assert!(config.output.pretty);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = KwdexConfig::figment(None);
        let config: KwdexConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.applications.len(), 2);
        assert_eq!(config.corpus.extension(), "htm");
    }

    #[test]
    fn subdirs_for_known_and_unknown_apps() {
        let config = KwdexConfig::default();
        assert_eq!(config.subdirs_for("GEM").map(<[String]>::len), Some(14));
        assert!(config.subdirs_for("STARS").is_none());
    }

    #[test]
    fn duplicate_application_is_rejected() {
        let mut config = KwdexConfig::default();
        config.applications.push(ApplicationConfig::new("IMEX", &[]));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate application 'IMEX'"), "{err}");
    }

    #[test]
    fn empty_versions_are_rejected() {
        let config = KwdexConfig {
            versions: Vec::new(),
            ..KwdexConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "versions"
        ));
    }
}
