//! Mapping `(version, application)` to source directories.
//!
//! The corpus is laid out as `root/<version>/<subdir>` where each
//! application owns a configured list of subdirectories.

use std::path::{Path, PathBuf};

use kwdex_config::{ApplicationConfig, KwdexConfig};

/// One directory to scan, with the names it is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDir {
    pub version: String,
    pub application: String,
    /// The subdirectory as written in configuration.
    pub subdir: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    root: PathBuf,
}

impl CorpusLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn from_config(config: &KwdexConfig) -> Self {
        Self::new(&config.corpus.root)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `root/<version>`: the base every recorded `file` is relative to.
    #[must_use]
    pub fn version_root(&self, version: &str) -> PathBuf {
        self.root.join(version)
    }

    /// `root/<version>/<subdir>`, accepting `/` and `\` inside `subdir`.
    #[must_use]
    pub fn subdir_path(&self, version: &str, subdir: &str) -> PathBuf {
        subdir
            .split(['/', '\\'])
            .filter(|part| !part.is_empty())
            .fold(self.version_root(version), |path, part| path.join(part))
    }

    /// Source directories of one application in one version, in configured
    /// order.
    #[must_use]
    pub fn source_dirs(&self, version: &str, application: &ApplicationConfig) -> Vec<SourceDir> {
        application
            .subdirs
            .iter()
            .map(|subdir| SourceDir {
                version: version.to_string(),
                application: application.name.clone(),
                subdir: subdir.clone(),
                path: self.subdir_path(version, subdir),
            })
            .collect()
    }

    /// Every source directory of the run: versions, then applications, then
    /// subdirectories, each in configured order.
    #[must_use]
    pub fn plan(&self, config: &KwdexConfig, versions: &[String]) -> Vec<SourceDir> {
        versions
            .iter()
            .flat_map(move |version| {
                config
                    .applications
                    .iter()
                    .flat_map(move |app| self.source_dirs(version, app))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("IMEX/Content/IMEX/Recurrent Data")]
    #[case(r"IMEX\Content\IMEX\Recurrent Data")]
    #[case("/IMEX//Content/IMEX/Recurrent Data/")]
    fn subdir_separators_are_interchangeable(#[case] subdir: &str) {
        let layout = CorpusLayout::new("/manuals");
        assert_eq!(
            layout.subdir_path("2022.10", subdir),
            Path::new("/manuals/2022.10/IMEX/Content/IMEX/Recurrent Data")
        );
    }

    #[test]
    fn source_dirs_follow_configured_order() {
        let layout = CorpusLayout::new("/manuals");
        let app = ApplicationConfig::new("GEM", &["GEM/b", "GEM/a"]);

        let dirs = layout.source_dirs("2023.10", &app);
        let paths: Vec<_> = dirs.iter().map(|d| d.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/manuals/2023.10/GEM/b"),
                PathBuf::from("/manuals/2023.10/GEM/a"),
            ]
        );
        assert!(dirs.iter().all(|d| d.application == "GEM" && d.version == "2023.10"));
    }

    #[test]
    fn plan_covers_every_version_and_application() {
        let mut config = KwdexConfig::default();
        config.applications = vec![
            ApplicationConfig::new("IMEX", &["IMEX/x"]),
            ApplicationConfig::new("GEM", &["GEM/y", "GEM/z"]),
        ];
        let layout = CorpusLayout::new("/m");

        let plan = layout.plan(&config, &["v1".to_string(), "v2".to_string()]);
        let names: Vec<_> = plan
            .iter()
            .map(|d| format!("{}:{}:{}", d.version, d.application, d.subdir))
            .collect();
        assert_eq!(
            names,
            vec![
                "v1:IMEX:IMEX/x",
                "v1:GEM:GEM/y",
                "v1:GEM:GEM/z",
                "v2:IMEX:IMEX/x",
                "v2:GEM:GEM/y",
                "v2:GEM:GEM/z",
            ]
        );
    }
}
