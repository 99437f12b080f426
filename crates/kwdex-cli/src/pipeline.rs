//! Keyword table pipeline: layout -> list -> parse -> extract -> record.
//!
//! Runs sequentially over the configured versions, applications and
//! subdirectories, in that order, so the same corpus always produces the
//! same table. Missing directories and unreadable pages are logged, counted
//! in the [`RunReport`] and skipped; nothing in here aborts a run.

use std::path::Path;

use kwdex_config::KwdexConfig;
use kwdex_core::KeywordTable;
use kwdex_core::paths::{join_components, relative_file};
use kwdex_corpus::{CorpusLayout, SourceDir, list_documents};
use kwdex_parser::{Document, DocumentShape, extract_with_shape};
use serde::Serialize;

use crate::progress::Progress;

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub directories_scanned: usize,
    pub directories_missing: usize,
    pub documents_read: usize,
    pub documents_unreadable: usize,
    pub documents_array: usize,
    pub documents_shared: usize,
    pub documents_single: usize,
    pub documents_no_match: usize,
    pub entries_recorded: usize,
    pub entries_overwritten: usize,
}

impl RunReport {
    fn count_shape(&mut self, shape: &DocumentShape) {
        let counter = match shape {
            DocumentShape::Array { .. } => &mut self.documents_array,
            DocumentShape::SharedDescription { .. } => &mut self.documents_shared,
            DocumentShape::Single { .. } => &mut self.documents_single,
            DocumentShape::NoMatch(_) => &mut self.documents_no_match,
        };
        *counter += 1;
    }
}

pub struct KeywordPipeline<'a> {
    config: &'a KwdexConfig,
    layout: CorpusLayout,
}

impl<'a> KeywordPipeline<'a> {
    pub fn new(config: &'a KwdexConfig) -> Self {
        Self {
            config,
            layout: CorpusLayout::from_config(config),
        }
    }

    /// Build the table for every configured version.
    pub fn run(&self, progress: &Progress) -> (KeywordTable, RunReport) {
        let mut table = KeywordTable::new(self.config.corpus.root.clone());
        let mut report = RunReport::default();

        for version in &self.config.versions {
            for app in &self.config.applications {
                table.ensure_bucket(version, &app.name);
            }
        }

        for dir in self.layout.plan(self.config, &self.config.versions) {
            progress.set_message(&format!("{} {}", dir.version, dir.subdir));
            self.scan_directory(&dir, &mut table, &mut report);
            progress.inc(1);
        }

        tracing::info!(
            entries = table.len(),
            documents = report.documents_read,
            missing_dirs = report.directories_missing,
            unreadable = report.documents_unreadable,
            "keyword table built"
        );
        (table, report)
    }

    /// Number of source directories [`Self::run`] will visit.
    pub fn directory_count(&self) -> usize {
        self.layout
            .plan(self.config, &self.config.versions)
            .len()
    }

    fn scan_directory(&self, dir: &SourceDir, table: &mut KeywordTable, report: &mut RunReport) {
        let documents = match list_documents(&dir.path, self.config.corpus.extension()) {
            Ok(documents) => documents,
            Err(error) => {
                tracing::warn!(
                    version = %dir.version,
                    application = %dir.application,
                    %error,
                    "skipping source directory"
                );
                report.directories_missing += 1;
                return;
            }
        };

        report.directories_scanned += 1;
        tracing::info!(
            version = %dir.version,
            application = %dir.application,
            path = %dir.path.display(),
            "scanning directory"
        );

        let base = self.layout.version_root(&dir.version);
        for path in &documents {
            let document = match Document::from_file(&path) {
                Ok(document) => document,
                Err(error) => {
                    tracing::warn!(%error, "skipping unreadable document");
                    report.documents_unreadable += 1;
                    continue;
                }
            };
            report.documents_read += 1;

            let (shape, candidates) = extract_with_shape(&document);
            tracing::debug!(
                path = %path.display(),
                shape = shape.label(),
                entries = candidates.len(),
                "extracted document"
            );
            report.count_shape(&shape);

            let file = self.file_field(&path, &base);
            for candidate in candidates {
                let entry = candidate.into_entry(file.clone());
                if table.record(&dir.version, &dir.application, entry).is_some() {
                    report.entries_overwritten += 1;
                }
                report.entries_recorded += 1;
            }
        }
    }

    /// `path` relative to the version root, with the configured separator.
    fn file_field(&self, path: &Path, base: &Path) -> String {
        let separator = &self.config.corpus.path_separator;
        relative_file(path, base, separator).unwrap_or_else(|| join_components(path, separator))
    }
}
