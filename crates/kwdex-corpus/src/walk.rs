//! Document enumeration for one source directory.
//!
//! Uses the `ignore` crate's walker with every standard filter disabled:
//! documentation folders carry no `.gitignore` semantics and hidden pages
//! are still pages. Only files directly inside the directory are listed,
//! sorted by file name so runs are reproducible.

use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::error::CorpusError;

/// The pages of one directory.
///
/// Listing is lazy and restartable: [`DocumentList::iter`] walks the
/// directory afresh on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentList {
    dir: PathBuf,
    extension: String,
}

/// List the files directly inside `dir` whose extension matches
/// `extension` (case-insensitive, leading dot optional).
///
/// # Errors
/// Returns `CorpusError::MissingDirectory` if `dir` is not a directory.
pub fn list_documents(dir: &Path, extension: &str) -> Result<DocumentList, CorpusError> {
    if !dir.is_dir() {
        return Err(CorpusError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }
    Ok(DocumentList {
        dir: dir.to_path_buf(),
        extension: extension.trim_start_matches('.').to_string(),
    })
}

impl DocumentList {
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Matching file paths in file-name order.
    pub fn iter(&self) -> impl Iterator<Item = PathBuf> + '_ {
        let mut builder = WalkBuilder::new(&self.dir);
        builder
            .standard_filters(false)
            .hidden(false)
            .follow_links(true)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b));

        builder
            .build()
            .filter_map(|result| match result {
                Ok(entry) => Some(entry),
                Err(error) => {
                    tracing::warn!(dir = %self.dir.display(), %error, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.depth() == 1 && is_file(entry))
            .map(DirEntry::into_path)
            .filter(|path| has_extension(path, &self.extension))
    }
}

impl<'a> IntoIterator for &'a DocumentList {
    type Item = PathBuf;
    type IntoIter = Box<dyn Iterator<Item = PathBuf> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
