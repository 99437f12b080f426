//! Relative path rendering for the `file` field of keyword records.
//!
//! The table is consumed on a different host than the one that built it, so
//! the separator is configuration rather than `std::path::MAIN_SEPARATOR`.

use std::path::{Component, Path};

/// Render `path` relative to `base`, joining components with `separator`.
///
/// Returns `None` when `path` is not inside `base`.
#[must_use]
pub fn relative_file(path: &Path, base: &Path, separator: &str) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    Some(join_components(relative, separator))
}

/// Join the normal components of `path` with `separator`.
///
/// Backslashes inside a component are treated as separators too, so a
/// Windows-style string processed on Unix renders the same way.
#[must_use]
pub fn join_components(path: &Path, separator: &str) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .flat_map(|part| {
            part.split(['/', '\\'])
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Final path segment of a `/`- or `\`-separated string.
#[must_use]
pub fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Final path segment without its extension (`date` for `a\date.htm`).
#[must_use]
pub fn file_stem_of(path: &str) -> &str {
    let name = file_name_of(path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}
