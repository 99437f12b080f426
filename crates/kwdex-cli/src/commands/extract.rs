use std::path::Path;

use kwdex_parser::{Document, DocumentShape, extract_with_shape};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::output::output;

/// One candidate, or one placeholder row for a page that produced none.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct ExtractRow {
    file: String,
    shape: String,
    keyword: Option<String>,
    description: Option<String>,
}

/// Handle `kwdex extract FILE...`.
pub fn handle(args: &ExtractArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = args
        .files
        .iter()
        .flat_map(|path| extract_rows(path))
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

fn extract_rows(path: &Path) -> Vec<ExtractRow> {
    let file = path.display().to_string();
    let document = match Document::from_file(path) {
        Ok(document) => document,
        Err(error) => {
            tracing::warn!(%error, "skipping unreadable document");
            return vec![ExtractRow {
                file,
                shape: "unreadable".to_string(),
                keyword: None,
                description: None,
            }];
        }
    };

    let (shape, candidates) = extract_with_shape(&document);
    if candidates.is_empty() {
        let shape = match &shape {
            DocumentShape::NoMatch(reason) => {
                format!("{} ({})", shape.label(), reason.label())
            }
            _ => shape.label().to_string(),
        };
        return vec![ExtractRow {
            file,
            shape,
            keyword: None,
            description: None,
        }];
    }

    candidates
        .into_iter()
        .map(|candidate| ExtractRow {
            file: file.clone(),
            shape: shape.label().to_string(),
            keyword: Some(candidate.keyword),
            description: Some(candidate.description),
        })
        .collect()
}
