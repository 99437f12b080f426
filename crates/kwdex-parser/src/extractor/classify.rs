use crate::dom::{Document, NodeId};

use super::{ARRAY_HEADING, DocumentShape, NoMatchReason, PURPOSE_HEADING, keyword_tokens};

/// Classify a page. First match wins:
///
/// 1. no heading inside the content container -> `NoMatch`
/// 2. no `PURPOSE:` heading after it -> `NoMatch`
/// 3. an `ARRAY:` heading after `PURPOSE:` -> `Array`
/// 4. several keyword spans in the heading -> `SharedDescription`
/// 5. exactly one -> `Single`, none -> `NoMatch`
#[must_use]
pub fn classify(document: &Document) -> DocumentShape {
    let container = content_container(document);
    let scope_end = document.end(container);

    let Some(heading) = document.find_element(document.descendants(container), |el| {
        el.is_heading()
    }) else {
        return DocumentShape::NoMatch(NoMatchReason::NoKeywordHeading);
    };

    let Some(purpose) =
        titled_heading(document, document.end(heading), scope_end, PURPOSE_HEADING)
    else {
        return DocumentShape::NoMatch(NoMatchReason::NoPurposeSection);
    };

    if let Some(array) = titled_heading(document, document.end(purpose), scope_end, ARRAY_HEADING)
    {
        let paragraphs = document
            .elements_in(document.end(purpose)..array)
            .filter(|(_, el)| el.tag == "p")
            .map(|(id, _)| id)
            .collect();
        return DocumentShape::Array { paragraphs };
    }

    let mut keywords = keyword_tokens(document, heading);
    match keywords.len() {
        0 => DocumentShape::NoMatch(NoMatchReason::NoKeywordSpans),
        1 => DocumentShape::Single {
            keyword: keywords.remove(0),
            purpose,
        },
        _ => DocumentShape::SharedDescription { keywords, purpose },
    }
}

/// The outermost main-content element, falling back to `<body>` and then to
/// the whole document.
fn content_container(document: &Document) -> NodeId {
    let everything = document.descendants(document.root());
    document
        .find_element(everything.clone(), |el| {
            el.attr("id") == Some("mc-main-content") || el.attr("role") == Some("main")
        })
        .or_else(|| document.find_element(everything, |el| el.tag == "body"))
        .unwrap_or_else(|| document.root())
}

/// First heading in `from..to` whose text is exactly `title`.
fn titled_heading(document: &Document, from: NodeId, to: NodeId, title: &str) -> Option<NodeId> {
    document
        .elements_in(from..to)
        .find(|&(id, el)| el.is_heading() && document.text(id) == title)
        .map(|(id, _)| id)
}
