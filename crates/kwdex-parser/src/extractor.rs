//! Keyword extraction from help-tool documentation pages.
//!
//! A keyword page has a content container holding one heading that
//! announces the keyword(s) as `<span class="keyword">*NAME</span>`,
//! followed by a `PURPOSE:` sub-heading and its paragraphs, and sometimes an
//! `ARRAY:` sub-heading. Page layouts differ between manual revisions, so
//! extraction first classifies the page into a [`DocumentShape`] and then
//! runs the handler for that shape:
//!
//! - **Array**: an `ARRAY:` section follows `PURPOSE:`. Every paragraph in
//!   between that carries its own keyword span yields one entry described by
//!   that paragraph alone.
//! - **Shared description**: the heading names several keywords; all of them
//!   get the same purpose text.
//! - **Single**: the heading names one keyword.
//!
//! Anything else yields no entries. Extraction never fails.

mod classify;

#[cfg(test)]
mod tests;

pub use classify::classify;

use kwdex_core::KeywordCandidate;

use crate::dom::{Document, Element, NodeId};
use crate::text::{normalize_keyword, strip_leading_separator};

/// Title of the sub-heading that opens the description.
pub const PURPOSE_HEADING: &str = "PURPOSE:";

/// Title of the sub-heading that closes a per-keyword array section.
pub const ARRAY_HEADING: &str = "ARRAY:";

/// Class carried by keyword spans.
pub const KEYWORD_CLASS: &str = "keyword";

/// Layout of a page, decided by [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentShape {
    /// `<p>` elements between the `PURPOSE:` and `ARRAY:` headings.
    Array { paragraphs: Vec<NodeId> },
    /// Several heading keywords share the purpose text.
    SharedDescription {
        keywords: Vec<String>,
        purpose: NodeId,
    },
    Single { keyword: String, purpose: NodeId },
    NoMatch(NoMatchReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchReason {
    NoKeywordHeading,
    NoPurposeSection,
    NoKeywordSpans,
}

impl DocumentShape {
    /// Stable label used in logs and run reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Array { .. } => "array",
            Self::SharedDescription { .. } => "shared-description",
            Self::Single { .. } => "single",
            Self::NoMatch(_) => "no-match",
        }
    }

    #[must_use]
    pub const fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch(_))
    }
}

impl NoMatchReason {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoKeywordHeading => "no keyword heading",
            Self::NoPurposeSection => "no PURPOSE: section",
            Self::NoKeywordSpans => "no keyword spans in heading",
        }
    }
}

/// Extract `(keyword, description)` pairs in document order.
#[must_use]
pub fn extract(document: &Document) -> Vec<KeywordCandidate> {
    extract_with_shape(document).1
}

/// Like [`extract`], also returning the shape the page was classified as.
#[must_use]
pub fn extract_with_shape(document: &Document) -> (DocumentShape, Vec<KeywordCandidate>) {
    let shape = classify(document);
    let candidates = match &shape {
        DocumentShape::Array { paragraphs } => array_entries(document, paragraphs),
        DocumentShape::SharedDescription { keywords, purpose } => {
            shared_entries(document, keywords, *purpose)
        }
        DocumentShape::Single { keyword, purpose } => {
            vec![KeywordCandidate::new(
                keyword.clone(),
                purpose_text(document, *purpose),
            )]
        }
        DocumentShape::NoMatch(_) => Vec::new(),
    };

    tracing::trace!(
        path = ?document.path(),
        shape = shape.label(),
        entries = candidates.len(),
        "classified document"
    );
    (shape, candidates)
}

/// One entry per keyword-bearing paragraph, described by the rest of that
/// paragraph once its first keyword span is taken out.
fn array_entries(document: &Document, paragraphs: &[NodeId]) -> Vec<KeywordCandidate> {
    paragraphs
        .iter()
        .filter_map(|&paragraph| {
            let (span, keyword) = keyword_spans(document, paragraph).into_iter().next()?;
            let text = document.text_excluding(paragraph, |id, _| id == span);
            let description = strip_leading_separator(&text).to_string();
            Some(KeywordCandidate::new(keyword, description))
        })
        .collect()
}

fn shared_entries(
    document: &Document,
    keywords: &[String],
    purpose: NodeId,
) -> Vec<KeywordCandidate> {
    let description = purpose_text(document, purpose);
    keywords
        .iter()
        .map(|keyword| KeywordCandidate::new(keyword.clone(), description.clone()))
        .collect()
}

/// Space-joined text of the `<p>` siblings after the purpose heading, up to
/// the next heading of any level. Other siblings are skipped.
pub(crate) fn purpose_text(document: &Document, purpose: NodeId) -> String {
    let mut paragraphs = Vec::new();
    for sibling in document.following_siblings(purpose) {
        let Some(element) = document.element(sibling) else {
            continue;
        };
        if element.is_heading() {
            break;
        }
        if element.tag == "p" {
            let text = document.text(sibling);
            if !text.is_empty() {
                paragraphs.push(text);
            }
        }
    }
    paragraphs.join(" ")
}

pub(crate) fn is_keyword_span(element: &Element) -> bool {
    element.tag == "span" && element.has_class(KEYWORD_CLASS)
}

/// Keyword spans inside `scope` with their normalized tokens, in document
/// order. Spans nested in another keyword span are not counted separately,
/// and spans whose token normalizes to nothing are ignored.
pub(crate) fn keyword_spans(document: &Document, scope: NodeId) -> Vec<(NodeId, String)> {
    let mut spans = Vec::new();
    let mut resume_at = 0;
    for (id, element) in document.elements_in(document.descendants(scope)) {
        if id < resume_at || !is_keyword_span(element) {
            continue;
        }
        resume_at = document.end(id);
        let token = normalize_keyword(&document.text(id));
        if !token.is_empty() {
            spans.push((id, token));
        }
    }
    spans
}

pub(crate) fn keyword_tokens(document: &Document, scope: NodeId) -> Vec<String> {
    keyword_spans(document, scope)
        .into_iter()
        .map(|(_, token)| token)
        .collect()
}
