//! Text normalization helpers.

use std::borrow::Cow;

use scraper::Html;

/// Collapse every run of whitespace (including no-break spaces) to a single
/// space and trim both ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a keyword token: surrounding whitespace and `*` markers (the
/// help tool's primary-keyword prefix) are stripped.
#[must_use]
pub fn normalize_keyword(token: &str) -> String {
    token.trim().trim_matches('*').trim().to_string()
}

/// Drop a leading `:`/`-`/dash separator left over after removing a keyword
/// from the front of a paragraph.
#[must_use]
pub fn strip_leading_separator(text: &str) -> &str {
    text.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, ':' | '-' | '\u{2013}' | '\u{2014}')
    })
}

/// Decode HTML character references.
///
/// The text goes through html5ever's tokenizer, which knows the full HTML5
/// named-reference table and its numeric-reference rules (`&#0;` becomes
/// U+FFFD). `<` is escaped first so the input can never open a tag.
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let escaped = text.replace('<', "&lt;");
    let fragment = Html::parse_fragment(&escaped);
    Cow::Owned(fragment.root_element().text().collect())
}
