use pretty_assertions::assert_eq;

use super::*;

mod array;
mod single;

fn parse_and_extract(source: &str) -> Vec<KeywordCandidate> {
    let document = Document::parse(source);
    extract(&document)
}

fn shape_of(source: &str) -> DocumentShape {
    classify(&Document::parse(source))
}

/// A page laid out the way the help tool emits it.
fn page(heading: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Keyword</title>
    <link href="../Skins/Default/Stylesheets/Styles.css" rel="stylesheet" />
  </head>
  <body>
    <div class="nocontent">
      <p>Navigation breadcrumbs</p>
    </div>
    <div role="main" id="mc-main-content">
      <h1>{heading}</h1>
      {body}
    </div>
  </body>
</html>"#
    )
}

fn kw(token: &str) -> String {
    format!(r#"<span class="keyword">{token}</span>"#)
}

fn pairs(candidates: &[KeywordCandidate]) -> Vec<(&str, &str)> {
    candidates
        .iter()
        .map(|c| (c.keyword.as_str(), c.description.as_str()))
        .collect()
}

#[test]
fn extraction_is_idempotent() {
    let source = page(
        &format!("{} {}", kw("*WELL"), kw("*PERF")),
        "<h3>PURPOSE:</h3><p>Defines well.</p><p>Defines perforation.</p>",
    );
    let document = Document::parse(&source);
    assert_eq!(extract(&document), extract(&document));
}

#[test]
fn extract_with_shape_reports_label() {
    let source = page(&kw("*DATE"), "<h3>PURPOSE:</h3><p>Sets the date.</p>");
    let (shape, candidates) = extract_with_shape(&Document::parse(&source));
    assert_eq!(shape.label(), "single");
    assert!(shape.is_match());
    assert_eq!(candidates.len(), 1);
}
