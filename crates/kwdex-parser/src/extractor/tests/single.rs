use pretty_assertions::assert_eq;

use super::*;

#[test]
fn single_keyword_page() {
    let source = page(&kw("*DATE"), "<h3>PURPOSE:</h3><p>Sets the date.</p>");
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![("DATE", "Sets the date.")]
    );
}

#[test]
fn purpose_paragraphs_are_space_joined_and_normalized() {
    let source = page(
        &kw(" *TIME "),
        "<h3>PURPOSE:</h3>
         <p>Advances the\n simulation   to a <i>time</i>.</p>
         <p>Time is in&nbsp;days.</p>",
    );
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![("TIME", "Advances the simulation to a time. Time is in days.")]
    );
}

#[test]
fn heading_text_outside_span_is_ignored() {
    let source = page(
        &format!("Well Definition ({})", kw("*WELL")),
        "<h3>PURPOSE:</h3><p>Defines well.</p>",
    );
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![("WELL", "Defines well.")]
    );
}

#[test]
fn empty_purpose_still_yields_the_keyword() {
    let source = page(&kw("*DATE"), "<h3>PURPOSE:</h3><h3>FORMAT:</h3>");
    assert_eq!(pairs(&parse_and_extract(&source)), vec![("DATE", "")]);
}

#[test]
fn purpose_heading_level_does_not_matter() {
    let source = page(&kw("*DATE"), "<h2>PURPOSE:</h2><p>Sets the date.</p>");
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![("DATE", "Sets the date.")]
    );
}

#[test]
fn page_without_main_container_uses_body() {
    let source = format!(
        "<html><body><h1>{}</h1><h3>PURPOSE:</h3><p>Sets the date.</p></body></html>",
        kw("*DATE")
    );
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![("DATE", "Sets the date.")]
    );
}

#[test]
fn shape_is_single() {
    let source = page(&kw("*DATE"), "<h3>PURPOSE:</h3><p>Sets the date.</p>");
    assert!(matches!(
        shape_of(&source),
        DocumentShape::Single { ref keyword, .. } if keyword == "DATE"
    ));
}
