use pretty_assertions::assert_eq;

use super::*;

#[test]
fn array_paragraphs_define_their_own_keywords() {
    let source = page(
        &kw("*TIME"),
        &format!(
            "<h3>PURPOSE:</h3>
             <p>{} Step size.</p>
             <p>{} Time unit.</p>
             <h3>ARRAY:</h3>
             <p>Array description.</p>",
            kw("*STEP"),
            kw("*UNIT")
        ),
    );
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![("STEP", "Step size."), ("UNIT", "Time unit.")]
    );
}

#[test]
fn paragraphs_without_keyword_are_skipped() {
    let source = page(
        &kw("*PERMI"),
        &format!(
            "<h3>PURPOSE:</h3>
             <p>Assigns permeabilities to grid blocks.</p>
             <p>{}: permeability in the I direction.</p>
             <p>Values are in md.</p>
             <p>{} - permeability in the J direction.</p>
             <h3>ARRAY:</h3>",
            kw("*PERMI"),
            kw("*PERMJ")
        ),
    );
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![
            ("PERMI", "permeability in the I direction."),
            ("PERMJ", "permeability in the J direction."),
        ]
    );
}

#[test]
fn outer_keyword_is_not_emitted() {
    let source = page(
        &format!("{} {}", kw("*TIME"), kw("*DATE")),
        &format!("<h3>PURPOSE:</h3><p>{} Step size.</p><h3>ARRAY:</h3>", kw("*STEP")),
    );
    let candidates = parse_and_extract(&source);
    assert!(candidates.iter().all(|c| c.keyword != "TIME" && c.keyword != "DATE"));
    assert_eq!(candidates.len(), 1);
}

#[test]
fn paragraphs_nested_in_containers_are_found() {
    let source = page(
        &kw("*TIME"),
        &format!(
            "<h3>PURPOSE:</h3>
             <div class=\"indent\"><p>{} Step size.</p></div>
             <h3>ARRAY:</h3>",
            kw("*STEP")
        ),
    );
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![("STEP", "Step size.")]
    );
}

#[test]
fn paragraph_with_two_spans_uses_first_keyword() {
    let source = page(
        &kw("*TIME"),
        &format!(
            "<h3>PURPOSE:</h3><p>{} Same as {}.</p><h3>ARRAY:</h3>",
            kw("*STEP"),
            kw("*DTWELL")
        ),
    );
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![("STEP", "Same as *DTWELL.")]
    );
}

#[test]
fn array_without_keyword_paragraphs_yields_nothing() {
    let source = page(
        &kw("*TIME"),
        "<h3>PURPOSE:</h3><p>Plain text only.</p><h3>ARRAY:</h3>",
    );
    assert!(matches!(shape_of(&source), DocumentShape::Array { .. }));
    assert!(parse_and_extract(&source).is_empty());
}

#[test]
fn array_heading_before_purpose_does_not_count() {
    let source = page(
        &kw("*TIME"),
        &format!(
            "<h3>ARRAY:</h3><h3>PURPOSE:</h3><p>{} Step size.</p>",
            kw("*STEP")
        ),
    );
    assert_eq!(
        pairs(&parse_and_extract(&source)),
        vec![("TIME", "*STEP Step size.")]
    );
}
