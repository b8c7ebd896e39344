//! Fixture tests for the rendering core.
//!
//! Fixtures (`.txt`) live in `fixtures/`. Every fixture must render to well
//! formed HTML with balanced block and formatting tags, whatever its markup.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{ParseState, render_content, render_to_string};

fn fixture(name: &str) -> String {
    let dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{dir}/{name}.txt")).unwrap()
}

#[rstest]
#[case("prose")]
#[case("lists")]
#[case("code")]
#[case("notes")]
#[case("sections")]
#[case("malformed")]
fn fixture_renders_well_formed(#[case] name: &str) {
    let src = fixture(name);
    let mut state = ParseState::new();
    let mut html = String::new();
    render_content(&src, &mut state, &mut html);

    invariants::check(&html);
    assert!(state.is_closed(), "{name}: state left open: {state:?}");
    for tag in ["p", "ul", "ol", "li", "section", "strong", "em", "mark", "code"] {
        let (open, close) = invariants::tag_counts(&html, tag);
        assert_eq!(open, close, "{name}: unbalanced <{tag}>");
    }
}

#[test]
fn fixture_notes_ids_are_unique_and_increasing() {
    let html = render_to_string(&fixture("notes"));
    let ids: Vec<u32> = html
        .match_indices("<input type=\"checkbox\" id=\"")
        .map(|(i, m)| {
            let rest = &html[i + m.len() + 3..];
            rest[..rest.find('"').unwrap()].parse().unwrap()
        })
        .collect();
    assert!(!ids.is_empty());
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids not increasing: {ids:?}");
}

#[test]
fn fixture_malformed_degrades_to_text() {
    let html = render_to_string(&fixture("malformed"));
    assert!(html.contains("####### not a heading"));
    assert!(html.contains("^[never closed"));
    assert!(html.contains("`dangling tick"));
}

/// Text without delimiters comes back verbatim in one paragraph.
#[test]
fn undelimited_text_is_one_paragraph() {
    let src = "The quick brown fox\njumps over the lazy dog; 3 < 4 & 5 > 2.";
    assert_eq!(
        render_to_string(src),
        "<p>The quick brown fox jumps over the lazy dog; 3 &lt; 4 &amp; 5 &gt; 2.</p>\n"
    );
}

#[test]
fn escapes_paragraph_text() {
    assert_eq!(render_to_string("a<b>&c"), "<p>a&lt;b&gt;&amp;c</p>\n");
}

#[test]
fn nested_sidenote_contains_inner_note() {
    let mut state = ParseState::new();
    let mut html = String::new();
    render_content("text^[inner ^[nested] note]", &mut state, &mut html);

    assert_eq!(state.notes_allocated(), 2);
    let outer_body = html.find("<span class=\"sidenote\">inner ").unwrap();
    let inner_id = html.find("id=\"sn-2\"").unwrap();
    assert!(inner_id > outer_body);
    invariants::check(&html);
}

#[test]
fn page_render_snapshot() {
    let src = "Opening line\nwith **bold** text.\n\n## Part one\n- first\n- second ==hi==\n\n```\n<tag>\n```\n";
    insta::assert_snapshot!(render_to_string(src), @r"
    <p>Opening line with <strong>bold</strong> text.</p>
    <section>
    <h2>Part one</h2>
    <ul><li>first</li><li>second <mark>hi</mark></li></ul>
    <pre><code>&lt;tag&gt;</code></pre>
    </section>
    ");
}
