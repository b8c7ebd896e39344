/// Validates that rendered HTML is well formed.
///
/// Asserts that:
/// - Every start tag has a matching end tag, properly nested
/// - No end tag appears without an open start tag
/// - Nothing is left open at the end
///
/// Self-closing tags (`<input ... />`) and character entities are ignored.
/// Text never contains a raw `<` because the renderer escapes it.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(html: &str) {
    let mut stack: Vec<&str> = Vec::new();
    let mut rest = html;

    while let Some(lt) = rest.find('<') {
        let after = &rest[lt + 1..];
        let gt = after
            .find('>')
            .unwrap_or_else(|| panic!("unterminated tag near {:?}", &rest[lt..]));
        let tag = &after[..gt];
        rest = &after[gt + 1..];

        if tag.ends_with('/') || tag.starts_with('!') {
            continue;
        }
        if let Some(name) = tag.strip_prefix('/') {
            let open = stack
                .pop()
                .unwrap_or_else(|| panic!("</{name}> closes nothing in {html:?}"));
            assert_eq!(open, name, "</{name}> closes <{open}> in {html:?}");
        } else {
            let name = tag.split_whitespace().next().unwrap_or(tag);
            stack.push(name);
        }
    }

    assert!(stack.is_empty(), "left open: {stack:?} in {html:?}");
}

/// Counts start and end tags named `name`.
pub fn tag_counts(html: &str, name: &str) -> (usize, usize) {
    let open = html.matches(&format!("<{name}>")).count()
        + html.matches(&format!("<{name} ")).count();
    let close = html.matches(&format!("</{name}>")).count();
    (open, close)
}

#[test]
fn checker_accepts_nested_markup() {
    check("<p><strong>a <em>b</em></strong><input type=\"checkbox\"/></p>\n");
}

#[test]
#[should_panic(expected = "closes <strong>")]
fn checker_rejects_crossed_markup() {
    check("<strong><em>a</strong></em>");
}

#[test]
#[should_panic(expected = "left open")]
fn checker_rejects_dangling_markup() {
    check("<section><p>a</p>");
}
