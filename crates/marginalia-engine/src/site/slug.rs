/// Turns a page title into a URL-safe file stem.
///
/// ASCII letters and digits are kept (lowercased); every run of anything else
/// becomes a single `-`. Leading and trailing dashes are dropped, so a title
/// with no ASCII alphanumerics yields an empty slug.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    // Start true to skip leading dashes
    let mut prev_was_dash = true;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            prev_was_dash = false;
        } else if !prev_was_dash {
            out.push('-');
            prev_was_dash = true;
        }
    }

    if out.ends_with('-') {
        out.pop();
    }
    out
}
