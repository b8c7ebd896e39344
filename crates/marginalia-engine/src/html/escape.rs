//! HTML text escaping.
//!
//! Only `<`, `>` and `&` are substituted. Everything the escaper emits ends up
//! in element content, never inside attribute values, so quotes pass through.

/// Appends `text` to `out` with `<`, `>` and `&` replaced by entities.
pub fn escape_into(text: &str, out: &mut String) {
    html_escape::encode_text_to_string(text, out);
}

/// Returns `text` with `<`, `>` and `&` replaced by entities.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}
