//! # HTML Output
//!
//! - **`escape`**: text escaping shared by every renderer
//! - **`page`**: full document for one page around the rendered blocks
//! - **`index`**: archive page listing the pages of one section

pub mod escape;
pub mod index;
pub mod page;

pub use escape::{escape, escape_into};
pub use index::{IndexEntry, IndexRenderer};
pub use page::PageRenderer;

/// Stylesheet embedded in every page unless the site supplies its own.
pub const DEFAULT_STYLESHEET: &str = include_str!("styles.css");

/// Appends the doctype, `<html>` and the whole `<head>` element.
pub(crate) fn write_head(out: &mut String, title: &str, stylesheet: &str) {
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("  <link rel=\"icon\" type=\"image/svg+xml\" href=\"/favicon.svg\" />\n");
    out.push_str("  <title>");
    escape_into(title, out);
    out.push_str("</title>\n");
    out.push_str("  <style>\n");
    out.push_str(stylesheet.trim_end());
    out.push_str("\n</style>\n");
    out.push_str("</head>\n");
}

/// Appends the site header with a link home, when a site name is set.
pub(crate) fn write_header(out: &mut String, site_name: Option<&str>) {
    let Some(name) = site_name else {
        return;
    };
    out.push_str("<header>\n");
    out.push_str("  <nav>\n");
    out.push_str("    <a href=\"/\">");
    escape_into(name, out);
    out.push_str("</a>\n");
    out.push_str("  </nav>\n");
    out.push_str("</header>\n");
}

pub(crate) fn write_foot(out: &mut String) {
    out.push_str("</body>\n");
    out.push_str("</html>\n");
}
