use relative_path::RelativePath;

use crate::site::date::format_date_abbr;

use super::{DEFAULT_STYLESHEET, escape_into, write_foot, write_head, write_header};

/// One row of the archive table.
#[derive(Debug, Clone, Copy)]
pub struct IndexEntry<'a> {
    pub title: &'a str,
    /// Link target relative to the site root, e.g. `posts/first.html`.
    pub href: &'a RelativePath,
    /// ISO date from front matter; rendered abbreviated, or empty if malformed.
    pub date: Option<&'a str>,
}

/// Renders the archive page listing one section's pages.
#[derive(Debug, Clone, Copy)]
pub struct IndexRenderer<'a> {
    pub title: &'a str,
    pub stylesheet: &'a str,
    pub site_name: Option<&'a str>,
}

impl Default for IndexRenderer<'_> {
    fn default() -> Self {
        Self {
            title: "Blog Posts",
            stylesheet: DEFAULT_STYLESHEET,
            site_name: None,
        }
    }
}

impl IndexRenderer<'_> {
    /// Renders entries in the order given.
    pub fn render(&self, entries: &[IndexEntry<'_>]) -> String {
        let mut out = String::with_capacity(self.stylesheet.len() + entries.len() * 160 + 512);

        write_head(&mut out, self.title, self.stylesheet);
        out.push_str("<body>\n");
        write_header(&mut out, self.site_name);
        out.push_str("  <h1>");
        escape_into(self.title, &mut out);
        out.push_str("</h1>\n");
        out.push_str("  <table class=\"archive\">\n");
        out.push_str("    <thead><tr><th>date</th><th>title</th></tr></thead>\n");
        out.push_str("    <tbody>\n");

        for entry in entries {
            let date = entry.date.and_then(format_date_abbr).unwrap_or_default();
            out.push_str("      <tr>\n");
            out.push_str("        <td class=\"date\">");
            out.push_str(&date);
            out.push_str("</td>\n");
            out.push_str("        <td class=\"title\"><a href=\"");
            html_escape::encode_double_quoted_attribute_to_string(entry.href.as_str(), &mut out);
            out.push_str("\">");
            escape_into(entry.title, &mut out);
            out.push_str("</a></td>\n");
            out.push_str("      </tr>\n");
        }

        out.push_str("    </tbody>\n");
        out.push_str("  </table>\n");
        write_foot(&mut out);
        out
    }
}
