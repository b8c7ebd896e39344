use std::io::{self, Write};

use crate::parsing::{ParseState, render_content};
use crate::site::date::format_date_full;

use super::{DEFAULT_STYLESHEET, escape_into, write_foot, write_head, write_header};

/// Renders complete HTML documents for individual pages.
///
/// Holds only borrowed, read-only settings, so one renderer can be shared by
/// every page of a build. All per-page mutable state lives inside
/// [`PageRenderer::render`].
#[derive(Debug, Clone, Copy)]
pub struct PageRenderer<'a> {
    /// CSS embedded verbatim in the document head.
    pub stylesheet: &'a str,
    /// Shown as a link home above the article when set.
    pub site_name: Option<&'a str>,
}

impl Default for PageRenderer<'_> {
    fn default() -> Self {
        Self {
            stylesheet: DEFAULT_STYLESHEET,
            site_name: None,
        }
    }
}

impl PageRenderer<'_> {
    /// Renders a page from its title, optional ISO date and content body.
    ///
    /// A dateline is emitted only when `date` is present and formats; a
    /// malformed date is silently left out (callers decide whether to warn).
    pub fn render(&self, title: &str, date: Option<&str>, content: &str) -> String {
        let mut out = String::with_capacity(self.stylesheet.len() + content.len() * 2 + 512);

        write_head(&mut out, title, self.stylesheet);
        out.push_str("<body>\n");
        write_header(&mut out, self.site_name);
        out.push_str("  <article>\n");
        out.push_str("    <h1>");
        escape_into(title, &mut out);
        out.push_str("</h1>\n");

        if let Some((iso, display)) = date.and_then(|d| format_date_full(d).map(|f| (d, f))) {
            out.push_str("    <p class=\"dateline\"><time datetime=\"");
            html_escape::encode_double_quoted_attribute_to_string(iso.trim(), &mut out);
            out.push_str("\">");
            out.push_str(&display);
            out.push_str("</time></p>\n");
        }

        out.push_str("    <div class=\"content\">\n");
        let mut state = ParseState::new();
        render_content(content, &mut state, &mut out);
        out.push_str("    </div>\n");
        out.push_str("  </article>\n");
        write_foot(&mut out);
        out
    }

    /// Renders a page and writes it to `sink`.
    pub fn write_to<W: Write>(
        &self,
        sink: &mut W,
        title: &str,
        date: Option<&str>,
        content: &str,
    ) -> io::Result<()> {
        sink.write_all(self.render(title, date, content).as_bytes())
    }
}
