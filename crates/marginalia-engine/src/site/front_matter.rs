//! Front matter: `key: value` lines at the top of a page, ended by `---`.
//!
//! ```text
//! title: A quiet morning
//! date: 2024-03-05
//! ---
//! Body text starts here.
//! ```

pub const DELIMITER: &str = "---";

const TITLE_KEY: &str = "title:";
const DATE_KEY: &str = "date:";

/// Metadata split off the top of a page source, borrowing from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub title: Option<&'a str>,
    pub date: Option<&'a str>,
    /// Everything after the delimiter line.
    pub body: &'a str,
}

/// Splits `source` into front matter and body.
///
/// Lines up to the first line that is exactly `---` are metadata; unknown
/// keys are ignored and empty values count as absent. A source without a
/// delimiter line has no front matter: all of it is body.
pub fn split(source: &str) -> FrontMatter<'_> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut title = None;
    let mut date = None;
    let mut offset = 0;

    for raw in source.split_inclusive('\n') {
        offset += raw.len();
        let line = raw.trim_end_matches(['\n', '\r']);

        if line == DELIMITER {
            return FrontMatter {
                title,
                date,
                body: &source[offset..],
            };
        }
        if let Some(value) = line.strip_prefix(TITLE_KEY) {
            title = non_empty(value);
        } else if let Some(value) = line.strip_prefix(DATE_KEY) {
            date = non_empty(value);
        }
    }

    FrontMatter {
        title: None,
        date: None,
        body: source,
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_title_date_and_body() {
        let fm = split("title: Hello, world\ndate: 2024-03-05\n---\nBody\nmore\n");
        assert_eq!(
            fm,
            FrontMatter {
                title: Some("Hello, world"),
                date: Some("2024-03-05"),
                body: "Body\nmore\n",
            }
        );
    }

    #[test]
    fn values_are_trimmed_and_unknown_keys_ignored() {
        let fm = split("title:    Spaced   \ntags: a, b\ndate:\n---\n");
        assert_eq!(fm.title, Some("Spaced"));
        assert_eq!(fm.date, None);
        assert_eq!(fm.body, "");
    }

    #[test]
    fn crlf_sources() {
        let fm = split("title: Windows\r\n---\r\nBody\r\n");
        assert_eq!(fm.title, Some("Windows"));
        assert_eq!(fm.body, "Body\r\n");
    }

    #[test]
    fn delimiter_must_be_exact() {
        let fm = split("title: T\n----\n--- \nstill metadata\n---\nbody");
        assert_eq!(fm.title, Some("T"));
        assert_eq!(fm.body, "body");
    }

    #[test]
    fn no_delimiter_means_no_front_matter() {
        let src = "title: looks like metadata\nbut there is no delimiter";
        let fm = split(src);
        assert_eq!(fm.title, None);
        assert_eq!(fm.body, src);
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let fm = split("\u{feff}title: BOM\n---\nx");
        assert_eq!(fm.title, Some("BOM"));
        assert_eq!(fm.body, "x");
    }

    #[test]
    fn later_keys_win() {
        let fm = split("title: first\ntitle: second\n---\n");
        assert_eq!(fm.title, Some("second"));
    }
}
