use super::span::Span;

/// A view of a single line of the document.
///
/// The span covers the line content only: neither the terminating `\n` nor a
/// `\r` preceding it are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Byte span of the line content in the document.
    pub span: Span,
    /// The line content, borrowed from the document.
    pub text: &'a str,
}

/// Lazy iterator over the lines of a document.
///
/// Finite and not restartable: once a line is yielded the iterator has moved
/// past it. A trailing newline does not produce an extra empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    doc: &'a str,
    offset: usize,
}

impl<'a> Lines<'a> {
    pub fn new(doc: &'a str) -> Self {
        Self { doc, offset: 0 }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.doc.len() {
            return None;
        }

        let start = self.offset;
        let rest = &self.doc[start..];
        let (raw_len, consumed) = match rest.find('\n') {
            Some(nl) => (nl, nl + 1),
            None => (rest.len(), rest.len()),
        };
        self.offset += consumed;

        let text = rest[..raw_len].strip_suffix('\r').unwrap_or(&rest[..raw_len]);
        Some(Line {
            span: Span::new(start, start + text.len()),
            text,
        })
    }
}

/// Returns the lines of `doc` as a lazy sequence of [`Line`] views.
pub fn lines(doc: &str) -> Lines<'_> {
    Lines::new(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(doc: &str) -> Vec<&str> {
        lines(doc).map(|l| l.text).collect()
    }

    #[test]
    fn empty_document_has_no_lines() {
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn splits_on_newline() {
        assert_eq!(texts("a\nbb\n\nccc"), vec!["a", "bb", "", "ccc"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(texts("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn carriage_returns_are_stripped() {
        assert_eq!(texts("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn spans_point_into_document() {
        let doc = "one\r\ntwo\nthree";
        for line in lines(doc) {
            assert_eq!(line.span.slice(doc), line.text);
        }
        let spans: Vec<Span> = lines(doc).map(|l| l.span).collect();
        assert_eq!(
            spans,
            vec![Span::new(0, 3), Span::new(5, 8), Span::new(9, 14)]
        );
    }

    #[test]
    fn consumed_lines_are_not_replayed() {
        let mut it = lines("a\nb");
        assert_eq!(it.next().map(|l| l.text), Some("a"));
        assert_eq!(it.next().map(|l| l.text), Some("b"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
