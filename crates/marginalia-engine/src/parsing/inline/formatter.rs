use crate::html::escape::escape_into;
use crate::parsing::{state::ParseState, text::Span};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, NoteKind},
};

/// Formats a span of inline text as HTML, appending to `out`.
///
/// Markers are recognised in precedence order at each position: `**`, `__`
/// and `==` toggles, a backtick code span, a `^-[` margin note, a `^[`
/// sidenote. Anything else is literal text and gets HTML-escaped.
///
/// Malformed markup never fails: an unclosed code span or note leaves its
/// opener as literal text, and toggles still open at the end of `text` are
/// closed there. Note bodies are formatted recursively with the same `state`,
/// so note ids stay unique across nesting. Bodies nested deeper than
/// [`MAX_NOTE_DEPTH`] are formatted with note markers left as literal text.
pub fn format_inline(text: &str, state: &mut ParseState, out: &mut String) {
    format_at_depth(text, 0, state, out);
}

/// Deepest note nesting that still produces note widgets.
pub const MAX_NOTE_DEPTH: usize = 32;

fn format_at_depth(text: &str, depth: usize, state: &mut ParseState, out: &mut String) {
    let mut f = InlineFormatter {
        src: text,
        out,
        open: Vec::new(),
        depth,
    };
    f.run(state);
}

struct InlineFormatter<'a, 'o> {
    src: &'a str,
    out: &'o mut String,
    /// Toggles currently open, innermost last.
    open: Vec<Emphasis>,
    /// Number of note bodies enclosing `src`.
    depth: usize,
}

impl InlineFormatter<'_, '_> {
    fn run(&mut self, state: &mut ParseState) {
        let mut cur = Cursor::new(self.src);
        let mut text_start = cur.pos();

        while !cur.eof() {
            let start = cur.pos();

            if let Some(emphasis) = emphasis_at(&cur) {
                self.flush_text(text_start, start);
                self.toggle(emphasis);
                cur.bump_n(emphasis.delimiter().len());
                text_start = cur.pos();
                continue;
            }
            if let Some(inner) = try_parse_code_span(&mut cur) {
                self.flush_text(text_start, start);
                self.out.push_str("<code>");
                escape_into(inner.slice(self.src), self.out);
                self.out.push_str("</code>");
                text_start = cur.pos();
                continue;
            }
            if self.depth < MAX_NOTE_DEPTH
                && let Some((kind, body)) = try_parse_note(&mut cur)
            {
                self.flush_text(text_start, start);
                let id = state.next_note_id();
                kind.open_widget(id, self.out);
                format_at_depth(body.slice(self.src), self.depth + 1, state, self.out);
                kind.close_widget(self.out);
                text_start = cur.pos();
                continue;
            }
            cur.bump();
        }

        self.flush_text(text_start, cur.pos());
        while let Some(emphasis) = self.open.pop() {
            self.out.push_str(emphasis.close_tag());
        }
    }

    fn flush_text(&mut self, start: usize, end: usize) {
        if end > start {
            escape_into(&self.src[start..end], self.out);
        }
    }

    /// Opens `emphasis`, or closes it if already open.
    ///
    /// Closing a toggle that isn't innermost closes the toggles opened after
    /// it and reopens them afterwards, so the emitted tags always nest.
    fn toggle(&mut self, emphasis: Emphasis) {
        let Some(idx) = self.open.iter().position(|&e| e == emphasis) else {
            self.out.push_str(emphasis.open_tag());
            self.open.push(emphasis);
            return;
        };

        let inner = self.open.split_off(idx + 1);
        for e in inner.iter().rev() {
            self.out.push_str(e.close_tag());
        }
        self.out.push_str(emphasis.close_tag());
        self.open.pop();
        for e in &inner {
            self.out.push_str(e.open_tag());
        }
        self.open.extend(inner);
    }
}

fn emphasis_at(cur: &Cursor<'_>) -> Option<Emphasis> {
    Emphasis::ALL
        .into_iter()
        .find(|e| cur.starts_with(e.delimiter()))
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns the span of the content between the ticks. A tick directly
/// followed by another tick does not open a span, and a tick preceded by a
/// backslash does not close one. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(CodeSpan::TICK) || cur.peek_at(1) == Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();
    let mut prev = None;

    while let Some(b) = cur.peek() {
        if b == CodeSpan::TICK && prev != Some(CodeSpan::ESCAPE) {
            let inner = Span::new(inner_start, cur.pos());
            cur.bump(); // closing `
            return Some(inner);
        }
        prev = cur.bump();
    }

    *cur = saved;
    None
}

/// Attempts to parse a sidenote or margin note at the current position.
///
/// Brackets inside the body nest: depth starts at 1 after the opener and the
/// note ends where it returns to 0. Returns the note kind and the body span.
/// On failure, cursor position is restored.
fn try_parse_note(cur: &mut Cursor<'_>) -> Option<(NoteKind, Span)> {
    let kind = NoteKind::ALL
        .into_iter()
        .find(|k| cur.starts_with(k.opener()))?;

    let saved = cur.clone();
    cur.bump_n(kind.opener().len());
    let body_start = cur.pos();
    let mut depth = 1usize;

    while let Some(b) = cur.peek() {
        match b {
            NoteKind::OPEN_BRACKET => depth += 1,
            NoteKind::CLOSE_BRACKET => {
                depth -= 1;
                if depth == 0 {
                    let body = Span::new(body_start, cur.pos());
                    cur.bump(); // ]
                    return Some((kind, body));
                }
            }
            _ => {}
        }
        cur.bump();
    }

    *cur = saved;
    None
}
