use crate::parsing::text::Line;

use super::kinds::{CodeFence, Heading, ListItem};

/// Category of a single line, decided purely from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    CodeFence,
    Heading { level: u8 },
    UnorderedItem,
    OrderedItem { marker_len: usize },
    Text,
}

/// Classification of one line: the view plus its kind.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    pub line: Line<'a>,
    pub kind: LineKind,
}

impl<'a> LineClass<'a> {
    /// Item or heading text following the line's marker.
    ///
    /// Plain text and blank lines return the whole line; fences return it
    /// verbatim as well since their content is never inspected.
    pub fn body(&self) -> &'a str {
        let text = self.line.text;
        match self.kind {
            LineKind::Heading { level } => Heading::text(text, level),
            LineKind::UnorderedItem => &text[ListItem::BULLET.len()..],
            LineKind::OrderedItem { marker_len } => &text[marker_len..],
            LineKind::Blank | LineKind::CodeFence | LineKind::Text => text,
        }
    }
}

/// Classifies individual lines for the block assembler.
///
/// Stateless: the same text always yields the same class.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line, checking blank, fence, heading, unordered and
    /// ordered items in that order.
    pub fn classify<'a>(&self, line: Line<'a>) -> LineClass<'a> {
        LineClass {
            line,
            kind: classify_text(line.text),
        }
    }
}

pub fn classify_text(text: &str) -> LineKind {
    if is_blank(text) {
        return LineKind::Blank;
    }
    if is_code_fence(text) {
        return LineKind::CodeFence;
    }
    let level = heading_level(text);
    if level > 0 {
        return LineKind::Heading { level };
    }
    if is_unordered_item(text) {
        return LineKind::UnorderedItem;
    }
    if let Some(marker_len) = ListItem::ordered_marker_len(text) {
        return LineKind::OrderedItem { marker_len };
    }
    LineKind::Text
}

/// True iff every byte is a space or tab. The empty line is blank.
pub fn is_blank(text: &str) -> bool {
    text.bytes().all(|b| b == b' ' || b == b'\t')
}

pub fn is_code_fence(text: &str) -> bool {
    CodeFence::is_fence(text)
}

/// Heading level 1..=6, or 0 when the line is not a heading.
pub fn heading_level(text: &str) -> u8 {
    Heading::level(text)
}

pub fn is_unordered_item(text: &str) -> bool {
    ListItem::is_unordered(text)
}

pub fn is_ordered_item(text: &str) -> bool {
    ListItem::is_ordered(text)
}

/// Byte offset where list item text begins; 0 for lines that are not items.
pub fn list_item_offset(text: &str) -> usize {
    ListItem::text_offset(text).unwrap_or(0)
}
