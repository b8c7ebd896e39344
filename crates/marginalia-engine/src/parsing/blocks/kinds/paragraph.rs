/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the default when no other line
/// kind matches. Consecutive plain lines join into one paragraph.
pub struct Paragraph;

impl Paragraph {
    /// Inserted between the lines of a paragraph when they are joined.
    pub const LINE_JOIN: char = ' ';
}
