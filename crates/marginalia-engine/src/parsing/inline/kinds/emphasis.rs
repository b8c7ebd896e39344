/// Paired formatting toggles: the same delimiter opens and closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Highlight,
}

impl Emphasis {
    /// Precedence order used when scanning.
    pub const ALL: [Emphasis; 3] = [Emphasis::Bold, Emphasis::Italic, Emphasis::Highlight];

    pub fn delimiter(self) -> &'static [u8; 2] {
        match self {
            Emphasis::Bold => b"**",
            Emphasis::Italic => b"__",
            Emphasis::Highlight => b"==",
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "<strong>",
            Emphasis::Italic => "<em>",
            Emphasis::Highlight => "<mark>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "</strong>",
            Emphasis::Italic => "</em>",
            Emphasis::Highlight => "</mark>",
        }
    }
}
