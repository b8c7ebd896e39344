/// ATX-style heading type with owned delimiter constants.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level (1..=6) of `line`, or 0 if it isn't a heading.
    ///
    /// The `#` run must be followed directly by a space. A seventh `#` makes
    /// the whole line ordinary text.
    pub fn level(line: &str) -> u8 {
        let b = line.as_bytes();
        let run = b.iter().take_while(|&&c| c == Self::MARKER).count();
        if run == 0 || run > usize::from(Self::MAX_LEVEL) {
            return 0;
        }
        if b.get(run) != Some(&b' ') {
            return 0;
        }
        run as u8
    }

    /// Returns the heading text with the marker run removed and surrounding
    /// whitespace trimmed. `level` must come from [`Heading::level`].
    pub fn text(line: &str, level: u8) -> &str {
        line[usize::from(level) + 1..].trim()
    }
}
