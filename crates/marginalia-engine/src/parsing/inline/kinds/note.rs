/// Sidenote and margin note widgets.
///
/// Both render as a label + checkbox + span triple so the note can be
/// toggled on narrow screens. Sidenotes show a number, margin notes a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Sidenote,
    MarginNote,
}

impl NoteKind {
    pub const OPEN_BRACKET: u8 = b'[';
    pub const CLOSE_BRACKET: u8 = b']';

    /// Margin notes first: `^-[` would otherwise never be seen.
    pub const ALL: [NoteKind; 2] = [NoteKind::MarginNote, NoteKind::Sidenote];

    pub fn opener(self) -> &'static [u8] {
        match self {
            NoteKind::Sidenote => b"^[",
            NoteKind::MarginNote => b"^-[",
        }
    }

    fn id_prefix(self) -> &'static str {
        match self {
            NoteKind::Sidenote => "sn",
            NoteKind::MarginNote => "mn",
        }
    }

    /// Appends the label, checkbox and opening `<span>` for note `id`.
    pub fn open_widget(self, id: u32, out: &mut String) {
        let anchor = format!("{}-{id}", self.id_prefix());
        let (label_class, label_text, span_class) = match self {
            NoteKind::Sidenote => ("margin-toggle sidenote-number", "", "sidenote"),
            NoteKind::MarginNote => ("margin-toggle", "&#8853;", "marginnote"),
        };
        out.push_str(&format!(
            "<label for=\"{anchor}\" class=\"{label_class}\">{label_text}</label>\
             <input type=\"checkbox\" id=\"{anchor}\" class=\"margin-toggle\"/>\
             <span class=\"{span_class}\">"
        ));
    }

    pub fn close_widget(self, out: &mut String) {
        out.push_str("</span>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidenote_widget() {
        let mut out = String::new();
        NoteKind::Sidenote.open_widget(3, &mut out);
        NoteKind::Sidenote.close_widget(&mut out);
        assert_eq!(
            out,
            "<label for=\"sn-3\" class=\"margin-toggle sidenote-number\"></label>\
             <input type=\"checkbox\" id=\"sn-3\" class=\"margin-toggle\"/>\
             <span class=\"sidenote\"></span>"
        );
    }

    #[test]
    fn margin_note_widget() {
        let mut out = String::new();
        NoteKind::MarginNote.open_widget(1, &mut out);
        assert!(out.starts_with("<label for=\"mn-1\" class=\"margin-toggle\">&#8853;</label>"));
        assert!(out.ends_with("<span class=\"marginnote\">"));
    }
}
