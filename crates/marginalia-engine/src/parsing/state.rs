/// Which multi-line block construct the assembler is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    None,
    Code,
    UnorderedList,
    OrderedList,
}

impl BlockState {
    /// Returns true for either list kind.
    pub fn is_list(self) -> bool {
        matches!(self, BlockState::UnorderedList | BlockState::OrderedList)
    }
}

/// Mutable state carried across lines while one page renders.
///
/// Owned by a single render call and threaded through block assembly and
/// inline formatting as `&mut ParseState`; pages never share one.
#[derive(Debug, Default)]
pub struct ParseState {
    pub in_section: bool,
    pub in_paragraph: bool,
    pub block: BlockState,
    note_counter: u32,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next note id. Ids start at 1 and are never reused.
    pub fn next_note_id(&mut self) -> u32 {
        self.note_counter += 1;
        self.note_counter
    }

    /// Number of note ids handed out so far.
    pub fn notes_allocated(&self) -> u32 {
        self.note_counter
    }

    /// True when no paragraph, list, code block or section is open.
    pub fn is_closed(&self) -> bool {
        !self.in_section && !self.in_paragraph && self.block == BlockState::None
    }
}
