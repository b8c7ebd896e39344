use crate::html::escape::escape_into;
use crate::parsing::{
    inline::format_inline,
    state::{BlockState, ParseState},
};

use super::{
    classify::{LineClass, LineKind},
    kinds::Paragraph,
};

/// Leaf content being collected in the scratch buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf {
    None,
    /// Plain lines joined with single spaces.
    Paragraph,
    /// Raw lines of a fenced block joined with newlines.
    Fence { lines: usize },
}

/// Line-driven state machine that turns classified lines into HTML blocks.
///
/// Paragraph text and fenced code accumulate in a scratch buffer until a line
/// ends them; everything else is emitted as soon as its line arrives. The
/// buffer grows as needed, so no content is ever truncated.
pub struct BlockAssembler<'s, 'o> {
    state: &'s mut ParseState,
    out: &'o mut String,
    leaf: Leaf,
    scratch: String,
}

impl<'s, 'o> BlockAssembler<'s, 'o> {
    pub fn new(state: &'s mut ParseState, out: &'o mut String) -> Self {
        Self {
            state,
            out,
            leaf: Leaf::None,
            scratch: String::new(),
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.state.block == BlockState::Code {
            self.consume_fence_line(c);
            return;
        }

        if c.kind == LineKind::Text {
            self.close_list();
            self.extend_paragraph(c.line.text);
            return;
        }

        self.flush_paragraph();
        self.close_paragraph();

        match c.kind {
            LineKind::Blank => self.close_list(),
            LineKind::CodeFence => {
                self.close_list();
                self.state.block = BlockState::Code;
                self.leaf = Leaf::Fence { lines: 0 };
            }
            LineKind::Heading { level } => {
                self.close_list();
                if level == 2 {
                    self.close_section();
                    self.open_section();
                }
                self.out.push_str(&format!("<h{level}>"));
                format_inline(c.body(), self.state, self.out);
                self.out.push_str(&format!("</h{level}>\n"));
            }
            LineKind::UnorderedItem => self.list_item(BlockState::UnorderedList, c.body()),
            LineKind::OrderedItem { .. } => self.list_item(BlockState::OrderedList, c.body()),
            LineKind::Text => {}
        }
    }

    /// Closes everything still open: paragraph, then list or fence, then section.
    pub fn finish(mut self) {
        // EOF flush
        self.flush_paragraph();
        self.close_paragraph();
        self.flush_fence();
        self.close_list();
        self.close_section();
    }

    fn extend_paragraph(&mut self, text: &str) {
        if self.leaf == Leaf::Paragraph {
            self.scratch.push(Paragraph::LINE_JOIN);
        } else {
            self.scratch.clear();
            self.leaf = Leaf::Paragraph;
        }
        self.scratch.push_str(text);
    }

    /// Emits collected paragraph text, opening `<p>` if needed.
    ///
    /// The paragraph stays open until the next line (or the end of input)
    /// closes it.
    fn flush_paragraph(&mut self) {
        if self.leaf != Leaf::Paragraph {
            return;
        }
        self.leaf = Leaf::None;
        if self.scratch.is_empty() {
            return;
        }
        if !self.state.in_paragraph {
            self.out.push_str("<p>");
            self.state.in_paragraph = true;
        }
        format_inline(&self.scratch, self.state, self.out);
        self.scratch.clear();
    }

    fn close_paragraph(&mut self) {
        if self.state.in_paragraph {
            self.out.push_str("</p>\n");
            self.state.in_paragraph = false;
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        if c.kind == LineKind::CodeFence {
            self.flush_fence();
            return;
        }
        if let Leaf::Fence { lines } = self.leaf {
            if lines > 0 {
                self.scratch.push('\n');
            }
            self.scratch.push_str(c.line.text);
            self.leaf = Leaf::Fence { lines: lines + 1 };
        }
    }

    /// Emits the collected fence body. Unterminated fences end up here at EOF.
    fn flush_fence(&mut self) {
        if !matches!(self.leaf, Leaf::Fence { .. }) {
            return;
        }
        self.out.push_str("<pre><code>");
        escape_into(&self.scratch, self.out);
        self.out.push_str("</code></pre>\n");
        self.scratch.clear();
        self.leaf = Leaf::None;
        self.state.block = BlockState::None;
    }

    fn list_item(&mut self, kind: BlockState, body: &str) {
        if self.state.block != kind {
            self.close_list();
            self.out.push_str(list_tags(kind).0);
            self.state.block = kind;
        }
        self.out.push_str("<li>");
        format_inline(body, self.state, self.out);
        self.out.push_str("</li>");
    }

    fn close_list(&mut self) {
        if self.state.block.is_list() {
            self.out.push_str(list_tags(self.state.block).1);
            self.out.push('\n');
        }
        if self.state.block != BlockState::Code {
            self.state.block = BlockState::None;
        }
    }

    fn open_section(&mut self) {
        self.out.push_str("<section>\n");
        self.state.in_section = true;
    }

    fn close_section(&mut self) {
        if self.state.in_section {
            self.out.push_str("</section>\n");
            self.state.in_section = false;
        }
    }
}

fn list_tags(kind: BlockState) -> (&'static str, &'static str) {
    match kind {
        BlockState::OrderedList => ("<ol>", "</ol>"),
        _ => ("<ul>", "</ul>"),
    }
}
