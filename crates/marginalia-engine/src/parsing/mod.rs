pub mod blocks;
pub mod inline;
pub mod state;
pub mod text;

#[cfg(test)]
mod tests;

use blocks::{BlockAssembler, LineClassifier};
use text::lines;

pub use inline::format_inline;
pub use state::{BlockState, ParseState};

/// Renders a document body (front matter already stripped) as HTML blocks,
/// appending to `out`.
///
/// `state` belongs to the page being rendered: note ids keep counting from
/// wherever it stands, and it is left fully closed on return.
pub fn render_content(doc: &str, state: &mut ParseState, out: &mut String) {
    let classifier = LineClassifier;
    let mut assembler = BlockAssembler::new(state, out);

    for line in lines(doc) {
        let lc = classifier.classify(line);
        assembler.push(&lc);
    }

    assembler.finish();
}

/// Convenience: renders `doc` with a fresh [`ParseState`].
pub fn render_to_string(doc: &str) -> String {
    let mut state = ParseState::new();
    let mut out = String::with_capacity(doc.len() * 2);
    render_content(doc, &mut state, &mut out);
    out
}
