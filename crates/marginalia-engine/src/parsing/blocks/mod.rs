//! # Block Assembly
//!
//! Two-phase block handling over a lazy sequence of lines.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line gets a `LineKind` from
//!    its prefix alone (blank, fence, heading, list item, text)
//!
//! 2. **Block Assembly** (`builder`): a `BlockAssembler` walks the classified
//!    lines, opens and closes paragraphs, lists, code blocks and sections,
//!    and hands inline text to the inline formatter
//!
//! ## Modules
//!
//! - **`kinds`**: Block types with owned delimiters (CodeFence, Heading, ListItem, Paragraph)
//! - **`classify`**: `LineClassifier` and the per-line predicates
//! - **`builder`**: `BlockAssembler` state machine
//!
//! ## Key Invariants
//!
//! - Every block opened is closed before a block of another kind opens
//! - Nothing is left open at end of input
//! - Fenced code is a raw zone: no block or inline parsing inside

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockAssembler;
pub use classify::{LineClass, LineClassifier, LineKind};
