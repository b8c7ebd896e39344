//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The formatter asks these
//! types for delimiters and markup; it never hardcodes `**` or `^[` itself.
//!
//! - **`CodeSpan`**: backtick raw zone
//! - **`Emphasis`**: `**` bold, `__` italic, `==` highlight toggles
//! - **`NoteKind`**: `^[...]` sidenotes and `^-[...]` margin notes

pub mod code_span;
pub mod emphasis;
pub mod note;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use note::NoteKind;
