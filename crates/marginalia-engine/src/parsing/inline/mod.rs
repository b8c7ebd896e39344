//! # Inline Formatting
//!
//! Cursor-based, single-pass inline formatting that writes HTML directly.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned delimiters (CodeSpan, Emphasis, NoteKind)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`formatter`**: `format_inline()` entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans suppress everything inside them: `` `**x**` `` renders the
//! asterisks literally. Note bodies are not raw zones; they are formatted
//! recursively.

pub mod cursor;
pub mod formatter;
pub mod kinds;

pub use formatter::format_inline;
