pub mod lines;
pub mod span;

pub use lines::{Line, Lines, lines};
pub use span::Span;
