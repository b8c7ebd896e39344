/// Fenced code block type with owned delimiter constant.
///
/// Fences open and close on a line starting with three backticks. Anything
/// after the backticks (such as a language tag) is ignored.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if `line` opens or closes a fence.
    pub fn is_fence(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }
}
