/// Code span inline type with owned delimiter constants.
///
/// Code spans are raw zones: their content is escaped but never formatted.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
    /// A tick preceded by this byte does not close a code span.
    pub const ESCAPE: u8 = b'\\';
}
