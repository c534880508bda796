/// How a formula is laid out by the render capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Display math on its own line (`$$…$$`, `\[…\]`).
    Block,
    /// Math inside running text (`$…$`, `\(…\)`).
    Inline,
}

/// Formula delimiters.
pub struct Formula;

impl Formula {
    pub const DOUBLE_DOLLAR: &'static str = "$$";
    pub const BRACKET_OPEN: &'static str = r"\[";
    pub const BRACKET_CLOSE: &'static str = r"\]";
    pub const PAREN_OPEN: &'static str = r"\(";
    pub const PAREN_CLOSE: &'static str = r"\)";
    /// Single dollar. Only recognized when not adjacent to another `$`.
    pub const DOLLAR: &'static str = "$";
    /// Escapes the following character inside a formula.
    pub const ESCAPE: u8 = b'\\';
}
