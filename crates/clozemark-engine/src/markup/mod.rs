//! # Markup Scanning
//!
//! Cursor-based scanning of delimiter-pair markup embedded in free text.
//!
//! ## Architecture
//!
//! Each [`MarkerStyle`] is a recognizer: given the cursor it either matches
//! a complete delimited span or declines. The scanner tries the styles in
//! their configured order at every position and, after a match, jumps to the
//! end of that span. This keeps spans non-overlapping without running
//! independent whole-string replacements in sequence.
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges into the source text
//! - **`kinds`**: delimiter constants (`Cloze`, `Formula`) and `DisplayMode`
//! - **`style`**: `MarkerStyle` definitions and the built-in style tables
//! - **`cursor`**: `Cursor` for byte-wise scanning with look-behind
//! - **`scanner`**: `scan()` main entry point
//!
//! ## Precedence
//!
//! A doubled marker always belongs to the block form: `$$x$$` is one block
//! formula, never two adjacent inline opens.

pub mod cursor;
pub mod kinds;
pub mod scanner;
pub mod span;
pub mod style;

#[cfg(test)]
mod tests;

pub use kinds::DisplayMode;
pub use scanner::{ScannedSpan, SpanItem, SpanKind, scan};
pub use span::Span;
pub use style::{
    MarkerKind, MarkerStyle, block_formula_styles, block_formula_styles_without_dollars,
    cloze_styles, inline_formula_styles, inline_formula_styles_without_dollars,
};
