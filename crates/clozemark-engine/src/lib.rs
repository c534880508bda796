//! Markup engine behind clozemark.
//!
//! Two pipelines share one scanner:
//!
//! - **cards**: `{{c<N>::payload}}` annotations are grouped by key into cards,
//!   each with a masked view of the source text.
//! - **formula**: `$$…$$`, `\[…\]`, `\(…\)` and `$…$` spans are replaced by
//!   the output of a render capability.
//!
//! Every operation is a pure function of its input string.

pub mod cards;
pub mod escape;
pub mod formula;
pub mod markup;

// Re-export key types for easier usage
pub use cards::*;
pub use escape::escape_html;
pub use formula::{
    DisplayMode, FormulaOptions, MathmlRenderer, RenderError, RenderFormula, substitute,
    substitute_with,
};
pub use markup::{ScannedSpan, Span, SpanKind, scan};
