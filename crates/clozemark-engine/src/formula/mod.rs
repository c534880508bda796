//! # Formula Substitution
//!
//! Replaces delimited formulas with the output of a [`RenderFormula`]
//! capability. Block forms are resolved over the whole string first; the
//! inline pass then runs on that result, so it never matches inside block
//! output and a block can never be split by an unresolved inline marker.
//!
//! Render failures, including panics inside the renderer, become an escaped
//! error marker for that span only.

pub mod mathml;
pub mod render;
pub mod substitute;

pub use mathml::MathmlRenderer;
pub use render::{RenderError, RenderFormula};
pub use substitute::{FormulaOptions, error_marker, substitute, substitute_with};

pub use crate::markup::DisplayMode;
