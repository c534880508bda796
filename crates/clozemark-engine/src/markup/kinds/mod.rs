//! # Markup Kinds
//!
//! Types that own the delimiters of each markup construct.
//!
//! ## Types
//!
//! - **`Cloze`**: `OPEN = b"{{"`, `CLOSE = b"}}"`, interior `c<N>::<payload>`
//! - **`Formula`**: `$$`, `\[ \]` (block) and `\( \)`, `$` (inline)
//!
//! The scanner and the style tables read these constants; nothing else
//! hardcodes `{{` or `$$`.

pub mod cloze;
pub mod formula;

pub use cloze::Cloze;
pub use formula::{DisplayMode, Formula};
