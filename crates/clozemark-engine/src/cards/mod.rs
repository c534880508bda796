//! # Cloze Cards
//!
//! Turns scanned annotations into cards: one per group key, each with a
//! masked view of the source text and a summary of what it hides.
//!
//! ## Modules
//!
//! - **`aggregate`**: `ClozeGroup`, `aggregate()` and the masked/revealed views
//! - **`deck`**: `Card` and `build_cards()` for hosts that store both sides
//! - **`ids`**: group key discovery and `next_group_key()`
//! - **`edit`**: `wrap_selection()` for inserting a new annotation

pub mod aggregate;
pub mod deck;
pub mod edit;
pub mod ids;

pub use aggregate::{
    CardOptions, ClozeGroup, DEFAULT_PLACEHOLDER, aggregate, aggregate_with, extract_groups,
    revealed_view,
};
pub use deck::{Card, build_cards};
pub use edit::{EditError, wrap_selection};
pub use ids::{group_keys, next_group_key};
