use std::collections::BTreeSet;

use crate::markup::{SpanItem, cloze_styles, scan};

/// Group keys used by the annotations in `text`.
pub fn group_keys(text: &str) -> BTreeSet<u32> {
    scan(text, &cloze_styles())
        .into_iter()
        .filter_map(|span| match span.item {
            SpanItem::Annotation { key, .. } => Some(key),
            SpanItem::Formula { .. } => None,
        })
        .collect()
}

/// Proposes the key for a newly inserted annotation: one past the highest
/// existing key, or 1 when there are none.
///
/// Gaps are not reused. Saturates at `u32::MAX`.
pub fn next_group_key<I>(existing: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    existing
        .into_iter()
        .max()
        .map_or(1, |max| max.saturating_add(1))
}
