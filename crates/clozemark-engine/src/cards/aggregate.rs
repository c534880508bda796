use std::collections::BTreeMap;

use crate::markup::{ScannedSpan, SpanItem, cloze_styles, scan};

/// Placeholder that replaces hidden payloads in a masked view.
pub const DEFAULT_PLACEHOLDER: &str = "[...]";

/// One derived card: every annotation sharing a group key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClozeGroup {
    pub group_key: u32,
    /// Payloads of this group in order of appearance.
    pub payloads: Vec<String>,
    /// Payloads joined with the summary separator.
    pub rendered_summary: String,
    /// Source text with this group hidden and every other group resolved.
    pub masked_view: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardOptions {
    pub placeholder: String,
    pub summary_separator: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            summary_separator: ", ".to_string(),
        }
    }
}

/// Scans `text` for cloze annotations and aggregates them with the default
/// options.
pub fn extract_groups(text: &str) -> Vec<ClozeGroup> {
    aggregate(text, &scan(text, &cloze_styles()))
}

/// Groups annotation spans by key, sorted ascending by key.
pub fn aggregate(text: &str, spans: &[ScannedSpan]) -> Vec<ClozeGroup> {
    aggregate_with(text, spans, &CardOptions::default())
}

/// Groups annotation spans by key, sorted ascending by key.
///
/// `spans` must come from scanning `text`. Non-annotation spans are ignored
/// and their text is left as is in every view.
pub fn aggregate_with(
    text: &str,
    spans: &[ScannedSpan],
    options: &CardOptions,
) -> Vec<ClozeGroup> {
    let mut by_key: BTreeMap<u32, Vec<String>> = BTreeMap::new();
    for span in spans {
        if let SpanItem::Annotation { key, .. } = span.item {
            by_key
                .entry(key)
                .or_default()
                .push(span.payload(text).to_string());
        }
    }

    by_key
        .into_iter()
        .map(|(group_key, payloads)| ClozeGroup {
            group_key,
            rendered_summary: payloads.join(&options.summary_separator),
            masked_view: resolve(text, spans, Some(group_key), &options.placeholder),
            payloads,
        })
        .collect()
}

/// Source text with every annotation resolved to its payload.
pub fn revealed_view(text: &str, spans: &[ScannedSpan]) -> String {
    resolve(text, spans, None, "")
}

/// Rebuilds `text` in one pass over `spans`: annotations of `hidden` become
/// `placeholder`, other annotations become their payload.
fn resolve(text: &str, spans: &[ScannedSpan], hidden: Option<u32>, placeholder: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        let SpanItem::Annotation { key, .. } = span.item else {
            continue;
        };
        out.push_str(&text[last..span.full.start]);
        if Some(key) == hidden {
            out.push_str(placeholder);
        } else {
            out.push_str(span.payload(text));
        }
        last = span.full.end;
    }
    out.push_str(&text[last..]);
    out
}
