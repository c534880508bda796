use crate::markup::{cloze_styles, scan};

use super::aggregate::{CardOptions, ClozeGroup, aggregate_with, revealed_view};

/// A card as a deck stores it: the masked front plus the fully revealed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub group: ClozeGroup,
    pub answer_view: String,
}

impl Card {
    pub fn front(&self) -> &str {
        &self.group.masked_view
    }

    pub fn back(&self) -> &str {
        &self.answer_view
    }
}

/// Builds one card per group key in `text`, sorted by key.
pub fn build_cards(text: &str, options: &CardOptions) -> Vec<Card> {
    let spans = scan(text, &cloze_styles());
    let answer_view = revealed_view(text, &spans);
    aggregate_with(text, &spans, options)
        .into_iter()
        .map(|group| Card {
            group,
            answer_view: answer_view.clone(),
        })
        .collect()
}
