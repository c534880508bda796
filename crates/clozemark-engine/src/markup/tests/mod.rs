//! Property tests for the scanner.


use proptest::prelude::*;

use crate::markup::{
    block_formula_styles, cloze_styles, inline_formula_styles, scan, style::MarkerStyle,
};

fn all_styles() -> Vec<MarkerStyle> {
    let mut styles = cloze_styles();
    styles.extend(block_formula_styles());
    styles.extend(inline_formula_styles());
    styles
}

/// Text built mostly from delimiter fragments so that near-misses are common.
fn markup_soup() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("{{".to_string()),
        Just("}}".to_string()),
        Just("}".to_string()),
        Just("c1::".to_string()),
        Just("c23::".to_string()),
        Just("$".to_string()),
        Just("$$".to_string()),
        Just(r"\".to_string()),
        Just(r"\(".to_string()),
        Just(r"\)".to_string()),
        Just(r"\[".to_string()),
        Just(r"\]".to_string()),
        "[a-zé ]{0,4}",
    ];
    prop::collection::vec(piece, 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn spans_never_overlap_on_soup(text in markup_soup()) {
        invariants::check(&text, &scan(&text, &all_styles()));
    }

    #[test]
    fn spans_never_overlap_on_arbitrary_text(text in any::<String>()) {
        invariants::check(&text, &scan(&text, &all_styles()));
        invariants::check(&text, &scan(&text, &cloze_styles()));
    }

    #[test]
    fn text_without_delimiters_has_no_spans(text in "[^{}$\\\\]*") {
        prop_assert!(scan(&text, &all_styles()).is_empty());
    }

    #[test]
    fn scanning_is_deterministic(text in markup_soup()) {
        prop_assert_eq!(scan(&text, &all_styles()), scan(&text, &all_styles()));
    }
}
