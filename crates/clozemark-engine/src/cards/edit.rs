use std::ops::Range;

use crate::markup::{Span, cloze_styles, kinds::Cloze, scan};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Selection {start}..{end} is outside the text (length {len})")]
    OutOfBounds { start: usize, end: usize, len: usize },
    #[error("Selection boundary {0} is not on a character boundary")]
    NotCharBoundary(usize),
    #[error("Wrapping {0:?} would not produce a valid annotation")]
    Unparseable(String),
}

/// Wraps the byte range `selection` of `text` in `{{c<key>::…}}`.
///
/// An empty selection inserts an empty annotation at that position. The
/// result is re-scanned, and the edit is refused when the new markup would
/// not be recognized as exactly one annotation over the inserted range.
pub fn wrap_selection(text: &str, selection: Range<usize>, key: u32) -> Result<String, EditError> {
    let Range { start, end } = selection;
    if start > end || end > text.len() {
        return Err(EditError::OutOfBounds {
            start,
            end,
            len: text.len(),
        });
    }
    for boundary in [start, end] {
        if !text.is_char_boundary(boundary) {
            return Err(EditError::NotCharBoundary(boundary));
        }
    }

    let selected = &text[start..end];
    let markup = Cloze::markup(key, selected);
    let inserted = Span::new(start, start + markup.len());
    let out = format!("{}{markup}{}", &text[..start], &text[end..]);

    let recognized = scan(&out, &cloze_styles()).into_iter().any(|span| {
        span.full == inserted && span.group_key() == Some(key) && span.payload(&out) == selected
    });
    if !recognized {
        return Err(EditError::Unparseable(selected.to_string()));
    }

    log::debug!("wrapped {start}..{end} as cloze {key}");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cards::{group_keys, next_group_key};

    #[test]
    fn wraps_selection() {
        let text = "The capital of France is Paris.";
        let out = wrap_selection(text, 15..21, 1).unwrap();
        assert_eq!(out, "The capital of {{c1::France}} is Paris.");
    }

    #[test]
    fn empty_selection_inserts_shell() {
        assert_eq!(wrap_selection("ab", 1..1, 3).unwrap(), "a{{c3::}}b");
    }

    #[test]
    fn wraps_with_next_key() {
        let text = "{{c1::France}} is Paris";
        let key = next_group_key(group_keys(text));
        let out = wrap_selection(text, 18..23, key).unwrap();
        assert_eq!(out, "{{c1::France}} is {{c2::Paris}}");
    }

    #[test]
    fn rejects_out_of_bounds() {
        assert_eq!(
            wrap_selection("abc", 2..9, 1),
            Err(EditError::OutOfBounds {
                start: 2,
                end: 9,
                len: 3
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 2..1;
        assert!(matches!(
            wrap_selection("abc", reversed, 1),
            Err(EditError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn rejects_split_character() {
        assert_eq!(
            wrap_selection("é", 1..2, 1),
            Err(EditError::NotCharBoundary(1))
        );
    }

    #[test]
    fn rejects_selection_with_closing_brace() {
        assert_eq!(
            wrap_selection("a}b", 0..3, 1),
            Err(EditError::Unparseable("a}b".to_string()))
        );
    }

    #[test]
    fn wraps_selection_after_open_brace() {
        let out = wrap_selection("{x", 1..2, 1).unwrap();
        assert_eq!(out, "{{{c1::x}}");
        assert_eq!(group_keys(&out).into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn wraps_selection_inside_latex_group() {
        let text = r"$\frac{1}{2}$";
        let out = wrap_selection(text, 7..8, 1).unwrap();
        assert_eq!(out, r"$\frac{{{c1::1}}}{2}$");
    }

    #[test]
    fn rejects_selection_inside_existing_annotation() {
        let text = "{{c1::France}}";
        assert!(wrap_selection(text, 6..12, 2).is_err());
    }
}
