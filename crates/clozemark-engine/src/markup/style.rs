use regex::Regex;

use super::kinds::{Cloze, DisplayMode, Formula};

/// What a marker style produces when its delimiters match.
#[derive(Debug, Clone)]
pub enum MarkerKind {
    /// Cloze-style annotation. The interior runs to the first byte of the
    /// close token and must start with a match of `prefix`, whose capture 1 is
    /// the decimal group key; the rest is the payload. Anything else declines
    /// and stays literal text.
    Annotation { prefix: Regex },
    /// Formula span rendered in the given display mode.
    Formula { mode: DisplayMode },
}

/// A delimiter-pair definition recognized by the scanner.
///
/// Styles are tried in slice order at every position, so a style whose open
/// token is a prefix of another's must come after it. The `allows_nesting`,
/// `lone` and `escapes` flags only affect formula styles.
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub open: &'static str,
    pub close: &'static str,
    pub kind: MarkerKind,
    /// Inner `open` tokens must be balanced by `close` before the span ends.
    pub allows_nesting: bool,
    /// The marker is a single character that also appears doubled in a
    /// higher-priority style: the open token is declined when touching another
    /// instance of its first byte, and so is a close token followed by one.
    pub lone: bool,
    /// Backslash escapes the next character inside the span, and an open
    /// token directly preceded by a backslash is literal.
    pub escapes: bool,
}

impl MarkerStyle {
    fn annotation(open: &'static str, close: &'static str, prefix: Regex) -> Self {
        Self {
            open,
            close,
            kind: MarkerKind::Annotation { prefix },
            allows_nesting: false,
            lone: false,
            escapes: false,
        }
    }

    fn formula(open: &'static str, close: &'static str, mode: DisplayMode) -> Self {
        Self {
            open,
            close,
            kind: MarkerKind::Formula { mode },
            allows_nesting: false,
            lone: false,
            escapes: true,
        }
    }

    fn lone(mut self) -> Self {
        self.lone = true;
        self
    }

    pub fn is_formula(&self) -> bool {
        matches!(self.kind, MarkerKind::Formula { .. })
    }
}

/// Styles for `{{c<N>::payload}}` annotations.
pub fn cloze_styles() -> Vec<MarkerStyle> {
    vec![MarkerStyle::annotation(
        Cloze::OPEN,
        Cloze::CLOSE,
        Cloze::prefix_regex().clone(),
    )]
}

/// Block formula styles: `$$…$$` then `\[…\]`.
pub fn block_formula_styles() -> Vec<MarkerStyle> {
    let mut styles = vec![MarkerStyle::formula(
        Formula::DOUBLE_DOLLAR,
        Formula::DOUBLE_DOLLAR,
        DisplayMode::Block,
    )];
    styles.extend(block_formula_styles_without_dollars());
    styles
}

/// Block formula styles for hosts that treat `$` as ordinary text.
pub fn block_formula_styles_without_dollars() -> Vec<MarkerStyle> {
    vec![MarkerStyle::formula(
        Formula::BRACKET_OPEN,
        Formula::BRACKET_CLOSE,
        DisplayMode::Block,
    )]
}

/// Inline formula styles: `\(…\)` then lone `$…$`.
pub fn inline_formula_styles() -> Vec<MarkerStyle> {
    let mut styles = inline_formula_styles_without_dollars();
    styles.push(MarkerStyle::formula(Formula::DOLLAR, Formula::DOLLAR, DisplayMode::Inline).lone());
    styles
}

/// Inline formula styles for hosts that treat `$` as ordinary text.
pub fn inline_formula_styles_without_dollars() -> Vec<MarkerStyle> {
    vec![MarkerStyle::formula(
        Formula::PAREN_OPEN,
        Formula::PAREN_CLOSE,
        DisplayMode::Inline,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_dollar_precedes_bracket() {
        let styles = block_formula_styles();
        assert_eq!(styles[0].open, "$$");
        assert_eq!(styles[1].open, r"\[");
        assert!(styles.iter().all(MarkerStyle::is_formula));
    }

    #[test]
    fn only_single_dollar_is_lone() {
        let lone: Vec<_> = block_formula_styles()
            .into_iter()
            .chain(inline_formula_styles())
            .chain(cloze_styles())
            .filter(|s| s.lone)
            .map(|s| s.open)
            .collect();
        assert_eq!(lone, vec!["$"]);
    }

    #[test]
    fn without_dollars_has_no_dollar_tokens() {
        let styles: Vec<_> = block_formula_styles_without_dollars()
            .into_iter()
            .chain(inline_formula_styles_without_dollars())
            .collect();
        assert!(styles.iter().all(|s| !s.open.contains('$')));
    }
}
