use std::sync::OnceLock;

use regex::Regex;

/// Cloze deletion `{{c<N>::<payload>}}`.
pub struct Cloze;

impl Cloze {
    pub const OPEN: &'static str = "{{";
    pub const CLOSE: &'static str = "}}";

    /// Start of the interior: `c`, the decimal group key, then `::`.
    /// Capture 1 is the key. The payload after it runs to the first `}`.
    pub const PREFIX: &'static str = r"^c([0-9]+)::";

    /// Shared compiled form of [`Cloze::PREFIX`].
    pub fn prefix_regex() -> &'static Regex {
        static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
        PREFIX_REGEX.get_or_init(|| Regex::new(Cloze::PREFIX).expect("Invalid cloze regex"))
    }

    /// Renders the markup for one annotation.
    pub fn markup(key: u32, payload: &str) -> String {
        format!("{}c{key}::{payload}{}", Self::OPEN, Self::CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_captures_key() {
        let caps = Cloze::prefix_regex().captures("c12::Paris").unwrap();
        assert_eq!(&caps[1], "12");
        assert_eq!(caps.get(0).unwrap().end(), 5);
    }

    #[test]
    fn prefix_rejects_malformed() {
        let re = Cloze::prefix_regex();
        assert!(!re.is_match("c::x"));
        assert!(!re.is_match("cx::x"));
        assert!(!re.is_match("c1:x"));
        assert!(!re.is_match("{c1::x"));
        assert!(!re.is_match(" c1::x"));
        // Non-ASCII digits are not group keys
        assert!(!re.is_match("c١::x"));
    }

    #[test]
    fn markup_starts_with_prefix() {
        let markup = Cloze::markup(3, "cell");
        assert_eq!(markup, "{{c3::cell}}");
        assert!(Cloze::prefix_regex().is_match(&markup[Cloze::OPEN.len()..]));
    }
}
