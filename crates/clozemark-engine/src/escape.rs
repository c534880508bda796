use std::borrow::Cow;

/// Escapes the five HTML metacharacters `& < > " '`.
///
/// Safe for both text content and quoted attribute values. Borrows the input
/// when nothing needs escaping.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(s)
}
