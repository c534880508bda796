use std::ops::Range;

/// A byte range `[start, end)` into the source text.
///
/// Scanned items store spans rather than copied delimiters, so slicing the
/// source with `full` always reproduces the exact markup that was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }

    /// Slices `text` with this span.
    ///
    /// # Panics
    /// Panics if the span is out of bounds or not on char boundaries, which
    /// cannot happen for spans produced by [`scan`](super::scan) over `text`.
    #[must_use]
    pub fn slice(self, text: &str) -> &str {
        &text[self.range()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
        // Inverted spans report zero instead of underflowing
        assert_eq!(Span::new(7, 3).len(), 0);
    }

    #[test]
    fn slice_reproduces_source() {
        let text = "a {{c1::b}} c";
        assert_eq!(Span::new(2, 11).slice(text), "{{c1::b}}");
    }
}
