use regex::Regex;

use super::{
    cursor::Cursor,
    kinds::{DisplayMode, Formula},
    span::Span,
    style::{MarkerKind, MarkerStyle},
};

/// What a scanned span carries besides its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanItem {
    /// A cloze annotation. `payload` is a sub-span of the interior.
    Annotation { key: u32, payload: Span },
    /// A formula; its payload is the whole interior.
    Formula { mode: DisplayMode },
}

/// Whether a span is an annotation or a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Annotation,
    Formula,
}

/// A typed match produced by [`scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedSpan {
    /// Full span including delimiters.
    pub full: Span,
    /// Span between the delimiters.
    pub inner: Span,
    pub item: SpanItem,
}

impl ScannedSpan {
    pub fn kind(&self) -> SpanKind {
        match self.item {
            SpanItem::Annotation { .. } => SpanKind::Annotation,
            SpanItem::Formula { .. } => SpanKind::Formula,
        }
    }

    /// Byte range of the payload within the source text.
    pub fn payload_span(&self) -> Span {
        match self.item {
            SpanItem::Annotation { payload, .. } => payload,
            SpanItem::Formula { .. } => self.inner,
        }
    }

    /// The payload text, sliced from the source the span was scanned from.
    pub fn payload<'t>(&self, text: &'t str) -> &'t str {
        self.payload_span().slice(text)
    }

    pub fn group_key(&self) -> Option<u32> {
        match self.item {
            SpanItem::Annotation { key, .. } => Some(key),
            SpanItem::Formula { .. } => None,
        }
    }

    pub fn display_mode(&self) -> Option<DisplayMode> {
        match self.item {
            SpanItem::Formula { mode } => Some(mode),
            SpanItem::Annotation { .. } => None,
        }
    }
}

/// What one style has already learned about the rest of the input.
///
/// Both fields only depend on the text after a position, so they stay valid
/// as the cursor moves forward and keep repeated failures from rescanning it.
#[derive(Debug, Default)]
struct StyleMemo {
    /// Last search for the first byte of the close token: where it started
    /// and where the byte was found.
    next_close: Option<(usize, Option<usize>)>,
    /// A formula opened at or after this position never closes.
    unclosed_from: Option<usize>,
}

impl StyleMemo {
    /// Position of the first `byte` at or after `from`.
    fn find_close(&mut self, text: &str, from: usize, byte: u8) -> Option<usize> {
        if let Some((searched, found)) = self.next_close {
            if searched <= from && found.is_none_or(|at| at >= from) {
                return found;
            }
        }
        let found = text.as_bytes()[from..]
            .iter()
            .position(|&b| b == byte)
            .map(|at| from + at);
        self.next_close = Some((from, found));
        found
    }
}

/// Scans `text` for spans delimited by `styles`.
///
/// At each position the styles are tried in slice order and the first one
/// that recognizes a complete span wins. The cursor then moves to the end of
/// that span, so the returned spans never overlap and are strictly ordered by
/// start. Unterminated or malformed markup is left as literal text, and
/// scanning resumes one character after its open token.
pub fn scan(text: &str, styles: &[MarkerStyle]) -> Vec<ScannedSpan> {
    let mut cur = Cursor::new(text);
    let mut memos: Vec<StyleMemo> = styles.iter().map(|_| StyleMemo::default()).collect();
    let mut out = vec![];

    'outer: while !cur.eof() {
        for (style, memo) in styles.iter().zip(memos.iter_mut()) {
            if let Some(span) = try_recognize(&mut cur, style, memo) {
                out.push(span);
                continue 'outer;
            }
        }
        cur.bump_char();
    }

    log::trace!("scanned {} spans from {} bytes", out.len(), text.len());
    out
}

/// Attempts to recognize `style` at the cursor.
///
/// On success the cursor sits just past the closing delimiter. On failure
/// the cursor is left where it was and `None` is returned.
fn try_recognize(
    cur: &mut Cursor<'_>,
    style: &MarkerStyle,
    memo: &mut StyleMemo,
) -> Option<ScannedSpan> {
    let open = style.open.as_bytes();
    let close = style.close.as_bytes();
    if open.is_empty() || close.is_empty() || !cur.starts_with(open) {
        return None;
    }
    match &style.kind {
        MarkerKind::Annotation { prefix } => recognize_annotation(cur, style, prefix, memo),
        MarkerKind::Formula { mode } => recognize_formula(cur, style, *mode, memo),
    }
}

/// Recognizes `open prefix payload close`, where the payload runs to the
/// first byte of `close` and that byte must start a full close token.
fn recognize_annotation(
    cur: &mut Cursor<'_>,
    style: &MarkerStyle,
    prefix: &Regex,
    memo: &mut StyleMemo,
) -> Option<ScannedSpan> {
    let close = style.close.as_bytes();
    let start = cur.pos();
    let inner_start = start + style.open.len();
    let inner_end = memo.find_close(cur.s, inner_start, close[0])?;
    if !cur.s.as_bytes()[inner_end..].starts_with(close) {
        return None;
    }

    let interior = &cur.s[inner_start..inner_end];
    let caps = prefix.captures(interior)?;
    let key = match caps.get(1)?.as_str().parse::<u32>() {
        Ok(key) => key,
        Err(e) => {
            log::trace!("ignoring annotation at {start}: key {e}");
            return None;
        }
    };
    let payload_start = inner_start + caps.get(0)?.end();

    cur.bump_n(inner_end + close.len() - start);
    Some(ScannedSpan {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
        item: SpanItem::Annotation {
            key,
            payload: Span::new(payload_start, inner_end),
        },
    })
}

fn recognize_formula(
    cur: &mut Cursor<'_>,
    style: &MarkerStyle,
    mode: DisplayMode,
    memo: &mut StyleMemo,
) -> Option<ScannedSpan> {
    let open = style.open.as_bytes();
    let close = style.close.as_bytes();
    if style.escapes && cur.peek_back() == Some(Formula::ESCAPE) {
        return None;
    }
    let marker = open[0];
    if style.lone && (cur.peek_back() == Some(marker) || cur.peek_at(open.len()) == Some(marker)) {
        return None;
    }
    if memo.unclosed_from.is_some_and(|from| from <= cur.pos()) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open.len());
    let inner_start = cur.pos();
    let mut depth = 0usize;
    let mut closed = false;

    while !cur.eof() {
        if cur.starts_with(close) {
            if depth > 0 {
                depth -= 1;
                cur.bump_n(close.len());
                continue;
            }
            if style.lone && cur.peek_at(close.len()) == Some(marker) {
                // A lone close touching another marker belongs to a doubled form
                break;
            }
            if cur.pos() == inner_start {
                // Formulas need a non-empty payload
                break;
            }
            closed = true;
            break;
        }
        if style.allows_nesting && open != close && cur.starts_with(open) {
            depth += 1;
            cur.bump_n(open.len());
            continue;
        }
        if style.escapes && cur.peek() == Some(Formula::ESCAPE) {
            cur.bump();
            if !cur.eof() {
                cur.bump_char();
            }
            continue;
        }
        cur.bump_char();
    }

    if !closed {
        if cur.eof() && !style.allows_nesting {
            // Every later opener would run off the end the same way
            memo.unclosed_from = Some(start);
        }
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump_n(close.len());

    Some(ScannedSpan {
        full: Span::new(start, cur.pos()),
        inner: Span::new(inner_start, inner_end),
        item: SpanItem::Formula { mode },
    })
}
