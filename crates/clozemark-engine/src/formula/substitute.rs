use std::panic::{self, AssertUnwindSafe};

use crate::escape::escape_html;
use crate::markup::{
    DisplayMode, MarkerStyle, Span, SpanItem, block_formula_styles,
    block_formula_styles_without_dollars, inline_formula_styles,
    inline_formula_styles_without_dollars, scan,
};

use super::render::{RenderError, RenderFormula};

/// Longest renderer message embedded in an error marker, in chars.
const MAX_ERROR_MESSAGE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaOptions {
    /// Recognize `$$…$$` and `$…$` in addition to `\[…\]` and `\(…\)`.
    pub dollar_delimiters: bool,
}

impl Default for FormulaOptions {
    fn default() -> Self {
        Self {
            dollar_delimiters: true,
        }
    }
}

impl FormulaOptions {
    fn styles(&self) -> (Vec<MarkerStyle>, Vec<MarkerStyle>) {
        if self.dollar_delimiters {
            (block_formula_styles(), inline_formula_styles())
        } else {
            (
                block_formula_styles_without_dollars(),
                inline_formula_styles_without_dollars(),
            )
        }
    }
}

/// Replaces every formula in `text` with its rendering, using the default
/// delimiters.
pub fn substitute<R>(text: &str, renderer: &R) -> String
where
    R: RenderFormula + ?Sized,
{
    substitute_with(text, renderer, &FormulaOptions::default())
}

/// Replaces every formula in `text` with its rendering.
///
/// The block pass runs over the whole input, then the inline pass over its
/// output, skipping the regions the block pass rendered. Each payload is
/// trimmed before rendering. Never fails: a span whose render errors or
/// panics becomes an [`error_marker`].
pub fn substitute_with<R>(text: &str, renderer: &R, options: &FormulaOptions) -> String
where
    R: RenderFormula + ?Sized,
{
    let (block, inline) = options.styles();
    let (after_block, rendered) = substitute_pass(text, &[], &block, renderer);
    let (out, _) = substitute_pass(&after_block, &rendered, &inline, renderer);
    out
}

/// Substitutes `styles` in every part of `text` outside `protected`.
///
/// `protected` must be ordered and non-overlapping; those regions are copied
/// through untouched. Returns the new text and the regions of it that hold
/// rendered output.
fn substitute_pass<R>(
    text: &str,
    protected: &[Span],
    styles: &[MarkerStyle],
    renderer: &R,
) -> (String, Vec<Span>)
where
    R: RenderFormula + ?Sized,
{
    let mut out = String::with_capacity(text.len());
    let mut rendered = vec![];
    let mut last = 0;
    let tail = Span::new(text.len(), text.len());
    for region in protected.iter().chain(std::iter::once(&tail)) {
        substitute_segment(
            &text[last..region.start],
            styles,
            renderer,
            &mut out,
            &mut rendered,
        );
        out.push_str(region.slice(text));
        last = region.end;
    }
    (out, rendered)
}

fn substitute_segment<R>(
    segment: &str,
    styles: &[MarkerStyle],
    renderer: &R,
    out: &mut String,
    rendered: &mut Vec<Span>,
) where
    R: RenderFormula + ?Sized,
{
    let spans = scan(segment, styles);
    if !spans.is_empty() {
        log::debug!("substituting {} formula spans", spans.len());
    }

    let mut last = 0;
    for span in &spans {
        out.push_str(&segment[last..span.full.start]);
        let start = out.len();
        match span.item {
            SpanItem::Formula { mode } => {
                out.push_str(&render_span(renderer, span.payload(segment).trim(), mode));
            }
            // Formula style tables never produce annotations
            SpanItem::Annotation { .. } => out.push_str(span.full.slice(segment)),
        }
        rendered.push(Span::new(start, out.len()));
        last = span.full.end;
    }
    out.push_str(&segment[last..]);
}

fn render_span<R>(renderer: &R, payload: &str, mode: DisplayMode) -> String
where
    R: RenderFormula + ?Sized,
{
    let result = panic::catch_unwind(AssertUnwindSafe(|| renderer.render(payload, mode)))
        .unwrap_or_else(|panic| Err(RenderError::Panicked(panic_message(panic.as_ref()))));

    match result {
        Ok(html) => html,
        Err(e) => {
            log::warn!("failed to render {mode:?} formula {payload:?}: {e}");
            error_marker(payload, &e.to_string(), mode)
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Fallback HTML for a formula that could not be rendered.
///
/// Both the payload and the message are HTML-escaped; the message is
/// truncated so a verbose renderer cannot flood the output.
pub fn error_marker(payload: &str, message: &str, mode: DisplayMode) -> String {
    let mode_class = match mode {
        DisplayMode::Block => "formula-block",
        DisplayMode::Inline => "formula-inline",
    };
    let message: String = message.chars().take(MAX_ERROR_MESSAGE).collect();
    format!(
        r#"<span class="formula-error {mode_class}" title="{}"><code>{}</code></span>"#,
        escape_html(&message),
        escape_html(payload)
    )
}
