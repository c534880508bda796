//! LaTeX rendering via pulldown-latex → MathML

use pulldown_latex::{Parser, Storage, config::RenderConfig, mathml::push_mathml};

use super::render::{RenderError, RenderFormula};
use crate::markup::DisplayMode;

/// Default render capability: LaTeX source to MathML markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathmlRenderer;

impl RenderFormula for MathmlRenderer {
    fn render(&self, latex: &str, mode: DisplayMode) -> Result<String, RenderError> {
        let storage = Storage::new();
        let parser = Parser::new(latex, &storage);
        let config = RenderConfig {
            display_mode: match mode {
                DisplayMode::Block => pulldown_latex::config::DisplayMode::Block,
                DisplayMode::Inline => pulldown_latex::config::DisplayMode::Inline,
            },
            ..Default::default()
        };

        // Collect events first so parse errors surface before writing
        let events: Vec<_> = parser.collect();
        let errors: Vec<String> = events
            .iter()
            .filter_map(|e| e.as_ref().err().map(|err| err.to_string()))
            .collect();
        if !errors.is_empty() {
            return Err(RenderError::Invalid(errors.join("; ")));
        }

        let mut mathml = String::new();
        push_mathml(&mut mathml, events.into_iter(), config)
            .map_err(|e| RenderError::Invalid(e.to_string()))?;
        Ok(mathml)
    }
}
