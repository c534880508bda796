use crate::markup::DisplayMode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("{0}")]
    Invalid(String),
    #[error("renderer panicked: {0}")]
    Panicked(String),
}

/// External capability that turns a formula payload into HTML.
pub trait RenderFormula {
    fn render(&self, payload: &str, mode: DisplayMode) -> Result<String, RenderError>;
}

impl<F> RenderFormula for F
where
    F: Fn(&str, DisplayMode) -> Result<String, RenderError>,
{
    fn render(&self, payload: &str, mode: DisplayMode) -> Result<String, RenderError> {
        self(payload, mode)
    }
}
