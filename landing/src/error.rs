use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while touching the browser environment.
///
/// None of these stop the page from rendering: metadata and canvas effects
/// are optional, so callers log and carry on.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("canvas unavailable: {0}")]
    Canvas(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
