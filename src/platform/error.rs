//! Browser setup errors

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("2D canvas context unavailable")]
    ContextUnavailable,
    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        PlatformError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<PlatformError> for JsValue {
    fn from(err: PlatformError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
