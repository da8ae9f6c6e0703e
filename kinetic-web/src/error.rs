use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while attaching to the browser page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("`window` has no `document`")]
    NoDocument,
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
