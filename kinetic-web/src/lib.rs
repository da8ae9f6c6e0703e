//! A browser backend for `kinetic`: element lookup, class lists and click listeners
//! go through `web-sys`, and diagnostics go to the browser console.


pub mod document;
pub mod error;

use kinetic::{Page, PageConfig};
use wasm_bindgen::prelude::*;

pub use document::{WebDocument, WebElement};
pub use error::WebError;

/// Runs the counter demonstration and wires the page's interactions once its
/// content is ready, using the given element ids and class names.
pub fn start_with_config(config: PageConfig) -> Result<Page<WebDocument>, WebError> {
    let document = WebDocument::from_window()?;
    Ok(Page::start(document, config))
}

// This is like the `main` function, except for JavaScript.
#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    // This provides better error messages in debug mode.
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    // Handlers own everything they need, so the page itself can be dropped.
    let _page = start_with_config(PageConfig::default())?;
    Ok(())
}
