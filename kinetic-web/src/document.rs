use gloo_events::EventListener;
use kinetic::dom::{Diagnostics, Document, Element, EventKind, Handler, UiEvent};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::error::WebError;

/// A handle to a DOM element. Equality is node identity.
#[derive(Clone, Debug, PartialEq)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    pub fn raw(&self) -> &web_sys::Element {
        &self.0
    }
}

fn warn_on_err<T>(op: &str, class_name: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(val) => Some(val),
        Err(err) => {
            log::warn!("classList.{}({:?}) failed: {:?}", op, class_name, err);
            None
        }
    }
}

impl Element for WebElement {
    fn has_class(&self, class_name: &str) -> bool {
        self.0.class_list().contains(class_name)
    }

    fn add_class(&self, class_name: &str) {
        warn_on_err("add", class_name, self.0.class_list().add_1(class_name));
    }

    fn remove_class(&self, class_name: &str) {
        warn_on_err("remove", class_name, self.0.class_list().remove_1(class_name));
    }

    fn toggle_class(&self, class_name: &str) -> bool {
        warn_on_err("toggle", class_name, self.0.class_list().toggle(class_name))
            .unwrap_or(false)
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn restart_styles(&self) {
        // Reading layout flushes pending style changes.
        let _width = match self.0.dyn_ref::<HtmlElement>() {
            Some(html) => html.offset_width(),
            None => self.0.client_width(),
        };
    }
}

/// The browser's document.
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Attaches to the document of the global `window`.
    pub fn from_window() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;
        Ok(Self::new(document))
    }
}

impl Diagnostics for WebDocument {
    fn log(&self, line: &str) {
        web_sys::console::log_1(&JsValue::from_str(line));
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn get_element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn add_event_listener(
        &self,
        element: &WebElement,
        kind: EventKind,
        handler: Handler<WebElement>,
    ) {
        let current_target = element.clone();
        // Listeners stay registered for the lifetime of the page.
        EventListener::new(&element.0, kind.as_str(), move |event| {
            let target = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .map(WebElement);
            handler(&UiEvent {
                kind,
                target,
                current_target: current_target.clone(),
            });
        })
        .forget();
    }

    fn on_content_loaded(&self, callback: Box<dyn FnOnce()>) {
        // The module may finish loading after `DOMContentLoaded` has already fired.
        if self.document.ready_state() != "loading" {
            callback();
            return;
        }
        EventListener::once(&self.document, "DOMContentLoaded", move |_| callback()).forget();
    }
}
