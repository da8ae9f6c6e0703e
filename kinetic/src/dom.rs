use std::rc::Rc;

/// The kind of UI event a handler is registered for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EventKind {
    Click,
}

impl EventKind {
    /// The event name used by the DOM for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An event delivered to a handler registered through [`Document::add_event_listener`].
#[derive(Clone, Debug)]
pub struct UiEvent<E> {
    pub kind: EventKind,
    /// The innermost element the event originated from, if it is an element.
    pub target: Option<E>,
    /// The element the handler was registered on.
    pub current_target: E,
}

/// A handler invoked with each dispatched event.
pub type Handler<E> = Rc<dyn Fn(&UiEvent<E>)>;

/// A handle to a structural node owned by the page.
///
/// All methods take `&self`: the page, not the handle, owns the node's state, so
/// handles are cheap to clone into handlers. Equality is node identity.
pub trait Element: Clone + PartialEq + 'static {
    /// Returns `true` if the class is in the element's class list.
    fn has_class(&self, class_name: &str) -> bool;

    /// Adds the class to the element's class list; a noop if already present.
    fn add_class(&self, class_name: &str);

    /// Removes the class from the element's class list; a noop if absent.
    fn remove_class(&self, class_name: &str);

    /// Flips membership of the class, returning `true` if it is now present.
    fn toggle_class(&self, class_name: &str) -> bool {
        if self.has_class(class_name) {
            self.remove_class(class_name);
            false
        } else {
            self.add_class(class_name);
            true
        }
    }

    /// Replaces the element's text content.
    fn set_text_content(&self, text: &str);

    fn text_content(&self) -> String;

    /// Forces pending style changes to be applied synchronously, so that a class
    /// re-added afterwards is treated as a fresh transition and restarts its animation.
    fn restart_styles(&self);
}

/// A sink for developer-facing diagnostic lines.
pub trait Diagnostics {
    fn log(&self, line: &str);
}

impl<T: Diagnostics + ?Sized> Diagnostics for &T {
    fn log(&self, line: &str) {
        (**self).log(line)
    }
}

/// Writes diagnostic lines through the `log` facade at info level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn log(&self, line: &str) {
        log::info!("{}", line);
    }
}

/// The interface through which `kinetic` looks up elements, registers event handlers
/// and waits for the page's structure. This allows `kinetic` to be platform-agnostic.
pub trait Document: Diagnostics + Clone + 'static {
    type Element: Element;

    /// Looks up an element by its identifier. Absence is a valid state, not an error.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Registers `handler` to run whenever an event of `kind` reaches `element`,
    /// either directly or bubbling up from a descendant. Registrations live for the
    /// lifetime of the page.
    fn add_event_listener(
        &self,
        element: &Self::Element,
        kind: EventKind,
        handler: Handler<Self::Element>,
    );

    /// Runs `callback` once the page's structural content is ready. If it already is,
    /// the callback runs before this method returns.
    fn on_content_loaded(&self, callback: Box<dyn FnOnce()>);
}
