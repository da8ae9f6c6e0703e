use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::{Document, Element, EventKind, UiEvent};
use crate::toggle::toggle_class_by_id;

/// Which interactions were wired by [`register_bindings`]. A binding is skipped when
/// any element it refers to is missing from the page.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Bindings {
    pub animate_box: bool,
    pub flip_card: bool,
    pub loading_toggle: bool,
    pub modal: bool,
}

impl Bindings {
    pub fn all() -> Self {
        Self {
            animate_box: true,
            flip_card: true,
            loading_toggle: true,
            modal: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        [self.animate_box, self.flip_card, self.loading_toggle, self.modal]
            .iter()
            .filter(|wired| **wired)
            .count()
    }
}

/// Registers every interaction against `document`. Each binding is independent.
pub fn register_bindings<D: Document>(document: &D, config: &PageConfig) -> Bindings {
    let bindings = Bindings {
        animate_box: bind_animate_box(document, config),
        flip_card: bind_flip_card(document, config),
        loading_toggle: bind_loading_toggle(document, config),
        modal: bind_modal(document, config),
    };
    log::debug!("registered {} of 4 bindings: {:?}", bindings.count(), bindings);
    bindings
}

/// Fetches every listed element, or logs the first missing one and returns `None`.
fn lookup<D: Document, const N: usize>(
    document: &D,
    binding: &str,
    ids: [&str; N],
) -> Option<[D::Element; N]> {
    let mut found = Vec::with_capacity(N);
    for id in ids {
        match document.get_element_by_id(id) {
            Some(element) => found.push(element),
            None => {
                log::debug!("skipping {} binding: no element with id `{}`", binding, id);
                return None;
            }
        }
    }
    found.try_into().ok()
}

/// Clicking the animate button restarts the box's scale animation.
pub fn bind_animate_box<D: Document>(document: &D, config: &PageConfig) -> bool {
    let [button, animate_box] = match lookup(
        document,
        "animate box",
        [config.animate_button_id.as_str(), config.animate_box_id.as_str()],
    ) {
        Some(elements) => elements,
        None => return false,
    };

    let class_name = config.animate_class.clone();
    document.add_event_listener(
        &button,
        EventKind::Click,
        Rc::new(move |_: &UiEvent<D::Element>| {
            animate_box.remove_class(&class_name);
            animate_box.restart_styles();
            animate_box.add_class(&class_name);
        }),
    );
    true
}

/// Clicking the card flips it.
pub fn bind_flip_card<D: Document>(document: &D, config: &PageConfig) -> bool {
    let [card] = match lookup(document, "flip card", [config.flip_card_id.as_str()]) {
        Some(elements) => elements,
        None => return false,
    };

    let class_name = config.flipped_class.clone();
    document.add_event_listener(
        &card,
        EventKind::Click,
        Rc::new(move |event: &UiEvent<D::Element>| {
            event.current_target.toggle_class(&class_name);
        }),
    );
    true
}

/// Clicking the loading button starts or stops the spinner and relabels the button.
pub fn bind_loading_toggle<D: Document>(document: &D, config: &PageConfig) -> bool {
    let [button, _spinner] = match lookup(
        document,
        "loading toggle",
        [config.loading_button_id.as_str(), config.loading_spinner_id.as_str()],
    ) {
        Some(elements) => elements,
        None => return false,
    };

    let handler_document = document.clone();
    let spinner_id = config.loading_spinner_id.clone();
    let class_name = config.loading_class.clone();
    let start_label = config.start_loading_label.clone();
    let stop_label = config.stop_loading_label.clone();
    document.add_event_listener(
        &button,
        EventKind::Click,
        Rc::new(move |event: &UiEvent<D::Element>| {
            let is_loading = toggle_class_by_id(&handler_document, &spinner_id, &class_name);
            let label = if is_loading { &stop_label } else { &start_label };
            event.current_target.set_text_content(label);
        }),
    );
    true
}

/// Wires the open and close buttons of the modal, and closes it when the overlay
/// itself (not its content) is clicked.
pub fn bind_modal<D: Document>(document: &D, config: &PageConfig) -> bool {
    let [open_button, modal, close_button] = match lookup(
        document,
        "modal",
        [
            config.open_modal_button_id.as_str(),
            config.modal_id.as_str(),
            config.close_modal_button_id.as_str(),
        ],
    ) {
        Some(elements) => elements,
        None => return false,
    };

    let show_class: Rc<str> = config.show_class.as_str().into();

    let open = {
        let modal = modal.clone();
        let show_class = show_class.clone();
        move || modal.add_class(&show_class)
    };
    let close = {
        let modal = modal.clone();
        let show_class = show_class.clone();
        Rc::new(move || modal.remove_class(&show_class))
    };

    document.add_event_listener(
        &open_button,
        EventKind::Click,
        Rc::new(move |_: &UiEvent<D::Element>| open()),
    );

    let close_from_button = close.clone();
    document.add_event_listener(
        &close_button,
        EventKind::Click,
        Rc::new(move |_: &UiEvent<D::Element>| close_from_button()),
    );

    document.add_event_listener(
        &modal,
        EventKind::Click,
        Rc::new(move |event: &UiEvent<D::Element>| {
            if event.target.as_ref() == Some(&event.current_target) {
                close();
            }
        }),
    );
    true
}
