use crate::bindings::{bind_flip_card, bind_modal, register_bindings, Bindings};
use crate::config::*;
use crate::dom::{Document, Element, EventKind};
use crate::memory::{default_page, MemoryDocument, Mutation};

use super::loaded_page;

fn element(document: &MemoryDocument, id: &str) -> crate::memory::Node {
    document.get_element_by_id(id).expect("element in page")
}

#[test]
fn all_bindings_registered_on_full_page() {
    let (page, _) = loaded_page();
    assert_eq!(page.bindings(), Some(Bindings::all()));
}

#[test]
fn animate_button_restarts_animation() {
    let (page, _) = loaded_page();
    let document = page.document();
    let animate_box = element(document, ANIMATE_BOX_ID);

    document.click_by_id(ANIMATE_BUTTON_ID);
    assert!(animate_box.has_class(ANIMATE_CLASS));

    animate_box.clear_journal();
    document.click_by_id(ANIMATE_BUTTON_ID);
    assert!(animate_box.has_class(ANIMATE_CLASS));
    assert_eq!(
        animate_box.journal(),
        vec![
            Mutation::ClassRemoved(ANIMATE_CLASS.to_string()),
            Mutation::StylesFlushed,
            Mutation::ClassAdded(ANIMATE_CLASS.to_string()),
        ]
    );
}

#[test]
fn first_animation_flushes_before_adding() {
    let (page, _) = loaded_page();
    let document = page.document();
    let animate_box = element(document, ANIMATE_BOX_ID);

    document.click_by_id(ANIMATE_BUTTON_ID);
    assert_eq!(
        animate_box.journal(),
        vec![
            Mutation::StylesFlushed,
            Mutation::ClassAdded(ANIMATE_CLASS.to_string()),
        ]
    );
}

#[test]
fn flip_card_toggles_itself() {
    let (page, _) = loaded_page();
    let document = page.document();
    let card = element(document, FLIP_CARD_ID);

    assert!(!card.has_class(FLIPPED_CLASS));
    document.click(&card);
    assert!(card.has_class(FLIPPED_CLASS));
    document.click(&card);
    assert!(!card.has_class(FLIPPED_CLASS));
}

#[test]
fn loading_button_relabels_on_each_click() {
    let (page, _) = loaded_page();
    let document = page.document();
    let button = element(document, LOADING_BUTTON_ID);
    let spinner = element(document, LOADING_SPINNER_ID);

    document.click(&button);
    assert_eq!(button.text_content(), STOP_LOADING_LABEL);
    assert!(spinner.has_class(LOADING_CLASS));

    document.click(&button);
    assert_eq!(button.text_content(), START_LOADING_LABEL);
    assert!(!spinner.has_class(LOADING_CLASS));
}

#[test]
fn modal_opens_and_closes_with_buttons() {
    let (page, modal) = loaded_page();
    let document = page.document();

    assert!(!modal.overlay.has_class(SHOW_CLASS));
    document.click_by_id(OPEN_MODAL_BUTTON_ID);
    assert!(modal.overlay.has_class(SHOW_CLASS));
    document.click(&modal.close_button);
    assert!(!modal.overlay.has_class(SHOW_CLASS));
}

#[test]
fn clicking_overlay_closes_modal() {
    let (page, modal) = loaded_page();
    let document = page.document();

    document.click_by_id(OPEN_MODAL_BUTTON_ID);
    document.click(&modal.overlay);
    assert!(!modal.overlay.has_class(SHOW_CLASS));
}

#[test]
fn clicking_modal_content_keeps_modal_open() {
    let (page, modal) = loaded_page();
    let document = page.document();

    document.click_by_id(OPEN_MODAL_BUTTON_ID);
    document.click(&modal.content);
    assert!(modal.overlay.has_class(SHOW_CLASS));
}

#[test]
fn missing_elements_disable_only_their_binding() {
    let document = MemoryDocument::new();
    let card = document.create_element(FLIP_CARD_ID);
    let button = document.create_element(LOADING_BUTTON_ID);
    document.create_element(OPEN_MODAL_BUTTON_ID);
    document.create_element(MODAL_ID);

    let bindings = register_bindings(&document, &PageConfig::default());
    assert_eq!(
        bindings,
        Bindings {
            animate_box: false,
            flip_card: true,
            loading_toggle: false,
            modal: false,
        }
    );
    assert_eq!(bindings.count(), 1);

    assert_eq!(button.listener_count(EventKind::Click), 0);
    document.click(&button);
    assert_eq!(button.text_content(), "");

    document.click(&card);
    assert!(card.has_class(FLIPPED_CLASS));
}

#[test]
fn empty_document_registers_nothing() {
    let document = MemoryDocument::new();
    assert_eq!(
        register_bindings(&document, &PageConfig::default()),
        Bindings::none()
    );
}

#[test]
fn modal_binding_registers_three_listeners() {
    let (document, modal) = default_page();
    assert!(bind_modal(&document, &PageConfig::default()));

    assert_eq!(modal.overlay.listener_count(EventKind::Click), 1);
    assert_eq!(modal.close_button.listener_count(EventKind::Click), 1);
    assert_eq!(
        element(&document, OPEN_MODAL_BUTTON_ID).listener_count(EventKind::Click),
        1
    );
}

#[test]
fn custom_config_ids_and_classes() {
    let document = MemoryDocument::new();
    let card = document.create_element("card-2");
    let config = PageConfig::default()
        .with_flip_card_id("card-2")
        .with_flipped_class("is-flipped");

    assert!(bind_flip_card(&document, &config));
    document.click(&card);
    assert_eq!(card.classes(), vec!["is-flipped"]);
}
