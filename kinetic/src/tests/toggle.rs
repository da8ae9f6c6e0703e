use crate::dom::Element;
use crate::memory::{MemoryDocument, Mutation};
use crate::toggle::{toggle_class_by_id, try_toggle_class_by_id};

#[test]
fn toggle_adds_missing_class() {
    let document = MemoryDocument::new();
    let spinner = document.create_element("loadingSpinner");

    assert!(toggle_class_by_id(&document, "loadingSpinner", "loading"));
    assert!(spinner.has_class("loading"));
}

#[test]
fn toggle_again_removes_class() {
    let document = MemoryDocument::new();
    let spinner = document.create_element("loadingSpinner");

    assert!(toggle_class_by_id(&document, "loadingSpinner", "loading"));
    assert!(!toggle_class_by_id(&document, "loadingSpinner", "loading"));
    assert!(!spinner.has_class("loading"));
    assert_eq!(
        spinner.journal(),
        vec![
            Mutation::ClassAdded("loading".to_string()),
            Mutation::ClassRemoved("loading".to_string()),
        ]
    );
}

#[test]
fn toggle_missing_element_returns_false() {
    let document = MemoryDocument::new();
    assert!(!toggle_class_by_id(&document, "nowhere", "loading"));
}

#[test]
fn try_toggle_distinguishes_missing_element() {
    let document = MemoryDocument::new();
    document.create_element("card").add_class("flipped");

    assert_eq!(try_toggle_class_by_id(&document, "nowhere", "flipped"), None);
    assert_eq!(try_toggle_class_by_id(&document, "card", "flipped"), Some(false));
    assert_eq!(try_toggle_class_by_id(&document, "card", "flipped"), Some(true));
}

#[test]
fn toggle_leaves_other_classes() {
    let document = MemoryDocument::new();
    let element = document.create_element("box");
    element.add_class("card");

    toggle_class_by_id(&document, "box", "flipped");
    assert_eq!(element.classes(), vec!["card", "flipped"]);
    toggle_class_by_id(&document, "box", "flipped");
    assert_eq!(element.classes(), vec!["card"]);
}
