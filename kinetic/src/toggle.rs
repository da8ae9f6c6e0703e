use crate::dom::{Document, Element};

/// Toggles `class_name` on the element with identifier `element_id`.
///
/// Returns `true` if the class was added, and `false` if it was removed *or* the
/// element does not exist. Use [`try_toggle_class_by_id`] to tell those apart.
pub fn toggle_class_by_id<D: Document>(document: &D, element_id: &str, class_name: &str) -> bool {
    try_toggle_class_by_id(document, element_id, class_name).unwrap_or(false)
}

/// Toggles `class_name` on the element with identifier `element_id`, returning
/// `Some(true)` if it was added, `Some(false)` if it was removed and `None` if there
/// is no such element.
pub fn try_toggle_class_by_id<D: Document>(
    document: &D,
    element_id: &str,
    class_name: &str,
) -> Option<bool> {
    let element = document.get_element_by_id(element_id)?;
    if element.has_class(class_name) {
        element.remove_class(class_name);
        Some(false)
    } else {
        element.add_class(class_name);
        Some(true)
    }
}
