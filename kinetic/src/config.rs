//! Element identifiers, class names and labels the page script relies on.
//!
//! The page's markup and stylesheet own these names; the defaults match the
//! structure the script was written against.

pub const ANIMATE_BUTTON_ID: &str = "animateBoxBtn";
pub const ANIMATE_BOX_ID: &str = "animateBox";
pub const FLIP_CARD_ID: &str = "flipCard";
pub const LOADING_BUTTON_ID: &str = "toggleLoadingBtn";
pub const LOADING_SPINNER_ID: &str = "loadingSpinner";
pub const OPEN_MODAL_BUTTON_ID: &str = "openModalBtn";
pub const MODAL_ID: &str = "modal";
pub const CLOSE_MODAL_BUTTON_ID: &str = "closeModalBtn";

pub const ANIMATE_CLASS: &str = "animate-scale";
pub const FLIPPED_CLASS: &str = "flipped";
pub const LOADING_CLASS: &str = "loading";
pub const SHOW_CLASS: &str = "show";

pub const START_LOADING_LABEL: &str = "Start Loading Animation";
pub const STOP_LOADING_LABEL: &str = "Stop Loading Animation";

/// Names used to find elements and drive their presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub animate_button_id: String,
    pub animate_box_id: String,
    pub flip_card_id: String,
    pub loading_button_id: String,
    pub loading_spinner_id: String,
    pub open_modal_button_id: String,
    pub modal_id: String,
    pub close_modal_button_id: String,

    pub animate_class: String,
    pub flipped_class: String,
    pub loading_class: String,
    pub show_class: String,

    /// Loading button label while the spinner is stopped.
    pub start_loading_label: String,
    /// Loading button label while the spinner is running.
    pub stop_loading_label: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            animate_button_id: ANIMATE_BUTTON_ID.to_string(),
            animate_box_id: ANIMATE_BOX_ID.to_string(),
            flip_card_id: FLIP_CARD_ID.to_string(),
            loading_button_id: LOADING_BUTTON_ID.to_string(),
            loading_spinner_id: LOADING_SPINNER_ID.to_string(),
            open_modal_button_id: OPEN_MODAL_BUTTON_ID.to_string(),
            modal_id: MODAL_ID.to_string(),
            close_modal_button_id: CLOSE_MODAL_BUTTON_ID.to_string(),
            animate_class: ANIMATE_CLASS.to_string(),
            flipped_class: FLIPPED_CLASS.to_string(),
            loading_class: LOADING_CLASS.to_string(),
            show_class: SHOW_CLASS.to_string(),
            start_loading_label: START_LOADING_LABEL.to_string(),
            stop_loading_label: STOP_LOADING_LABEL.to_string(),
        }
    }
}

macro_rules! def_setters {
    ( $( $setter:ident => $field:ident ),* $(,)? ) => {
        impl PageConfig {
            $(
                pub fn $setter(mut self, value: impl Into<String>) -> Self {
                    self.$field = value.into();
                    self
                }
            )*
        }
    }
}

def_setters! {
    with_animate_button_id => animate_button_id,
    with_animate_box_id => animate_box_id,
    with_flip_card_id => flip_card_id,
    with_loading_button_id => loading_button_id,
    with_loading_spinner_id => loading_spinner_id,
    with_open_modal_button_id => open_modal_button_id,
    with_modal_id => modal_id,
    with_close_modal_button_id => close_modal_button_id,
    with_animate_class => animate_class,
    with_flipped_class => flipped_class,
    with_loading_class => loading_class,
    with_show_class => show_class,
    with_start_loading_label => start_loading_label,
    with_stop_loading_label => stop_loading_label,
}
