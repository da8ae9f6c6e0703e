//! Page interactions written against a platform-agnostic document interface:
//! a small counter utility, a class-toggle helper, and click bindings that drive
//! CSS animations by adding, removing and toggling classes.
//!
//! A host (the browser through `kinetic-web`, or [`memory::MemoryDocument`])
//! implements [`dom::Document`]; [`page::Page`] composes everything for one page.

#[cfg(test)]
mod tests;

///A reference-counted interior-mutable type used to share page state with handlers.
pub mod shared;
///Traits a host implements to expose its elements, events and diagnostics.
pub mod dom;
pub mod counter;
pub mod config;
pub mod toggle;
pub mod bindings;
pub mod page;
pub mod memory;

pub use bindings::{register_bindings, Bindings};
pub use config::PageConfig;
pub use counter::{increment_counter, Counter};
pub use dom::{Diagnostics, Document, Element, EventKind, Handler, LogDiagnostics, UiEvent};
pub use page::Page;
pub use toggle::{toggle_class_by_id, try_toggle_class_by_id};
