mod bindings;
mod toggle;

use crate::memory::{default_page, MemoryDocument, ModalParts};
use crate::page::Page;
use crate::PageConfig;

/// Starts a page on a fully populated document and signals that its content is ready.
fn loaded_page() -> (Page<MemoryDocument>, ModalParts) {
    let (document, modal) = default_page();
    let page = Page::start(document.clone(), PageConfig::default());
    document.finish_loading();
    (page, modal)
}
