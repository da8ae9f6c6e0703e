use std::cell::RefCell;
use std::rc::Rc;

use crate::bindings::{register_bindings, Bindings};
use crate::config::PageConfig;
use crate::counter::{increment_counter, Counter};
use crate::dom::Document;
use crate::shared::Shared;

/// Composes the counter demonstration and the interaction bindings for one page.
///
/// The page owns its [`Counter`]; nothing else in the crate keeps counter state.
pub struct Page<D: Document> {
    document: D,
    config: Rc<PageConfig>,
    counter: RefCell<Counter>,
    bindings: Shared<Option<Bindings>>,
}

impl<D: Document> Page<D> {
    /// Creates a page without running anything.
    pub fn new(document: D, config: PageConfig) -> Self {
        Self {
            document,
            config: Rc::new(config),
            counter: RefCell::default(),
            bindings: Shared::default(),
        }
    }

    /// Runs the counter demonstration immediately, then registers the bindings once
    /// the document's structural content is ready.
    pub fn start(document: D, config: PageConfig) -> Self {
        let page = Self::new(document, config);
        page.run_demonstrations();
        page.bind_when_loaded();
        page
    }

    /// Writes the demonstration header and an example sum, then logs and increments
    /// the counter twice.
    pub fn run_demonstrations(&self) {
        self.document.log("=== Part 2: Function Demonstrations ===");
        self.document
            .log(&format!("Increment 5 by 3: {}", increment_counter(5, 3)));
        self.log_and_increment();
        self.log_and_increment();
    }

    /// Queues binding registration behind the document's content-ready signal.
    pub fn bind_when_loaded(&self) {
        let document = self.document.clone();
        let config = self.config.clone();
        let bindings = self.bindings.clone();
        self.document.on_content_loaded(Box::new(move || {
            let registered = register_bindings(&document, &config);
            bindings.exec_mut(|bindings| *bindings = Some(registered));
        }));
    }

    pub fn log_and_increment(&self) {
        self.counter.borrow_mut().log_and_increment(&self.document);
    }

    pub fn counter(&self) -> i64 {
        self.counter.borrow().value()
    }

    /// The registered bindings, or `None` while the content is not ready.
    pub fn bindings(&self) -> Option<Bindings> {
        self.bindings.exec(|bindings| *bindings)
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}
