//! An in-memory [`Document`] for running page interactions without a browser.
//!
//! Nodes form a tree with parent links so that clicks bubble from the clicked node
//! to its ancestors, the way DOM events do. Every state change an element goes
//! through is journaled so callers can check ordering, e.g. that an animation class
//! is removed, styles are flushed, and only then the class is re-added.
//!
//! Children are owned by their parent and parents are only weakly referenced, so a
//! detached subtree is freed once its handles are dropped. Handlers that capture a
//! node or the document keep those alive for as long as they stay registered, the
//! same as closures registered on a browser page.
//!
//! Note that methods are not meant to be efficient, just simple and predictable.

use rustc_hash::FxHashMap;

use crate::dom::{Diagnostics, Document, Element, EventKind, Handler, LogDiagnostics, UiEvent};
use crate::shared::{Shared, WeakShared};

/// A single recorded change to a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    ClassAdded(String),
    ClassRemoved(String),
    StylesFlushed,
    TextSet(String),
}

/// Internal node state.
struct NodeInner {
    id: Option<String>,
    parent: Option<WeakShared<NodeInner>>,
    children: Vec<Node>,
    classes: Vec<String>,
    text: String,
    listeners: Vec<(EventKind, Handler<Node>)>,
    journal: Vec<Mutation>,
}

/// A node in a [`MemoryDocument`]. Clones refer to the same node.
#[derive(Clone)]
pub struct Node(Shared<NodeInner>);

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.exec(|node| {
            f.debug_struct("Node")
                .field("id", &node.id)
                .field("classes", &node.classes)
                .field("text", &node.text)
                .finish()
        })
    }
}

impl Node {
    fn new(id: Option<&str>) -> Self {
        Node(Shared::new(NodeInner {
            id: id.map(ToOwned::to_owned),
            parent: None,
            children: Vec::new(),
            classes: Vec::new(),
            text: String::new(),
            listeners: Vec::new(),
            journal: Vec::new(),
        }))
    }

    pub fn id(&self) -> Option<String> {
        self.0.exec(|node| node.id.clone())
    }

    pub fn parent(&self) -> Option<Node> {
        self.0
            .exec(|node| node.parent.as_ref().and_then(WeakShared::upgrade))
            .map(Node)
    }

    /// Returns the number of children.
    pub fn children_len(&self) -> usize {
        self.0.exec(|node| node.children.len())
    }

    /// Appends `child` to this node's children, detaching it from any previous parent.
    /// Does not handle a node becoming its own ancestor.
    pub fn append_child(&self, child: &Node) {
        remove_from_parent(child);
        child.0.exec_mut(|inner| inner.parent = Some(self.0.downgrade()));
        self.0.exec_mut(|parent| parent.children.push(child.clone()));
    }

    /// The node's classes, in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.0.exec(|node| node.classes.clone())
    }

    /// Every change recorded on this node so far, oldest first.
    pub fn journal(&self) -> Vec<Mutation> {
        self.0.exec(|node| node.journal.clone())
    }

    pub fn clear_journal(&self) {
        self.0.exec_mut(|node| node.journal.clear());
    }

    /// Returns the number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .exec(|node| node.listeners.iter().filter(|(k, _)| *k == kind).count())
    }

    fn listeners(&self, kind: EventKind) -> Vec<Handler<Node>> {
        self.0.exec(|node| {
            node.listeners
                .iter()
                .filter(|(k, _)| *k == kind)
                .map(|(_, handler)| handler.clone())
                .collect()
        })
    }

    fn record(&self, mutation: Mutation) {
        self.0.exec_mut(|node| node.journal.push(mutation));
    }
}

/// A helper function that removes the given node from its parent, if it has one.
fn remove_from_parent(node: &Node) {
    let parent = node
        .0
        .exec_mut(|inner| inner.parent.take())
        .and_then(|parent| parent.upgrade());
    if let Some(parent) = parent {
        parent.exec_mut(|parent| parent.children.retain(|child| child != node));
    }
}

impl Element for Node {
    fn has_class(&self, class_name: &str) -> bool {
        self.0
            .exec(|node| node.classes.iter().any(|class| class == class_name))
    }

    fn add_class(&self, class_name: &str) {
        if self.has_class(class_name) {
            return;
        }
        self.0
            .exec_mut(|node| node.classes.push(class_name.to_string()));
        self.record(Mutation::ClassAdded(class_name.to_string()));
    }

    fn remove_class(&self, class_name: &str) {
        if !self.has_class(class_name) {
            return;
        }
        self.0
            .exec_mut(|node| node.classes.retain(|class| class != class_name));
        self.record(Mutation::ClassRemoved(class_name.to_string()));
    }

    fn set_text_content(&self, text: &str) {
        self.0.exec_mut(|node| node.text = text.to_string());
        self.record(Mutation::TextSet(text.to_string()));
    }

    fn text_content(&self) -> String {
        self.0.exec(|node| node.text.clone())
    }

    fn restart_styles(&self) {
        self.record(Mutation::StylesFlushed);
    }
}

struct DocumentInner {
    nodes: FxHashMap<String, Node>,
    content_loaded: bool,
    pending: Vec<Box<dyn FnOnce()>>,
    log: Vec<String>,
}

/// A document held entirely in memory. Content is not ready until
/// [`finish_loading`](MemoryDocument::finish_loading) is called.
#[derive(Clone)]
pub struct MemoryDocument(Shared<DocumentInner>);

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        MemoryDocument(Shared::new(DocumentInner {
            nodes: FxHashMap::default(),
            content_loaded: false,
            pending: Vec::new(),
            log: Vec::new(),
        }))
    }

    /// Creates a new node reachable through `get_element_by_id`.
    ///
    /// # Panics
    /// Panics if `id` is already used within the document.
    pub fn create_element(&self, id: &str) -> Node {
        let node = Node::new(Some(id));
        let previous = self
            .0
            .exec_mut(|doc| doc.nodes.insert(id.to_string(), node.clone()));
        assert!(
            previous.is_none(),
            "Expected created elements to have unique ids, reused {}",
            id
        );
        node
    }

    /// Creates a node without an identifier, e.g. the content box inside a modal.
    pub fn create_anonymous(&self) -> Node {
        Node::new(None)
    }

    /// Creates a node with identifier `id` as the last child of `parent`.
    pub fn create_child(&self, parent: &Node, id: &str) -> Node {
        let node = self.create_element(id);
        parent.append_child(&node);
        node
    }

    /// Marks the structural content as ready and runs every callback queued by
    /// `on_content_loaded`, in registration order. Later calls do nothing.
    pub fn finish_loading(&self) {
        let pending = self.0.exec_mut(|doc| {
            if doc.content_loaded {
                return Vec::new();
            }
            doc.content_loaded = true;
            std::mem::take(&mut doc.pending)
        });
        for callback in pending {
            callback();
        }
    }

    pub fn is_content_loaded(&self) -> bool {
        self.0.exec(|doc| doc.content_loaded)
    }

    /// Dispatches a click on `target`, then bubbles it through each ancestor.
    pub fn click(&self, target: &Node) {
        let mut current = Some(target.clone());
        while let Some(node) = current {
            // Collect handlers outside the node borrow so that handlers may mutate the node.
            let handlers = node.listeners(EventKind::Click);
            let event = UiEvent {
                kind: EventKind::Click,
                target: Some(target.clone()),
                current_target: node.clone(),
            };
            if !handlers.is_empty() {
                log::trace!("dispatching {} to {:?}", event.kind, node.id());
            }
            for handler in handlers {
                handler(&event);
            }
            current = node.parent();
        }
    }

    /// Clicks the element with identifier `id`, returning `false` if there is none.
    pub fn click_by_id(&self, id: &str) -> bool {
        match self.get_element_by_id(id) {
            Some(node) => {
                self.click(&node);
                true
            }
            None => false,
        }
    }

    /// Every diagnostic line written so far.
    pub fn log_lines(&self) -> Vec<String> {
        self.0.exec(|doc| doc.log.clone())
    }
}

impl Diagnostics for MemoryDocument {
    fn log(&self, line: &str) {
        LogDiagnostics.log(line);
        self.0.exec_mut(|doc| doc.log.push(line.to_string()));
    }
}

impl Document for MemoryDocument {
    type Element = Node;

    fn get_element_by_id(&self, id: &str) -> Option<Node> {
        self.0.exec(|doc| doc.nodes.get(id).cloned())
    }

    fn add_event_listener(&self, element: &Node, kind: EventKind, handler: Handler<Node>) {
        element
            .0
            .exec_mut(|node| node.listeners.push((kind, handler)));
    }

    fn on_content_loaded(&self, callback: Box<dyn FnOnce()>) {
        let callback = self.0.exec_mut(|doc| {
            if doc.content_loaded {
                Some(callback)
            } else {
                doc.pending.push(callback);
                None
            }
        });
        if let Some(callback) = callback {
            callback();
        }
    }
}

/// Builds a document containing every element the default [`PageConfig`] refers to,
/// with a content box nested inside the modal overlay. Content is not yet loaded.
///
/// [`PageConfig`]: crate::config::PageConfig
pub fn default_page() -> (MemoryDocument, ModalParts) {
    use crate::config::*;

    let document = MemoryDocument::new();
    let body = document.create_anonymous();
    for id in [
        ANIMATE_BUTTON_ID,
        ANIMATE_BOX_ID,
        FLIP_CARD_ID,
        LOADING_BUTTON_ID,
        LOADING_SPINNER_ID,
        OPEN_MODAL_BUTTON_ID,
    ] {
        document.create_child(&body, id);
    }
    let overlay = document.create_child(&body, MODAL_ID);
    let content = document.create_anonymous();
    overlay.append_child(&content);
    let close_button = document.create_child(&content, CLOSE_MODAL_BUTTON_ID);
    if let Some(button) = document.get_element_by_id(LOADING_BUTTON_ID) {
        button.set_text_content(START_LOADING_LABEL);
        button.clear_journal();
    }

    (
        document,
        ModalParts {
            overlay,
            content,
            close_button,
        },
    )
}

/// Handles to the modal's nodes within [`default_page`].
#[derive(Clone, Debug)]
pub struct ModalParts {
    pub overlay: Node,
    pub content: Node,
    pub close_button: Node,
}
