//! The host page: an arena-backed element tree plus the live viewport.
//!
//! Every node lives in one arena slot addressed by a generational
//! [`NodeId`]. Structural operations on stale or foreign handles are no-ops
//! that report failure instead of panicking, so a widget whose mount point
//! disappeared cannot disturb the rest of the page.

use super::node::{Node, NodeId, PageId};
use super::selector::Selector;
use crate::types::InstanceId;

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// An in-memory host page with a `<head>`, a `<body>` and a viewport width.
pub struct Page {
    id: PageId,
    slots: Vec<Slot>,
    free: Vec<u32>,
    head: NodeId,
    body: NodeId,
    viewport_width: u32,
}

impl Page {
    /// Create an empty page rendered at `viewport_width`.
    pub fn new(viewport_width: u32) -> Self {
        let mut page = Self {
            id: PageId::new(),
            slots: Vec::new(),
            free: Vec::new(),
            head: NodeId { index: 0, generation: 0 },
            body: NodeId { index: 0, generation: 0 },
            viewport_width,
        };
        page.head = page.create_element("head");
        page.body = page.create_element("body");
        page
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// Number of live nodes, including head and body.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    // ========================================================================
    // Node access
    // ========================================================================

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// True while `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// True when `id` is reachable from the head or the body.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == self.head || node_id == self.body {
                return true;
            }
            current = self.node(node_id).and_then(Node::parent);
        }
        false
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let node = Node::new(tag);
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        }
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent. Fails for stale handles and for moves that would
    /// create a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` under `parent` before `reference`, or last when
    /// `reference` is `None` or not a child of `parent`.
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) -> bool {
        if !self.contains(parent) || !self.contains(child) || self.is_ancestor_or_self(child, parent) {
            return false;
        }
        self.detach(child);

        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            let position = reference
                .and_then(|r| node.children.iter().position(|c| *c == r))
                .unwrap_or(node.children.len());
            node.children.insert(position, child);
        }
        true
    }

    /// Remove `id` and its whole subtree from the page.
    ///
    /// Returns the number of nodes freed; zero for stale handles and for the
    /// page's own head and body.
    pub fn remove(&mut self, id: NodeId) -> usize {
        if !self.contains(id) || id == self.head || id == self.body {
            return 0;
        }
        self.detach(id);

        let mut freed = 0;
        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            let Some(slot) = self.slots.get_mut(node_id.index as usize) else {
                continue;
            };
            if slot.generation != node_id.generation {
                continue;
            }
            if let Some(node) = slot.node.take() {
                stack.extend(node.children);
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(node_id.index);
                freed += 1;
            }
        }
        freed
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|c| *c != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = Some(of);
        while let Some(node_id) = current {
            if node_id == candidate {
                return true;
            }
            current = self.parent(node_id);
        }
        false
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub fn set_id(&mut self, id: NodeId, value: &str) {
        if let Some(node) = self.node_mut(id) {
            node.id = Some(value.to_string());
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            if !node.has_class(class) {
                node.classes.push(class.to_string());
            }
        }
    }

    pub fn add_classes(&mut self, id: NodeId, classes: &[&str]) {
        for class in classes {
            self.add_class(id, class);
        }
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            Node::set_pair(&mut node.attributes, name, value);
        }
    }

    /// Set an inline style declaration; an empty value clears it.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            if value.is_empty() {
                node.styles.retain(|(p, _)| p != property);
            } else {
                Node::set_pair(&mut node.styles, property, value);
            }
        }
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.node_mut(id) {
            node.text = Some(text.to_string());
        }
    }

    pub fn set_value(&mut self, id: NodeId, value: &str) {
        if let Some(node) = self.node_mut(id) {
            node.value = value.to_string();
        }
    }

    pub fn set_owner(&mut self, id: NodeId, owner: InstanceId) {
        if let Some(node) = self.node_mut(id) {
            node.owner = Some(owner);
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Own text plus the text of all descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(node) = self.node(id) {
            if let Some(text) = node.text() {
                out.push_str(text);
            }
            for child in node.children() {
                self.collect_text(*child, out);
            }
        }
    }

    /// False for stale handles and for nodes hidden with `display: none`.
    pub fn is_displayed(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_displayed)
    }

    /// First attached node matching `selector`, in document order.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        [self.head, self.body]
            .into_iter()
            .find_map(|root| self.find_first(root, &selector))
    }

    /// All nodes under `scope` (inclusive) matching `selector`.
    pub fn query_selector_all(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut found = Vec::new();
        self.walk(scope, &mut |id, node| {
            if selector.matches(node) {
                found.push(id);
            }
        });
        found
    }

    /// Nodes under `scope` (inclusive) generated by `owner`.
    pub fn owned_by(&self, scope: NodeId, owner: InstanceId) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(scope, &mut |id, node| {
            if node.owner() == Some(owner) {
                found.push(id);
            }
        });
        found
    }

    fn find_first(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        let node = self.node(id)?;
        if selector.matches(node) {
            return Some(id);
        }
        node.children()
            .iter()
            .find_map(|child| self.find_first(*child, selector))
    }

    fn walk(&self, id: NodeId, visit: &mut impl FnMut(NodeId, &Node)) {
        if let Some(node) = self.node(id) {
            visit(id, node);
            for child in node.children() {
                self.walk(*child, visit);
            }
        }
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("id", &self.id)
            .field("nodes", &self.node_count())
            .field("viewport_width", &self.viewport_width)
            .finish()
    }
}
