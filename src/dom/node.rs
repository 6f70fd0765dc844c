//! Page nodes and their handles.

use crate::types::InstanceId;
use std::fmt;
use uuid::Uuid;

/// Handle to a node in a [`Page`](super::Page).
///
/// Handles are generational: once a node is removed its handle stops
/// resolving, even if the slot is reused for a new node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// Identity of a host page, used to scope page-wide registrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageId(Uuid);

impl PageId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// An element of the page tree.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: Vec<(String, String)>,
    pub(crate) styles: Vec<(String, String)>,
    pub(crate) text: Option<String>,
    pub(crate) value: String,
    pub(crate) owner: Option<InstanceId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            styles: Vec::new(),
            text: None,
            value: String::new(),
            owner: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Inline style value for `property`, if set.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    /// Own text of this node (not including descendants).
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Current value of an input node.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Widget instance that generated this node, if any.
    pub fn owner(&self) -> Option<InstanceId> {
        self.owner
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// False when an inline `display: none` hides the node.
    pub fn is_displayed(&self) -> bool {
        self.style("display") != Some("none")
    }

    pub(crate) fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
        match pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => pairs.push((key.to_string(), value.to_string())),
        }
    }
}
