//! Renderers: build the visual tree for one layout mode.
//!
//! A renderer produces a detached subtree inside the page plus explicit
//! handles to the nodes later needed for filtering, so nothing downstream
//! has to re-query the document by class or id.
//!
//! - [`TableRenderer`] - `Full` mode: header, search row, body
//! - [`CardRenderer`] - `Compact` mode: search block, one card per row
//! - [`register_styles`] - page-wide stylesheet, registered once per page

mod cards;
mod styles;
mod table;

pub use cards::CardRenderer;
pub use styles::{STYLESHEET, register_styles};
pub use table::TableRenderer;

use crate::dom::{NodeId, Page};
use crate::types::{DataSet, InstanceId, LayoutMode};

/// Builds the presentation of a data set for one layout mode.
pub trait Renderer {
    /// Mode this renderer serves.
    fn mode(&self) -> LayoutMode;

    /// Build a detached tree owned by `owner`. The caller mounts it.
    fn render(&self, page: &mut Page, dataset: &DataSet, owner: InstanceId) -> VisualTree;
}

/// A rendered, not yet mounted presentation and its owned handles.
#[derive(Clone, Debug)]
pub struct VisualTree {
    /// Top-level node to mount
    pub root: NodeId,
    /// One search input per column, in column order
    pub search_inputs: Vec<SearchInput>,
    /// The filterable units
    pub presentation: Presentation,
}

impl VisualTree {
    pub fn mode(&self) -> LayoutMode {
        match self.presentation {
            Presentation::Table { .. } => LayoutMode::Full,
            Presentation::Cards { .. } => LayoutMode::Compact,
        }
    }
}

/// A search input and the column it is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchInput {
    pub node: NodeId,
    pub column: usize,
}

#[derive(Clone, Debug)]
pub enum Presentation {
    Table { body: NodeId, rows: Vec<TableRow> },
    Cards { cards: Vec<Card> },
}

/// A body row and its cells, one per column.
#[derive(Clone, Debug)]
pub struct TableRow {
    pub node: NodeId,
    pub cells: Vec<NodeId>,
    pub highlighted: bool,
}

/// A card and its labelled fields.
#[derive(Clone, Debug)]
pub struct Card {
    pub node: NodeId,
    pub fields: Vec<CardField>,
}

#[derive(Clone, Copy, Debug)]
pub struct CardField {
    /// Span holding `"<column>: "`
    pub key: NodeId,
    /// Span holding the value text
    pub value: NodeId,
}

/// Create a detached element tagged with its generating instance.
pub(crate) fn owned_element(page: &mut Page, tag: &str, owner: InstanceId) -> NodeId {
    let id = page.create_element(tag);
    page.set_owner(id, owner);
    id
}

/// Create an owned element under `parent`.
pub(crate) fn child_element(page: &mut Page, parent: NodeId, tag: &str, owner: InstanceId) -> NodeId {
    let id = owned_element(page, tag, owner);
    page.append_child(parent, id);
    id
}

/// Text input with the shared placeholder wording.
pub(crate) fn search_input(
    page: &mut Page,
    parent: NodeId,
    column: &str,
    classes: &[&str],
    owner: InstanceId,
) -> NodeId {
    let input = child_element(page, parent, "input", owner);
    page.set_attribute(input, "type", "text");
    page.set_attribute(input, "placeholder", &format!("Search by {}", column));
    page.add_classes(input, classes);
    input
}
