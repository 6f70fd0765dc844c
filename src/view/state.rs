//! View lifecycle state and the handles a controller holds.
//!
//! ## State Transitions
//!
//! ```text
//! Unloaded -> Loading           (load requested)
//! Loading  -> Loaded            (load completed, nothing mounted yet)
//! Loaded   -> Rendered(mode)    (mounted at least one row)
//! Loaded   -> NoData(reason)    (mounted the no-data message)
//! Rendered(mode) -> Rendered(mode')  (debounced resize)
//! Loaded | Rendered | NoData -> Loading  (reload)
//! ```
//!
//! A controller stays in `Loaded` while its mount point is absent.

use crate::dom::NodeId;
use crate::render::{Presentation, VisualTree};
use crate::types::LayoutMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing requested yet
    #[default]
    Unloaded,
    /// Waiting for the data loader
    Loading,
    /// Data held but nothing mounted
    Loaded,
    /// Data presentation mounted in the given mode
    Rendered(LayoutMode),
    /// The no-data message is mounted
    NoData(NoDataReason),
}

impl ViewState {
    /// True once a load has completed, successfully or not.
    pub fn has_data(&self) -> bool {
        matches!(
            self,
            ViewState::Loaded | ViewState::Rendered(_) | ViewState::NoData(_)
        )
    }
}

/// Why the no-data message is showing. Never surfaced in the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoDataReason {
    /// Load succeeded with zero rows
    EmptyResult,
    /// Fetch or parse failed
    LoadFailure,
}

/// The query typed into the most recently used search input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub column: Option<usize>,
    pub query: String,
}

impl FilterState {
    pub fn is_active(&self) -> bool {
        self.column.is_some() && !self.query.is_empty()
    }

    pub fn clear(&mut self) {
        self.column = None;
        self.query.clear();
    }
}

/// Owned handles of a mounted data presentation.
#[derive(Clone, Debug)]
pub struct MountedView {
    pub title: Option<NodeId>,
    pub tree: VisualTree,
    /// Column names, indexed by the search inputs' bound column
    pub columns: Vec<String>,
}

impl MountedView {
    /// Top-level nodes this view added to the mount point.
    pub fn roots(&self) -> Vec<NodeId> {
        self.title.into_iter().chain([self.tree.root]).collect()
    }

    /// Row or card nodes, in data order.
    pub fn units(&self) -> Vec<NodeId> {
        match &self.tree.presentation {
            Presentation::Table { rows, .. } => rows.iter().map(|r| r.node).collect(),
            Presentation::Cards { cards } => cards.iter().map(|c| c.node).collect(),
        }
    }

    /// Column bound to `node`, if it is one of this view's search inputs.
    pub fn column_of(&self, node: NodeId) -> Option<usize> {
        self.tree
            .search_inputs
            .iter()
            .find(|input| input.node == node)
            .map(|input| input.column)
    }

    pub fn input_for(&self, column: usize) -> Option<NodeId> {
        self.tree
            .search_inputs
            .iter()
            .find(|input| input.column == column)
            .map(|input| input.node)
    }
}

/// What an instance currently has mounted.
#[derive(Clone, Debug)]
pub enum Mounted {
    View(MountedView),
    Message(NodeId),
}

impl Mounted {
    pub fn roots(&self) -> Vec<NodeId> {
        match self {
            Mounted::View(view) => view.roots(),
            Mounted::Message(node) => vec![*node],
        }
    }

    pub fn view(&self) -> Option<&MountedView> {
        match self {
            Mounted::View(view) => Some(view),
            Mounted::Message(_) => None,
        }
    }
}
