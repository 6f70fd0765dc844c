//! In-memory host page model.
//!
//! The widget never reaches for a global document: it works against an
//! explicit [`Page`] owned by the host and keeps direct [`NodeId`] handles to
//! everything it creates.

mod html;
mod node;
mod page;
mod selector;

pub use html::to_html;
pub use node::{Node, NodeId, PageId};
pub use page::Page;
pub use selector::Selector;
