//! Page-wide stylesheet, registered at most once per page.

use crate::constants::STYLESHEET_ID;
use crate::dom::{Page, PageId};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashSet;

/// Responsive rules shared by every instance on a page.
pub const STYLESHEET: &str = "\
@media (max-width: 768px) {
  .mobile-table-card {
    margin-bottom: 10px;
    border: 1px solid #ddd;
    padding: 10px;
    border-radius: 4px;
  }
  .table {
    display: none;
  }
}
";

/// Pages that already carry the stylesheet.
///
/// Entries live for the whole process: a dropped page keeps its 16-byte id
/// here. Page ids are random, so a new page never inherits an old entry.
static REGISTERED: Lazy<Mutex<HashSet<PageId>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Insert the shared stylesheet into the page head.
///
/// Returns `true` only for the call that actually inserted it.
pub fn register_styles(page: &mut Page) -> bool {
    if !REGISTERED.lock().insert(page.id()) {
        return false;
    }

    let style = page.create_element("style");
    page.set_id(style, STYLESHEET_ID);
    page.set_attribute(style, "type", "text/css");
    page.set_text(style, STYLESHEET);
    let head = page.head();
    page.append_child(head, style);

    tracing::debug!(page = ?page.id(), "Registered stylesheet");
    true
}
