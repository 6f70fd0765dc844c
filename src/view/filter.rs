//! Anchored-prefix filtering over the mounted presentation.
//!
//! [`matches`] is the single predicate; [`apply`] resolves the text for one
//! column in every row or card and toggles visibility.

use super::state::MountedView;
use crate::render::{CardRenderer, Presentation};
use crate::dom::{NodeId, Page};

/// Case-insensitive "starts with". An empty query matches everything.
pub fn matches(text: &str, query: &str) -> bool {
    query.is_empty() || text.to_lowercase().starts_with(&query.to_lowercase())
}

/// Filter every unit of `view` by `column`, returning how many stay visible.
pub fn apply(page: &mut Page, view: &MountedView, column: usize, query: &str) -> usize {
    let Some(name) = view.columns.get(column) else {
        return 0;
    };

    let decisions: Vec<(NodeId, bool)> = match &view.tree.presentation {
        Presentation::Table { rows, .. } => rows
            .iter()
            .map(|row| {
                let visible = row
                    .cells
                    .get(column)
                    .is_some_and(|cell| matches(&page.text_content(*cell), query));
                (row.node, visible)
            })
            .collect(),
        Presentation::Cards { cards } => {
            let label = CardRenderer::label(name);
            let label = label.trim();
            cards
                .iter()
                .map(|card| {
                    // Locate the field by its exact label; hide the card when it is missing
                    let visible = card
                        .fields
                        .iter()
                        .find(|field| page.text_content(field.key).trim() == label)
                        .is_some_and(|field| matches(&page.text_content(field.value), query));
                    (card.node, visible)
                })
                .collect()
        }
    };

    let mut shown = 0;
    for (node, visible) in decisions {
        if visible {
            shown += 1;
            page.set_style(node, "display", "");
        } else {
            page.set_style(node, "display", "none");
        }
    }

    tracing::trace!(column = %name, query, shown, "Applied filter");
    shown
}
