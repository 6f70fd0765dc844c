//! Compact-mode renderer: a search block followed by one card per row.

use super::{
    Card, CardField, Presentation, Renderer, SearchInput, VisualTree, child_element,
    owned_element, search_input,
};
use crate::constants::{
    CARD_CLASS, CARD_CONTAINER_CLASS, CARD_DETAILS_CLASS, CARD_KEY_CLASS,
    CARD_SEARCH_CLASSES, CARD_VALUE_CLASS, GENERATED_CLASS, SEARCH_FIELDS_CLASS,
};
use crate::dom::{NodeId, Page};
use crate::types::{DataSet, InstanceId, LayoutMode, Row};

#[derive(Clone, Copy, Debug, Default)]
pub struct CardRenderer;

impl CardRenderer {
    /// Label text of a card field.
    pub fn label(column: &str) -> String {
        format!("{}: ", column)
    }

    fn search_block(
        &self,
        page: &mut Page,
        container: NodeId,
        columns: &[String],
        owner: InstanceId,
    ) -> Vec<SearchInput> {
        let block = child_element(page, container, "div", owner);
        page.add_class(block, SEARCH_FIELDS_CLASS);

        columns
            .iter()
            .enumerate()
            .map(|(column, name)| SearchInput {
                node: search_input(page, block, name, CARD_SEARCH_CLASSES, owner),
                column,
            })
            .collect()
    }

    fn card(&self, page: &mut Page, container: NodeId, columns: &[String], row: &Row, owner: InstanceId) -> Card {
        let card = child_element(page, container, "div", owner);
        page.add_class(card, CARD_CLASS);

        let details = child_element(page, card, "div", owner);
        page.add_class(details, CARD_DETAILS_CLASS);

        let fields = columns
            .iter()
            .map(|column| {
                let p = child_element(page, details, "p", owner);

                let key = child_element(page, p, "span", owner);
                page.add_classes(key, &[CARD_KEY_CLASS, "fw-bold"]);
                page.set_text(key, &Self::label(column));

                let value = child_element(page, p, "span", owner);
                page.add_class(value, CARD_VALUE_CLASS);
                page.set_text(value, &row.text(column));

                CardField { key, value }
            })
            .collect();

        Card { node: card, fields }
    }
}

impl Renderer for CardRenderer {
    fn mode(&self) -> LayoutMode {
        LayoutMode::Compact
    }

    fn render(&self, page: &mut Page, dataset: &DataSet, owner: InstanceId) -> VisualTree {
        let container = owned_element(page, "div", owner);
        page.add_classes(container, &[CARD_CONTAINER_CLASS, GENERATED_CLASS, "mt-3"]);

        let search_inputs = self.search_block(page, container, dataset.columns(), owner);
        let cards: Vec<Card> = dataset
            .rows()
            .iter()
            .map(|row| self.card(page, container, dataset.columns(), row, owner))
            .collect();

        tracing::trace!(cards = cards.len(), "Rendered cards");

        VisualTree {
            root: container,
            search_inputs,
            presentation: Presentation::Cards { cards },
        }
    }
}
