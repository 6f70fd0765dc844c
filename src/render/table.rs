//! Full-mode renderer: a striped, bordered table with a search row.

use super::{
    Presentation, Renderer, SearchInput, TableRow, VisualTree, child_element, owned_element,
    search_input,
};
use crate::constants::{
    BODY_ID_PREFIX, CANCELLED_BACKGROUND, CANCELLED_STATUS, GENERATED_CLASS, STATUS_COLUMN,
    TABLE_CLASSES, TABLE_CONTAINER_CLASSES, TABLE_SEARCH_CLASSES, THEAD_CLASS,
};
use crate::dom::{NodeId, Page};
use crate::types::{Cell, DataSet, InstanceId, LayoutMode, Row};

#[derive(Clone, Copy, Debug, Default)]
pub struct TableRenderer;

impl TableRenderer {
    /// Id of the body element for `owner`.
    pub fn body_id(owner: InstanceId) -> String {
        format!("{}{}", BODY_ID_PREFIX, owner)
    }

    /// Rows whose `Status` is exactly `Cancelled` get highlighted.
    pub fn is_cancelled(row: &Row) -> bool {
        row.get(STATUS_COLUMN).and_then(Cell::as_text) == Some(CANCELLED_STATUS)
    }

    fn header(
        &self,
        page: &mut Page,
        table: NodeId,
        columns: &[String],
        owner: InstanceId,
    ) -> Vec<SearchInput> {
        let thead = child_element(page, table, "thead", owner);
        page.add_class(thead, THEAD_CLASS);

        let header_row = child_element(page, thead, "tr", owner);
        let search_row = child_element(page, thead, "tr", owner);

        columns
            .iter()
            .enumerate()
            .map(|(column, name)| {
                let th = child_element(page, header_row, "th", owner);
                page.set_text(th, name);

                let search_th = child_element(page, search_row, "th", owner);
                let node = search_input(page, search_th, name, TABLE_SEARCH_CLASSES, owner);
                SearchInput { node, column }
            })
            .collect()
    }

    fn body(&self, page: &mut Page, table: NodeId, dataset: &DataSet, owner: InstanceId) -> (NodeId, Vec<TableRow>) {
        let tbody = child_element(page, table, "tbody", owner);
        page.set_id(tbody, &Self::body_id(owner));

        let rows = dataset
            .rows()
            .iter()
            .map(|row| {
                let tr = child_element(page, tbody, "tr", owner);
                let cells = dataset
                    .columns()
                    .iter()
                    .map(|column| {
                        let td = child_element(page, tr, "td", owner);
                        page.set_text(td, &row.text(column));
                        td
                    })
                    .collect();

                let highlighted = Self::is_cancelled(row);
                if highlighted {
                    page.set_style(tr, "background-color", CANCELLED_BACKGROUND);
                }
                TableRow {
                    node: tr,
                    cells,
                    highlighted,
                }
            })
            .collect();

        (tbody, rows)
    }
}

impl Renderer for TableRenderer {
    fn mode(&self) -> LayoutMode {
        LayoutMode::Full
    }

    fn render(&self, page: &mut Page, dataset: &DataSet, owner: InstanceId) -> VisualTree {
        let container = owned_element(page, "div", owner);
        page.add_classes(container, TABLE_CONTAINER_CLASSES);
        page.add_class(container, GENERATED_CLASS);

        let table = child_element(page, container, "table", owner);
        page.add_classes(table, TABLE_CLASSES);
        page.add_class(table, GENERATED_CLASS);
        page.set_style(table, "width", "100%");
        page.set_style(table, "margin", "0 auto");

        let search_inputs = self.header(page, table, dataset.columns(), owner);
        let (body, rows) = self.body(page, table, dataset, owner);

        tracing::trace!(rows = rows.len(), columns = dataset.column_count(), "Rendered table");

        VisualTree {
            root: container,
            search_inputs,
            presentation: Presentation::Table { body, rows },
        }
    }
}
