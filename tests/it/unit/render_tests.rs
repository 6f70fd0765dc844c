//! Renderer structure: row/cell counts, highlight rule, card layout.

use crate::helpers::{CREW_CSV, FLEET_CSV, dataset_from_csv};
use sheet_table::constants::{CANCELLED_BACKGROUND, CARD_KEY_CLASS, CARD_VALUE_CLASS, GENERATED_CLASS};
use sheet_table::dom::Page;
use sheet_table::render::{CardRenderer, Presentation, Renderer, TableRenderer};
use sheet_table::{Cell, DataSet, InstanceId, Row};

fn datasets() -> Vec<DataSet> {
    vec![
        dataset_from_csv(CREW_CSV),
        dataset_from_csv(FLEET_CSV),
        dataset_from_csv("Only\nx\n"),
        DataSet::from_rows(vec![
            Row::new().with("A", Cell::Number(1.5)).with("B", Cell::Empty),
            Row::new().with("A", Cell::Boolean(false)),
        ]),
    ]
}

#[test]
fn test_table_has_one_row_per_record_and_one_cell_per_column() {
    for ds in datasets() {
        let mut page = Page::new(1200);
        let tree = TableRenderer.render(&mut page, &ds, InstanceId::new());
        let Presentation::Table { rows, .. } = &tree.presentation else {
            panic!("expected table");
        };

        assert_eq!(rows.len(), ds.row_count());
        for (row, source) in rows.iter().zip(ds.rows()) {
            assert_eq!(row.cells.len(), ds.column_count());
            for (cell, column) in row.cells.iter().zip(ds.columns()) {
                assert_eq!(page.text_content(*cell), source.text(column));
            }
        }
    }
}

#[test]
fn test_cards_list_every_column_as_name_value_pairs() {
    for ds in datasets() {
        let mut page = Page::new(500);
        let tree = CardRenderer.render(&mut page, &ds, InstanceId::new());
        let Presentation::Cards { cards } = &tree.presentation else {
            panic!("expected cards");
        };

        assert_eq!(cards.len(), ds.row_count());
        for (card, source) in cards.iter().zip(ds.rows()) {
            assert_eq!(card.fields.len(), ds.column_count());
            for (field, column) in card.fields.iter().zip(ds.columns()) {
                assert_eq!(page.text_content(field.key), format!("{}: ", column));
                assert_eq!(page.text_content(field.value), source.text(column));
                assert!(page.node(field.key).unwrap().has_class(CARD_KEY_CLASS));
                assert!(page.node(field.value).unwrap().has_class(CARD_VALUE_CLASS));
            }
        }
    }
}

#[test]
fn test_stringified_values() {
    let ds = DataSet::from_rows(vec![
        Row::new()
            .with("Int", Cell::Number(430.0))
            .with("Frac", Cell::Number(0.25))
            .with("Flag", Cell::Boolean(true))
            .with("None", Cell::Empty),
    ]);
    let mut page = Page::new(1200);
    let tree = TableRenderer.render(&mut page, &ds, InstanceId::new());
    let Presentation::Table { rows, .. } = &tree.presentation else {
        panic!("expected table");
    };
    let texts: Vec<String> = rows[0].cells.iter().map(|c| page.text_content(*c)).collect();
    assert_eq!(texts, vec!["430", "0.25", "true", ""]);
}

#[test]
fn test_only_exact_cancelled_status_is_highlighted() {
    let ds = dataset_from_csv("Name,Status\nA,Cancelled\nB,cancelled\nC,CANCELLED\nD,Active\nE,\n");
    let mut page = Page::new(1200);
    let tree = TableRenderer.render(&mut page, &ds, InstanceId::new());
    let Presentation::Table { rows, .. } = &tree.presentation else {
        panic!("expected table");
    };

    let highlighted: Vec<bool> = rows
        .iter()
        .map(|r| page.node(r.node).unwrap().style("background-color") == Some(CANCELLED_BACKGROUND))
        .collect();
    assert_eq!(highlighted, vec![true, false, false, false, false]);
}

#[test]
fn test_status_rule_needs_the_exact_column_name() {
    let ds = dataset_from_csv("Name,status\nA,Cancelled\n");
    assert!(!TableRenderer::is_cancelled(&ds.rows()[0]));
}

#[test]
fn test_roots_carry_generated_class() {
    let ds = dataset_from_csv(CREW_CSV);
    let mut page = Page::new(1200);
    let table = TableRenderer.render(&mut page, &ds, InstanceId::new());
    let cards = CardRenderer.render(&mut page, &ds, InstanceId::new());

    assert!(page.node(table.root).unwrap().has_class(GENERATED_CLASS));
    assert!(page.node(cards.root).unwrap().has_class(GENERATED_CLASS));
    assert_eq!(table.search_inputs.len(), 2);
    assert_eq!(cards.search_inputs.len(), 2);
}
