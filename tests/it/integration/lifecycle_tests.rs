//! Widget lifecycle: load, render, no-data path, idempotent re-render.

use crate::helpers::{
    CREW_CSV, CREW_URL, TestPageBuilder, mount, owned_roots, redact_id, rows_from_csv,
    search_input, table_cells, visible_texts,
};
use sheet_table::constants::CANCELLED_BACKGROUND;
use sheet_table::dom::to_html;
use sheet_table::render::Presentation;
use sheet_table::view::{Mounted, NoDataReason, ViewController, ViewState};
use sheet_table::{LayoutMode, WidgetConfig};

fn crew_config() -> WidgetConfig {
    WidgetConfig::new(CREW_URL)
        .with_title("Crew")
        .with_no_data_message("No crew yet")
}

#[test]
fn test_crew_example() {
    let mut page = TestPageBuilder::new().with_width(1200).with_mount("main").build();
    let mut widget = ViewController::new(crew_config(), &mut page).unwrap();
    widget.load(&mut page, rows_from_csv(CREW_CSV));

    assert_eq!(widget.state(), ViewState::Rendered(LayoutMode::Full));
    let Some(Mounted::View(view)) = widget.mounted() else {
        panic!("expected a mounted view");
    };

    // Title sits immediately before the table
    let main = mount(&page, "main");
    let title = view.title.expect("title mounted");
    assert_eq!(page.children(main), &[title, view.tree.root]);
    assert_eq!(page.text_content(title), "Crew");

    let Presentation::Table { rows, .. } = &view.tree.presentation else {
        panic!("expected table");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(page.node(rows[1].node).unwrap().style("background-color"), Some(CANCELLED_BACKGROUND));
    assert_eq!(page.node(rows[0].node).unwrap().style("background-color"), None);

    let placeholders: Vec<&str> = view
        .tree
        .search_inputs
        .iter()
        .filter_map(|input| page.node(input.node).unwrap().attribute("placeholder"))
        .collect();
    assert_eq!(placeholders, vec!["Search by Name", "Search by Status"]);

    let name_input = search_input(&widget, 0);
    assert!(widget.handle_input(&mut page, name_input, "gr"));
    assert_eq!(visible_texts(&page, &widget), vec!["GraceCancelled"]);
    assert_eq!(page.node(name_input).unwrap().value(), "gr");
    assert_eq!(widget.visible_rows(&page), 1);
}

#[test]
fn test_crew_example_markup() {
    let mut page = TestPageBuilder::new().with_mount("main").build();
    let mut widget = ViewController::new(crew_config(), &mut page).unwrap();
    widget.load(&mut page, rows_from_csv(CREW_CSV));

    let html = redact_id(&to_html(&page, mount(&page, "main")), widget.id());
    insta::assert_snapshot!(
        html,
        @r#"<main><h2 class="google-sheet-table-generated-content">Crew</h2><div class="text-center mt-3 google-sheet-table-generated-content"><table class="table table-striped table-bordered google-sheet-table-generated-content" style="width: 100%; margin: 0 auto"><thead class="thead"><tr><th>Name</th><th>Status</th></tr><tr><th><input class="form-control form-control-sm" type="text" placeholder="Search by Name"></th><th><input class="form-control form-control-sm" type="text" placeholder="Search by Status"></th></tr></thead><tbody id="tableBody-[id]"><tr><td>Ada</td><td>Active</td></tr><tr style="background-color: rgba(255, 0, 0, 0.1)"><td>Grace</td><td>Cancelled</td></tr></tbody></table></div></main>"#
    );
}

#[test]
fn test_empty_data_renders_only_the_message() {
    for width in [500, 1200] {
        let mut page = TestPageBuilder::new().with_width(width).with_mount("main").build();
        let mut widget = ViewController::new(crew_config(), &mut page).unwrap();
        widget.load(&mut page, rows_from_csv("Name,Status\n"));

        assert_eq!(widget.state(), ViewState::NoData(NoDataReason::EmptyResult));
        let main = mount(&page, "main");
        assert_eq!(
            to_html(&page, main),
            r#"<main><h2 class="google-sheet-table-generated-content">No crew yet</h2></main>"#,
            "width {width}"
        );
        assert!(page.query_selector("table").is_none());
        assert!(page.query_selector("input").is_none());
        assert!(page.query_selector(".mobile-table-card").is_none());
    }
}

#[test]
fn test_empty_message_still_renders_when_unset() {
    let mut page = TestPageBuilder::new().with_mount("main").build();
    let mut widget = ViewController::new(WidgetConfig::new(CREW_URL), &mut page).unwrap();
    widget.load(&mut page, Vec::new());

    let main = mount(&page, "main");
    assert_eq!(owned_roots(&page, main, widget.id()).len(), 1);
    assert_eq!(page.text_content(main), "");
}

#[test]
fn test_repeated_render_does_not_accumulate() {
    let mut page = TestPageBuilder::new().with_mount("main").build();
    let mut widget = ViewController::new(crew_config(), &mut page).unwrap();
    widget.load(&mut page, rows_from_csv(CREW_CSV));
    let main = mount(&page, "main");

    widget.render(&mut page);
    let roots = owned_roots(&page, main, widget.id()).len();
    let nodes = page.node_count();
    for _ in 0..5 {
        widget.render(&mut page);
        assert_eq!(owned_roots(&page, main, widget.id()).len(), roots);
        assert_eq!(page.node_count(), nodes);
    }
    assert_eq!(roots, 2);
    assert_eq!(page.query_selector_all(main, "h2").len(), 1);
}

#[test]
fn test_teardown_removes_all_and_only_owned_nodes() {
    let mut page = TestPageBuilder::new().with_mount("main").build();
    let main = mount(&page, "main");
    let host_note = page.create_element("p");
    page.set_text(host_note, "Host content");
    page.append_child(main, host_note);
    let baseline = page.node_count();

    let mut widget = ViewController::new(crew_config(), &mut page).unwrap();
    widget.load(&mut page, rows_from_csv(CREW_CSV));
    assert!(page.node_count() > baseline);

    assert!(widget.teardown(&mut page) > 0);
    assert_eq!(page.children(main), &[host_note]);
    // Stylesheet stays registered for the page
    assert_eq!(page.node_count(), baseline + 1);
    assert_eq!(widget.teardown(&mut page), 0);
}

#[test]
fn test_reload_resets_filter_and_replaces_data() {
    let mut page = TestPageBuilder::new().with_mount("main").build();
    let mut widget = ViewController::new(crew_config(), &mut page).unwrap();
    widget.load(&mut page, rows_from_csv(CREW_CSV));
    widget.search(&mut page, 0, "ada");
    assert_eq!(widget.visible_rows(&page), 1);

    widget.load(&mut page, rows_from_csv("Name,Status\nAda,Active\nAlan,Active\nGrace,Active\n"));
    assert!(!widget.filter().is_active());
    assert_eq!(widget.visible_rows(&page), 3);
    assert_eq!(table_cells(&page, &widget)[1], vec!["Alan", "Active"]);
    assert_eq!(page.node(search_input(&widget, 0)).unwrap().value(), "");
}

#[test]
fn test_last_typed_column_drives_visibility() {
    let mut page = TestPageBuilder::new().with_mount("main").build();
    let mut widget = ViewController::new(crew_config(), &mut page).unwrap();
    widget.load(&mut page, rows_from_csv(CREW_CSV));

    widget.search(&mut page, 0, "ada");
    assert_eq!(visible_texts(&page, &widget), vec!["AdaActive"]);

    // Typing into Status filters by Status alone
    widget.search(&mut page, 1, "c");
    assert_eq!(visible_texts(&page, &widget), vec!["GraceCancelled"]);
    assert_eq!(widget.filter().column, Some(1));
}

#[test]
fn test_removed_mount_point_makes_render_a_noop() {
    let mut page = TestPageBuilder::new().with_mount("main").build();
    let mut widget = ViewController::new(crew_config(), &mut page).unwrap();
    widget.load(&mut page, rows_from_csv(CREW_CSV));

    let main = mount(&page, "main");
    page.remove(main);
    let nodes = page.node_count();

    widget.render(&mut page);
    assert_eq!(page.node_count(), nodes);
    assert_eq!(widget.visible_rows(&page), 0);
}
