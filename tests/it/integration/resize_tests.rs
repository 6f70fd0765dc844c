//! Debounced viewport transitions driven through the host.

use crate::helpers::{CREW_CSV, CREW_URL, FLEET_CSV, TestPageBuilder, mount, owned_roots, rows_from_csv};
use sheet_table::view::{Mounted, ViewState};
use sheet_table::{LayoutMode, WidgetConfig};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_compact_to_full_transition() {
    let mut host = TestPageBuilder::new().with_width(500).with_mount("main").build_host();
    let id = host.add_widget(WidgetConfig::new(CREW_URL).with_title("Crew")).unwrap();
    host.load_rows(id, rows_from_csv(CREW_CSV));

    let widget = host.widget(id).unwrap();
    assert_eq!(widget.state(), ViewState::Rendered(LayoutMode::Compact));
    assert_eq!(host.page().query_selector_all(host.page().body(), ".mobile-table-card").len(), 2);
    assert!(host.page().query_selector("table").is_none());

    host.resize(1200, ms(0));
    assert_eq!(host.tick(ms(249)), 0);
    assert_eq!(host.tick(ms(250)), 1);

    let widget = host.widget(id).unwrap();
    assert_eq!(widget.mode(), Some(LayoutMode::Full));
    assert!(host.page().query_selector(".mobile-table-card").is_none());
    assert!(host.page().query_selector(".mobile-table-container").is_none());
    assert!(host.page().query_selector("table").is_some());

    let main = mount(host.page(), "main");
    assert_eq!(owned_roots(host.page(), main, id).len(), 2);
}

#[test]
fn test_resize_burst_renders_once_with_latest_width() {
    let mut host = TestPageBuilder::new().with_mount("main").build_host();
    let id = host.add_widget(WidgetConfig::new(CREW_URL)).unwrap();
    host.load_rows(id, rows_from_csv(CREW_CSV));

    host.resize(700, ms(0));
    host.resize(900, ms(100));
    host.resize(400, ms(200));
    assert_eq!(host.next_deadline(), Some(ms(450)));
    assert_eq!(host.tick(ms(300)), 0);
    assert_eq!(host.tick(ms(450)), 1);
    assert_eq!(host.tick(ms(1000)), 0);

    assert_eq!(host.widget(id).unwrap().mode(), Some(LayoutMode::Compact));
}

#[test]
fn test_resize_before_load_does_not_render() {
    let mut host = TestPageBuilder::new().with_mount("main").build_host();
    let id = host.add_widget(WidgetConfig::new(CREW_URL)).unwrap();
    let nodes = host.page().node_count();

    host.resize(500, ms(0));
    assert_eq!(host.tick(ms(250)), 0);
    assert_eq!(host.page().node_count(), nodes);
    assert_eq!(host.widget(id).unwrap().state(), ViewState::Unloaded);
}

#[test]
fn test_resize_resets_query_by_default() {
    let mut host = TestPageBuilder::new().with_mount("main").build_host();
    let id = host.add_widget(WidgetConfig::new(CREW_URL)).unwrap();
    host.load_rows(id, rows_from_csv(FLEET_CSV));
    let input = crate::helpers::search_input(host.widget(id).unwrap(), 0);
    assert!(host.input(input, "def"));
    assert_eq!(host.widget(id).unwrap().visible_rows(host.page()), 1);

    host.resize(1300, ms(0));
    host.tick(ms(250));

    let widget = host.widget(id).unwrap();
    assert!(!widget.filter().is_active());
    assert_eq!(widget.visible_rows(host.page()), 4);
    // The old input is gone
    assert!(!host.page().contains(input));
}

#[test]
fn test_resize_can_retain_query() {
    let mut host = TestPageBuilder::new().with_mount("main").build_host();
    let config = WidgetConfig::new(CREW_URL).with_retain_query_on_resize(true);
    let id = host.add_widget(config).unwrap();
    host.load_rows(id, rows_from_csv(FLEET_CSV));
    let input = crate::helpers::search_input(host.widget(id).unwrap(), 0);
    host.input(input, "def");

    host.resize(500, ms(0));
    host.tick(ms(250));

    let widget = host.widget(id).unwrap();
    assert_eq!(widget.mode(), Some(LayoutMode::Compact));
    assert_eq!(widget.filter().query, "def");
    assert_eq!(widget.visible_rows(host.page()), 1);

    let restored = crate::helpers::search_input(widget, 0);
    assert_eq!(host.page().node(restored).unwrap().value(), "def");
}

#[test]
fn test_no_data_message_survives_resize() {
    let mut host = TestPageBuilder::new().with_mount("main").build_host();
    let id = host.add_widget(WidgetConfig::new(CREW_URL).with_no_data_message("Nothing")).unwrap();
    host.load_rows(id, Vec::new());

    host.resize(500, ms(0));
    assert_eq!(host.tick(ms(250)), 1);

    let widget = host.widget(id).unwrap();
    assert!(matches!(widget.mounted(), Some(Mounted::Message(_))));
    let main = mount(host.page(), "main");
    assert_eq!(host.page().text_content(main), "Nothing");
}

#[test]
fn test_custom_breakpoint_and_window() {
    let mut host = TestPageBuilder::new().with_width(1000).with_mount("main").build_host();
    let config = WidgetConfig::new(CREW_URL).with_breakpoint(1024).with_debounce_ms(50);
    let id = host.add_widget(config).unwrap();
    host.load_rows(id, rows_from_csv(CREW_CSV));
    assert_eq!(host.widget(id).unwrap().mode(), Some(LayoutMode::Compact));

    host.resize(1100, ms(10));
    assert_eq!(host.tick(ms(60)), 1);
    assert_eq!(host.widget(id).unwrap().mode(), Some(LayoutMode::Full));
}
