//! Per-instance view controller.
//!
//! Owns one widget instance's data, lifecycle state, resize debouncer and the
//! handles of everything it mounted. All page mutation goes through the
//! handles it holds or through nodes carrying its [`InstanceId`], so any
//! number of instances can share one page.

use super::debounce::Debouncer;
use super::filter;
use super::state::{FilterState, Mounted, MountedView, NoDataReason, ViewState};
use super::viewport::classify;
use crate::config::{ConfigError, WidgetConfig};
use crate::constants::GENERATED_CLASS;
use crate::data::{DataLoader, DataResult, RowStore, load_rows};
use crate::dom::{NodeId, Page};
use crate::render::{CardRenderer, Renderer, TableRenderer, register_styles};
use crate::types::{InstanceId, LayoutMode, Row, SharedDataSet};
use std::time::Duration;
use tracing::{debug, error, info, warn};

#[derive(Debug)]
pub struct ViewController {
    id: InstanceId,
    config: WidgetConfig,
    store: RowStore,
    state: ViewState,
    /// Reason recorded by the last completed load, shown once mounted
    no_data_reason: NoDataReason,
    mounted: Option<Mounted>,
    filter: FilterState,
    debouncer: Debouncer,
}

impl ViewController {
    /// Validate `config` and register the shared stylesheet on `page`.
    pub fn new(config: WidgetConfig, page: &mut Page) -> Result<Self, ConfigError> {
        config.validate()?;
        register_styles(page);

        let id = InstanceId::new();
        debug!(instance = %id, url = %config.url, mount = %config.mount_selector, "Created widget");

        Ok(Self {
            id,
            debouncer: Debouncer::new(config.debounce_window()),
            config,
            store: RowStore::new(),
            state: ViewState::Unloaded,
            no_data_reason: NoDataReason::EmptyResult,
            mounted: None,
            filter: FilterState::default(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Mode of the mounted presentation, if a data presentation is mounted.
    pub fn mode(&self) -> Option<LayoutMode> {
        match self.state {
            ViewState::Rendered(mode) => Some(mode),
            _ => None,
        }
    }

    pub fn dataset(&self) -> SharedDataSet {
        self.store.current()
    }

    pub fn mounted(&self) -> Option<&Mounted> {
        self.mounted.as_ref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Rows or cards currently displayed.
    pub fn visible_rows(&self, page: &Page) -> usize {
        self.mounted
            .as_ref()
            .and_then(Mounted::view)
            .map(|view| {
                view.units()
                    .into_iter()
                    .filter(|unit| page.is_displayed(*unit))
                    .count()
            })
            .unwrap_or(0)
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Enter `Loading` and return the URL to fetch.
    pub fn begin_load(&mut self) -> &str {
        self.state = ViewState::Loading;
        &self.config.url
    }

    /// Apply a completed load and render the result.
    ///
    /// Failures and empty results both end in the no-data message; the
    /// failure itself is only logged.
    pub fn finish_load(&mut self, page: &mut Page, result: DataResult<Vec<Row>>) {
        self.no_data_reason = match result {
            Ok(rows) => {
                let dataset = self.store.load(rows);
                info!(
                    instance = %self.id,
                    rows = dataset.row_count(),
                    columns = dataset.column_count(),
                    "Data loaded"
                );
                NoDataReason::EmptyResult
            }
            Err(err) => {
                error!(instance = %self.id, url = %self.config.url, error = %err, "Failed to load data");
                self.store.load(Vec::new());
                NoDataReason::LoadFailure
            }
        };

        // Rendered or NoData is only entered once something is mounted
        self.state = ViewState::Loaded;
        self.filter.clear();
        self.render(page);
    }

    /// Fetch, parse and render in one step.
    pub async fn load_and_render<L: DataLoader>(&mut self, page: &mut Page, loader: &L) {
        let url = self.begin_load().to_string();
        let result = load_rows(loader, &url).await;
        self.finish_load(page, result);
    }

    /// Render rows the host already holds.
    pub fn load(&mut self, page: &mut Page, rows: Vec<Row>) {
        self.begin_load();
        self.finish_load(page, Ok(rows));
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn mount_point(&self, page: &Page) -> Option<NodeId> {
        page.query_selector(&self.config.mount_selector)
    }

    /// Replace everything this instance mounted with a fresh presentation.
    ///
    /// Idempotent. A no-op before the first completed load and when the
    /// mount point is absent.
    pub fn render(&mut self, page: &mut Page) {
        if !self.state.has_data() {
            debug!(instance = %self.id, state = ?self.state, "Render skipped, no data yet");
            return;
        }
        let Some(mount) = self.mount_point(page) else {
            warn!(instance = %self.id, selector = %self.config.mount_selector, "Mount point not found");
            return;
        };

        let previous_filter = std::mem::take(&mut self.filter);
        self.teardown(page);

        let dataset = self.store.current();
        if dataset.is_empty() {
            let message = self.heading(page, &self.config.no_data_message);
            page.append_child(mount, message);
            self.mounted = Some(Mounted::Message(message));
            self.state = ViewState::NoData(self.no_data_reason);
            debug!(instance = %self.id, state = ?self.state, "Rendered no-data message");
            return;
        }

        let mode = classify(page.viewport_width(), self.config.breakpoint);
        let tree = match mode {
            LayoutMode::Full => TableRenderer.render(page, &dataset, self.id),
            LayoutMode::Compact => CardRenderer.render(page, &dataset, self.id),
        };

        let title = (!self.config.title.is_empty()).then(|| {
            let title = self.heading(page, &self.config.title);
            page.append_child(mount, title);
            title
        });
        page.append_child(mount, tree.root);

        self.mounted = Some(Mounted::View(MountedView {
            title,
            tree,
            columns: dataset.columns().to_vec(),
        }));
        self.state = ViewState::Rendered(mode);
        debug!(instance = %self.id, ?mode, rows = dataset.row_count(), "Rendered view");

        self.restore_filter(page, previous_filter);
    }

    fn heading(&self, page: &mut Page, text: &str) -> NodeId {
        let h2 = page.create_element("h2");
        page.set_owner(h2, self.id);
        page.add_class(h2, GENERATED_CLASS);
        page.set_text(h2, text);
        h2
    }

    fn restore_filter(&mut self, page: &mut Page, previous: FilterState) {
        if !previous.is_active() {
            return;
        }
        if !self.config.retain_query_on_resize {
            debug!(instance = %self.id, query = %previous.query, "Search query reset by re-render");
            return;
        }
        if let Some(column) = previous.column {
            self.search(page, column, &previous.query);
        }
    }

    /// Remove all and only the nodes this instance mounted.
    ///
    /// Returns the number of nodes freed.
    pub fn teardown(&mut self, page: &mut Page) -> usize {
        let mut roots = self
            .mounted
            .take()
            .map(|mounted| mounted.roots())
            .unwrap_or_default();

        // Also sweep tagged children the handles no longer cover
        if let Some(mount) = self.mount_point(page) {
            for child in page.children(mount) {
                let owned = page.node(*child).is_some_and(|n| n.owner() == Some(self.id));
                if owned && !roots.contains(child) {
                    roots.push(*child);
                }
            }
        }

        let freed: usize = roots.into_iter().map(|root| page.remove(root)).sum();
        if freed > 0 {
            debug!(instance = %self.id, freed, "Teardown");
        }
        freed
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Record a viewport resize at `now`.
    pub fn on_resize(&mut self, now: Duration) {
        self.debouncer.signal(now);
    }

    /// Fire a due resize re-render. Returns `true` when one ran.
    pub fn tick(&mut self, page: &mut Page, now: Duration) -> bool {
        if !self.debouncer.poll(now) || !self.state.has_data() {
            return false;
        }
        self.render(page);
        true
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.debouncer.deadline()
    }

    /// Handle typing into `node`.
    ///
    /// Returns `false` when `node` is not one of this instance's search
    /// inputs. Otherwise the typed column becomes the active filter for every
    /// row or card.
    pub fn handle_input(&mut self, page: &mut Page, node: NodeId, value: &str) -> bool {
        let Some(view) = self.mounted.as_ref().and_then(Mounted::view) else {
            return false;
        };
        let Some(column) = view.column_of(node) else {
            return false;
        };

        page.set_value(node, value);
        filter::apply(page, view, column, value);
        self.filter = FilterState {
            column: Some(column),
            query: value.to_string(),
        };
        true
    }

    /// Type `query` into the search input bound to `column`.
    pub fn search(&mut self, page: &mut Page, column: usize, query: &str) -> bool {
        let Some(node) = self
            .mounted
            .as_ref()
            .and_then(Mounted::view)
            .and_then(|view| view.input_for(column))
        else {
            return false;
        };
        self.handle_input(page, node, query)
    }
}
