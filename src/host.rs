//! Host runtime: one page and every widget instance mounted on it.
//!
//! The embedding environment drives everything explicitly:
//! - **Events**: resize and input notifications are pushed in by the host.
//! - **Time**: the host passes a monotonic `now` to [`Host::resize`] and
//!   [`Host::tick`]; nothing here reads a wall clock.
//! - **Ordering**: each call runs to completion before the next, like a
//!   single-threaded event queue.

use crate::config::{ConfigError, WidgetConfig};
use crate::data::DataLoader;
use crate::dom::{NodeId, Page};
use crate::types::{InstanceId, Row};
use crate::view::ViewController;
use std::time::Duration;

#[derive(Debug)]
pub struct Host {
    page: Page,
    widgets: Vec<ViewController>,
}

impl Host {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            widgets: Vec::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable page access for host-side markup changes.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn widget(&self, id: InstanceId) -> Option<&ViewController> {
        self.widgets.iter().find(|w| w.id() == id)
    }

    pub fn widgets(&self) -> &[ViewController] {
        &self.widgets
    }

    /// Construct a widget instance. Nothing renders until it is loaded.
    pub fn add_widget(&mut self, config: WidgetConfig) -> Result<InstanceId, ConfigError> {
        let widget = ViewController::new(config, &mut self.page)?;
        let id = widget.id();
        self.widgets.push(widget);
        Ok(id)
    }

    /// Fetch and render the data of one instance.
    ///
    /// Returns `false` when the instance does not exist.
    pub async fn load<L: DataLoader>(&mut self, id: InstanceId, loader: &L) -> bool {
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id() == id) else {
            return false;
        };
        widget.load_and_render(&mut self.page, loader).await;
        true
    }

    /// Render rows the host already holds.
    pub fn load_rows(&mut self, id: InstanceId, rows: Vec<Row>) -> bool {
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id() == id) else {
            return false;
        };
        widget.load(&mut self.page, rows);
        true
    }

    /// Apply a new viewport width and signal every instance's debouncer.
    pub fn resize(&mut self, width: u32, now: Duration) {
        self.page.set_viewport_width(width);
        for widget in &mut self.widgets {
            widget.on_resize(now);
        }
    }

    /// Run due resize re-renders. Returns how many instances re-rendered.
    pub fn tick(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        for widget in &mut self.widgets {
            if widget.tick(&mut self.page, now) {
                fired += 1;
            }
        }
        fired
    }

    /// Earliest pending resize deadline across all instances.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.widgets.iter().filter_map(ViewController::next_deadline).min()
    }

    /// Route typing into `node` to the instance that generated it.
    pub fn input(&mut self, node: NodeId, value: &str) -> bool {
        let Some(owner) = self.page.node(node).and_then(|n| n.owner()) else {
            return false;
        };
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id() == owner) else {
            return false;
        };
        widget.handle_input(&mut self.page, node, value)
    }

    /// Tear down and drop one instance.
    pub fn remove_widget(&mut self, id: InstanceId) -> bool {
        let Some(index) = self.widgets.iter().position(|w| w.id() == id) else {
            return false;
        };
        let mut widget = self.widgets.remove(index);
        widget.teardown(&mut self.page);
        tracing::debug!(instance = %id, "Removed widget");
        true
    }

    /// Re-render one instance immediately.
    pub fn render(&mut self, id: InstanceId) -> bool {
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id() == id) else {
            return false;
        };
        widget.render(&mut self.page);
        true
    }
}
