//! Responsive CSV data-table widget.
//!
//! Fetches tabular data, renders it into a host page as a searchable table
//! on wide viewports or a searchable card list on narrow ones, and keeps the
//! view in sync with viewport changes. Any number of instances can share one
//! page without touching each other's nodes.
//!
//! - [`dom`] - in-memory host page the widget renders into
//! - [`data`] - loading, CSV parsing and the row store
//! - [`render`] - table and card renderers, shared stylesheet
//! - [`view`] - per-instance controller, filtering, resize debouncing
//! - [`host`] - event fan-out across all instances on a page

pub mod config;
pub mod constants;
pub mod data;
pub mod dom;
pub mod host;
pub mod logging;
pub mod render;
pub mod types;
pub mod view;

pub use config::{ConfigError, WidgetConfig};
pub use data::{DataError, DataLoader, DataResult, HttpLoader, RowStore, StaticLoader};
pub use dom::{Page, to_html};
pub use host::Host;
pub use logging::init_logging;
pub use types::{Cell, DataSet, InstanceId, LayoutMode, Row};
pub use view::{ViewController, ViewState};
