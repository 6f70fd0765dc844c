//! View control: viewport classification, filtering, resize debouncing and
//! the per-instance controller that ties them to the renderers.

mod controller;
mod debounce;
pub mod filter;
mod state;
mod viewport;

pub use controller::ViewController;
pub use debounce::Debouncer;
pub use state::{FilterState, Mounted, MountedView, NoDataReason, ViewState};
pub use viewport::classify;
