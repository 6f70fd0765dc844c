//! Data loading and handling module
//!
//! Fetches CSV payloads, parses them into typed rows and holds the loaded
//! data set for the renderers.
//!
//! ## Error Handling
//!
//! All data operations return `DataResult<T>` which uses the `DataError` type.
//! The view layer collapses every error into its "no data" presentation and
//! only logs the detail.

mod csv_parser;
mod error;
mod loader;
mod store;

pub use csv_parser::*;
pub use error::*;
pub use loader::*;
pub use store::*;
