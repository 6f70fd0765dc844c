//! Row store: the data set currently held by a widget instance.

use crate::types::{DataSet, Row, SharedDataSet};
use std::sync::Arc;

/// Holds the loaded data set and hands it out read-only to renderers.
#[derive(Clone, Debug, Default)]
pub struct RowStore {
    current: SharedDataSet,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held data set with `rows`.
    ///
    /// Columns come from the first row's key order and are not recomputed
    /// per row. Zero rows yields the empty data set.
    pub fn load(&mut self, rows: Vec<Row>) -> SharedDataSet {
        self.current = Arc::new(DataSet::from_rows(rows));
        Arc::clone(&self.current)
    }

    /// The held data set. Never mutates.
    pub fn current(&self) -> SharedDataSet {
        Arc::clone(&self.current)
    }
}
