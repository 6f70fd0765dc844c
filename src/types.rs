//! Core types for the sheet-table widget.
//!
//! Defines the tagged cell value, rows, the loaded data set, the layout mode
//! and the per-instance identity used to scope generated content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Cell Values
// ============================================================================

/// Largest integer magnitude a numeric cell may carry (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single cell value, resolved at parse time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Text(String),
    Number(f64),
    Boolean(bool),
    Empty,
}

impl Cell {
    /// Infer the scalar type of a raw CSV field.
    ///
    /// Only unambiguous spellings are converted; anything else is kept as
    /// text exactly as written.
    pub fn infer(raw: &str) -> Self {
        match raw {
            "" => Cell::Empty,
            "true" | "TRUE" => Cell::Boolean(true),
            "false" | "FALSE" => Cell::Boolean(false),
            _ if looks_like_float(raw) => match raw.trim().parse::<f64>() {
                Ok(n) if n.abs() < MAX_SAFE_INTEGER => Cell::Number(n),
                _ => Cell::Text(raw.to_string()),
            },
            _ => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write_number(f, *n),
            Cell::Boolean(b) => write!(f, "{}", b),
            Cell::Empty => Ok(()),
        }
    }
}

/// Shortest round-trip form, switching to exponent notation below `1e-6`
/// and from `1e21` up, as browsers print numbers.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", n);
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{}e+{}", mantissa, power),
        _ => f.write_str(&exp),
    }
}

/// Matches `-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?` with surrounding
/// whitespace allowed.
fn looks_like_float(raw: &str) -> bool {
    let s = raw.trim();
    let s = s.strip_prefix('-').unwrap_or(s);
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => {
            (!int.is_empty() || !frac.is_empty())
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => !mantissa.is_empty() && mantissa.bytes().all(|b| b.is_ascii_digit()),
    };

    let exponent_ok = match exponent {
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        }
        None => true,
    };

    mantissa_ok && exponent_ok
}

// ============================================================================
// Rows & Data Sets
// ============================================================================

/// One record: an ordered mapping from column name to cell value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    fields: Vec<(String, Cell)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, or replace the value of an existing one.
    pub fn insert(&mut self, column: impl Into<String>, cell: Cell) {
        let column = column.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = cell,
            None => self.fields.push((column, cell)),
        }
    }

    pub fn with(mut self, column: impl Into<String>, cell: Cell) -> Self {
        self.insert(column, cell);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, cell)| cell)
    }

    /// Display text of a column; missing columns render as empty text.
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(Cell::to_string).unwrap_or_default()
    }

    /// Column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Cell)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, Cell)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, cell) in iter {
            row.insert(column, cell);
        }
        row
    }
}

/// A loaded data set. Replaced wholesale on every load, never mutated.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DataSet {
    rows: Vec<Row>,
    columns: Vec<String>,
}

impl DataSet {
    /// Build a data set, deriving the columns from the first row's key order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().map(str::to_string).collect())
            .unwrap_or_default();
        Self { rows, columns }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Zero rows: the "no data" state.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Shared, read-only handle to a data set.
pub type SharedDataSet = Arc<DataSet>;

// ============================================================================
// Layout & Identity
// ============================================================================

/// Presentation chosen for the current viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Searchable table (desktop)
    Full,
    /// Searchable card list (mobile)
    Compact,
}

/// Identity of one widget instance, random per construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}
