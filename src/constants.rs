//! Crate-wide constants.
//!
//! Centralizes the breakpoint, timing values and the DOM class/id contract
//! that host-page stylesheets rely on.

// ============================================================================
// Layout & Timing
// ============================================================================

/// Viewport widths at or below this value render the compact card list
pub const COMPACT_BREAKPOINT: u32 = 768;

/// Quiescence window for resize-triggered re-renders in milliseconds
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

/// Mount point used when the configuration does not name one
pub const DEFAULT_MOUNT_SELECTOR: &str = "main";

// ============================================================================
// DOM Contract
// ============================================================================

/// Class carried by every top-level node a widget instance mounts
pub const GENERATED_CLASS: &str = "google-sheet-table-generated-content";

/// Classes of the desktop table
pub const TABLE_CLASSES: &[&str] = &["table", "table-striped", "table-bordered"];

/// Classes of the wrapper around the desktop table
pub const TABLE_CONTAINER_CLASSES: &[&str] = &["text-center", "mt-3"];

/// Class of the table header section
pub const THEAD_CLASS: &str = "thead";

/// Prefix of the per-instance table body id
pub const BODY_ID_PREFIX: &str = "tableBody-";

/// Classes of the header search inputs
pub const TABLE_SEARCH_CLASSES: &[&str] = &["form-control", "form-control-sm"];

/// Classes of the compact search inputs
pub const CARD_SEARCH_CLASSES: &[&str] = &["form-control", "form-control-sm", "mb-2"];

/// Class of the compact-mode container
pub const CARD_CONTAINER_CLASS: &str = "mobile-table-container";

/// Class of the block holding the compact search inputs
pub const SEARCH_FIELDS_CLASS: &str = "search-fields-container";

/// Class of one card
pub const CARD_CLASS: &str = "mobile-table-card";

/// Class of the details block inside a card
pub const CARD_DETAILS_CLASS: &str = "mobile-table-details";

/// Class of the label span of a card field
pub const CARD_KEY_CLASS: &str = "key-col";

/// Class of the value span of a card field
pub const CARD_VALUE_CLASS: &str = "val-col";

/// Id of the shared stylesheet in the page head
pub const STYLESHEET_ID: &str = "sheet-table-styles";

// ============================================================================
// Data-driven Highlight
// ============================================================================

/// Column inspected for the cancelled-row highlight
pub const STATUS_COLUMN: &str = "Status";

/// Exact status value that triggers the highlight
pub const CANCELLED_STATUS: &str = "Cancelled";

/// Background applied to cancelled rows (faint red)
pub const CANCELLED_BACKGROUND: &str = "rgba(255, 0, 0, 0.1)";

// ============================================================================
// Data Loading
// ============================================================================

/// Maximum number of CSV rows to load
pub const MAX_CSV_ROWS: usize = 100_000;
