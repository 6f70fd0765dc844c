//! Viewport classification.

use crate::types::LayoutMode;

/// Classify a viewport width: at or below `breakpoint` is `Compact`.
pub fn classify(width: u32, breakpoint: u32) -> LayoutMode {
    if width <= breakpoint {
        LayoutMode::Compact
    } else {
        LayoutMode::Full
    }
}
