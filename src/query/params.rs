//! Parsed representation of a layout query string.

use crate::config::{ColumnSizing, LayoutKind};

/// Parsed query parameters. Absent keys fall back to
/// [`LayoutConfig`](crate::LayoutConfig) defaults.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct QueryParams {
    /// Layout mode (`layout`).
    pub layout: Option<LayoutKind>,
    /// Container width (`width`, `containerwidth`).
    pub width: Option<f64>,
    /// Gap between photos (`spacing`).
    pub spacing: Option<f64>,
    /// Per-photo padding (`padding`).
    pub padding: Option<f64>,
    /// Target row height (`targetrowheight`, `rowheight`).
    pub target_row_height: Option<f64>,
    /// Column count (`columns`).
    pub columns: Option<u32>,
    /// Column width policy (`columnsizing`).
    pub column_sizing: Option<ColumnSizing>,
    /// Keep a short last row at target height (`lastrow=natural`).
    pub natural_last_row: Option<bool>,
    /// Stretch limit for a lone last photo (`maxheightratio`).
    pub max_height_ratio: Option<f64>,
}

impl QueryParams {
    /// Create empty parameters.
    pub fn new() -> Self {
        Self::default()
    }
}
