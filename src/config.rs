//! Layout configuration, validation, and dispatch to the planners.
//!
//! # Example
//!
//! ```
//! use photolayout::{ColumnSizing, LayoutConfig, LayoutKind, Photo};
//!
//! let config = LayoutConfig::columns(1200.0, 3)
//!     .spacing(20.0)
//!     .padding(5.0)
//!     .column_sizing(ColumnSizing::Ratio);
//! assert_eq!(config.layout, LayoutKind::Columns);
//!
//! let photos = [Photo::new(3.0, 2.0), Photo::new(2.0, 3.0), Photo::new(1.0, 1.0)];
//! let result = config.compute(&photos).unwrap();
//! assert_eq!(result.columns.as_ref().map(|c| c.columns_count), Some(3));
//! ```

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::photo::Photo;
use crate::result::LayoutResult;

/// Row height used when none is configured.
pub const DEFAULT_TARGET_ROW_HEIGHT: f64 = 300.0;

/// Column count used when none is configured.
pub const DEFAULT_COLUMNS: u32 = 3;

/// Largest stretch, relative to the target row height, allowed for a
/// single-photo last row under [`LastRow::Justify`].
pub const DEFAULT_MAX_HEIGHT_RATIO: f64 = 2.0;

/// Which planner to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayoutKind {
    /// Justified rows of equal height per row.
    #[default]
    Rows,
    /// Balanced columns, optionally with content-proportional widths.
    Columns,
    /// Waterfall into equal-width columns.
    Masonry,
}

impl LayoutKind {
    /// Lowercase name as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::Columns => "columns",
            Self::Masonry => "masonry",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutKind {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("rows") {
            Ok(Self::Rows)
        } else if s.eq_ignore_ascii_case("columns") {
            Ok(Self::Columns)
        } else if s.eq_ignore_ascii_case("masonry") {
            Ok(Self::Masonry)
        } else {
            tracing::debug!(layout = s, "unrecognized layout mode");
            Err(LayoutError::UnknownLayout)
        }
    }
}

/// How column widths are chosen in [`LayoutKind::Columns`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnSizing {
    /// All columns share the container width equally.
    #[default]
    Equal,
    /// Each column's width follows the aspect ratio of its stacked photos
    /// so that column heights come out equal; emits `columns_ratios` and
    /// `columns_gaps`. Falls back to equal widths when that would leave a
    /// photo without a positive size.
    Ratio,
}

/// Treatment of the final row in [`LayoutKind::Rows`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum LastRow {
    /// Justify like every other row, except a lone photo that would be
    /// stretched beyond `max_height_ratio × target_row_height`; that one
    /// keeps the target height.
    Justify {
        /// Upper bound on the stretch of a single-photo last row.
        max_height_ratio: f64,
    },
    /// Keep the target height when the row does not reach the container
    /// width on its own.
    Natural,
}

impl Default for LastRow {
    fn default() -> Self {
        Self::Justify {
            max_height_ratio: DEFAULT_MAX_HEIGHT_RATIO,
        }
    }
}

/// Layout configuration for one call.
///
/// Fields that only apply to another mode are ignored (and not validated).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutConfig {
    /// Planner selector.
    pub layout: LayoutKind,
    /// Container width in pixels.
    pub container_width: f64,
    /// Gap between neighbouring photos, in pixels.
    pub spacing: f64,
    /// Border around each photo on every side, in pixels.
    pub padding: f64,
    /// Desired row height before justification (rows).
    pub target_row_height: f64,
    /// Number of columns (columns, masonry).
    pub columns: u32,
    /// Column width policy (columns).
    pub column_sizing: ColumnSizing,
    /// Final row policy (rows).
    pub last_row: LastRow,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(LayoutKind::Rows, 0.0)
    }
}

impl LayoutConfig {
    /// Create a configuration with default spacing, padding and mode fields.
    ///
    /// `container_width` has no sensible default; callers of
    /// [`Default`] must set it before computing.
    pub fn new(layout: LayoutKind, container_width: f64) -> Self {
        Self {
            layout,
            container_width,
            spacing: 0.0,
            padding: 0.0,
            target_row_height: DEFAULT_TARGET_ROW_HEIGHT,
            columns: DEFAULT_COLUMNS,
            column_sizing: ColumnSizing::Equal,
            last_row: LastRow::default(),
        }
    }

    /// Justified rows at the given target height.
    pub fn rows(container_width: f64, target_row_height: f64) -> Self {
        Self::new(LayoutKind::Rows, container_width).target_row_height(target_row_height)
    }

    /// Balanced columns.
    pub fn columns(container_width: f64, columns: u32) -> Self {
        Self::new(LayoutKind::Columns, container_width).column_count(columns)
    }

    /// Masonry (waterfall) columns.
    pub fn masonry(container_width: f64, columns: u32) -> Self {
        Self::new(LayoutKind::Masonry, container_width).column_count(columns)
    }

    /// Set the gap between photos.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the per-photo padding.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the target row height.
    pub fn target_row_height(mut self, height: f64) -> Self {
        self.target_row_height = height;
        self
    }

    /// Set the number of columns.
    pub fn column_count(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    /// Set the column width policy.
    pub fn column_sizing(mut self, sizing: ColumnSizing) -> Self {
        self.column_sizing = sizing;
        self
    }

    /// Set the last row policy.
    pub fn last_row(mut self, last_row: LastRow) -> Self {
        self.last_row = last_row;
        self
    }

    /// Check every field the selected mode reads.
    pub fn validate(&self) -> Result<(), LayoutError> {
        match self.layout {
            LayoutKind::Rows => self.validate_rows(),
            LayoutKind::Columns | LayoutKind::Masonry => self.validate_columns(),
        }
    }

    /// Run the planner selected by [`layout`](Self::layout).
    ///
    /// Fails only on invalid configuration; degenerate photos are reported
    /// in [`LayoutResult::warnings`].
    pub fn compute<K: Clone>(&self, photos: &[Photo<K>]) -> Result<LayoutResult<K>, LayoutError> {
        match self.layout {
            LayoutKind::Rows => {
                let planned = crate::rows::layout(photos, self)?;
                Ok(LayoutResult::from_rows(photos, planned, self))
            }
            LayoutKind::Columns => {
                let planned = crate::columns::layout(photos, self)?;
                Ok(LayoutResult::from_columns(LayoutKind::Columns, photos, planned, self))
            }
            LayoutKind::Masonry => {
                let planned = crate::masonry::layout(photos, self)?;
                Ok(LayoutResult::from_columns(LayoutKind::Masonry, photos, planned, self))
            }
        }
    }

    pub(crate) fn validate_rows(&self) -> Result<(), LayoutError> {
        self.validate_common()?;
        if !is_positive(self.target_row_height) {
            tracing::debug!(
                target_row_height = self.target_row_height,
                "rejecting target row height"
            );
            return Err(LayoutError::InvalidTargetRowHeight);
        }
        if let LastRow::Justify { max_height_ratio } = self.last_row
            && !is_positive(max_height_ratio)
        {
            tracing::debug!(max_height_ratio, "rejecting last row height ratio");
            return Err(LayoutError::InvalidMaxHeightRatio);
        }
        Ok(())
    }

    pub(crate) fn validate_columns(&self) -> Result<(), LayoutError> {
        self.validate_common()?;
        // At least one pixel per column; also bounds the per-column allocations.
        if self.columns == 0 || f64::from(self.columns) > self.container_width {
            tracing::debug!(
                columns = self.columns,
                container_width = self.container_width,
                "rejecting column count"
            );
            return Err(LayoutError::InvalidColumns);
        }
        Ok(())
    }

    fn validate_common(&self) -> Result<(), LayoutError> {
        if !is_positive(self.container_width) {
            tracing::debug!(
                container_width = self.container_width,
                "rejecting container width"
            );
            return Err(LayoutError::InvalidContainerWidth);
        }
        if !is_non_negative(self.spacing) {
            tracing::debug!(spacing = self.spacing, "rejecting spacing");
            return Err(LayoutError::InvalidSpacing);
        }
        if !is_non_negative(self.padding) {
            tracing::debug!(padding = self.padding, "rejecting padding");
            return Err(LayoutError::InvalidPadding);
        }
        Ok(())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Configuration rejected before any layout work.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Container width is zero, negative or not finite.
    #[error("container width must be a finite positive number")]
    InvalidContainerWidth,
    /// Target row height is zero, negative or not finite.
    #[error("target row height must be a finite positive number")]
    InvalidTargetRowHeight,
    /// Column count is zero or exceeds the container width in pixels.
    #[error("column count must be between 1 and the container width")]
    InvalidColumns,
    /// Spacing is negative or not finite.
    #[error("spacing must be a finite non-negative number")]
    InvalidSpacing,
    /// Padding is negative or not finite.
    #[error("padding must be a finite non-negative number")]
    InvalidPadding,
    /// Last-row height ratio is zero, negative or not finite.
    #[error("last row max height ratio must be a finite positive number")]
    InvalidMaxHeightRatio,
    /// Layout mode name is not one of `rows`, `columns`, `masonry`.
    #[error("unknown layout mode, expected rows|columns|masonry")]
    UnknownLayout,
}
