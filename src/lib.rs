//! Photo gallery layout computation: justified rows, balanced columns, and masonry.
//!
//! Pure geometry: no rendering, no I/O, `no_std` compatible (needs `alloc`).
//! A layout call is a pure function of the photos and the [`LayoutConfig`].
//!
//! # Modules
//!
//! - [`config`]: Layout mode, configuration builder, validation, errors
//! - [`photo`]: Input records and degenerate-input warnings
//! - [`rows`]: Justified rows planner
//! - [`columns`]: Balanced columns planner with optional width ratios
//! - [`masonry`]: Waterfall planner with uniform column widths
//! - [`result`]: Shared output model
//! - [`geometry`]: Rounding and column-balancing primitives
//! - `query`: Query-string configuration (feature `query`)
//!
//! # Example
//!
//! ```
//! use photolayout::{LayoutConfig, Photo};
//!
//! let photos = [Photo::new(1500.0, 1000.0), Photo::new(800.0, 800.0), Photo::new(2000.0, 1000.0)];
//! let result = LayoutConfig::rows(1000.0, 300.0).compute(&photos).unwrap();
//!
//! assert_eq!(result.rows_count, Some(1));
//! let total: f64 = result.photos.iter().map(|p| p.width).sum();
//! assert!((total - 1000.0).abs() < 1e-3);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod columns;
pub mod config;
pub mod geometry;
pub mod masonry;
pub mod photo;
#[cfg(feature = "query")]
pub mod query;
pub mod result;
pub mod rows;

pub use config::{ColumnSizing, LastRow, LayoutConfig, LayoutError, LayoutKind};
pub use photo::{LayoutWarning, Photo};
pub use result::{
    Column, ColumnWidth, ColumnsInfo, ColumnsLayout, LayoutResult, Placement, PhotoLayout, Row,
    RowsLayout,
};

/// Compute the layout selected by `config.layout` for `photos`.
///
/// Shorthand for [`LayoutConfig::compute`].
pub fn layout<K: Clone>(
    photos: &[Photo<K>],
    config: &LayoutConfig,
) -> Result<LayoutResult<K>, LayoutError> {
    config.compute(photos)
}
