//! Shared output model.
//!
//! Planners produce [`RowsLayout`] or [`ColumnsLayout`], which refer to
//! photos by input index. [`LayoutResult`] flattens either into one
//! [`PhotoLayout`] per photo, in input order, with positions resolved.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{LayoutConfig, LayoutKind};
use crate::geometry::{RATIO_DIGITS, px, round};
use crate::photo::{LayoutWarning, Photo};

/// Computed size of one photo inside a row or column.
///
/// Sizes exclude padding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Input index of the photo.
    pub index: usize,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// One justified row.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Height shared by every photo in the row.
    pub height: f64,
    /// Whether the row was stretched to the container width.
    pub justified: bool,
    /// Photos left to right.
    pub items: Vec<Placement>,
}

/// Output of the rows planner.
#[derive(Clone, Debug, PartialEq)]
pub struct RowsLayout {
    /// Rows top to bottom.
    pub rows: Vec<Row>,
    /// Per-photo anomalies.
    pub warnings: Vec<LayoutWarning>,
}

/// One column.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Outer width including per-photo padding.
    pub width: f64,
    /// Accumulated height: photo heights plus padding and spacing.
    pub height: f64,
    /// Photos top to bottom.
    pub items: Vec<Placement>,
}

/// Output of the columns and masonry planners.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnsLayout {
    /// Columns left to right.
    pub columns: Vec<Column>,
    /// Stacked aspect ratio per column (ratio column sizing only).
    pub ratios: Option<Vec<f64>>,
    /// Vertical spacing and padding per column (ratio column sizing only).
    pub gaps: Option<Vec<f64>>,
    /// Per-photo anomalies.
    pub warnings: Vec<LayoutWarning>,
}

/// Final geometry of one photo.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PhotoLayout<K = ()> {
    /// Caller key, cloned from the input photo.
    pub key: K,
    /// Input index.
    pub index: usize,
    /// Width in pixels, padding excluded.
    pub width: f64,
    /// Height in pixels, padding excluded.
    pub height: f64,
    /// Left edge of the padded box inside the container.
    pub x: f64,
    /// Top edge of the padded box inside the container.
    pub y: f64,
    /// Row the photo belongs to (rows).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub row_index: Option<usize>,
    /// Column the photo belongs to (columns, masonry).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub column_index: Option<usize>,
}

/// Width of a column as a renderer should express it:
/// `(100% − subtract px) × fraction + add px`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnWidth {
    /// Share of the remaining width.
    pub fraction: f64,
    /// Pixels removed from the container width before taking the share.
    pub subtract: f64,
    /// Pixels added after taking the share.
    pub add: f64,
}

impl ColumnWidth {
    /// Resolve to pixels for a concrete container width.
    pub fn resolve(&self, container_width: f64) -> f64 {
        (container_width - self.subtract) * self.fraction + self.add
    }
}

/// Column metadata for renderers (columns, masonry).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ColumnsInfo {
    /// Number of columns, including empty ones.
    pub columns_count: usize,
    /// Stacked aspect ratio per column (ratio column sizing only); the
    /// column's share of the width is its ratio over the sum.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub columns_ratios: Option<Vec<f64>>,
    /// Vertical spacing and padding per column (ratio column sizing only).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub columns_gaps: Option<Vec<f64>>,
    /// Spacing the layout was computed with.
    pub spacing: f64,
    /// Padding the layout was computed with.
    pub padding: f64,
}

impl ColumnsInfo {
    /// Width expression for column `index`, or `None` if out of range.
    ///
    /// Without ratios every column gets `(100% − spacing × (n − 1)) / n`.
    /// With ratios the subtracted pixels also fold in the padding of every
    /// column and the gap difference between this column and the others,
    /// weighted by their ratios, so content edges line up once padding is
    /// applied.
    pub fn column_width(&self, index: usize) -> Option<ColumnWidth> {
        if index >= self.columns_count {
            return None;
        }
        let n = self.columns_count as f64;
        let (Some(ratios), Some(gaps)) = (&self.columns_ratios, &self.columns_gaps) else {
            return Some(ColumnWidth {
                fraction: 1.0 / n,
                subtract: px(self.spacing * (n - 1.0)),
                add: 0.0,
            });
        };
        let total: f64 = ratios.iter().sum();
        if total <= 0.0 {
            return Some(ColumnWidth {
                fraction: 1.0 / n,
                subtract: px(self.spacing * (n - 1.0)),
                add: 0.0,
            });
        }
        let adjusted: f64 = ratios
            .iter()
            .zip(gaps)
            .map(|(ratio, gap)| (gaps[index] - gap) * ratio)
            .sum();
        Some(ColumnWidth {
            fraction: round(ratios[index] / total, RATIO_DIGITS),
            subtract: px(self.spacing * (n - 1.0) + 2.0 * self.padding * n + adjusted),
            add: 2.0 * self.padding,
        })
    }
}

/// Layout of every photo plus mode metadata.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutResult<K = ()> {
    /// Mode that produced this result.
    pub layout: LayoutKind,
    /// One entry per input photo, in input order.
    pub photos: Vec<PhotoLayout<K>>,
    /// Number of rows (rows).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rows_count: Option<usize>,
    /// Column metadata (columns, masonry).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub columns: Option<ColumnsInfo>,
    /// Total height of the laid out content, in pixels.
    pub content_height: f64,
    /// Per-photo anomalies, in input order.
    pub warnings: Vec<LayoutWarning>,
}

impl<K> LayoutResult<K> {
    /// Number of photos laid out.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Whether no photos were laid out.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Geometry of the photo carrying `key`.
    pub fn get(&self, key: &K) -> Option<&PhotoLayout<K>>
    where
        K: PartialEq,
    {
        self.photos.iter().find(|p| p.key == *key)
    }

    /// Photos of row `row`, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &PhotoLayout<K>> {
        self.photos.iter().filter(move |p| p.row_index == Some(row))
    }

    /// Photos of column `column`, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &PhotoLayout<K>> {
        self.photos
            .iter()
            .filter(move |p| p.column_index == Some(column))
    }
}

impl<K: Clone> LayoutResult<K> {
    pub(crate) fn from_rows(photos: &[Photo<K>], planned: RowsLayout, config: &LayoutConfig) -> Self {
        let pad = config.padding;
        let mut slots: Vec<Option<PhotoLayout<K>>> = Vec::new();
        slots.resize_with(photos.len(), || None);

        let mut y = 0.0;
        for (row_index, row) in planned.rows.iter().enumerate() {
            let mut x = 0.0;
            for item in &row.items {
                slots[item.index] = Some(PhotoLayout {
                    key: photos[item.index].key.clone(),
                    index: item.index,
                    width: item.width,
                    height: item.height,
                    x: px(x),
                    y: px(y),
                    row_index: Some(row_index),
                    column_index: None,
                });
                x += item.width + 2.0 * pad + config.spacing;
            }
            y += row.height + 2.0 * pad + config.spacing;
        }
        let content_height = if planned.rows.is_empty() {
            0.0
        } else {
            px(y - config.spacing)
        };

        Self {
            layout: LayoutKind::Rows,
            photos: slots.into_iter().flatten().collect(),
            rows_count: Some(planned.rows.len()),
            columns: None,
            content_height,
            warnings: planned.warnings,
        }
    }

    pub(crate) fn from_columns(
        layout: LayoutKind,
        photos: &[Photo<K>],
        planned: ColumnsLayout,
        config: &LayoutConfig,
    ) -> Self {
        let pad = config.padding;
        let mut slots: Vec<Option<PhotoLayout<K>>> = Vec::new();
        slots.resize_with(photos.len(), || None);

        let mut x = 0.0;
        let mut content_height: f64 = 0.0;
        for (column_index, column) in planned.columns.iter().enumerate() {
            let mut y = 0.0;
            for item in &column.items {
                slots[item.index] = Some(PhotoLayout {
                    key: photos[item.index].key.clone(),
                    index: item.index,
                    width: item.width,
                    height: item.height,
                    x: px(x),
                    y: px(y),
                    row_index: None,
                    column_index: Some(column_index),
                });
                y += item.height + 2.0 * pad + config.spacing;
            }
            content_height = content_height.max(column.height);
            x += column.width + config.spacing;
        }

        Self {
            layout,
            photos: slots.into_iter().flatten().collect(),
            rows_count: None,
            columns: Some(ColumnsInfo {
                columns_count: planned.columns.len(),
                columns_ratios: planned.ratios,
                columns_gaps: planned.gaps,
                spacing: config.spacing,
                padding: config.padding,
            }),
            content_height: px(content_height),
            warnings: planned.warnings,
        }
    }
}
