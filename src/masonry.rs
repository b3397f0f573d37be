//! Masonry (waterfall) planner.
//!
//! Same shortest-column-first assignment as the columns planner, but
//! columns always share the container width equally and column heights
//! are left uneven.

use alloc::vec::Vec;

use crate::config::{LayoutConfig, LayoutError};
use crate::geometry::{balance, positive_or_epsilon, px, uniform_column_width};
use crate::photo::{Photo, aspect_ratios};
use crate::result::{Column, ColumnsLayout, Placement};

/// Plan masonry columns for `photos`.
///
/// Validates the column fields of `config` regardless of `config.layout`.
pub fn layout<K>(photos: &[Photo<K>], config: &LayoutConfig) -> Result<ColumnsLayout, LayoutError> {
    config.validate_columns()?;
    let (ratios, warnings) = aspect_ratios(photos);
    let count = config.columns as usize;

    let width = uniform_column_width(config.container_width, config.spacing, count);
    let (content, _) = positive_or_epsilon(width - 2.0 * config.padding);
    let heights: Vec<f64> = ratios.iter().map(|r| content / r).collect();
    let balanced = balance(&heights, count, config.spacing, config.padding);

    let columns: Vec<Column> = balanced
        .members
        .into_iter()
        .zip(balanced.heights)
        .map(|(members, height)| Column {
            width: px(width),
            height: px(height),
            items: members
                .into_iter()
                .map(|index| Placement {
                    index,
                    width: px(content),
                    height: px(heights[index]),
                })
                .collect(),
        })
        .collect();

    tracing::debug!(
        photos = photos.len(),
        columns = count,
        "planned masonry columns"
    );
    Ok(ColumnsLayout {
        columns,
        ratios: None,
        gaps: None,
        warnings,
    })
}
