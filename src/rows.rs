//! Justified rows planner.
//!
//! Photos are taken in input order and grouped greedily into rows. A row
//! closes once its natural width at the target height reaches the container
//! width; the overflowing photo either stays in the row or starts the next
//! one, whichever leaves the row height closer to the target. Each closed
//! row is then scaled so photos, spacing and padding fill the container
//! exactly.
//!
//! # Example
//!
//! ```
//! use photolayout::{LayoutConfig, Photo, rows};
//!
//! let photos = [Photo::new(1.5, 1.0), Photo::new(1.0, 1.0), Photo::new(2.0, 1.0)];
//! let planned = rows::layout(&photos, &LayoutConfig::rows(1000.0, 300.0)).unwrap();
//!
//! assert_eq!(planned.rows.len(), 1);
//! assert_eq!(planned.rows[0].height, 222.222);
//! ```

use alloc::vec::Vec;
use core::ops::Range;

use num_traits::Float;

use crate::config::{LastRow, LayoutConfig, LayoutError};
use crate::geometry::{distribute, positive_or_epsilon, px};
use crate::photo::{Photo, aspect_ratios};
use crate::result::{Placement, Row, RowsLayout};

/// Plan justified rows for `photos`.
///
/// Validates the rows fields of `config` regardless of `config.layout`.
pub fn layout<K>(photos: &[Photo<K>], config: &LayoutConfig) -> Result<RowsLayout, LayoutError> {
    config.validate_rows()?;
    let (ratios, warnings) = aspect_ratios(photos);

    let ranges = partition(&ratios, config);
    let last = ranges.len().saturating_sub(1);
    let rows: Vec<Row> = ranges
        .into_iter()
        .enumerate()
        .map(|(i, range)| build_row(&ratios, range, i == last, config))
        .collect();

    tracing::debug!(
        photos = photos.len(),
        rows = rows.len(),
        container_width = config.container_width,
        "planned justified rows"
    );
    Ok(RowsLayout { rows, warnings })
}

/// Width a row of `count` photos with summed aspect ratio `ratio_sum`
/// occupies at the target height.
fn natural_width(ratio_sum: f64, count: usize, config: &LayoutConfig) -> f64 {
    ratio_sum * config.target_row_height + fixed_width(count, config)
}

/// Spacing and padding of a row of `count` photos.
fn fixed_width(count: usize, config: &LayoutConfig) -> f64 {
    let n = count as f64;
    config.spacing * (n - 1.0) + 2.0 * config.padding * n
}

/// Height at which a row fills the container exactly (unclamped).
fn solved_height(ratio_sum: f64, count: usize, config: &LayoutConfig) -> f64 {
    (config.container_width - fixed_width(count, config)) / ratio_sum
}

/// Split photo indices into rows.
fn partition(ratios: &[f64], config: &LayoutConfig) -> Vec<Range<usize>> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut sum = 0.0;
    let mut i = 0;
    while i < ratios.len() {
        sum += ratios[i];
        let count = i + 1 - start;
        if natural_width(sum, count, config) >= config.container_width {
            if count == 1 {
                // Too wide to share a row with anything.
                rows.push(start..i + 1);
            } else {
                let target = config.target_row_height;
                let without = solved_height(sum - ratios[i], count - 1, config);
                let with = solved_height(sum, count, config);
                if with > 0.0 && Float::abs(with - target) <= Float::abs(without - target) {
                    rows.push(start..i + 1);
                } else {
                    // Close before photo i and reconsider it as a new row.
                    rows.push(start..i);
                    start = i;
                    sum = 0.0;
                    continue;
                }
            }
            start = i + 1;
            sum = 0.0;
        }
        i += 1;
    }
    if start < ratios.len() {
        rows.push(start..ratios.len());
    }
    rows
}

fn build_row(ratios: &[f64], range: Range<usize>, is_last: bool, config: &LayoutConfig) -> Row {
    let slice = &ratios[range.clone()];
    let count = slice.len();
    let sum: f64 = slice.iter().sum();
    let solved = solved_height(sum, count, config);
    let target = config.target_row_height;

    let keep_natural = is_last
        && match config.last_row {
            LastRow::Natural => natural_width(sum, count, config) < config.container_width,
            LastRow::Justify { max_height_ratio } => {
                count == 1 && solved > target * max_height_ratio
            }
        };

    let (height, unjustified) = if keep_natural {
        (target, true)
    } else {
        positive_or_epsilon(solved)
    };
    let raw: Vec<f64> = slice.iter().map(|r| height * r).collect();
    let widths = if unjustified {
        raw.iter().map(|&w| px(w)).collect()
    } else {
        distribute(&raw, config.container_width - fixed_width(count, config))
    };
    let row_height = px(height);
    let items = range
        .zip(widths)
        .map(|(index, width)| Placement {
            index,
            width,
            height: row_height,
        })
        .collect();

    Row {
        height: row_height,
        justified: !unjustified,
        items,
    }
}
