//! Balanced columns planner.
//!
//! Photos are assigned in input order to the currently shortest column,
//! measured at the equal column width. With [`ColumnSizing::Ratio`] the
//! columns are then re-sized in a single pass: each column's ratio is the
//! aspect ratio of its stacked photos, `1 / Σ(1 / r)`, and the per-column
//! gaps fold spacing and padding in so that every non-empty column ends
//! up the same height while the overall width stays exact.
//!
//! Ratio widths that would leave a photo without a positive size fall back
//! to equal widths.
//!
//! # Example
//!
//! ```
//! use photolayout::{LayoutConfig, Photo, columns};
//!
//! let photos = [Photo::new(1.0, 1.0); 4];
//! let planned = columns::layout(&photos, &LayoutConfig::columns(1000.0, 2)).unwrap();
//!
//! assert_eq!(planned.columns[0].items.len(), 2);
//! assert_eq!(planned.columns[0].height, planned.columns[1].height);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::config::{ColumnSizing, LayoutConfig, LayoutError};
use crate::geometry::{
    EPSILON, RATIO_DIGITS, balance, positive_or_epsilon, px, round, stacked_height,
    uniform_column_width,
};
use crate::photo::{Photo, aspect_ratios};
use crate::result::{Column, ColumnsLayout, Placement};

/// Plan balanced columns for `photos`.
///
/// Validates the column fields of `config` regardless of `config.layout`.
pub fn layout<K>(photos: &[Photo<K>], config: &LayoutConfig) -> Result<ColumnsLayout, LayoutError> {
    config.validate_columns()?;
    let (ratios, warnings) = aspect_ratios(photos);
    let count = config.columns as usize;

    let uniform = uniform_column_width(config.container_width, config.spacing, count);
    let (content, _) = positive_or_epsilon(uniform - 2.0 * config.padding);
    let heights: Vec<f64> = ratios.iter().map(|r| content / r).collect();
    let balanced = balance(&heights, count, config.spacing, config.padding);

    let (widths, column_ratios, gaps) = match config.column_sizing {
        ColumnSizing::Equal => (vec![uniform; count], None, None),
        ColumnSizing::Ratio => match ratio_sizing(&balanced.members, &ratios, config) {
            Some(sized) => (sized.widths, Some(sized.ratios), Some(sized.gaps)),
            None => (vec![uniform; count], None, None),
        },
    };

    let columns: Vec<Column> = balanced
        .members
        .iter()
        .zip(widths)
        .map(|(members, width)| build_column(members, width, &ratios, config))
        .collect();

    tracing::debug!(
        photos = photos.len(),
        columns = count,
        ratio_sizing = column_ratios.is_some(),
        "planned balanced columns"
    );
    Ok(ColumnsLayout {
        columns,
        ratios: column_ratios,
        gaps,
        warnings,
    })
}

/// Widths, ratios and gaps of ratio-sized columns.
struct RatioSizing {
    widths: Vec<f64>,
    ratios: Vec<f64>,
    gaps: Vec<f64>,
}

/// Size columns by their stacked aspect ratios.
///
/// Returns `None` when there is nothing to weigh or when some photo would
/// end up narrower or shorter than [`EPSILON`].
fn ratio_sizing(members: &[Vec<usize>], ratios: &[f64], config: &LayoutConfig) -> Option<RatioSizing> {
    let column_ratios = stacked_ratios(members, ratios);
    if column_ratios.iter().sum::<f64>() <= 0.0 {
        return None;
    }
    let gaps: Vec<f64> = column_gaps(members, config).into_iter().map(px).collect();
    let widths = ratio_widths(&column_ratios, &gaps, config);

    let fits = members.iter().zip(&widths).all(|(m, &width)| {
        let content = width - 2.0 * config.padding;
        m.iter()
            .all(|&i| content >= EPSILON && content / ratios[i] >= EPSILON)
    });
    if !fits {
        tracing::debug!(
            columns = members.len(),
            "ratio column widths leave no room for photos, using equal widths"
        );
        return None;
    }
    Some(RatioSizing {
        widths,
        ratios: column_ratios,
        gaps,
    })
}

/// Aspect ratio of each column's photos stacked on top of each other.
///
/// An empty column has ratio 0.
fn stacked_ratios(members: &[Vec<usize>], ratios: &[f64]) -> Vec<f64> {
    members
        .iter()
        .map(|m| {
            let reciprocal: f64 = m.iter().map(|&i| 1.0 / ratios[i]).sum();
            if reciprocal > 0.0 {
                round(1.0 / reciprocal, RATIO_DIGITS)
            } else {
                0.0
            }
        })
        .collect()
}

/// Vertical spacing and padding each column carries besides its photos.
fn column_gaps(members: &[Vec<usize>], config: &LayoutConfig) -> Vec<f64> {
    members
        .iter()
        .map(|m| match m.len() {
            0 => 0.0,
            n => config.spacing * (n - 1) as f64 + 2.0 * config.padding * n as f64,
        })
        .collect()
}

/// Outer column widths from stacked ratios and gaps.
///
/// Computed for all columns at once: each width depends on every other
/// column's ratio and gap. Content width `c_i` solves
/// `c_i / ratio_i + gap_i = H` for one common height `H`, with the content
/// widths summing to what spacing and padding leave of the container.
fn ratio_widths(ratios: &[f64], gaps: &[f64], config: &LayoutConfig) -> Vec<f64> {
    let n = ratios.len() as f64;
    let fixed = config.spacing * (n - 1.0) + 2.0 * config.padding * n;
    let total: f64 = ratios.iter().sum();
    gaps.iter()
        .zip(ratios)
        .map(|(&gap, &ratio)| {
            let adjusted: f64 = gaps.iter().zip(ratios).map(|(g, r)| (gap - g) * r).sum();
            (config.container_width - fixed - adjusted) * ratio / total + 2.0 * config.padding
        })
        .collect()
}

fn build_column(members: &[usize], width: f64, ratios: &[f64], config: &LayoutConfig) -> Column {
    let (content, _) = positive_or_epsilon(width - 2.0 * config.padding);
    let raw: Vec<f64> = members.iter().map(|&i| content / ratios[i]).collect();
    let height = stacked_height(raw.iter().copied(), config.spacing, config.padding);
    let items = members
        .iter()
        .zip(&raw)
        .map(|(&index, &h)| Placement {
            index,
            width: px(content),
            height: px(h),
        })
        .collect();
    Column {
        width: px(width),
        height: px(height),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(ratios: &[f64]) -> Vec<Photo> {
        ratios.iter().map(|&r| Photo::new(r * 100.0, 100.0)).collect()
    }

    fn indices(col: &Column) -> Vec<usize> {
        col.items.iter().map(|p| p.index).collect()
    }

    #[test]
    fn equal_columns_for_squares() {
        let planned = layout(&photos(&[1.0; 4]), &LayoutConfig::columns(1000.0, 2)).unwrap();
        assert_eq!(indices(&planned.columns[0]), [0, 2]);
        assert_eq!(indices(&planned.columns[1]), [1, 3]);
        assert_eq!(planned.columns[0].height, 1000.0);
        assert_eq!(planned.columns[1].height, 1000.0);
        assert!(planned.ratios.is_none());
        assert!(planned.gaps.is_none());
    }

    #[test]
    fn photo_size_follows_column_width() {
        let config = LayoutConfig::columns(1000.0, 3).spacing(20.0).padding(5.0);
        let planned = layout(&photos(&[2.0, 0.5, 1.0]), &config).unwrap();
        // (1000 - 40) / 3 = 320 outer, 310 content
        for col in &planned.columns {
            assert_eq!(col.width, 320.0);
        }
        let first = planned.columns[0].items[0];
        assert_eq!((first.width, first.height), (310.0, 155.0));
        let second = planned.columns[1].items[0];
        assert_eq!((second.width, second.height), (310.0, 620.0));
    }

    #[test]
    fn fewer_photos_than_columns_leaves_empty_columns() {
        let planned = layout(&photos(&[1.0, 1.5]), &LayoutConfig::columns(900.0, 4)).unwrap();
        assert_eq!(planned.columns.len(), 4);
        assert!(planned.columns[2].items.is_empty());
        assert_eq!(planned.columns[3].height, 0.0);
    }

    #[test]
    fn ratio_sizing_equalizes_column_heights() {
        // Equal-width heights 500, 500, 1000 → columns {0, 2} and {1}.
        // Stacked ratios 1/3 and 1 give content widths 250 and 750.
        let config = LayoutConfig::columns(1000.0, 2).column_sizing(ColumnSizing::Ratio);
        let planned = layout(&photos(&[1.0, 1.0, 0.5]), &config).unwrap();
        assert_eq!(planned.ratios, Some(vec![0.33333, 1.0]));
        assert_eq!(planned.gaps, Some(vec![0.0, 0.0]));
        assert!((planned.columns[0].width - 250.0).abs() < 0.01);
        assert!((planned.columns[1].width - 750.0).abs() < 0.01);
        assert!((planned.columns[0].height - 750.0).abs() < 0.01);
        assert!((planned.columns[1].height - 750.0).abs() < 0.01);
    }

    #[test]
    fn ratio_sizing_keeps_total_width() {
        let config = LayoutConfig::columns(1200.0, 3)
            .spacing(12.0)
            .padding(6.0)
            .column_sizing(ColumnSizing::Ratio);
        let planned = layout(&photos(&[1.5, 0.67, 1.0, 1.78, 0.75, 1.33, 2.0]), &config).unwrap();
        let total: f64 = planned.columns.iter().map(|c| c.width).sum();
        assert!((total + 2.0 * 12.0 - 1200.0).abs() < 0.01, "total = {total}");
        let heights: Vec<f64> = planned.columns.iter().map(|c| c.height).collect();
        let spread = heights.iter().copied().fold(f64::MIN, f64::max)
            - heights.iter().copied().fold(f64::MAX, f64::min);
        assert!(spread < 0.1, "heights = {heights:?}");
    }

    #[test]
    fn stacked_ratio_per_column() {
        let members = [vec![0, 2], vec![1], vec![]];
        assert_eq!(stacked_ratios(&members, &[1.0, 1.0, 0.5]), [0.33333, 1.0, 0.0]);
    }

    #[test]
    fn crowded_column_falls_back_to_equal_widths() {
        // Twenty wide photos with 100 px spacing need more height than one
        // very wide photo can match at any positive width.
        let config = LayoutConfig::columns(300.0, 2)
            .spacing(100.0)
            .column_sizing(ColumnSizing::Ratio);
        let members = [vec![0], (1..21).collect::<Vec<usize>>()];
        let ratios = [10.0; 21];
        let raw = ratio_widths(
            &stacked_ratios(&members, &ratios),
            &column_gaps(&members, &config),
            &config,
        );
        assert!(raw[1] < 0.0);
        assert!(ratio_sizing(&members, &ratios, &config).is_none());
    }

    #[test]
    fn column_gaps_count_spacing_and_padding() {
        let config = LayoutConfig::columns(1000.0, 3).spacing(10.0).padding(4.0);
        let members = [vec![0, 1, 2], vec![3], vec![]];
        assert_eq!(column_gaps(&members, &config), [44.0, 8.0, 0.0]);
    }

    #[test]
    fn ratio_sizing_without_photos_is_equal() {
        let config = LayoutConfig::columns(900.0, 3).column_sizing(ColumnSizing::Ratio);
        let planned = layout::<()>(&[], &config).unwrap();
        assert!(planned.columns.iter().all(|c| c.items.is_empty()));
        assert_eq!(planned.columns[0].width, 300.0);
        assert!(planned.ratios.is_none());
    }

    #[test]
    fn zero_columns_is_a_config_error() {
        assert_eq!(
            layout(&photos(&[1.0]), &LayoutConfig::columns(1000.0, 0)),
            Err(LayoutError::InvalidColumns)
        );
    }
}
