//! Invariants every planner must hold for arbitrary galleries.

use photolayout::*;
use proptest::prelude::*;

fn gallery() -> impl Strategy<Value = Vec<Photo>> {
    prop::collection::vec(
        (0.25f64..4.0).prop_map(|ratio| Photo::new(ratio * 1000.0, 1000.0)),
        0..40,
    )
}

fn rows_config() -> impl Strategy<Value = LayoutConfig> {
    (300.0f64..3000.0, 50.0f64..500.0, 0.0f64..20.0, 0.0f64..10.0).prop_map(
        |(width, height, spacing, padding)| {
            LayoutConfig::rows(width, height)
                .spacing(spacing)
                .padding(padding)
        },
    )
}

fn columns_config(kind: LayoutKind) -> impl Strategy<Value = LayoutConfig> {
    (300.0f64..3000.0, 1u32..8, 0.0f64..20.0, 0.0f64..10.0).prop_map(
        move |(width, columns, spacing, padding)| {
            LayoutConfig::new(kind, width)
                .column_count(columns)
                .spacing(spacing)
                .padding(padding)
        },
    )
}

fn uniform_config() -> impl Strategy<Value = LayoutConfig> {
    prop_oneof![
        rows_config(),
        columns_config(LayoutKind::Columns),
        columns_config(LayoutKind::Masonry),
    ]
}

fn any_config() -> impl Strategy<Value = LayoutConfig> {
    prop_oneof![
        uniform_config(),
        columns_config(LayoutKind::Columns)
            .prop_map(|c| c.column_sizing(ColumnSizing::Ratio)),
    ]
}

proptest! {
    #[test]
    fn every_photo_appears_exactly_once(photos in gallery(), config in any_config()) {
        let result = config.compute(&photos).unwrap();
        prop_assert_eq!(result.len(), photos.len());
        for (i, p) in result.photos.iter().enumerate() {
            prop_assert_eq!(p.index, i);
            match config.layout {
                LayoutKind::Rows => {
                    prop_assert!(p.row_index.is_some());
                    prop_assert!(p.column_index.is_none());
                }
                _ => {
                    prop_assert!(p.row_index.is_none());
                    prop_assert!(p.column_index.unwrap() < config.columns as usize);
                }
            }
        }
    }

    #[test]
    fn layout_is_deterministic(photos in gallery(), config in any_config()) {
        prop_assert_eq!(config.compute(&photos), config.compute(&photos));
    }

    #[test]
    fn geometry_is_positive(photos in gallery(), config in any_config()) {
        let result = config.compute(&photos).unwrap();
        for p in &result.photos {
            prop_assert!(p.width > 0.0 && p.height > 0.0, "{:?}", p);
            prop_assert!(p.x >= 0.0 && p.y >= 0.0, "{:?}", p);
        }
        prop_assert!(result.warnings.is_empty());
    }

    #[test]
    fn aspect_ratio_is_preserved(photos in gallery(), config in any_config()) {
        let result = config.compute(&photos).unwrap();
        for (p, photo) in result.photos.iter().zip(&photos) {
            let ratio = photo.width / photo.height;
            let err = (p.width - p.height * ratio).abs();
            prop_assert!(err <= 0.002 * (1.0 + ratio), "{:?} ratio {} err {}", p, ratio, err);
        }
    }

    #[test]
    fn justified_rows_fill_the_container(photos in gallery(), config in rows_config()) {
        let planned = rows::layout(&photos, &config).unwrap();
        let Some((_, full)) = planned.rows.split_last() else {
            return Ok(());
        };
        for row in full {
            prop_assert!(row.justified);
            let n = row.items.len() as f64;
            let used = row.items.iter().map(|p| p.width).sum::<f64>()
                + config.spacing * (n - 1.0)
                + 2.0 * config.padding * n;
            prop_assert!((used - config.container_width).abs() <= 1e-3 + 1e-9,
                "row fills {} of {}", used, config.container_width);
        }
    }

    #[test]
    fn rows_keep_input_order(photos in gallery(), config in rows_config()) {
        let result = config.compute(&photos).unwrap();
        let rows: Vec<usize> = result.photos.iter().filter_map(|p| p.row_index).collect();
        prop_assert!(rows.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(result.rows_count.unwrap(), rows.last().map_or(0, |r| r + 1));
    }

    #[test]
    fn greedy_columns_stay_balanced(
        photos in gallery(),
        config in prop_oneof![
            columns_config(LayoutKind::Columns),
            columns_config(LayoutKind::Columns)
                .prop_map(|c| c.column_sizing(ColumnSizing::Ratio)),
            columns_config(LayoutKind::Masonry),
        ],
    ) {
        let planned = match config.layout {
            LayoutKind::Masonry => masonry::layout(&photos, &config).unwrap(),
            _ => columns::layout(&photos, &config).unwrap(),
        };
        let heights: Vec<f64> = planned.columns.iter().map(|c| c.height).collect();
        let max = heights.iter().copied().fold(f64::MIN, f64::max);
        let min = heights.iter().copied().fold(f64::MAX, f64::min);
        let footprint = planned
            .columns
            .iter()
            .flat_map(|c| &c.items)
            .map(|p| p.height + 2.0 * config.padding + config.spacing)
            .fold(0.0, f64::max);
        prop_assert!(max - min <= footprint + 0.01, "spread {} > {}", max - min, footprint);
    }

    #[test]
    fn ratio_columns_fill_the_container(
        photos in gallery(),
        config in columns_config(LayoutKind::Columns),
    ) {
        let config = config.column_sizing(ColumnSizing::Ratio);
        let planned = columns::layout(&photos, &config).unwrap();
        let n = planned.columns.len() as f64;
        let total = planned.columns.iter().map(|c| c.width).sum::<f64>() + config.spacing * (n - 1.0);
        prop_assert!((total - config.container_width).abs() < 0.01,
            "columns fill {} of {}", total, config.container_width);
    }
}
