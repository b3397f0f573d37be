//! Query strings driving complete layouts.
#![cfg(feature = "query")]

use photolayout::query::{self, ParseWarning};
use photolayout::*;

fn gallery() -> Vec<Photo<&'static str>> {
    vec![
        Photo::keyed(1500.0, 1000.0, "harbour"),
        Photo::keyed(1000.0, 1500.0, "lighthouse"),
        Photo::keyed(1000.0, 1000.0, "gull"),
        Photo::keyed(1780.0, 1000.0, "pier"),
        Photo::keyed(750.0, 1000.0, "boat"),
    ]
}

#[test]
fn query_matches_builder() {
    let parsed = query::parse("?layout=masonry&width=1200&columns=4&spacing=10px");
    assert!(parsed.warnings.is_empty());
    let config = parsed.params.to_config().unwrap();
    assert_eq!(config, LayoutConfig::masonry(1200.0, 4).spacing(10.0));

    let photos = gallery();
    assert_eq!(
        config.compute(&photos),
        LayoutConfig::masonry(1200.0, 4).spacing(10.0).compute(&photos)
    );
}

#[test]
fn rows_from_query() {
    let config = query::parse("layout=rows&containerWidth=1000&targetRowHeight=250&lastRow=natural")
        .params
        .to_config()
        .unwrap();
    let result = config.compute(&gallery()).unwrap();
    assert_eq!(result.layout, LayoutKind::Rows);
    assert!(result.rows_count.unwrap() >= 1);
    assert!(result.photos.iter().all(|p| p.row_index.is_some()));
}

#[test]
fn ratio_columns_from_query() {
    let result = query::parse("layout=columns&w=900&columns=2&columnSizing=ratio&padding=4")
        .params
        .to_config()
        .unwrap()
        .compute(&gallery())
        .unwrap();
    let info = result.columns.unwrap();
    assert_eq!(info.columns_count, 2);
    assert!(info.columns_ratios.is_some());
    assert_eq!(info.padding, 4.0);
}

#[test]
fn warnings_do_not_block_layout() {
    let parsed = query::parse("width=800&theme=dark&columns=3&columns=2&layout=columns");
    assert_eq!(parsed.warnings.len(), 2);
    assert!(matches!(
        parsed.warnings[0],
        ParseWarning::KeyNotRecognized { ref key, .. } if key == "theme"
    ));
    assert!(matches!(parsed.warnings[1], ParseWarning::DuplicateKey { .. }));

    let result = parsed.params.to_config().unwrap().compute(&gallery()).unwrap();
    assert_eq!(result.columns.unwrap().columns_count, 2);
}

#[test]
fn invalid_query_config_is_an_error() {
    assert_eq!(
        query::parse("layout=rows").params.to_config(),
        Err(LayoutError::InvalidContainerWidth)
    );
    assert_eq!(
        query::parse("layout=masonry&width=600&padding=-1").params.to_config(),
        Err(LayoutError::InvalidPadding)
    );
}
