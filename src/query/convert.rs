//! Convert parsed [`QueryParams`] into a [`LayoutConfig`].

use crate::config::{DEFAULT_MAX_HEIGHT_RATIO, LastRow, LayoutConfig, LayoutError};

use super::params::QueryParams;

impl QueryParams {
    /// Build a validated [`LayoutConfig`] from these parameters.
    ///
    /// Absent keys take the [`LayoutConfig::new`] defaults. A missing
    /// `width` is reported as [`LayoutError::InvalidContainerWidth`].
    pub fn to_config(&self) -> Result<LayoutConfig, LayoutError> {
        let layout = self.layout.unwrap_or_default();
        let width = self.width.ok_or(LayoutError::InvalidContainerWidth)?;

        let mut config = LayoutConfig::new(layout, width);
        if let Some(spacing) = self.spacing {
            config = config.spacing(spacing);
        }
        if let Some(padding) = self.padding {
            config = config.padding(padding);
        }
        if let Some(height) = self.target_row_height {
            config = config.target_row_height(height);
        }
        if let Some(columns) = self.columns {
            config = config.column_count(columns);
        }
        if let Some(sizing) = self.column_sizing {
            config = config.column_sizing(sizing);
        }
        config = config.last_row(self.resolve_last_row());

        config.validate()?;
        Ok(config)
    }

    fn resolve_last_row(&self) -> LastRow {
        if self.natural_last_row == Some(true) {
            return LastRow::Natural;
        }
        LastRow::Justify {
            max_height_ratio: self.max_height_ratio.unwrap_or(DEFAULT_MAX_HEIGHT_RATIO),
        }
    }
}
