//! Grid derivation: columns, rows and spacing from box geometry and weight.

use tracing::debug;

use crate::{BoxSpec, GridSpec, LayoutError, LayoutLimits, Result, MAX_GRID_POINTS};

impl LayoutLimits {
    /// Columns needed so no gap between adjacent columns exceeds `max_distance`.
    ///
    /// Always at least two support columns, plus one for every full
    /// `max_distance` of width. Saturates at `u32::MAX` for absurd widths.
    pub fn columns_from_width(&self, width: f64) -> u32 {
        let spans = (width / self.max_distance).floor().max(0.0) as u32;
        spans.saturating_add(2)
    }

    /// Columns needed to keep the per-point load within `point_capacity`.
    pub fn columns_from_weight(&self, weight: f64) -> u32 {
        (weight / self.point_capacity).ceil().max(2.0) as u32
    }

    /// Rows needed for `count` stacked boxes of the given height.
    ///
    /// Grows beyond `count` when the stacked height is large relative to
    /// `max_distance`. With `count <= 1` the extra term is zero or negative
    /// and the row count collapses to `count`.
    pub fn rows_from_height_and_count(&self, count: u32, height: f64) -> u32 {
        let n = f64::from(count);
        let extra = (((n - 1.0) * height) / ((n + 1.0) * self.max_distance)).floor();
        (n + extra).max(0.0) as u32
    }

    /// Derive the suction grid for a box stack.
    pub fn compute_grid(&self, spec: &BoxSpec) -> Result<GridSpec> {
        let BoxSpec {
            width,
            height,
            count,
            weight,
        } = *spec;

        self.validate()?;
        if !(width.is_finite() && height.is_finite() && weight.is_finite()) {
            return Err(LayoutError::InvalidInput(
                "box dimensions and weight must be finite".into(),
            ));
        }
        if count == 0 {
            return Err(LayoutError::InvalidInput(
                "box count must be at least 1".into(),
            ));
        }
        if width < self.min_distance {
            return Err(LayoutError::InvalidInput(format!(
                "box width {width} mm is below the minimum distance of {} mm",
                self.min_distance
            )));
        }

        let columns = self
            .columns_from_width(width)
            .max(self.columns_from_weight(weight));
        let rows = self.rows_from_height_and_count(count, height);

        let n = f64::from(count);
        let spacing_x = width / f64::from(columns);
        let spacing_y = ((n - 1.0) * height) / n;

        debug!(columns, rows, spacing_x, spacing_y, "computed suction grid");

        if spacing_x < self.min_distance {
            return Err(LayoutError::SpacingTooSmall {
                spacing: spacing_x,
                min: self.min_distance,
            });
        }
        let points = u64::from(columns) * u64::from(rows);
        if points > MAX_GRID_POINTS {
            return Err(LayoutError::InvalidInput(format!(
                "{columns} x {rows} suction grid exceeds {MAX_GRID_POINTS} points"
            )));
        }

        Ok(GridSpec {
            columns,
            rows,
            spacing_x,
            spacing_y,
        })
    }
}

/// [`LayoutLimits::columns_from_width`] with the default limits.
pub fn columns_from_width(width: f64) -> u32 {
    LayoutLimits::default().columns_from_width(width)
}

/// [`LayoutLimits::columns_from_weight`] with the default limits.
pub fn columns_from_weight(weight: f64) -> u32 {
    LayoutLimits::default().columns_from_weight(weight)
}

/// [`LayoutLimits::rows_from_height_and_count`] with the default limits.
pub fn rows_from_height_and_count(count: u32, height: f64) -> u32 {
    LayoutLimits::default().rows_from_height_and_count(count, height)
}

/// Derive the suction grid with the default limits.
///
/// Fails with [`LayoutError::InvalidInput`] when `width` is below the
/// minimum distance, and with [`LayoutError::SpacingTooSmall`] when the
/// weight demands so many columns that they crowd closer than the minimum.
/// Grids above [`MAX_GRID_POINTS`] are rejected as invalid input.
pub fn compute_grid(width: f64, height: f64, count: u32, weight: f64) -> Result<GridSpec> {
    LayoutLimits::default().compute_grid(&BoxSpec::new(width, height, count, weight))
}
