#![warn(missing_docs)]

//! Suction point layout for gripper frames.
//!
//! Turns the physical description of a stack of boxes (width, height,
//! count, weight) into a grid of suction points: how many columns and rows
//! the gripper frame needs and how far apart adjacent points sit.
//!
//! # Example
//!
//! ```
//! use gripgen_layout::{compute_grid, GenerationResult};
//!
//! let grid = compute_grid(300.0, 100.0, 4, 3.0).unwrap();
//! assert_eq!((grid.columns, grid.rows), (3, 4));
//!
//! let result = GenerationResult::from(grid);
//! println!("{result}");
//! ```

pub mod error;
pub mod feasibility;
pub mod grid;
pub mod pattern;

pub use error::{LayoutError, Result};
pub use feasibility::is_feasible;
pub use grid::{
    columns_from_weight, columns_from_width, compute_grid, rows_from_height_and_count,
};
pub use pattern::generate_pattern;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum center-to-center distance between suction points (mm).
pub const MIN_DISTANCE: f64 = 35.0;

/// Maximum center-to-center distance between suction points (mm).
pub const MAX_DISTANCE: f64 = 265.0;

/// Load one suction point can carry (weight units per point).
pub const POINT_CAPACITY: f64 = 1.5;

/// Largest suction grid (columns x rows) a layout may produce.
pub const MAX_GRID_POINTS: u64 = 10_000;

/// Spacing and load limits for a suction point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutLimits {
    /// Minimum spacing between adjacent points (mm).
    pub min_distance: f64,
    /// Maximum spacing between adjacent points (mm).
    pub max_distance: f64,
    /// Load capacity of a single point.
    pub point_capacity: f64,
}

impl Default for LayoutLimits {
    fn default() -> Self {
        Self {
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            point_capacity: POINT_CAPACITY,
        }
    }
}

impl LayoutLimits {
    /// Validate limits.
    pub fn validate(&self) -> Result<()> {
        let all_finite = [self.min_distance, self.max_distance, self.point_capacity]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(LayoutError::InvalidInput(
                "layout limits must be finite".into(),
            ));
        }
        if self.min_distance <= 0.0 {
            return Err(LayoutError::InvalidInput(
                "min_distance must be positive".into(),
            ));
        }
        if self.max_distance <= self.min_distance {
            return Err(LayoutError::InvalidInput(format!(
                "max_distance ({}) must exceed min_distance ({})",
                self.max_distance, self.min_distance
            )));
        }
        if self.point_capacity <= 0.0 {
            return Err(LayoutError::InvalidInput(
                "point_capacity must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Physical description of the boxes to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Box width (mm).
    pub width: f64,
    /// Box height (mm).
    pub height: f64,
    /// Number of boxes stacked.
    pub count: u32,
    /// Total weight.
    pub weight: f64,
}

impl BoxSpec {
    /// Create a new box spec.
    pub fn new(width: f64, height: f64, count: u32, weight: f64) -> Self {
        Self {
            width,
            height,
            count,
            weight,
        }
    }
}

/// Grid of suction points derived from a [`BoxSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Points along X.
    pub columns: u32,
    /// Points along Y.
    pub rows: u32,
    /// Distance between adjacent columns (mm).
    pub spacing_x: f64,
    /// Distance between adjacent rows (mm).
    pub spacing_y: f64,
}

impl GridSpec {
    /// Total number of suction points.
    pub fn cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Public summary of one layout computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Suction points along X.
    pub x_cups: u32,
    /// Suction points along Y.
    pub y_cups: u32,
    /// Spacing along X (mm).
    pub distance_x: f64,
    /// Spacing along Y (mm).
    pub distance_y: f64,
}

impl From<GridSpec> for GenerationResult {
    fn from(grid: GridSpec) -> Self {
        Self {
            x_cups: grid.columns,
            y_cups: grid.rows,
            distance_x: grid.spacing_x,
            distance_y: grid.spacing_y,
        }
    }
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Suction X: {}", self.x_cups)?;
        writeln!(f, "Suction Y: {}", self.y_cups)?;
        writeln!(f, "Spacing X {}", self.distance_x)?;
        write!(f, "Spacing Y {}", self.distance_y)
    }
}
