//! Placement planning: where every part of the gripper frame goes.
//!
//! The constants below are calibration data for the stock part assets
//! (`joint`, `connection`, `suction`, `plate`). They depend on each asset's
//! native size and must change together with the asset set.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use gripgen_layout::GridSpec;
use gripgen_math::{Transform, Vec3};

use crate::template::PartKind;

/// Millimeters to scene units.
pub const SCENE_UNITS_PER_MM: f64 = 0.01;

/// Uniform scale of a joint.
pub const JOINT_SCALE: f64 = 15.0;

/// Uniform scale of a suction cup.
pub const CUP_SCALE: f64 = 0.3;

/// Height of a suction cup above its joint.
pub const CUP_Z_OFFSET: f64 = 0.2;

/// Length stretch per scene unit of pitch for row connectors.
pub const HORIZONTAL_CONNECTOR_STRETCH: f64 = 18.0;

/// Length stretch per scene unit of pitch for column connectors.
pub const VERTICAL_CONNECTOR_STRETCH: f64 = 20.0;

/// Cross-section scale of every connector.
pub const CONNECTOR_SECTION_SCALE: f64 = 15.0;

/// Uniform scale of the mounting plate.
pub const PLATE_SCALE: f64 = 15.0;

/// Height of the mounting plate.
pub const PLATE_Z: f64 = -0.5;

/// Grid spacing in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneSpacing {
    /// Spacing along X.
    pub x: f64,
    /// Spacing along Y.
    pub y: f64,
}

impl SceneSpacing {
    /// Convert a millimeter spacing pair.
    pub fn from_millimeters(x_mm: f64, y_mm: f64) -> Self {
        Self {
            x: x_mm * SCENE_UNITS_PER_MM,
            y: y_mm * SCENE_UNITS_PER_MM,
        }
    }

    /// Scene spacing of a layout grid.
    pub fn from_grid(grid: &GridSpec) -> Self {
        Self::from_millimeters(grid.spacing_x, grid.spacing_y)
    }
}

/// Why a part was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementRole {
    /// Joint at a suction point.
    Joint,
    /// Suction cup under a joint.
    SuctionCup,
    /// Connector from the previous column.
    HorizontalConnector,
    /// Connector from the previous row.
    VerticalConnector,
    /// Mounting plate.
    Plate,
    /// Extra connector under the plate when the row count is even.
    Stick,
}

impl PlacementRole {
    /// Template used for this role.
    pub fn kind(self) -> PartKind {
        match self {
            PlacementRole::Joint => PartKind::Joint,
            PlacementRole::SuctionCup => PartKind::SuctionCup,
            PlacementRole::HorizontalConnector
            | PlacementRole::VerticalConnector
            | PlacementRole::Stick => PartKind::Connector,
            PlacementRole::Plate => PartKind::Plate,
        }
    }
}

/// One part position, rotation and scale.
///
/// Rotation is XYZ Euler angles in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Grid cell index (`x + y * columns`) that emitted this part.
    pub cell: usize,
    /// Part role.
    pub role: PlacementRole,
    /// Position in scene units.
    pub position: [f64; 3],
    /// Euler rotation in radians.
    pub rotation: [f64; 3],
    /// Per-axis scale.
    pub scale: [f64; 3],
}

impl Placement {
    fn new(
        cell: usize,
        role: PlacementRole,
        position: [f64; 3],
        rotation: [f64; 3],
        scale: [f64; 3],
    ) -> Self {
        Self {
            cell,
            role,
            position,
            rotation,
            scale,
        }
    }

    /// Template used for this placement.
    pub fn kind(&self) -> PartKind {
        self.role.kind()
    }

    /// Local-to-scene transform.
    pub fn transform(&self) -> Transform {
        Transform::compose(
            &Vec3::from(self.position),
            &Vec3::from(self.rotation),
            &Vec3::from(self.scale),
        )
    }
}

fn uniform(s: f64) -> [f64; 3] {
    [s, s, s]
}

/// Plan every part placement for a `columns x rows` grid.
///
/// Each cell gets a joint and a suction cup. Cells past the first column
/// get a connector back to the previous column; cells past the first row
/// get one back to the previous row. The last cell also places the
/// mounting plate, rotated a quarter turn for odd column counts, plus an
/// extra connector when the row count is even.
pub fn plan_placements(grid: &GridSpec, spacing: SceneSpacing) -> Vec<Placement> {
    let columns = grid.columns as usize;
    let rows = grid.rows as usize;
    let cells = columns * rows;
    let pitch_x = 1.0 + spacing.x;
    let pitch_y = 1.0 + spacing.y;
    let flip_x = [PI, 0.0, 0.0];
    let flip_z = [0.0, 0.0, PI];

    let mut placements = Vec::with_capacity(cells * 4 + 2);
    for i in 0..cells {
        let x = (i % columns) as f64;
        let y = (i / columns) as f64;
        let px = x * pitch_x;
        let py = y * pitch_y;

        if x > 0.0 {
            placements.push(Placement::new(
                i,
                PlacementRole::HorizontalConnector,
                [px, py, 0.0],
                flip_z,
                [
                    pitch_x * HORIZONTAL_CONNECTOR_STRETCH,
                    CONNECTOR_SECTION_SCALE,
                    CONNECTOR_SECTION_SCALE,
                ],
            ));
        }

        placements.push(Placement::new(
            i,
            PlacementRole::Joint,
            [px, py, 0.0],
            flip_x,
            uniform(JOINT_SCALE),
        ));
        placements.push(Placement::new(
            i,
            PlacementRole::SuctionCup,
            [px, py, CUP_Z_OFFSET],
            flip_x,
            uniform(CUP_SCALE),
        ));

        if y > 0.0 {
            placements.push(Placement::new(
                i,
                PlacementRole::VerticalConnector,
                [px, (y - 1.0) + (y - 1.0) * spacing.y, 0.0],
                [0.0, 0.0, PI / 2.0],
                [
                    pitch_y * VERTICAL_CONNECTOR_STRETCH,
                    CONNECTOR_SECTION_SCALE,
                    CONNECTOR_SECTION_SCALE,
                ],
            ));
        }

        if i == cells - 1 {
            let plate_y = py / 2.0;
            let plate_turn = if columns % 2 == 0 { 0.0 } else { PI / 2.0 };
            placements.push(Placement::new(
                i,
                PlacementRole::Plate,
                [px / 2.0, plate_y, PLATE_Z],
                [PI, 0.0, plate_turn],
                uniform(PLATE_SCALE),
            ));

            if rows % 2 == 0 {
                placements.push(Placement::new(
                    i,
                    PlacementRole::Stick,
                    [px, plate_y, PLATE_Z],
                    flip_z,
                    [
                        pitch_x * HORIZONTAL_CONNECTOR_STRETCH,
                        CONNECTOR_SECTION_SCALE,
                        CONNECTOR_SECTION_SCALE,
                    ],
                ));
            }
        }
    }

    debug!(
        columns,
        rows,
        placements = placements.len(),
        "planned gripper placements"
    );
    placements
}
