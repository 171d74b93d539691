//! Procedural stand-ins for the stock part assets.
//!
//! Each mesh uses the same native frame and size as the asset it replaces,
//! so the calibration constants in [`crate::placement`] apply unchanged.

use crate::error::Result;
use crate::mesh::TemplateMesh;
use crate::template::{PartKind, PartTemplate};

use super::ModelLoader;

/// Native connector length. Stretched by 18 per scene unit of pitch.
const CONNECTOR_LENGTH: f32 = 1.0 / 18.0;

/// Native connector cross-section.
const CONNECTOR_SECTION: f32 = 0.002;

/// Native joint edge length.
const JOINT_SIZE: f32 = 0.006;

/// Native plate footprint and thickness.
const PLATE_SIZE: f32 = 0.08;
const PLATE_THICKNESS: f32 = 0.004;

/// Native suction cup radius and height.
const CUP_RADIUS: f32 = 0.3;
const CUP_HEIGHT: f32 = 0.5;
const CUP_SEGMENTS: u32 = 24;

/// Generates placeholder geometry, no files needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLoader;

impl BuiltinLoader {
    /// Placeholder mesh for `kind`.
    pub fn mesh(kind: PartKind) -> TemplateMesh {
        match kind {
            PartKind::Joint => TemplateMesh::centered_cuboid(JOINT_SIZE, JOINT_SIZE, JOINT_SIZE),
            // Runs from the origin along +X so a rotated, stretched copy
            // reaches back to the neighbouring joint.
            PartKind::Connector => TemplateMesh::cuboid(
                [0.0, -CONNECTOR_SECTION / 2.0, -CONNECTOR_SECTION / 2.0],
                [CONNECTOR_LENGTH, CONNECTOR_SECTION / 2.0, CONNECTOR_SECTION / 2.0],
            ),
            PartKind::SuctionCup => TemplateMesh::cylinder(CUP_RADIUS, CUP_HEIGHT, CUP_SEGMENTS),
            PartKind::Plate => {
                TemplateMesh::centered_cuboid(PLATE_SIZE, PLATE_SIZE, PLATE_THICKNESS)
            }
        }
    }
}

impl ModelLoader for BuiltinLoader {
    fn load(&self, kind: PartKind) -> Result<PartTemplate> {
        Ok(PartTemplate::new(kind, Self::mesh(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::HORIZONTAL_CONNECTOR_STRETCH;

    #[test]
    fn test_connector_starts_at_origin() {
        let (min, max) = BuiltinLoader::mesh(PartKind::Connector)
            .bounding_box()
            .unwrap();
        assert_eq!(min[0], 0.0);
        let stretched = max[0] * HORIZONTAL_CONNECTOR_STRETCH;
        assert!((stretched - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_every_kind_has_geometry() {
        for kind in PartKind::ALL {
            let template = BuiltinLoader.load(kind).unwrap();
            assert_eq!(template.kind(), kind);
            assert!(template.mesh().num_triangles() >= 12);
        }
    }
}
