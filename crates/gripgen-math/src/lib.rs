#![warn(missing_docs)]

//! Placement math for gripgen scenes.
//!
//! Every part of a gripper frame is a template mesh positioned by a local
//! node transform, the way a scene graph node carries position, Euler
//! rotation and scale. [`Transform::compose`] builds that node matrix
//! (`T * Rx * Ry * Rz * S`), and [`Transform::from_cols_f32`] imports the
//! column-major matrices glTF nodes store, so loaded assets and placed
//! instances share one convention.

use nalgebra::{Matrix4, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// Homogeneous 4x4 node transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self::from_matrix(Matrix4::identity())
    }

    fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Move by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        Self::from_matrix(Matrix4::new_translation(&Vector3::new(dx, dy, dz)))
    }

    /// Per-axis scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self::from_matrix(Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)))
    }

    /// Right-handed rotation of `angle` radians about +X.
    pub fn rotation_x(angle: f64) -> Self {
        Self::from_matrix(Matrix4::from_axis_angle(&Vector3::x_axis(), angle))
    }

    /// Right-handed rotation of `angle` radians about +Y.
    pub fn rotation_y(angle: f64) -> Self {
        Self::from_matrix(Matrix4::from_axis_angle(&Vector3::y_axis(), angle))
    }

    /// Right-handed rotation of `angle` radians about +Z.
    pub fn rotation_z(angle: f64) -> Self {
        Self::from_matrix(Matrix4::from_axis_angle(&Vector3::z_axis(), angle))
    }

    /// Scene-node Euler rotation, XYZ order: `Rx * Ry * Rz`.
    ///
    /// A point is turned about Z first and about X last.
    pub fn euler_xyz(rx: f64, ry: f64, rz: f64) -> Self {
        Self::rotation_x(rx)
            .then(&Self::rotation_y(ry))
            .then(&Self::rotation_z(rz))
    }

    /// Local node transform from position, XYZ Euler rotation and scale.
    ///
    /// The result is `T * R * S`: a point is scaled first, then rotated,
    /// then moved to `position`.
    pub fn compose(position: &Vec3, rotation: &Vec3, scale: &Vec3) -> Self {
        Self::translation(position.x, position.y, position.z)
            .then(&Self::euler_xyz(rotation.x, rotation.y, rotation.z))
            .then(&Self::scale(scale.x, scale.y, scale.z))
    }

    /// Build from a column-major `[[f32; 4]; 4]` array (glTF node layout).
    pub fn from_cols_f32(cols: &[[f32; 4]; 4]) -> Self {
        Self::from_matrix(Matrix4::from_fn(|r, c| f64::from(cols[c][r])))
    }

    /// Parent-child product: `other` is applied first, then `self`.
    pub fn then(&self, other: &Transform) -> Self {
        Self::from_matrix(self.matrix * other.matrix)
    }

    /// Map a point through the transform.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        self.matrix.transform_point(p)
    }

    /// Translation component.
    pub fn translation_part(&self) -> Vec3 {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
