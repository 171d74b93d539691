//! Triangle meshes backing part templates.

use std::f64::consts::PI;

use gripgen_math::{Point3, Transform};

/// A triangle mesh with flat vertex and index arrays.
///
/// Vertices are stored as `[x0, y0, z0, x1, y1, z1, ...]` in the
/// template's local frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateMesh {
    verts: Vec<f32>,
    idxs: Vec<u32>,
}

impl TemplateMesh {
    /// Create a mesh from flat vertex and index arrays.
    pub fn new(verts: Vec<f32>, idxs: Vec<u32>) -> Self {
        Self { verts, idxs }
    }

    /// Flat array of vertex positions.
    pub fn vertices(&self) -> &[f32] {
        &self.verts
    }

    /// Flat array of triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.idxs
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.verts.len() / 3
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.idxs.len() / 3
    }

    /// True when the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.idxs.is_empty()
    }

    /// Vertex positions as points.
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        self.verts
            .chunks_exact(3)
            .map(|c| Point3::new(f64::from(c[0]), f64::from(c[1]), f64::from(c[2])))
    }

    /// Append triangles, moving their vertices by `transform`.
    ///
    /// `indices` refer to `positions` and are rebased onto this mesh.
    pub fn append(&mut self, positions: &[[f32; 3]], indices: &[u32], transform: &Transform) {
        let base = self.vertex_count() as u32;
        for p in positions {
            let q = transform.apply_point(&Point3::new(
                f64::from(p[0]),
                f64::from(p[1]),
                f64::from(p[2]),
            ));
            self.verts.extend_from_slice(&[q.x as f32, q.y as f32, q.z as f32]);
        }
        self.idxs.extend(indices.iter().map(|i| i + base));
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<([f64; 3], [f64; 3])> {
        bounds_of(self.points())
    }

    /// Axis-aligned box spanning `min` to `max`.
    pub fn cuboid(min: [f32; 3], max: [f32; 3]) -> Self {
        let [x0, y0, z0] = min;
        let [x1, y1, z1] = max;
        #[rustfmt::skip]
        let verts = vec![
            x0, y0, z0,  x1, y0, z0,  x1, y1, z0,  x0, y1, z0,
            x0, y0, z1,  x1, y0, z1,  x1, y1, z1,  x0, y1, z1,
        ];
        #[rustfmt::skip]
        let idxs = vec![
            0, 2, 1,  0, 3, 2, // bottom
            4, 5, 6,  4, 6, 7, // top
            0, 1, 5,  0, 5, 4, // front
            2, 3, 7,  2, 7, 6, // back
            1, 2, 6,  1, 6, 5, // right
            3, 0, 4,  3, 4, 7, // left
        ];
        Self::new(verts, idxs)
    }

    /// Axis-aligned box centered at the origin.
    pub fn centered_cuboid(x: f32, y: f32, z: f32) -> Self {
        Self::cuboid([-x / 2.0, -y / 2.0, -z / 2.0], [x / 2.0, y / 2.0, z / 2.0])
    }

    /// Closed cylinder along Z from `z = 0` to `z = height`.
    pub fn cylinder(radius: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let mut verts = Vec::with_capacity((segments as usize * 2 + 2) * 3);
        for ring_z in [0.0, height] {
            for i in 0..segments {
                let angle = 2.0 * PI * f64::from(i) / f64::from(segments);
                let (s, c) = angle.sin_cos();
                verts.extend_from_slice(&[radius * c as f32, radius * s as f32, ring_z]);
            }
        }
        let bottom_center = segments * 2;
        let top_center = bottom_center + 1;
        verts.extend_from_slice(&[0.0, 0.0, 0.0, 0.0, 0.0, height]);

        let mut idxs = Vec::with_capacity(segments as usize * 12);
        for i in 0..segments {
            let j = (i + 1) % segments;
            let (b0, b1, t0, t1) = (i, j, i + segments, j + segments);
            idxs.extend_from_slice(&[b0, b1, t1, b0, t1, t0]);
            idxs.extend_from_slice(&[bottom_center, b1, b0]);
            idxs.extend_from_slice(&[top_center, t0, t1]);
        }
        Self::new(verts, idxs)
    }
}

/// Axis-aligned bounds of a point set.
pub(crate) fn bounds_of(points: impl IntoIterator<Item = Point3>) -> Option<([f64; 3], [f64; 3])> {
    let mut min = [f64::MAX; 3];
    let mut max = [f64::MIN; 3];
    let mut any = false;
    for p in points {
        any = true;
        for i in 0..3 {
            min[i] = min[i].min(p[i]);
            max[i] = max[i].max(p[i]);
        }
    }
    any.then_some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid() {
        let mesh = TemplateMesh::cuboid([0.0, 0.0, 0.0], [2.0, 1.0, 0.5]);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.num_triangles(), 12);
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, [0.0, 0.0, 0.0]);
        assert_eq!(max, [2.0, 1.0, 0.5]);
    }

    #[test]
    fn test_centered_cuboid() {
        let mesh = TemplateMesh::centered_cuboid(2.0, 4.0, 6.0);
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, [-1.0, -2.0, -3.0]);
        assert_eq!(max, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_cylinder() {
        let mesh = TemplateMesh::cylinder(1.0, 2.0, 16);
        assert_eq!(mesh.vertex_count(), 34);
        assert_eq!(mesh.num_triangles(), 64);
        let (min, max) = mesh.bounding_box().unwrap();
        assert!((max[0] - 1.0).abs() < 1e-6);
        assert!((min[0] + 1.0).abs() < 1e-6);
        assert_eq!(min[2], 0.0);
        assert_eq!(max[2], 2.0);
        assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_append_rebases_indices() {
        let mut mesh = TemplateMesh::cuboid([0.0; 3], [1.0; 3]);
        mesh.append(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            &[0, 1, 2],
            &Transform::translation(10.0, 0.0, 0.0),
        );
        assert_eq!(mesh.vertex_count(), 11);
        assert_eq!(&mesh.indices()[36..], &[8, 9, 10]);
        let (_, max) = mesh.bounding_box().unwrap();
        assert_eq!(max[0], 11.0);
    }

    #[test]
    fn test_empty_mesh_has_no_bounds() {
        let mesh = TemplateMesh::default();
        assert!(mesh.is_empty());
        assert!(mesh.bounding_box().is_none());
    }
}
