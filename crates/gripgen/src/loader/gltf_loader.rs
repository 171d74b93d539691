//! glTF part assets.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use gripgen_math::Transform;

use crate::error::{AssemblyError, Result};
use crate::mesh::TemplateMesh;
use crate::template::{PartKind, PartTemplate};

use super::ModelLoader;

/// Loads `<dir>/<asset>.glb` (or `.gltf`) for each part.
///
/// The default scene is flattened into a single mesh with node transforms
/// applied, so the template frame is the asset's scene root.
#[derive(Debug, Clone)]
pub struct GltfLoader {
    dir: PathBuf,
}

impl GltfLoader {
    /// Loader reading assets from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Asset directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the asset for `kind` is read from.
    ///
    /// Prefers `.glb`, falls back to `.gltf` when only that exists.
    pub fn asset_path(&self, kind: PartKind) -> PathBuf {
        let glb = self.dir.join(format!("{}.glb", kind.asset_name()));
        if glb.exists() {
            return glb;
        }
        let gltf = self.dir.join(format!("{}.gltf", kind.asset_name()));
        if gltf.exists() {
            gltf
        } else {
            glb
        }
    }
}

impl ModelLoader for GltfLoader {
    fn load(&self, kind: PartKind) -> Result<PartTemplate> {
        let path = self.asset_path(kind);
        let mesh = read_mesh(&path)?;
        if mesh.is_empty() {
            warn!(path = %path.display(), "model contains no triangles");
            return Err(AssemblyError::EmptyModel(path.display().to_string()));
        }
        Ok(PartTemplate::new(kind, mesh))
    }
}

/// Read and flatten every triangle primitive of a glTF file.
fn read_mesh(path: &Path) -> Result<TemplateMesh> {
    let (document, buffers, _images) = ::gltf::import(path).map_err(|e| AssemblyError::Load {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut mesh = TemplateMesh::default();
    let Some(scene) = document
        .default_scene()
        .or_else(|| document.scenes().next())
    else {
        return Ok(mesh);
    };

    for node in scene.nodes() {
        append_node(&node, &Transform::identity(), &buffers, &mut mesh);
    }
    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.num_triangles(),
        "flattened glTF scene"
    );
    Ok(mesh)
}

fn append_node(
    node: &::gltf::Node<'_>,
    parent: &Transform,
    buffers: &[::gltf::buffer::Data],
    out: &mut TemplateMesh,
) {
    let world = parent.then(&Transform::from_cols_f32(&node.transform().matrix()));

    if let Some(node_mesh) = node.mesh() {
        for primitive in node_mesh.primitives() {
            if primitive.mode() != ::gltf::mesh::Mode::Triangles {
                continue;
            }
            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<[f32; 3]> = positions.collect();
            let indices: Vec<u32> = match reader.read_indices() {
                Some(indices) => indices.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            out.append(&positions, &indices, &world);
        }
    }

    for child in node.children() {
        append_node(&child, &world, buffers, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_is_load_error() {
        let loader = GltfLoader::new("/nonexistent/gripgen-assets");
        let err = loader.load(PartKind::Joint).unwrap_err();
        match err {
            AssemblyError::Load { path, .. } => assert!(path.ends_with("joint.glb")),
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn test_asset_path_defaults_to_glb() {
        let loader = GltfLoader::new("assets");
        assert_eq!(
            loader.asset_path(PartKind::SuctionCup),
            Path::new("assets").join("suction.glb")
        );
    }

    #[test]
    fn test_minimal_gltf_triangle() {
        // One triangle, positions only, embedded as a base64 data URI,
        // under a node translated by (1, 0, 0).
        let json = r#"{
            "asset": {"version": "2.0"},
            "scene": 0,
            "scenes": [{"nodes": [0]}],
            "nodes": [{"mesh": 0, "translation": [1.0, 0.0, 0.0]}],
            "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}],
            "accessors": [{
                "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
            }],
            "bufferViews": [{"buffer": 0, "byteLength": 36}],
            "buffers": [{
                "byteLength": 36,
                "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA"
            }]
        }"#;
        let dir = std::env::temp_dir().join(format!("gripgen-gltf-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("plate.gltf"), json).unwrap();

        let template = GltfLoader::new(&dir).load(PartKind::Plate).unwrap();
        assert_eq!(template.mesh().num_triangles(), 1);
        let (min, max) = template.mesh().bounding_box().unwrap();
        assert_eq!(min, [1.0, 0.0, 0.0]);
        assert_eq!(max, [2.0, 1.0, 0.0]);

        std::fs::remove_dir_all(&dir).ok();
    }
}
