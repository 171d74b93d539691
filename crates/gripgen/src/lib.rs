#![warn(missing_docs)]

//! gripgen: suction gripper frames from box dimensions.
//!
//! Computes how many suction points a stack of boxes needs and where they
//! go, then assembles the frame (joints, connectors, suction cups and a
//! mounting plate) from part templates into a render group.
//!
//! # Example
//!
//! ```rust,no_run
//! use gripgen::{BoxSpec, BuiltinLoader, Generator, Scene};
//!
//! let generator = Generator::from_loader(&BuiltinLoader).unwrap();
//! let mut scene = Scene::new("preview");
//! let result = generator
//!     .run(&BoxSpec::new(300.0, 100.0, 4, 3.0), &mut scene)
//!     .unwrap();
//! println!("{result}");
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod mesh;
pub mod placement;
pub mod scene;
pub mod template;

pub use config::{AssetConfig, GripgenConfig};
pub use error::{AssemblyError, Result};
pub use generator::{Generator, GRIPPER_GROUP};
#[cfg(feature = "gltf")]
pub use loader::GltfLoader;
pub use loader::{load_templates, BuiltinLoader, ModelLoader};
pub use mesh::TemplateMesh;
pub use placement::{plan_placements, Placement, PlacementRole, SceneSpacing};
pub use scene::{instantiate, PlacedInstance, RenderGroup, Scene, SceneRenderer};
pub use template::{PartKind, PartTemplate, TemplateRegistry, TemplateSet};

pub use gripgen_layout::{
    compute_grid, generate_pattern, is_feasible, BoxSpec, GenerationResult, GridSpec,
    LayoutError, LayoutLimits,
};
