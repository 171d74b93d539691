//! Placed instances, render groups and the scene they are handed to.

use tracing::debug;

use gripgen_math::{Point3, Transform};

use crate::mesh::bounds_of;
use crate::placement::{Placement, PlacementRole};
use crate::template::{PartKind, PartTemplate, TemplateSet};

/// A template clone fixed at a transform.
///
/// The transform is set once at creation; there are no setters.
#[derive(Debug, Clone)]
pub struct PlacedInstance {
    template: PartTemplate,
    placement: Placement,
    transform: Transform,
}

impl PlacedInstance {
    /// Clone `template` into a new instance at `placement`.
    pub fn new(template: &PartTemplate, placement: Placement) -> Self {
        Self {
            template: template.clone(),
            transform: placement.transform(),
            placement,
        }
    }

    /// Part type.
    pub fn kind(&self) -> PartKind {
        self.template.kind()
    }

    /// Role in the frame.
    pub fn role(&self) -> PlacementRole {
        self.placement.role
    }

    /// Placement this instance was built from.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Local-to-scene transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Template vertices moved into scene space.
    pub fn world_vertices(&self) -> Vec<Point3> {
        self.template
            .mesh()
            .points()
            .map(|p| self.transform.apply_point(&p))
            .collect()
    }

    /// Scene-space bounding box as `(min, max)`.
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        bounds_of(self.world_vertices())
    }
}

/// A flat container of instances from one generation run.
#[derive(Debug, Clone, Default)]
pub struct RenderGroup {
    /// Group name; a scene keeps one group per name.
    pub name: String,
    instances: Vec<PlacedInstance>,
}

impl RenderGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instances: Vec::new(),
        }
    }

    /// Add an instance.
    pub fn add(&mut self, instance: PlacedInstance) {
        self.instances.push(instance);
    }

    /// Remove every instance.
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Instances in insertion order.
    pub fn instances(&self) -> &[PlacedInstance] {
        &self.instances
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Number of instances placed with `role`.
    pub fn count(&self, role: PlacementRole) -> usize {
        self.instances.iter().filter(|i| i.role() == role).count()
    }

    /// Number of instances cloned from `kind`.
    pub fn count_kind(&self, kind: PartKind) -> usize {
        self.instances.iter().filter(|i| i.kind() == kind).count()
    }

    /// Scene-space bounding box of every instance.
    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        bounds_of(self.instances.iter().flat_map(|i| i.world_vertices()))
    }
}

/// Clone templates into a new group, one instance per placement.
pub fn instantiate(
    templates: &TemplateSet,
    placements: &[Placement],
    name: impl Into<String>,
) -> RenderGroup {
    let mut group = RenderGroup::new(name);
    for placement in placements {
        let template = templates.get(placement.kind());
        group.add(PlacedInstance::new(template, *placement));
    }
    debug!(group = %group.name, instances = group.len(), "instantiated render group");
    group
}

/// Receives render groups for display.
///
/// Camera, lighting, the render loop and window handling belong to the
/// implementor.
pub trait SceneRenderer {
    /// Take ownership of a group and show it.
    fn add_to_scene(&mut self, group: RenderGroup);
}

/// In-memory scene keeping the latest group per name.
#[derive(Debug, Default)]
pub struct Scene {
    /// Name of the scene.
    pub name: String,
    groups: Vec<RenderGroup>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    /// Group by name.
    pub fn group(&self, name: &str) -> Option<&RenderGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// All groups.
    pub fn groups(&self) -> &[RenderGroup] {
        &self.groups
    }

    /// Get total number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if scene is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total instances across groups.
    pub fn instance_count(&self) -> usize {
        self.groups.iter().map(RenderGroup::len).sum()
    }
}

impl SceneRenderer for Scene {
    fn add_to_scene(&mut self, group: RenderGroup) {
        match self.groups.iter_mut().find(|g| g.name == group.name) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }
}
