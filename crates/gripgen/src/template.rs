//! Part templates and the registry that gates instantiation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AssemblyError, Result};
use crate::mesh::TemplateMesh;

/// The four part types a gripper frame is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    /// Node joint at every suction point.
    Joint,
    /// Beam bridging adjacent joints; stretched to length along local X.
    Connector,
    /// Suction cup hanging below a joint.
    SuctionCup,
    /// Mounting plate attaching the frame to the robot.
    Plate,
}

impl PartKind {
    /// All kinds, in registry order.
    pub const ALL: [PartKind; 4] = [
        PartKind::Joint,
        PartKind::Connector,
        PartKind::SuctionCup,
        PartKind::Plate,
    ];

    /// Asset file stem for this kind.
    pub fn asset_name(self) -> &'static str {
        match self {
            PartKind::Joint => "joint",
            PartKind::Connector => "connection",
            PartKind::SuctionCup => "suction",
            PartKind::Plate => "plate",
        }
    }

    fn slot(self) -> usize {
        match self {
            PartKind::Joint => 0,
            PartKind::Connector => 1,
            PartKind::SuctionCup => 2,
            PartKind::Plate => 3,
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}

/// An immutable part prototype.
///
/// Cloning a template is cheap: the mesh is shared and never mutated, so
/// every clone behaves as an independent copy.
#[derive(Debug, Clone)]
pub struct PartTemplate {
    kind: PartKind,
    mesh: Arc<TemplateMesh>,
}

impl PartTemplate {
    /// Create a template of `kind` from its local-frame mesh.
    pub fn new(kind: PartKind, mesh: TemplateMesh) -> Self {
        Self {
            kind,
            mesh: Arc::new(mesh),
        }
    }

    /// Part type.
    pub fn kind(&self) -> PartKind {
        self.kind
    }

    /// Local-frame geometry.
    pub fn mesh(&self) -> &TemplateMesh {
        &self.mesh
    }
}

/// Collects templates as they load.
///
/// Instantiation needs all four parts; [`TemplateRegistry::into_set`] is
/// the only way to obtain a [`TemplateSet`].
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    slots: [Option<PartTemplate>; 4],
}

impl TemplateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a template, replacing any earlier one of the same kind.
    pub fn insert(&mut self, template: PartTemplate) {
        let slot = template.kind().slot();
        self.slots[slot] = Some(template);
    }

    /// Template of `kind`, if loaded.
    pub fn get(&self, kind: PartKind) -> Option<&PartTemplate> {
        self.slots[kind.slot()].as_ref()
    }

    /// Kinds not loaded yet.
    pub fn missing(&self) -> Vec<PartKind> {
        PartKind::ALL
            .into_iter()
            .filter(|k| self.get(*k).is_none())
            .collect()
    }

    /// True once every template is loaded.
    pub fn is_ready(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Freeze into a complete set, failing on the first missing kind.
    pub fn into_set(self) -> Result<TemplateSet> {
        let [joint, connector, suction_cup, plate] = self.slots;
        Ok(TemplateSet {
            joint: joint.ok_or(AssemblyError::MissingTemplate(PartKind::Joint))?,
            connector: connector.ok_or(AssemblyError::MissingTemplate(PartKind::Connector))?,
            suction_cup: suction_cup.ok_or(AssemblyError::MissingTemplate(PartKind::SuctionCup))?,
            plate: plate.ok_or(AssemblyError::MissingTemplate(PartKind::Plate))?,
        })
    }
}

/// A complete, read-only set of the four part templates.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    joint: PartTemplate,
    connector: PartTemplate,
    suction_cup: PartTemplate,
    plate: PartTemplate,
}

impl TemplateSet {
    /// Template of `kind`.
    pub fn get(&self, kind: PartKind) -> &PartTemplate {
        match kind {
            PartKind::Joint => &self.joint,
            PartKind::Connector => &self.connector,
            PartKind::SuctionCup => &self.suction_cup,
            PartKind::Plate => &self.plate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(kind: PartKind) -> PartTemplate {
        PartTemplate::new(kind, TemplateMesh::centered_cuboid(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_registry_readiness() {
        let mut registry = TemplateRegistry::new();
        assert!(!registry.is_ready());
        assert_eq!(registry.missing().len(), 4);

        for kind in [PartKind::Joint, PartKind::Connector, PartKind::SuctionCup] {
            registry.insert(template(kind));
        }
        assert!(!registry.is_ready());
        assert_eq!(registry.missing(), vec![PartKind::Plate]);

        registry.insert(template(PartKind::Plate));
        assert!(registry.is_ready());
        let set = registry.into_set().unwrap();
        for kind in PartKind::ALL {
            assert_eq!(set.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_incomplete_registry_reports_missing() {
        let mut registry = TemplateRegistry::new();
        registry.insert(template(PartKind::Joint));
        match registry.into_set() {
            Err(AssemblyError::MissingTemplate(PartKind::Connector)) => {}
            other => panic!("expected missing connector, got {other:?}"),
        }
    }

    #[test]
    fn test_clone_shares_immutable_mesh() {
        let original = template(PartKind::Joint);
        let copy = original.clone();
        assert!(Arc::ptr_eq(&original.mesh, &copy.mesh));
        assert_eq!(copy.mesh(), original.mesh());
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(PartKind::SuctionCup.asset_name(), "suction");
        assert_eq!(PartKind::Connector.to_string(), "connection");
    }
}
