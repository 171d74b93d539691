//! Loading part templates.
//!
//! Every generation run needs the four templates in memory first. A
//! [`ModelLoader`] produces one template per [`PartKind`];
//! [`load_templates`] drives it and returns a complete [`TemplateSet`].

mod builtin;
#[cfg(feature = "gltf")]
mod gltf_loader;

pub use builtin::BuiltinLoader;
#[cfg(feature = "gltf")]
pub use gltf_loader::GltfLoader;

use tracing::info;

use crate::error::Result;
use crate::template::{PartKind, PartTemplate, TemplateRegistry, TemplateSet};

/// Source of part templates.
pub trait ModelLoader {
    /// Load the template for `kind`.
    fn load(&self, kind: PartKind) -> Result<PartTemplate>;
}

/// Load all four templates. Any failure aborts the whole load.
pub fn load_templates(loader: &dyn ModelLoader) -> Result<TemplateSet> {
    let mut registry = TemplateRegistry::new();
    for kind in PartKind::ALL {
        let template = loader.load(kind)?;
        info!(
            part = %kind,
            triangles = template.mesh().num_triangles(),
            "loaded part template"
        );
        registry.insert(template);
    }
    registry.into_set()
}
