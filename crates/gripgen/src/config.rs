//! TOML configuration.
//!
//! ```toml
//! [layout]
//! min_distance = 35.0
//! max_distance = 265.0
//! point_capacity = 1.5
//!
//! [assets]
//! dir = "resources"
//! ```
//!
//! Every key is optional. Without an asset directory the builtin
//! placeholder geometry is used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gripgen_layout::LayoutLimits;

use crate::error::{AssemblyError, Result};
use crate::loader::{BuiltinLoader, ModelLoader};

/// Where part templates come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding `joint`, `connection`, `suction` and `plate` models.
    pub dir: Option<PathBuf>,
    /// Force the builtin placeholder geometry.
    pub builtin: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GripgenConfig {
    /// Suction point limits.
    pub layout: LayoutLimits,
    /// Part asset source.
    pub assets: AssetConfig,
}

impl GripgenConfig {
    /// Parse from TOML text and validate.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| AssemblyError::Config(e.to_string()))?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Loader matching the asset settings.
    pub fn loader(&self) -> Result<Box<dyn ModelLoader>> {
        match (&self.assets.dir, self.assets.builtin) {
            (Some(dir), false) => gltf_loader(dir),
            _ => Ok(Box::new(BuiltinLoader)),
        }
    }
}

#[cfg(feature = "gltf")]
fn gltf_loader(dir: &Path) -> Result<Box<dyn ModelLoader>> {
    Ok(Box::new(crate::loader::GltfLoader::new(dir)))
}

#[cfg(not(feature = "gltf"))]
fn gltf_loader(dir: &Path) -> Result<Box<dyn ModelLoader>> {
    Err(AssemblyError::Config(format!(
        "asset directory {} requires the `gltf` feature",
        dir.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gripgen_layout::LayoutError;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GripgenConfig::from_toml_str("").unwrap();
        assert_eq!(config, GripgenConfig::default());
        assert_eq!(config.layout, LayoutLimits::default());
        assert!(config.assets.dir.is_none());
    }

    #[test]
    fn test_partial_layout_section() {
        let config = GripgenConfig::from_toml_str(
            r#"
            [layout]
            max_distance = 300.0

            [assets]
            dir = "resources"
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.max_distance, 300.0);
        assert_eq!(config.layout.min_distance, 35.0);
        assert_eq!(config.assets.dir, Some(PathBuf::from("resources")));
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let err = GripgenConfig::from_toml_str("[layout]\nmin_distance = -1.0\n").unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::Layout(LayoutError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = GripgenConfig::from_toml_str("[layout\n").unwrap_err();
        assert!(matches!(err, AssemblyError::Config(_)));
    }

    #[test]
    fn test_builtin_flag_overrides_dir() {
        let config = GripgenConfig {
            assets: AssetConfig {
                dir: Some(PathBuf::from("/nonexistent")),
                builtin: true,
            },
            ..Default::default()
        };
        let loader = config.loader().unwrap();
        assert!(loader.load(crate::template::PartKind::Joint).is_ok());
    }
}
