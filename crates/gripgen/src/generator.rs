//! Top-level controller: box parameters in, gripper scene out.

use tracing::info;

use gripgen_layout::{BoxSpec, GenerationResult, GridSpec, LayoutLimits};

use crate::error::Result;
use crate::loader::{load_templates, ModelLoader};
use crate::placement::{plan_placements, Placement, SceneSpacing};
use crate::scene::{instantiate, RenderGroup, SceneRenderer};
use crate::template::TemplateSet;

/// Name of the render group every run produces.
pub const GRIPPER_GROUP: &str = "gripper";

/// Owns the part templates and runs layout plus instantiation.
///
/// Holding a [`TemplateSet`] means every template is loaded, so a
/// generator is always ready to instantiate.
#[derive(Debug, Clone)]
pub struct Generator {
    templates: TemplateSet,
    limits: LayoutLimits,
}

impl Generator {
    /// Generator with the default layout limits.
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            templates,
            limits: LayoutLimits::default(),
        }
    }

    /// Load every template through `loader`.
    pub fn from_loader(loader: &dyn ModelLoader) -> Result<Self> {
        Ok(Self::new(load_templates(loader)?))
    }

    /// Replace the layout limits.
    pub fn with_limits(mut self, limits: LayoutLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Layout limits in use.
    pub fn limits(&self) -> &LayoutLimits {
        &self.limits
    }

    /// Loaded templates.
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Compute the grid without building geometry.
    pub fn layout(&self, spec: &BoxSpec) -> Result<GridSpec> {
        Ok(self.limits.compute_grid(spec)?)
    }

    /// Compute the grid and its part placements.
    pub fn plan(&self, spec: &BoxSpec) -> Result<(GridSpec, Vec<Placement>)> {
        let grid = self.layout(spec)?;
        let placements = plan_placements(&grid, SceneSpacing::from_grid(&grid));
        Ok((grid, placements))
    }

    /// Build a fresh render group for a computed grid.
    pub fn build_group(&self, grid: &GridSpec) -> RenderGroup {
        let placements = plan_placements(grid, SceneSpacing::from_grid(grid));
        instantiate(&self.templates, &placements, GRIPPER_GROUP)
    }

    /// Lay out the grid, instantiate the frame and hand it to `renderer`.
    ///
    /// On a layout error nothing reaches the renderer. Each successful run
    /// hands over a new group that replaces the previous one.
    pub fn run(
        &self,
        spec: &BoxSpec,
        renderer: &mut dyn SceneRenderer,
    ) -> Result<GenerationResult> {
        let grid = self.layout(spec)?;
        let group = self.build_group(&grid);
        info!(
            columns = grid.columns,
            rows = grid.rows,
            spacing_x = grid.spacing_x,
            spacing_y = grid.spacing_y,
            instances = group.len(),
            "generated gripper frame"
        );
        renderer.add_to_scene(group);
        Ok(GenerationResult::from(grid))
    }
}
