use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_positive, check_unit};
use crate::error::{MolVizError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ribbon", inline)]
#[serde(default)]
/// Backbone ribbon shape, tessellation, and palette.
pub struct RibbonOptions {
    /// Helix ribbon width in angstroms.
    #[schemars(title = "Helix Width", range(min = 0.5, max = 3.0), extend("step" = 0.05))]
    pub helix_width: f32,
    /// Helix ribbon thickness in angstroms.
    #[schemars(title = "Helix Thickness", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub helix_thickness: f32,
    /// Helix cross-section roundness (0 = rectangle, 1 = ellipse).
    #[schemars(skip)]
    pub helix_roundness: f32,
    /// Sheet width in angstroms.
    #[schemars(title = "Sheet Width", range(min = 0.5, max = 3.0), extend("step" = 0.05))]
    pub sheet_width: f32,
    /// Sheet thickness in angstroms.
    #[schemars(title = "Sheet Thickness", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub sheet_thickness: f32,
    /// Sheet cross-section roundness.
    #[schemars(skip)]
    pub sheet_roundness: f32,
    /// Coil tube diameter in angstroms.
    #[schemars(title = "Coil Diameter", range(min = 0.1, max = 1.5), extend("step" = 0.05))]
    pub coil_width: f32,
    /// Spline samples per residue.
    #[schemars(title = "Segments per Residue", range(min = 2, max = 16))]
    pub segments_per_residue: u32,
    /// Vertices around each cross-section ring.
    #[schemars(title = "Cross-section Vertices", range(min = 4, max = 32))]
    pub cross_section_verts: u32,
    /// Helix color.
    #[schemars(skip)]
    pub helix_color: [f32; 3],
    /// Sheet color.
    #[schemars(skip)]
    pub sheet_color: [f32; 3],
    /// Coil color.
    #[schemars(skip)]
    pub coil_color: [f32; 3],
    /// Opacity in `[0, 1]`.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
}

impl Default for RibbonOptions {
    fn default() -> Self {
        Self {
            helix_width: 1.6,
            helix_thickness: 0.3,
            helix_roundness: 0.6,
            sheet_width: 1.6,
            sheet_thickness: 0.4,
            sheet_roundness: 0.1,
            coil_width: 0.4,
            segments_per_residue: 8,
            cross_section_verts: 12,
            helix_color: [240.0 / 255.0, 0.0, 128.0 / 255.0],
            sheet_color: [1.0, 1.0, 0.0],
            coil_color: [1.0, 1.0, 1.0],
            opacity: 1.0,
        }
    }
}

impl RibbonOptions {
    /// Reject degenerate shapes and tessellation.
    pub fn validate(&self) -> Result<()> {
        check_positive("helix_width", self.helix_width)?;
        check_positive("helix_thickness", self.helix_thickness)?;
        check_positive("sheet_width", self.sheet_width)?;
        check_positive("sheet_thickness", self.sheet_thickness)?;
        check_positive("coil_width", self.coil_width)?;
        check_unit("helix_roundness", self.helix_roundness)?;
        check_unit("sheet_roundness", self.sheet_roundness)?;
        if self.segments_per_residue == 0 {
            return Err(MolVizError::InvalidOption {
                name: "segments_per_residue",
                value: 0.0,
            });
        }
        if self.cross_section_verts < 3 {
            return Err(MolVizError::InvalidOption {
                name: "cross_section_verts",
                value: self.cross_section_verts as f32,
            });
        }
        check_unit("opacity", self.opacity)
    }
}
