use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_positive, check_unit};
use crate::error::{MolVizError, Result};

/// How atom and bond colors are chosen.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// One color per element, from the periodic table.
    #[default]
    Discrete,
    /// One uniform color for every atom (and one for every bond).
    Single,
    /// Per-atom color lists. Not supported; falls back to discrete with a
    /// warning.
    Multiple,
    /// Any other name. Falls back to discrete with a warning.
    #[serde(other)]
    Unrecognized,
}

impl FromStr for ColorMode {
    type Err = MolVizError;

    /// Never fails: unknown names become [`ColorMode::Unrecognized`] and
    /// are reported when a representation resolves them.
    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "discrete" => Self::Discrete,
            "single" => Self::Single,
            "multiple" => Self::Multiple,
            _ => Self::Unrecognized,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Space Filling", inline)]
#[serde(default)]
/// Space-filling (CPK) sphere options.
pub struct SphereOptions {
    /// Atom coloring strategy.
    #[schemars(title = "Color Mode")]
    pub color_mode: ColorMode,
    /// Multiplier on the van der Waals radius.
    #[schemars(title = "Atom Scale", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub atom_scale_factor: f32,
    /// Opacity in `[0, 1]`.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
    /// Atom color in single mode.
    #[schemars(skip)]
    pub single_color: [f32; 3],
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Discrete,
            atom_scale_factor: 1.0,
            opacity: 1.0,
            single_color: [150.0 / 255.0, 250.0 / 255.0, 150.0 / 255.0],
        }
    }
}

impl SphereOptions {
    /// Reject non-positive scales and out-of-range opacity.
    pub fn validate(&self) -> Result<()> {
        check_positive("atom_scale_factor", self.atom_scale_factor)?;
        check_unit("opacity", self.opacity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ball and Stick", inline)]
#[serde(default)]
/// Ball-and-stick options.
pub struct BallStickOptions {
    /// Atom and bond coloring strategy.
    #[schemars(title = "Color Mode")]
    pub color_mode: ColorMode,
    /// Multiplier on the van der Waals radius for the balls.
    #[schemars(title = "Atom Scale", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub atom_scale_factor: f32,
    /// Bond cylinder radius in angstroms.
    #[schemars(title = "Bond Thickness", range(min = 0.02, max = 0.5), extend("step" = 0.01))]
    pub bond_thickness: f32,
    /// Draw double and triple bonds as parallel cylinders.
    #[schemars(title = "Multiple Bonds")]
    pub multiple_bonds: bool,
    /// Opacity in `[0, 1]`.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
    /// Atom color in single mode.
    #[schemars(skip)]
    pub single_atom_color: [f32; 3],
    /// Bond color in single mode.
    #[schemars(skip)]
    pub single_bond_color: [f32; 3],
}

impl Default for BallStickOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Discrete,
            atom_scale_factor: 0.3,
            bond_thickness: 0.1,
            multiple_bonds: true,
            opacity: 1.0,
            single_atom_color: [150.0 / 255.0; 3],
            single_bond_color: [50.0 / 255.0; 3],
        }
    }
}

impl BallStickOptions {
    /// Reject non-positive sizes and out-of-range opacity.
    pub fn validate(&self) -> Result<()> {
        check_positive("atom_scale_factor", self.atom_scale_factor)?;
        check_positive("bond_thickness", self.bond_thickness)?;
        check_unit("opacity", self.opacity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Stick", inline)]
#[serde(default)]
/// Stick (licorice) options.
pub struct StickOptions {
    /// Bond coloring strategy.
    #[schemars(title = "Color Mode")]
    pub color_mode: ColorMode,
    /// Stick radius in angstroms.
    #[schemars(title = "Bond Thickness", range(min = 0.02, max = 0.5), extend("step" = 0.01))]
    pub bond_thickness: f32,
    /// Opacity in `[0, 1]`.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
    /// Stick color in single mode.
    #[schemars(skip)]
    pub single_color: [f32; 3],
}

impl Default for StickOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Discrete,
            bond_thickness: 0.1,
            opacity: 1.0,
            single_color: [150.0 / 255.0; 3],
        }
    }
}

impl StickOptions {
    /// Reject non-positive thickness and out-of-range opacity.
    pub fn validate(&self) -> Result<()> {
        check_positive("bond_thickness", self.bond_thickness)?;
        check_unit("opacity", self.opacity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bounding Box", inline)]
#[serde(default)]
/// Bounding box outline options.
pub struct BoundingBoxOptions {
    /// Edge color.
    #[schemars(skip)]
    pub color: [f32; 3],
    /// Line width in pixels.
    #[schemars(title = "Line Width", range(min = 0.05, max = 10.0), extend("step" = 0.05))]
    pub line_width: f32,
    /// Opacity in `[0, 1]`.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
}

impl Default for BoundingBoxOptions {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            line_width: 0.3,
            opacity: 1.0,
        }
    }
}

impl BoundingBoxOptions {
    /// Reject non-positive line width and out-of-range opacity.
    pub fn validate(&self) -> Result<()> {
        check_positive("line_width", self.line_width)?;
        check_unit("opacity", self.opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_parsing_never_fails() {
        assert_eq!("discrete".parse::<ColorMode>().unwrap(), ColorMode::Discrete);
        assert_eq!(" Single ".parse::<ColorMode>().unwrap(), ColorMode::Single);
        assert_eq!("multiple".parse::<ColorMode>().unwrap(), ColorMode::Multiple);
        assert_eq!("rainbow".parse::<ColorMode>().unwrap(), ColorMode::Unrecognized);
    }

    #[test]
    fn unknown_color_mode_deserializes_to_fallback_arm() {
        let opts: StickOptions =
            toml::from_str("color_mode = \"rainbow\"").unwrap();
        assert_eq!(opts.color_mode, ColorMode::Unrecognized);
        let opts: StickOptions =
            toml::from_str("color_mode = \"single\"").unwrap();
        assert_eq!(opts.color_mode, ColorMode::Single);
    }

    #[test]
    fn validation_rejects_bad_sizes() {
        let opts = BallStickOptions {
            bond_thickness: 0.0,
            ..BallStickOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(MolVizError::InvalidOption {
                name: "bond_thickness",
                ..
            })
        ));
        let opts = SphereOptions {
            opacity: 1.5,
            ..SphereOptions::default()
        };
        assert!(opts.validate().is_err());
        assert!(BoundingBoxOptions::default().validate().is_ok());
    }
}
