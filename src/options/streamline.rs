use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_positive, check_unit};
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Streamlines", inline)]
#[serde(default)]
/// Streamline polyline options.
pub struct LineOptions {
    /// Line width in pixels.
    #[schemars(title = "Line Width", range(min = 0.5, max = 10.0), extend("step" = 0.5))]
    pub line_width: f32,
    /// Opacity in `[0, 1]`.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            opacity: 1.0,
        }
    }
}

impl LineOptions {
    /// Reject non-positive width and out-of-range opacity.
    pub fn validate(&self) -> Result<()> {
        check_positive("line_width", self.line_width)?;
        check_unit("opacity", self.opacity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "ROI Surface", inline)]
#[serde(default)]
/// Region-of-interest surface options.
pub struct ContourOptions {
    /// Surface color.
    #[schemars(skip)]
    pub color: [f32; 3],
    /// Opacity in `[0, 1]`.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
}

impl Default for ContourOptions {
    fn default() -> Self {
        Self {
            color: [0.0, 1.0, 1.0],
            opacity: 0.5,
        }
    }
}

impl ContourOptions {
    /// Reject out-of-range opacity.
    pub fn validate(&self) -> Result<()> {
        check_unit("opacity", self.opacity)
    }
}
