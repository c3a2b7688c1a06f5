use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::check_positive;
use crate::error::{MolVizError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Bonding", inline)]
#[serde(default)]
/// Distance-based bond perception parameters.
pub struct BondingOptions {
    /// Slack added to the covalent radius sum, in angstroms.
    #[schemars(title = "Tolerance", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub tolerance: f32,
    /// Pairs closer than this are treated as overlapping, not bonded.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Estimate double bonds from short distances.
    #[schemars(title = "Estimate Bond Orders")]
    pub infer_orders: bool,
}

impl Default for BondingOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.45,
            min_distance: 0.4,
            infer_orders: false,
        }
    }
}

impl BondingOptions {
    /// Reject negative tolerance and non-positive minimum distance.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance >= 0.0 && self.tolerance.is_finite()) {
            return Err(MolVizError::InvalidOption {
                name: "tolerance",
                value: self.tolerance,
            });
        }
        check_positive("min_distance", self.min_distance)
    }
}
