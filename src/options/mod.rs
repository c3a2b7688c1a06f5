//! Centralized representation options with TOML preset support.
//!
//! Every builder takes its own option struct; [`Options`] groups them so a
//! whole look can be saved and loaded as one TOML preset.

mod bonding;
mod representation;
mod ribbon;
mod streamline;

use std::path::Path;

pub use bonding::BondingOptions;
pub use representation::{
    BallStickOptions, BoundingBoxOptions, ColorMode, SphereOptions,
    StickOptions,
};
pub use ribbon::RibbonOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use streamline::{ContourOptions, LineOptions};

use crate::error::{MolVizError, Result};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[stick]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Space-filling sphere options.
    pub sphere: SphereOptions,
    /// Ball-and-stick options.
    pub ball_stick: BallStickOptions,
    /// Stick options.
    pub stick: StickOptions,
    /// Ribbon options.
    pub ribbon: RibbonOptions,
    /// Bounding box options.
    pub bounding_box: BoundingBoxOptions,
    /// Bond perception options.
    pub bonding: BondingOptions,
    /// Streamline line options.
    pub streamlines: LineOptions,
    /// ROI surface options.
    pub contour: ContourOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(MolVizError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| MolVizError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolVizError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolVizError::Io)?;
        }
        std::fs::write(path, content).map_err(MolVizError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.sphere.validate()?;
        self.ball_stick.validate()?;
        self.stick.validate()?;
        self.ribbon.validate()?;
        self.bounding_box.validate()?;
        self.bonding.validate()?;
        self.streamlines.validate()?;
        self.contour.validate()
    }
}

pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(MolVizError::InvalidOption { name, value })
    }
}

pub(crate) fn check_unit(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MolVizError::InvalidOption { name, value })
    }
}
