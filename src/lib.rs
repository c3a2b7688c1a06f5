// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Geometry code converts between index and float types on purpose
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::items_after_statements)]

//! Molecular and tractography geometry builders for 3D scenes.
//!
//! molviz turns molecules and streamlines into renderable primitives
//! (sphere and capsule impostors, triangle meshes, line strips) that a
//! rendering backend can upload as-is.
//!
//! # Key entry points
//!
//! - [`molecule::Molecule`] - atoms, optional PDB-style metadata, bonds
//! - [`molecule::bonding::compute_bonding`] - distance-based bond perception
//! - [`element::PeriodicTable`] - element symbols, names, radii and colors
//! - [`representation`] - `sphere_cpk`, `ball_stick`, `stick`, `ribbon`,
//!   `bounding_box`
//! - [`streamline`] - streamline line actors and ROI surfaces
//! - [`scene::Scene`] - actor container with camera fitting
//! - [`options::Options`] - TOML presets for every builder
//!
//! # Example
//!
//! ```
//! use molviz::molecule::{bonding::compute_bonding, Molecule};
//! use molviz::options::StickOptions;
//! use molviz::representation::stick;
//! use molviz::scene::Scene;
//!
//! let mut molecule = Molecule::new();
//! let _ = molecule.add_atom(6, 0.0, 0.0, 0.0)?;
//! let _ = molecule.add_atom(8, 1.2, 0.0, 0.0)?;
//! assert_eq!(compute_bonding(&mut molecule), 1);
//!
//! let mut scene = Scene::new();
//! let _ = scene.add(stick(&molecule, &StickOptions::default())?);
//! scene.reset_camera();
//! # Ok::<(), molviz::error::MolVizError>(())
//! ```

pub mod actor;
pub mod camera;
pub mod element;
pub mod error;
pub mod geometry;
pub mod molecule;
pub mod options;
pub mod representation;
pub mod scene;
pub mod streamline;

#[cfg(test)]
mod test_log;
