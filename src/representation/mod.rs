//! Molecular representation builders.
//!
//! Each builder is a pure function from a [`Molecule`](crate::molecule::Molecule)
//! and its option struct to exactly one [`Actor`](crate::actor::Actor).
//! Options are validated first; bond-based builders require bonds, the
//! ribbon requires per-atom metadata.

mod ball_and_stick;
mod bounding_box;
mod coloring;
mod ribbon;
mod sphere;
mod stick;

pub use ball_and_stick::ball_stick;
pub use bounding_box::bounding_box;
pub use ribbon::ribbon;
pub use sphere::sphere_cpk;
pub use stick::stick;
