//! Tractography streamlines and region-of-interest surfaces.
//!
//! Streamlines are produced by external tracking code; this module stores
//! them compactly and turns them into line actors. ROI masks become closed
//! voxel-boundary surfaces.

mod roi;

use glam::Vec3;
pub use roi::{contour_from_roi, RoiMask};

use crate::actor::{Actor, Geometry};
use crate::error::{MolVizError, Result};
use crate::geometry::Polylines;
use crate::options::LineOptions;

/// Color for streamlines whose endpoints coincide.
const DEGENERATE_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Append-only sequence of 3D polylines in one flat point buffer.
///
/// Streamline `i` spans `points[offsets[i]..offsets[i + 1]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Streamlines {
    points: Vec<Vec3>,
    offsets: Vec<usize>,
}

impl Default for Streamlines {
    fn default() -> Self {
        Self::new()
    }
}

impl Streamlines {
    /// Empty container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            offsets: vec![0],
        }
    }

    /// Append one streamline.
    pub fn push(&mut self, points: &[Vec3]) {
        self.points.extend_from_slice(points);
        self.offsets.push(self.points.len());
    }

    /// Number of streamlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether there are no streamlines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of points over all streamlines.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.points.len()
    }

    /// Points of streamline `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[Vec3]> {
        let start = *self.offsets.get(index)?;
        let end = *self.offsets.get(index + 1)?;
        Some(&self.points[start..end])
    }

    /// Iterate over streamlines.
    pub fn iter(&self) -> impl Iterator<Item = &[Vec3]> + '_ {
        self.offsets
            .windows(2)
            .map(|w| &self.points[w[0]..w[1]])
    }
}

impl<P: AsRef<[Vec3]>> FromIterator<P> for Streamlines {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut out = Self::new();
        for line in iter {
            out.push(line.as_ref());
        }
        out
    }
}

/// Orientation colormap: each streamline is colored by the absolute value
/// of its normalized end-to-end direction (x red, y green, z blue).
#[must_use]
pub fn line_colors(streamlines: &Streamlines) -> Vec<[f32; 3]> {
    streamlines.iter().map(orientation_color).collect()
}

fn orientation_color(points: &[Vec3]) -> [f32; 3] {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return DEGENERATE_COLOR;
    };
    let dir = (*last - *first).normalize_or_zero();
    if dir == Vec3::ZERO {
        DEGENERATE_COLOR
    } else {
        dir.abs().to_array()
    }
}

/// How [`line`] colors its streamlines.
#[derive(Debug, Clone, PartialEq)]
pub enum LineColoring {
    /// [`line_colors`] orientation colormap.
    Orientation,
    /// One color for every streamline.
    Uniform([f32; 3]),
    /// One color per streamline, in order.
    PerStreamline(Vec<[f32; 3]>),
}

/// One line actor drawing every streamline.
pub fn line(
    streamlines: &Streamlines,
    options: &LineOptions,
    coloring: &LineColoring,
) -> Result<Actor> {
    options.validate()?;
    let colors = match coloring {
        LineColoring::Orientation => line_colors(streamlines),
        LineColoring::Uniform(c) => vec![*c; streamlines.len()],
        LineColoring::PerStreamline(c) => {
            if c.len() != streamlines.len() {
                return Err(MolVizError::LengthMismatch {
                    field: "colors",
                    expected: streamlines.len(),
                    found: c.len(),
                });
            }
            c.clone()
        }
    };

    let mut lines = Polylines::new(options.line_width);
    for (points, color) in streamlines.iter().zip(colors) {
        lines.push_strip(points, color);
    }

    log::debug!(
        "line: {} streamlines, {} points",
        streamlines.len(),
        streamlines.total_points()
    );
    Ok(Actor::new("line", Geometry::Lines(lines), options.opacity))
}
