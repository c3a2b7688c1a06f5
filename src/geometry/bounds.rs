//! Axis-aligned bounding boxes.

use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Corner index pairs forming the 12 box edges, in [`Aabb::corners`]
    /// order.
    pub const EDGES: [[usize; 2]; 12] = [
        [0, 1],
        [1, 3],
        [3, 2],
        [2, 0],
        [4, 5],
        [5, 7],
        [7, 6],
        [6, 4],
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ];

    /// Box spanning `min..=max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Tightest box around `points`; `None` when there are none.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |b, p| b.including(p)))
    }

    /// Box grown to contain `p`.
    #[must_use]
    pub fn including(self, p: Vec3) -> Self {
        Self::new(self.min.min(p), self.max.max(p))
    }

    /// Box grown to contain a sphere.
    #[must_use]
    pub fn including_sphere(self, center: Vec3, radius: f32) -> Self {
        let r = Vec3::splat(radius.abs());
        Self::new(self.min.min(center - r), self.max.max(center + r))
    }

    /// Smallest box containing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Radius of the bounding sphere (half the diagonal).
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.size().length() * 0.5
    }

    /// The eight corners; bit 0 of the index selects x, bit 1 y, bit 2 z.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_is_tight() {
        let b = Aabb::from_points([
            Vec3::new(1.0, -2.0, 0.0),
            Vec3::new(-1.0, 3.0, 0.5),
        ])
        .unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 3.0, 0.5));
        assert_eq!(b.center(), Vec3::new(0.0, 0.5, 0.25));
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn every_edge_is_axis_aligned() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        let corners = b.corners();
        for [a, c] in Aabb::EDGES {
            let d = corners[c] - corners[a];
            let nonzero = [d.x, d.y, d.z].iter().filter(|v| **v != 0.0).count();
            assert_eq!(nonzero, 1, "edge {a}-{c} is diagonal");
        }
    }

    #[test]
    fn sphere_and_union_grow_box() {
        let b = Aabb::new(Vec3::ZERO, Vec3::ONE)
            .including_sphere(Vec3::ZERO, 0.5)
            .union(Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0)));
        assert_eq!(b.min, Vec3::splat(-0.5));
        assert_eq!(b.max, Vec3::splat(3.0));
    }
}
