//! CPU-side geometry shared by every representation: GPU-ready instance and
//! vertex layouts, axis-aligned bounds, spline/frame math, and cross-section
//! extrusion.

pub mod bounds;
pub mod extrude;
pub mod primitives;
pub mod spline;

pub use bounds::Aabb;
use glam::Vec3;
pub use primitives::{
    CapsuleInstance, LineVertex, Mesh, MeshVertex, Polylines, SphereInstance,
};

/// Find any unit vector perpendicular to `v`. Degenerate input yields
/// [`Vec3::X`].
#[must_use]
pub fn find_perpendicular(v: Vec3) -> Vec3 {
    if v.length_squared() < 1e-8 {
        return Vec3::X;
    }
    let candidate = if v.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    v.cross(candidate).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_is_orthogonal_unit() {
        for v in [
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            Vec3::new(1.0, 2.0, -3.0),
            Vec3::new(-0.95, 0.1, 0.0),
        ] {
            let p = find_perpendicular(v);
            assert!(p.dot(v).abs() < 1e-5, "{v:?} -> {p:?}");
            assert!((p.length() - 1.0).abs() < 1e-5);
        }
        assert_eq!(find_perpendicular(Vec3::ZERO), Vec3::X);
    }
}
