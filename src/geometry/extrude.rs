//! Cross-section profiles and their extrusion along spline frames.
//!
//! A profile blends between a rectangle (`roundness = 0`) and an ellipse
//! (`roundness = 1`); profiles are interpolated per spline sample so shape
//! and color change smoothly across residue boundaries.

use std::f32::consts::TAU;

use glam::Vec3;

use super::spline::SplinePoint;
use super::{Mesh, MeshVertex};

/// Shape and color of one cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSectionProfile {
    /// Extent along the binormal.
    pub width: f32,
    /// Extent along the normal.
    pub thickness: f32,
    /// 0 = rectangle, 1 = ellipse.
    pub roundness: f32,
    /// RGB color.
    pub color: [f32; 3],
    /// Source residue.
    pub residue_idx: u32,
}

impl CrossSectionProfile {
    /// Linear blend toward `other`; the residue index snaps at `t = 0.5`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            width: self.width + (other.width - self.width) * t,
            thickness: self.thickness + (other.thickness - self.thickness) * t,
            roundness: self.roundness + (other.roundness - self.roundness) * t,
            color: [
                self.color[0] + (other.color[0] - self.color[0]) * t,
                self.color[1] + (other.color[1] - self.color[1]) * t,
                self.color[2] + (other.color[2] - self.color[2]) * t,
            ],
            residue_idx: if t < 0.5 {
                self.residue_idx
            } else {
                other.residue_idx
            },
        }
    }
}

/// Resample per-residue profiles to `total_spline` samples.
#[must_use]
pub fn interpolate_profiles(
    profiles: &[CrossSectionProfile],
    total_spline: usize,
) -> Vec<CrossSectionProfile> {
    let n_residues = profiles.len();
    let Some(&first) = profiles.first() else {
        return Vec::new();
    };
    if n_residues < 2 || total_spline < 2 {
        return vec![first; total_spline];
    }

    (0..total_spline)
        .map(|i| {
            let frac = i as f32 / (total_spline - 1) as f32;
            let rf = frac * (n_residues - 1) as f32;
            let r0 = (rf.floor() as usize).min(n_residues - 1);
            let r1 = (r0 + 1).min(n_residues - 1);
            profiles[r0].lerp(&profiles[r1], rf - r0 as f32)
        })
        .collect()
}

/// In-plane offset of ring vertex `k` of `csv`.
fn ring_offset(
    frame: &SplinePoint,
    profile: &CrossSectionProfile,
    csv: usize,
    k: usize,
) -> (Vec3, f32, f32) {
    let hw = profile.width * 0.5;
    let ht = profile.thickness * 0.5;
    let angle = (k as f32 / csv as f32) * TAU;
    let cos_a = angle.cos();
    let sin_a = angle.sin();

    // Rectangular corner position blended toward the ellipse
    let rect_x = cos_a.signum() * hw;
    let rect_y = sin_a.signum() * ht;
    let x = rect_x + (cos_a * hw - rect_x) * profile.roundness;
    let y = rect_y + (sin_a * ht - rect_y) * profile.roundness;

    (frame.binormal * x + frame.normal * y, cos_a, sin_a)
}

/// Push one ring of `csv` vertices around `frame`.
pub fn extrude_cross_section(
    frame: &SplinePoint,
    profile: &CrossSectionProfile,
    csv: usize,
    vertices: &mut Vec<MeshVertex>,
) {
    let hw = (profile.width * 0.5).max(1e-6);
    let ht = (profile.thickness * 0.5).max(1e-6);
    for k in 0..csv {
        let (offset, cos_a, sin_a) = ring_offset(frame, profile, csv, k);

        // Normal from the elliptical gradient, flipped outward if needed
        let grad = frame.binormal * (cos_a / hw) + frame.normal * (sin_a / ht);
        let mut normal = grad.normalize_or_zero();
        if normal.dot(offset) < 0.0 {
            normal = -normal;
        }

        vertices.push(MeshVertex {
            position: (frame.pos + offset).into(),
            normal: normal.into(),
            color: profile.color,
            residue_idx: profile.residue_idx,
        });
    }
}

/// Extrude a closed tube through `frames`, one ring per frame, with flat
/// end caps. `profiles` must have one entry per frame.
#[must_use]
pub fn extrude_tube(
    frames: &[SplinePoint],
    profiles: &[CrossSectionProfile],
    csv: usize,
) -> Mesh {
    let mut mesh = Mesh::default();
    if frames.len() < 2 || profiles.len() != frames.len() || csv < 3 {
        return mesh;
    }

    mesh.vertices.reserve(frames.len() * csv + 2 * (csv + 1));
    for (frame, profile) in frames.iter().zip(profiles) {
        extrude_cross_section(frame, profile, csv, &mut mesh.vertices);
    }

    for i in 0..frames.len() - 1 {
        let ring_a = (i * csv) as u32;
        let ring_b = ((i + 1) * csv) as u32;
        for k in 0..csv {
            let k_next = (k + 1) % csv;
            let v0 = ring_a + k as u32;
            let v1 = ring_a + k_next as u32;
            let v2 = ring_b + k as u32;
            let v3 = ring_b + k_next as u32;
            mesh.indices.extend_from_slice(&[v0, v2, v1, v1, v2, v3]);
        }
    }

    let last = frames.len() - 1;
    emit_cap(&frames[0], &profiles[0], csv, &mut mesh, false);
    emit_cap(&frames[last], &profiles[last], csv, &mut mesh, true);
    mesh
}

/// Triangle fan closing the tube at `frame`.
fn emit_cap(
    frame: &SplinePoint,
    profile: &CrossSectionProfile,
    csv: usize,
    mesh: &mut Mesh,
    forward: bool,
) {
    let cap_normal = if forward {
        frame.tangent
    } else {
        -frame.tangent
    };
    let vertex = |pos: Vec3| MeshVertex {
        position: pos.into(),
        normal: cap_normal.into(),
        color: profile.color,
        residue_idx: profile.residue_idx,
    };

    let center_idx = mesh.vertices.len() as u32;
    mesh.vertices.push(vertex(frame.pos));

    let edge_base = mesh.vertices.len() as u32;
    for k in 0..csv {
        let (offset, _, _) = ring_offset(frame, profile, csv, k);
        mesh.vertices.push(vertex(frame.pos + offset));
    }

    for k in 0..csv {
        let a = edge_base + k as u32;
        let b = edge_base + ((k + 1) % csv) as u32;
        // Ring runs binormal -> normal, which winds toward -tangent
        if forward {
            mesh.indices.extend_from_slice(&[center_idx, b, a]);
        } else {
            mesh.indices.extend_from_slice(&[center_idx, a, b]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::spline::build_frames;

    fn make_frame(pos: Vec3, tangent: Vec3, normal: Vec3) -> SplinePoint {
        let binormal = tangent.cross(normal).normalize();
        SplinePoint {
            pos,
            tangent,
            normal,
            binormal,
        }
    }

    fn round(width: f32) -> CrossSectionProfile {
        CrossSectionProfile {
            width,
            thickness: width,
            roundness: 1.0,
            color: [1.0, 0.0, 0.0],
            residue_idx: 0,
        }
    }

    /// Circular tube: normals are radial and points sit on the circle.
    #[test]
    fn circular_tube_normals_are_radial() {
        let frame = make_frame(Vec3::ZERO, Vec3::Z, Vec3::Y);
        let hw = 0.2_f32;
        let mut verts = Vec::new();
        extrude_cross_section(&frame, &round(hw * 2.0), 8, &mut verts);
        assert_eq!(verts.len(), 8);

        for (k, v) in verts.iter().enumerate() {
            let pos = Vec3::from(v.position);
            let nrm = Vec3::from(v.normal);
            assert!((pos.length() - hw).abs() < 1e-5, "k={k}");
            assert!(nrm.dot(pos.normalize()) > 0.9999, "k={k}: {nrm:?}");
        }
    }

    /// Elliptical cross-section: gradient normals tilt toward the short axis.
    #[test]
    fn elliptical_normals_differ_from_radial() {
        let frame = make_frame(Vec3::ZERO, Vec3::Z, Vec3::Y);
        let profile = CrossSectionProfile {
            thickness: 0.2,
            ..round(0.8)
        };
        let mut verts = Vec::new();
        extrude_cross_section(&frame, &profile, 8, &mut verts);

        let v = &verts[1];
        let pos = Vec3::from(v.position);
        let nrm = Vec3::from(v.normal);
        assert!(nrm.dot(pos.normalize()) < 0.999);
        assert!((nrm.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn profile_interpolation_blends_neighbors() {
        let a = round(1.0);
        let b = CrossSectionProfile {
            residue_idx: 1,
            color: [0.0, 0.0, 1.0],
            ..round(3.0)
        };
        let samples = interpolate_profiles(&[a, b], 5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], a);
        assert_eq!(samples[4], b);
        assert!((samples[2].width - 2.0).abs() < 1e-6);
        assert_eq!(samples[1].residue_idx, 0);
        assert_eq!(samples[3].residue_idx, 1);
        assert!(interpolate_profiles(&[], 4).is_empty());
    }

    #[test]
    fn tube_has_rings_caps_and_valid_indices() {
        let points: Vec<Vec3> = (0..5).map(|i| Vec3::X * i as f32).collect();
        let frames = build_frames(&points);
        let profiles = vec![round(0.5); frames.len()];
        let csv = 6;
        let mesh = extrude_tube(&frames, &profiles, csv);

        // 5 rings + 2 caps of (center + csv)
        assert_eq!(mesh.vertices.len(), 5 * csv + 2 * (csv + 1));
        // 4 segments * csv quads * 2 tris + 2 caps * csv tris
        assert_eq!(mesh.triangle_count(), 4 * csv * 2 + 2 * csv);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    fn triangle(mesh: &Mesh, t: usize) -> [Vec3; 3] {
        let corner = |c: usize| {
            Vec3::from(mesh.vertices[mesh.indices[3 * t + c] as usize].position)
        };
        [corner(0), corner(1), corner(2)]
    }

    #[test]
    fn tube_is_closed_and_wound_outward() {
        let points: Vec<Vec3> = (0..5).map(|i| Vec3::X * i as f32).collect();
        let frames = build_frames(&points);
        let csv = 8;
        let mesh = extrude_tube(&frames, &vec![round(1.0); 5], csv);

        let volume: f32 = (0..mesh.triangle_count())
            .map(|t| {
                let [a, b, c] = triangle(&mesh, t);
                a.dot(b.cross(c)) / 6.0
            })
            .sum();
        // Octagonal prism of circumradius 0.5 and length 4
        let expected = 0.5 * csv as f32 * 0.25 * (TAU / csv as f32).sin() * 4.0;
        assert!((volume - expected).abs() < 1e-3, "{volume} vs {expected}");

        // Cap fans sit after the side quads
        for t in 4 * csv * 2..mesh.triangle_count() {
            let [a, b, c] = triangle(&mesh, t);
            let face = (b - a).cross(c - a);
            let stored = mesh.vertices[mesh.indices[3 * t] as usize].normal;
            assert!(face.dot(Vec3::from(stored)) > 0.0, "cap triangle {t}");
        }
    }

    #[test]
    fn degenerate_input_gives_empty_mesh() {
        let frames = build_frames(&[Vec3::ZERO]);
        assert!(extrude_tube(&frames, &[round(1.0)], 8).is_empty());
    }
}
