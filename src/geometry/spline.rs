//! Spline interpolation and moving frames along a backbone trace.

use glam::Vec3;

use super::find_perpendicular;

/// A sample on the spline with its local orthonormal frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplinePoint {
    /// Position.
    pub pos: Vec3,
    /// Unit tangent.
    pub tangent: Vec3,
    /// Unit normal (cross-section "up").
    pub normal: Vec3,
    /// Unit binormal (cross-section "right").
    pub binormal: Vec3,
}

/// Catmull-Rom spline through `points` with `segments_per_span` samples per
/// span. The curve passes through every control point; end spans use
/// reflected phantom points. Two points give a straight resampling.
#[must_use]
pub fn catmull_rom(points: &[Vec3], segments_per_span: usize) -> Vec<Vec3> {
    let n = points.len();
    if n < 2 || segments_per_span == 0 {
        return points.to_vec();
    }
    let step = |j: usize| j as f32 / segments_per_span as f32;

    let mut curve: Vec<Vec3> = if n == 2 {
        (0..segments_per_span)
            .map(|j| points[0].lerp(points[1], step(j)))
            .collect()
    } else {
        let head = 2.0 * points[0] - points[1];
        let tail = 2.0 * points[n - 1] - points[n - 2];
        let padded: Vec<Vec3> = std::iter::once(head)
            .chain(points.iter().copied())
            .chain(std::iter::once(tail))
            .collect();
        padded
            .windows(4)
            .flat_map(|w| {
                let span = [w[0], w[1], w[2], w[3]];
                (0..segments_per_span).map(move |j| span_point(span, step(j)))
            })
            .collect()
    };
    curve.push(points[n - 1]);
    curve
}

/// Point at `t` on the span from `p1` to `p2`, in Hermite form with
/// tangents `(p2 - p0) / 2` and `(p3 - p1) / 2`.
fn span_point([p0, p1, p2, p3]: [Vec3; 4], t: f32) -> Vec3 {
    let m1 = (p2 - p0) * 0.5;
    let m2 = (p3 - p1) * 0.5;
    let t2 = t * t;
    let t3 = t2 * t;
    p1 * (2.0 * t3 - 3.0 * t2 + 1.0)
        + m1 * (t3 - 2.0 * t2 + t)
        + p2 * (3.0 * t2 - 2.0 * t3)
        + m2 * (t3 - t2)
}

/// Frames along `spline`. Tangents come from central differences
/// (one-sided at the ends); normals are carried sample to sample without
/// twisting about the curve.
#[must_use]
pub fn build_frames(spline: &[Vec3]) -> Vec<SplinePoint> {
    let Some(&first) = spline.first() else {
        return Vec::new();
    };
    let last = spline.len() - 1;
    let tangent_at = |i: usize| {
        if last == 0 {
            Vec3::Z
        } else {
            (spline[(i + 1).min(last)] - spline[i.saturating_sub(1)])
                .normalize_or_zero()
        }
    };

    let tangent = tangent_at(0);
    let normal = find_perpendicular(tangent);
    let mut frames = Vec::with_capacity(spline.len());
    frames.push(SplinePoint {
        pos: first,
        tangent,
        normal,
        binormal: tangent.cross(normal).normalize_or_zero(),
    });
    for (i, &pos) in spline.iter().enumerate().skip(1) {
        let next = transport_frame(&frames[i - 1], pos, tangent_at(i));
        frames.push(next);
    }
    frames
}

/// Next frame by double reflection (Wang et al. 2008): mirror through the
/// chord, then through the plane that maps the mirrored tangent onto the
/// new one.
fn transport_frame(prev: &SplinePoint, pos: Vec3, tangent: Vec3) -> SplinePoint {
    let chord = pos - prev.pos;
    if chord.length_squared() < 1e-10 {
        return SplinePoint {
            pos,
            tangent,
            ..*prev
        };
    }
    let mirrored_tangent = mirror(prev.tangent, chord);
    let r = mirror(mirror(prev.normal, chord), tangent - mirrored_tangent);
    let normal = (r - tangent * tangent.dot(r)).normalize_or_zero();
    SplinePoint {
        pos,
        tangent,
        normal,
        binormal: tangent.cross(normal).normalize_or_zero(),
    }
}

/// `v` mirrored through the plane perpendicular to `axis`. A near-zero
/// axis leaves `v` unchanged.
fn mirror(v: Vec3, axis: Vec3) -> Vec3 {
    let len_sq = axis.length_squared();
    if len_sq < 1e-10 {
        v
    } else {
        v - axis * (2.0 * axis.dot(v) / len_sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> Vec<Vec3> {
        (0..6)
            .map(|i| {
                let f = i as f32;
                Vec3::new(f * 3.8, if i % 2 == 0 { 0.0 } else { 1.2 }, f * 0.4)
            })
            .collect()
    }

    #[test]
    fn catmull_rom_passes_through_control_points() {
        let points = zigzag();
        let spr = 4;
        let curve = catmull_rom(&points, spr);
        assert_eq!(curve.len(), (points.len() - 1) * spr + 1);
        for (i, p) in points.iter().enumerate() {
            assert!(curve[i * spr].distance(*p) < 1e-4, "control point {i}");
        }
    }

    #[test]
    fn two_points_fall_back_to_linear() {
        let curve = catmull_rom(&[Vec3::ZERO, Vec3::X * 2.0], 4);
        assert_eq!(curve.len(), 5);
        assert!(curve[2].distance(Vec3::X) < 1e-6);
    }

    #[test]
    fn rmf_frames_are_orthonormal() {
        let frames = build_frames(&catmull_rom(&zigzag(), 6));
        for (i, f) in frames.iter().enumerate() {
            assert!((f.tangent.length() - 1.0).abs() < 1e-4, "tangent {i}");
            assert!((f.normal.length() - 1.0).abs() < 1e-4, "normal {i}");
            assert!(f.normal.dot(f.tangent).abs() < 1e-3, "n.t {i}");
            assert!(f.binormal.dot(f.tangent).abs() < 1e-3, "b.t {i}");
            assert!(f.binormal.dot(f.normal).abs() < 1e-3, "b.n {i}");
        }
    }

    #[test]
    fn rmf_on_straight_line_does_not_twist() {
        let line: Vec<Vec3> = (0..10).map(|i| Vec3::Z * i as f32).collect();
        let frames = build_frames(&line);
        let n0 = frames[0].normal;
        for f in &frames {
            assert!(f.normal.dot(n0) > 0.9999);
        }
    }

    #[test]
    fn evenly_spaced_line_is_reproduced() {
        let points: Vec<Vec3> = (0..4).map(|i| Vec3::X * i as f32).collect();
        let curve = catmull_rom(&points, 4);
        for (k, p) in curve.iter().enumerate() {
            assert!(p.distance(Vec3::X * k as f32 * 0.25) < 1e-5, "sample {k}");
        }
    }

    #[test]
    fn planar_arc_keeps_normal_out_of_plane() {
        let arc: Vec<Vec3> = (0..=16)
            .map(|i| {
                let a = i as f32 / 16.0 * std::f32::consts::FRAC_PI_2;
                Vec3::new(a.cos(), a.sin(), 0.0) * 5.0
            })
            .collect();
        let frames = build_frames(&arc);
        assert_eq!(frames.len(), arc.len());
        for (i, f) in frames.iter().enumerate() {
            assert!(f.normal.z.abs() > 0.999, "normal {i}: {:?}", f.normal);
            assert!(f.binormal.z.abs() < 1e-3, "binormal {i}");
        }
    }
}
