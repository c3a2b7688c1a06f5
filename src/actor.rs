//! A single renderable primitive handed to a [`crate::scene::Scene`].

use crate::geometry::{Aabb, CapsuleInstance, Mesh, Polylines, SphereInstance};

/// Geometry payload of an [`Actor`].
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Sphere impostors.
    Spheres(Vec<SphereInstance>),
    /// Capsule impostors.
    Capsules(Vec<CapsuleInstance>),
    /// Atom spheres plus bond capsules drawn as one primitive.
    BallAndStick {
        /// Atom spheres.
        spheres: Vec<SphereInstance>,
        /// Bond capsules.
        capsules: Vec<CapsuleInstance>,
    },
    /// Lit triangle mesh.
    Mesh(Mesh),
    /// Colored line strips.
    Lines(Polylines),
}

/// One renderable primitive: geometry, opacity, and a label for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    label: String,
    geometry: Geometry,
    opacity: f32,
}

impl Actor {
    /// Create an actor. Opacity is clamped to `[0, 1]`.
    pub fn new(
        label: impl Into<String>,
        geometry: Geometry,
        opacity: f32,
    ) -> Self {
        Self {
            label: label.into(),
            geometry,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Debug label (`"sphere_cpk"`, `"ribbon"`, ...).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Geometry payload.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Change opacity (clamped to `[0, 1]`).
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Number of instances, triangles, or strips, depending on the payload.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        match &self.geometry {
            Geometry::Spheres(s) => s.len(),
            Geometry::Capsules(c) => c.len(),
            Geometry::BallAndStick { spheres, capsules } => {
                spheres.len() + capsules.len()
            }
            Geometry::Mesh(m) => m.triangle_count(),
            Geometry::Lines(l) => l.strip_count(),
        }
    }

    /// World-space bounds including sphere and capsule radii.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        match &self.geometry {
            Geometry::Spheres(s) => spheres_bounds(s),
            Geometry::Capsules(c) => capsules_bounds(c),
            Geometry::BallAndStick { spheres, capsules } => {
                match (spheres_bounds(spheres), capsules_bounds(capsules)) {
                    (Some(a), Some(b)) => Some(a.union(b)),
                    (a, b) => a.or(b),
                }
            }
            Geometry::Mesh(m) => m.bounds(),
            Geometry::Lines(l) => l.bounds(),
        }
    }

    /// Every distinct RGB color used, in first-seen order.
    #[must_use]
    pub fn colors(&self) -> Vec<[f32; 3]> {
        let mut out: Vec<[f32; 3]> = Vec::new();
        let mut push = |c: [f32; 3]| {
            if !out.contains(&c) {
                out.push(c);
            }
        };
        match &self.geometry {
            Geometry::Spheres(s) => s.iter().for_each(|s| push(s.rgb())),
            Geometry::Capsules(c) => {
                c.iter().flat_map(CapsuleInstance::rgb).for_each(&mut push);
            }
            Geometry::BallAndStick { spheres, capsules } => {
                spheres.iter().for_each(|s| push(s.rgb()));
                capsules
                    .iter()
                    .flat_map(CapsuleInstance::rgb)
                    .for_each(&mut push);
            }
            Geometry::Mesh(m) => m.vertices.iter().for_each(|v| push(v.color)),
            Geometry::Lines(l) => l.vertices().iter().for_each(|v| push(v.color)),
        }
        out
    }
}

fn spheres_bounds(spheres: &[SphereInstance]) -> Option<Aabb> {
    let first = spheres.first()?;
    let seed = Aabb::new(first.position(), first.position());
    Some(spheres.iter().fold(seed, |b, s| {
        b.including_sphere(s.position(), s.radius())
    }))
}

fn capsules_bounds(capsules: &[CapsuleInstance]) -> Option<Aabb> {
    let first = capsules.first()?;
    let [a, _] = first.endpoints();
    Some(capsules.iter().fold(Aabb::new(a, a), |b, c| {
        let [p, q] = c.endpoints();
        b.including_sphere(p, c.radius())
            .including_sphere(q, c.radius())
    }))
}
