use crate::actor::{Actor, Geometry};
use crate::error::{MolVizError, Result};
use crate::geometry::{Aabb, Polylines};
use crate::molecule::Molecule;
use crate::options::BoundingBoxOptions;

/// Outline of the axis-aligned box around all atom centers, as 12 line
/// segments.
pub fn bounding_box(
    molecule: &Molecule,
    options: &BoundingBoxOptions,
) -> Result<Actor> {
    options.validate()?;
    let bounds = Aabb::from_points(molecule.all_atomic_positions().iter().copied())
        .ok_or(MolVizError::EmptyMolecule("bounding_box"))?;

    let corners = bounds.corners();
    let mut lines = Polylines::new(options.line_width);
    for [a, b] in Aabb::EDGES {
        lines.push_strip(&[corners[a], corners[b]], options.color);
    }

    log::debug!(
        "bounding_box: {:?} .. {:?}",
        bounds.min.to_array(),
        bounds.max.to_array()
    );
    Ok(Actor::new("bounding_box", Geometry::Lines(lines), options.opacity))
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn twelve_edges_around_atoms() {
        let mut molecule = Molecule::new();
        let _ = molecule.add_atom(6, 0.0, 0.0, 0.0).unwrap();
        let _ = molecule.add_atom(6, 1.0, 1.0, 1.0).unwrap();
        let options = BoundingBoxOptions {
            color: [1.0, 0.0, 0.0],
            line_width: 2.0,
            ..BoundingBoxOptions::default()
        };
        let actor = bounding_box(&molecule, &options).unwrap();
        let Geometry::Lines(lines) = actor.geometry() else {
            panic!("expected lines");
        };
        assert_eq!(lines.strip_count(), 12);
        assert_eq!(lines.width(), 2.0);
        assert_eq!(actor.colors(), vec![[1.0, 0.0, 0.0]]);
        let b = actor.bounds().unwrap();
        assert_eq!(b.min, Vec3::ZERO);
        assert_eq!(b.max, Vec3::ONE);
    }

    #[test]
    fn empty_molecule_fails() {
        assert!(matches!(
            bounding_box(&Molecule::new(), &BoundingBoxOptions::default()),
            Err(MolVizError::EmptyMolecule("bounding_box"))
        ));
    }
}
