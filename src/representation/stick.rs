use super::coloring::{element_color, resolve, Coloring};
use crate::actor::{Actor, Geometry};
use crate::error::{MolVizError, Result};
use crate::geometry::CapsuleInstance;
use crate::molecule::Molecule;
use crate::options::StickOptions;

/// Stick (licorice) model: one capsule per bond, each half colored by its
/// atom. Capsule ends are hemispheres of the stick radius, so sticks
/// meeting at an atom close the joint.
///
/// Fails with [`MolVizError::MissingBonds`] when the molecule has no bonds.
pub fn stick(molecule: &Molecule, options: &StickOptions) -> Result<Actor> {
    options.validate()?;
    if molecule.total_num_bonds() == 0 {
        return Err(MolVizError::MissingBonds("stick"));
    }
    let coloring = resolve(options.color_mode, "stick");
    let numbers = molecule.all_atomic_numbers();
    let positions = molecule.all_atomic_positions();

    let capsules: Vec<CapsuleInstance> = molecule
        .bonds()
        .iter()
        .enumerate()
        .map(|(i, bond)| {
            let colors = match coloring {
                Coloring::Element => [
                    element_color(numbers[bond.atom_a]),
                    element_color(numbers[bond.atom_b]),
                ],
                Coloring::Single => [options.single_color; 2],
            };
            CapsuleInstance::new(
                positions[bond.atom_a],
                positions[bond.atom_b],
                options.bond_thickness,
                colors,
                i as u32,
            )
        })
        .collect();

    log::debug!("stick: {} capsules", capsules.len());
    Ok(Actor::new("stick", Geometry::Capsules(capsules), options.opacity))
}
