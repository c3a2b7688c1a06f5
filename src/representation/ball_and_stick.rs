use glam::Vec3;

use super::coloring::{element_color, resolve, Coloring};
use crate::actor::{Actor, Geometry};
use crate::element::element;
use crate::error::{MolVizError, Result};
use crate::geometry::{find_perpendicular, CapsuleInstance, SphereInstance};
use crate::molecule::Molecule;
use crate::options::BallStickOptions;

/// Highest bond multiplicity drawn as separate cylinders.
const MAX_DRAWN_ORDER: u8 = 3;

/// Radius of each parallel cylinder relative to a single bond.
const MULTI_BOND_RADIUS_SCALE: f32 = 0.7;

/// Spacing between parallel cylinders, in single-bond radii.
const MULTI_BOND_SPACING: f32 = 2.0;

/// Ball-and-stick model: scaled van der Waals spheres joined by bond
/// capsules. Fails with [`MolVizError::MissingBonds`] when the molecule has
/// no bonds.
pub fn ball_stick(
    molecule: &Molecule,
    options: &BallStickOptions,
) -> Result<Actor> {
    options.validate()?;
    if molecule.total_num_bonds() == 0 {
        return Err(MolVizError::MissingBonds("ball_stick"));
    }
    let coloring = resolve(options.color_mode, "ball_stick");
    let numbers = molecule.all_atomic_numbers();
    let positions = molecule.all_atomic_positions();

    let spheres: Vec<SphereInstance> = numbers
        .iter()
        .zip(positions)
        .enumerate()
        .map(|(i, (&z, &pos))| {
            let radius = element(z).map_or(1.0, |e| e.vdw_radius)
                * options.atom_scale_factor;
            let color = match coloring {
                Coloring::Element => element_color(z),
                Coloring::Single => options.single_atom_color,
            };
            SphereInstance::new(pos, radius, color, i as u32)
        })
        .collect();

    let mut capsules = Vec::with_capacity(molecule.total_num_bonds());
    for (bond_idx, bond) in molecule.bonds().iter().enumerate() {
        let pos_a = positions[bond.atom_a];
        let pos_b = positions[bond.atom_b];
        let colors = match coloring {
            Coloring::Element => [
                element_color(numbers[bond.atom_a]),
                element_color(numbers[bond.atom_b]),
            ],
            Coloring::Single => [options.single_bond_color; 2],
        };
        let order = if options.multiple_bonds {
            bond.order.min(MAX_DRAWN_ORDER)
        } else {
            1
        };
        push_bond(
            &mut capsules,
            [pos_a, pos_b],
            order,
            options.bond_thickness,
            colors,
            bond_idx as u32,
        );
    }

    log::debug!(
        "ball_stick: {} spheres, {} bond capsules",
        spheres.len(),
        capsules.len()
    );
    Ok(Actor::new(
        "ball_stick",
        Geometry::BallAndStick { spheres, capsules },
        options.opacity,
    ))
}

/// Push `order` parallel capsules for one bond, offset perpendicular to
/// the bond axis.
fn push_bond(
    out: &mut Vec<CapsuleInstance>,
    endpoints: [Vec3; 2],
    order: u8,
    radius: f32,
    colors: [[f32; 3]; 2],
    bond_idx: u32,
) {
    let [pos_a, pos_b] = endpoints;
    if order <= 1 {
        out.push(CapsuleInstance::new(pos_a, pos_b, radius, colors, bond_idx));
        return;
    }

    let axis = (pos_b - pos_a).normalize_or_zero();
    let offset = find_perpendicular(axis) * radius * MULTI_BOND_SPACING;
    let thin_radius = radius * MULTI_BOND_RADIUS_SCALE;
    let shifts: &[f32] = if order == 2 {
        &[0.5, -0.5]
    } else {
        &[1.0, 0.0, -1.0]
    };
    for &s in shifts {
        let shift = offset * s;
        out.push(CapsuleInstance::new(
            pos_a + shift,
            pos_b + shift,
            thin_radius,
            colors,
            bond_idx,
        ));
    }
}
