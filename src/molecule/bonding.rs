//! Distance-based bond perception.
//!
//! Two atoms bond when their separation is at most the sum of their covalent
//! radii plus a tolerance, and more than a minimum distance (closer pairs are
//! overlapping copies, not bonds). Candidate pairs come from a uniform
//! spatial hash so large records stay near-linear.

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::{Bond, Molecule};
use crate::element::element;
use crate::error::Result;
use crate::options::BondingOptions;

/// Hydrogen atomic number; H-H pairs never bond.
const HYDROGEN: u8 = 1;

/// Fraction of the covalent radius sum below which a bond is estimated as
/// double when order inference is enabled.
const DOUBLE_BOND_RATIO: f32 = 0.9;

/// Replace the bond list of `molecule` with perceived bonds using default
/// options. Returns the number of bonds found.
pub fn compute_bonding(molecule: &mut Molecule) -> usize {
    let bonds = perceive_bonds(
        molecule.all_atomic_positions(),
        molecule.all_atomic_numbers(),
        &BondingOptions::default(),
    );
    let count = bonds.len();
    molecule.replace_bonds(bonds);
    count
}

/// [`compute_bonding`] with explicit options, validated first.
pub fn compute_bonding_with(
    molecule: &mut Molecule,
    options: &BondingOptions,
) -> Result<usize> {
    options.validate()?;
    let bonds = perceive_bonds(
        molecule.all_atomic_positions(),
        molecule.all_atomic_numbers(),
        options,
    );
    let count = bonds.len();
    molecule.replace_bonds(bonds);
    Ok(count)
}

/// Perceive bonds among `positions`, returned sorted by `(atom_a, atom_b)`
/// with `atom_a < atom_b`.
///
/// Atoms whose atomic number is not in the element table get a zero
/// covalent radius. Atoms with a non-finite coordinate never bond.
#[must_use]
pub fn perceive_bonds(
    positions: &[Vec3],
    atomic_numbers: &[u8],
    options: &BondingOptions,
) -> Vec<Bond> {
    let n = positions.len().min(atomic_numbers.len());
    if n < 2 {
        return Vec::new();
    }

    let radii: Vec<f32> = atomic_numbers[..n]
        .iter()
        .map(|&z| element(z).map_or(0.0, |e| e.covalent_radius))
        .collect();
    let max_radius = radii.iter().copied().fold(0.0_f32, f32::max);
    let grid = CellGrid::new(
        &positions[..n],
        (2.0 * max_radius + options.tolerance).max(1.0),
    );

    let mut bonds = Vec::new();
    for (i, &p) in positions[..n].iter().enumerate() {
        if !p.is_finite() {
            continue;
        }
        for j in grid.neighbors(p).filter(|&j| j > i) {
            if let Some(order) = bond_order_between(
                i,
                j,
                positions,
                atomic_numbers,
                &radii,
                options,
            ) {
                bonds.push(Bond {
                    atom_a: i,
                    atom_b: j,
                    order,
                });
            }
        }
    }

    // Saturated cell keys at the edge of the f32 range can name the same
    // cell twice.
    bonds.sort_unstable_by_key(|b| (b.atom_a, b.atom_b));
    bonds.dedup();
    log::debug!("perceived {} bonds among {n} atoms", bonds.len());
    bonds
}

/// Uniform hash of atom indices by cubic cell.
struct CellGrid {
    cell_size: f32,
    cells: FxHashMap<[i64; 3], Vec<usize>>,
}

impl CellGrid {
    /// Bin every finite position.
    fn new(positions: &[Vec3], cell_size: f32) -> Self {
        let mut grid = Self {
            cell_size,
            cells: FxHashMap::default(),
        };
        for (i, &p) in positions.iter().enumerate() {
            if p.is_finite() {
                let key = grid.cell_of(p);
                grid.cells.entry(key).or_default().push(i);
            }
        }
        grid
    }

    fn cell_of(&self, p: Vec3) -> [i64; 3] {
        let c = (p / self.cell_size).floor();
        [c.x as i64, c.y as i64, c.z as i64]
    }

    /// Indices binned in the 27 cells around `p`.
    fn neighbors(&self, p: Vec3) -> impl Iterator<Item = usize> + '_ {
        let [cx, cy, cz] = self.cell_of(p);
        (-1..=1_i64)
            .flat_map(|dx| {
                (-1..=1_i64).flat_map(move |dy| {
                    (-1..=1_i64).map(move |dz| [dx, dy, dz])
                })
            })
            .filter_map(move |[dx, dy, dz]| {
                self.cells.get(&[
                    cx.saturating_add(dx),
                    cy.saturating_add(dy),
                    cz.saturating_add(dz),
                ])
            })
            .flatten()
            .copied()
    }
}

/// Order of the bond between `i` and `j`, or `None` when they don't bond.
fn bond_order_between(
    i: usize,
    j: usize,
    positions: &[Vec3],
    atomic_numbers: &[u8],
    radii: &[f32],
    options: &BondingOptions,
) -> Option<u8> {
    if atomic_numbers[i] == HYDROGEN && atomic_numbers[j] == HYDROGEN {
        return None;
    }
    let covalent_sum = radii[i] + radii[j];
    let dist = positions[i].distance(positions[j]);
    // NaN distances fail both comparisons
    let bonded =
        dist <= covalent_sum + options.tolerance && dist > options.min_distance;
    if !bonded {
        return None;
    }
    if options.infer_orders && dist < DOUBLE_BOND_RATIO * covalent_sum {
        Some(2)
    } else {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::molecule::fixtures::ethane_arrays;

    #[test]
    fn ethane_has_seven_bonds() {
        let mut molecule = Molecule::from_arrays(ethane_arrays()).unwrap();
        assert_eq!(compute_bonding(&mut molecule), 7);
        assert_eq!(molecule.total_num_bonds(), 7);
        assert!(molecule.all_bond_orders().iter().all(|&o| o == 1));

        // Deterministic across runs
        let first = molecule.bonds().to_vec();
        let _ = compute_bonding(&mut molecule);
        assert_eq!(molecule.bonds(), &first[..]);
    }

    #[test]
    fn ethane_bonds_connect_carbons_to_hydrogens() {
        let mut molecule = Molecule::from_arrays(ethane_arrays()).unwrap();
        let _ = compute_bonding(&mut molecule);
        let bonds = molecule.bonds();
        assert_eq!(bonds[0], Bond { atom_a: 0, atom_b: 1, order: 1 });
        let pairs: Vec<(usize, usize)> =
            bonds.iter().map(|b| (b.atom_a, b.atom_b)).collect();
        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (1, 6), (1, 7)]
        );
    }

    #[test]
    fn replaces_existing_bonds() {
        let mut molecule = Molecule::from_arrays(ethane_arrays()).unwrap();
        let _ = molecule.add_bond(2, 7, 3).unwrap();
        let _ = compute_bonding(&mut molecule);
        assert_eq!(molecule.total_num_bonds(), 7);
        assert!(molecule.bonds().iter().all(|b| (b.atom_a, b.atom_b) != (2, 7)));
    }

    #[test]
    fn hydrogens_never_bond_to_each_other() {
        let mut molecule = Molecule::new();
        let _ = molecule.add_atom(1, 0.0, 0.0, 0.0).unwrap();
        let _ = molecule.add_atom(1, 0.74, 0.0, 0.0).unwrap();
        assert_eq!(compute_bonding(&mut molecule), 0);
    }

    #[test]
    fn overlapping_atoms_do_not_bond() {
        let mut molecule = Molecule::new();
        let _ = molecule.add_atom(6, 0.0, 0.0, 0.0).unwrap();
        let _ = molecule.add_atom(6, 0.1, 0.0, 0.0).unwrap();
        assert_eq!(compute_bonding(&mut molecule), 0);
    }

    #[test]
    fn disconnected_atoms_give_zero_bonds() {
        let mut molecule = Molecule::new();
        let _ = molecule.add_atom(6, 0.0, 0.0, 0.0).unwrap();
        let _ = molecule.add_atom(6, 10.0, 0.0, 0.0).unwrap();
        assert_eq!(compute_bonding(&mut molecule), 0);
        assert_eq!(compute_bonding(&mut Molecule::new()), 0);
    }

    #[test]
    fn short_bonds_become_double_when_inferring_orders() {
        // Ethylene-like C=C at 1.34 A, C-C at 1.54 A
        let mut molecule = Molecule::new();
        let _ = molecule.add_atom(6, 0.0, 0.0, 0.0).unwrap();
        let _ = molecule.add_atom(6, 1.34, 0.0, 0.0).unwrap();
        let _ = molecule.add_atom(6, 1.34, 1.54, 0.0).unwrap();
        let options = BondingOptions {
            infer_orders: true,
            ..BondingOptions::default()
        };
        assert_eq!(compute_bonding_with(&mut molecule, &options).unwrap(), 2);
        assert_eq!(molecule.all_bond_orders(), vec![2, 1]);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let mut molecule = Molecule::from_arrays(ethane_arrays()).unwrap();
        let options = BondingOptions {
            tolerance: -1.0,
            ..BondingOptions::default()
        };
        assert!(compute_bonding_with(&mut molecule, &options).is_err());
        assert_eq!(molecule.total_num_bonds(), 0);
    }

    #[test]
    fn spatial_hash_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let options = BondingOptions::default();
        for _ in 0..20 {
            let n = rng.random_range(2..120);
            let positions: Vec<Vec3> = (0..n)
                .map(|_| {
                    Vec3::new(
                        rng.random_range(-8.0..8.0),
                        rng.random_range(-8.0..8.0),
                        rng.random_range(-8.0..8.0),
                    )
                })
                .collect();
            let numbers: Vec<u8> = (0..n)
                .map(|_| [1, 6, 7, 8, 16][rng.random_range(0..5)])
                .collect();
            let radii: Vec<f32> = numbers
                .iter()
                .map(|&z| element(z).unwrap().covalent_radius)
                .collect();

            let mut expected = Vec::new();
            for i in 0..n {
                for j in (i + 1)..n {
                    if let Some(order) = bond_order_between(
                        i, j, &positions, &numbers, &radii, &options,
                    ) {
                        expected.push(Bond {
                            atom_a: i,
                            atom_b: j,
                            order,
                        });
                    }
                }
            }

            assert_eq!(perceive_bonds(&positions, &numbers, &options), expected);
        }
    }

    #[test]
    fn nan_positions_never_bond() {
        let positions = [Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)];
        let options = BondingOptions::default();
        assert!(perceive_bonds(&positions, &[6, 6], &options).is_empty());
        let radii = [0.75, 0.75];
        assert_eq!(
            bond_order_between(0, 1, &positions, &[6, 6], &radii, &options),
            None
        );
    }

    #[test]
    fn far_away_coordinates_do_not_overflow_cell_keys() {
        let options = BondingOptions::default();
        let positions = [Vec3::new(1e10, 0.0, 0.0), Vec3::new(1e10, 1.5, 0.0)];
        assert_eq!(
            perceive_bonds(&positions, &[6, 6], &options),
            vec![Bond { atom_a: 0, atom_b: 1, order: 1 }]
        );

        let edge = [
            Vec3::new(f32::MAX, f32::MIN, 0.0),
            Vec3::new(f32::MAX, f32::MIN, 1.5),
        ];
        assert_eq!(perceive_bonds(&edge, &[6, 6], &options).len(), 1);
    }
}
