//! Molecule record: atoms, optional per-atom metadata, secondary structure
//! ranges, and an index-pair bond list.
//!
//! A [`Molecule`] is a flat value record. Bonds reference atoms by index;
//! there are no other internal cross-references, so cloning is a plain
//! deep copy.

pub mod bonding;
mod metadata;

use glam::Vec3;
pub use metadata::{AtomMetadata, SecondaryRange, SecondaryStructure};

use crate::element::is_valid_atomic_number;
use crate::error::{MolVizError, Result};

/// A bond between two atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    /// Index of the first atom.
    pub atom_a: usize,
    /// Index of the second atom.
    pub atom_b: usize,
    /// Multiplicity (1 = single, 2 = double, 3 = triple). Only affects
    /// rendering.
    pub order: u8,
}

/// Bulk parallel arrays for [`Molecule::from_arrays`].
///
/// The five per-atom metadata arrays are all-or-nothing: supply every one
/// of them (each with one entry per atom) or none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoleculeArrays {
    /// Atomic number per atom.
    pub atomic_numbers: Vec<u8>,
    /// Cartesian coordinates per atom, in angstroms.
    pub coords: Vec<[f32; 3]>,
    /// PDB-style atom names (`"CA"`, `"N"`, ...).
    pub atom_names: Option<Vec<String>>,
    /// Model index per atom.
    pub model: Option<Vec<u32>>,
    /// Residue sequence number per atom.
    pub residue_seq: Option<Vec<i32>>,
    /// Chain identifier per atom (ASCII byte, e.g. `b'A'`).
    pub chain: Option<Vec<u8>>,
    /// Hetero-atom flag per atom.
    pub is_hetatm: Option<Vec<bool>>,
    /// Helix residue ranges.
    pub helix: Vec<SecondaryRange>,
    /// Sheet residue ranges.
    pub sheet: Vec<SecondaryRange>,
}

impl MoleculeArrays {
    /// Arrays holding only atomic numbers and coordinates.
    #[must_use]
    pub fn new(atomic_numbers: Vec<u8>, coords: Vec<[f32; 3]>) -> Self {
        Self {
            atomic_numbers,
            coords,
            ..Self::default()
        }
    }

    /// Check every construction invariant in one pass.
    pub fn validate(&self) -> Result<()> {
        if let Some(&bad) = self
            .atomic_numbers
            .iter()
            .find(|&&n| !is_valid_atomic_number(n))
        {
            return Err(MolVizError::InvalidAtomicNumber(bad));
        }

        let n_atoms = self.atomic_numbers.len();
        check_len("coords", n_atoms, self.coords.len())?;
        if let Some(index) = self
            .coords
            .iter()
            .position(|&c| !Vec3::from(c).is_finite())
        {
            return Err(MolVizError::NonFiniteCoordinate { index });
        }

        let present = [
            ("atom_names", self.atom_names.as_ref().map(Vec::len)),
            ("model", self.model.as_ref().map(Vec::len)),
            ("residue_seq", self.residue_seq.as_ref().map(Vec::len)),
            ("chain", self.chain.as_ref().map(Vec::len)),
            ("is_hetatm", self.is_hetatm.as_ref().map(Vec::len)),
        ];
        let missing: Vec<&'static str> = present
            .iter()
            .filter(|(_, len)| len.is_none())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            for (name, len) in present {
                check_len(name, n_atoms, len.unwrap_or(0))?;
            }
        } else if missing.len() < present.len() {
            return Err(MolVizError::PartialMetadata { missing });
        } else if !self.helix.is_empty() || !self.sheet.is_empty() {
            return Err(MolVizError::PartialMetadata { missing });
        }

        Ok(())
    }
}

fn finite_position(index: usize, x: f32, y: f32, z: f32) -> Result<Vec3> {
    let position = Vec3::new(x, y, z);
    if position.is_finite() {
        Ok(position)
    } else {
        Err(MolVizError::NonFiniteCoordinate { index })
    }
}

fn check_len(field: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(MolVizError::LengthMismatch {
            field,
            expected,
            found,
        })
    }
}

/// Mutable molecule record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    atomic_numbers: Vec<u8>,
    positions: Vec<Vec3>,
    metadata: Option<AtomMetadata>,
    helix: Vec<SecondaryRange>,
    sheet: Vec<SecondaryRange>,
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Empty molecule with no atoms, bonds, or metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a molecule from bulk arrays, validating them first.
    pub fn from_arrays(arrays: MoleculeArrays) -> Result<Self> {
        arrays.validate()?;
        let MoleculeArrays {
            atomic_numbers,
            coords,
            atom_names,
            model,
            residue_seq,
            chain,
            is_hetatm,
            helix,
            sheet,
        } = arrays;

        let metadata = match (atom_names, model, residue_seq, chain, is_hetatm)
        {
            (
                Some(names),
                Some(model),
                Some(residue_seq),
                Some(chain),
                Some(is_hetatm),
            ) => Some(AtomMetadata {
                names,
                model,
                residue_seq,
                chain,
                is_hetatm,
            }),
            _ => None,
        };

        Ok(Self {
            atomic_numbers,
            positions: coords.into_iter().map(Vec3::from).collect(),
            metadata,
            helix,
            sheet,
            bonds: Vec::new(),
        })
    }

    /// Append an atom and return its index.
    ///
    /// When the molecule carries metadata, every metadata array grows by a
    /// neutral entry so the arrays stay aligned with the atom list.
    pub fn add_atom(
        &mut self,
        atomic_number: u8,
        x: f32,
        y: f32,
        z: f32,
    ) -> Result<usize> {
        if !is_valid_atomic_number(atomic_number) {
            return Err(MolVizError::InvalidAtomicNumber(atomic_number));
        }
        let position = finite_position(self.atomic_numbers.len(), x, y, z)?;
        self.atomic_numbers.push(atomic_number);
        self.positions.push(position);
        if let Some(meta) = &mut self.metadata {
            meta.push_default();
        }
        Ok(self.atomic_numbers.len() - 1)
    }

    /// Append a bond between two existing atoms and return its index.
    pub fn add_bond(
        &mut self,
        atom_a: usize,
        atom_b: usize,
        order: u8,
    ) -> Result<usize> {
        self.check_atom(atom_a)?;
        self.check_atom(atom_b)?;
        if atom_a == atom_b {
            return Err(MolVizError::SelfBond(atom_a));
        }
        if order == 0 {
            return Err(MolVizError::InvalidBondOrder(order));
        }
        self.bonds.push(Bond {
            atom_a,
            atom_b,
            order,
        });
        Ok(self.bonds.len() - 1)
    }

    /// Atomic number of atom `index`.
    pub fn atomic_number(&self, index: usize) -> Result<u8> {
        self.check_atom(index)?;
        Ok(self.atomic_numbers[index])
    }

    /// Replace the atomic number of atom `index`.
    pub fn set_atomic_number(
        &mut self,
        index: usize,
        atomic_number: u8,
    ) -> Result<()> {
        self.check_atom(index)?;
        if !is_valid_atomic_number(atomic_number) {
            return Err(MolVizError::InvalidAtomicNumber(atomic_number));
        }
        self.atomic_numbers[index] = atomic_number;
        Ok(())
    }

    /// Position of atom `index`.
    pub fn atomic_position(&self, index: usize) -> Result<Vec3> {
        self.check_atom(index)?;
        Ok(self.positions[index])
    }

    /// Move atom `index` to `(x, y, z)`.
    pub fn set_atomic_position(
        &mut self,
        index: usize,
        x: f32,
        y: f32,
        z: f32,
    ) -> Result<()> {
        self.check_atom(index)?;
        self.positions[index] = finite_position(index, x, y, z)?;
        Ok(())
    }

    /// Order of bond `index`.
    pub fn bond_order(&self, index: usize) -> Result<u8> {
        self.check_bond(index)?;
        Ok(self.bonds[index].order)
    }

    /// Replace the order of bond `index`.
    pub fn set_bond_order(&mut self, index: usize, order: u8) -> Result<()> {
        self.check_bond(index)?;
        if order == 0 {
            return Err(MolVizError::InvalidBondOrder(order));
        }
        self.bonds[index].order = order;
        Ok(())
    }

    /// Atomic numbers of all atoms.
    #[must_use]
    pub fn all_atomic_numbers(&self) -> &[u8] {
        &self.atomic_numbers
    }

    /// Positions of all atoms.
    #[must_use]
    pub fn all_atomic_positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Orders of all bonds, in bond order.
    #[must_use]
    pub fn all_bond_orders(&self) -> Vec<u8> {
        self.bonds.iter().map(|b| b.order).collect()
    }

    /// All bonds.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Number of atoms.
    #[must_use]
    pub fn total_num_atoms(&self) -> usize {
        self.atomic_numbers.len()
    }

    /// Number of bonds.
    #[must_use]
    pub fn total_num_bonds(&self) -> usize {
        self.bonds.len()
    }

    /// Per-atom metadata, when the molecule was built with it.
    #[must_use]
    pub fn metadata(&self) -> Option<&AtomMetadata> {
        self.metadata.as_ref()
    }

    /// Helix residue ranges.
    #[must_use]
    pub fn helix(&self) -> &[SecondaryRange] {
        &self.helix
    }

    /// Sheet residue ranges.
    #[must_use]
    pub fn sheet(&self) -> &[SecondaryRange] {
        &self.sheet
    }

    /// Secondary structure class of a residue. Helix ranges win over sheet
    /// ranges when both match.
    #[must_use]
    pub fn residue_secondary_structure(
        &self,
        chain: u8,
        residue: i32,
    ) -> SecondaryStructure {
        if self.helix.iter().any(|r| r.contains(chain, residue)) {
            SecondaryStructure::Helix
        } else if self.sheet.iter().any(|r| r.contains(chain, residue)) {
            SecondaryStructure::Sheet
        } else {
            SecondaryStructure::Coil
        }
    }

    /// Overwrite `self` with a deep copy of `source`.
    pub fn copy_from(&mut self, source: &Self) {
        self.clone_from(source);
    }

    /// Drop every bond, keeping atoms and metadata.
    pub fn clear_bonds(&mut self) {
        self.bonds.clear();
    }

    pub(crate) fn replace_bonds(&mut self, bonds: Vec<Bond>) {
        self.bonds = bonds;
    }

    fn check_atom(&self, index: usize) -> Result<()> {
        if index < self.atomic_numbers.len() {
            Ok(())
        } else {
            Err(MolVizError::AtomIndexOutOfRange {
                index,
                len: self.atomic_numbers.len(),
            })
        }
    }

    fn check_bond(&self, index: usize) -> Result<()> {
        if index < self.bonds.len() {
            Ok(())
        } else {
            Err(MolVizError::BondIndexOutOfRange {
                index,
                len: self.bonds.len(),
            })
        }
    }
}
