//! Crate-level error types.

use std::fmt;

/// Errors produced by the molviz crate.
///
/// Everything except [`MolVizError::Io`] and [`MolVizError::OptionsParse`]
/// is an invalid-argument condition raised synchronously by the caller's
/// input; nothing is retried internally.
#[derive(Debug)]
pub enum MolVizError {
    /// Atomic number, symbol, or element name not present in the table.
    UnknownElement(String),
    /// Radius type string other than `VDW` / `Covalent`.
    InvalidRadiusType(String),
    /// Atomic number outside `1..=118`.
    InvalidAtomicNumber(u8),
    /// Two parallel arrays that must agree in length do not.
    LengthMismatch {
        /// Name of the offending array.
        field: &'static str,
        /// Length implied by the atom count.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
    /// Optional per-atom metadata supplied for some arrays but not others.
    PartialMetadata {
        /// Names of the arrays that were left out.
        missing: Vec<&'static str>,
    },
    /// Atom coordinate that is NaN or infinite.
    NonFiniteCoordinate {
        /// Index of the offending atom.
        index: usize,
    },
    /// Atom index past the end of the atom list.
    AtomIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of atoms in the molecule.
        len: usize,
    },
    /// Bond index past the end of the bond list.
    BondIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of bonds in the molecule.
        len: usize,
    },
    /// Bond joining an atom to itself.
    SelfBond(usize),
    /// Bond order of zero.
    InvalidBondOrder(u8),
    /// A bond-based representation was requested on a molecule without
    /// bonds.
    MissingBonds(&'static str),
    /// A representation needs per-atom metadata the molecule lacks.
    MissingMetadata(&'static str),
    /// Geometry requested for a molecule with no atoms.
    EmptyMolecule(&'static str),
    /// Surface extraction requested for a mask with no set voxels.
    EmptyMask,
    /// A numeric option outside its accepted range.
    InvalidOption {
        /// Option name.
        name: &'static str,
        /// Supplied value.
        value: f32,
    },
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl MolVizError {
    /// Whether this error reports malformed or inconsistent caller input.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::OptionsParse(_))
    }
}

impl fmt::Display for MolVizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(key) => write!(f, "unknown element: {key}"),
            Self::InvalidRadiusType(kind) => write!(
                f,
                "invalid radius type '{kind}', expected 'VDW' or 'Covalent'"
            ),
            Self::InvalidAtomicNumber(n) => {
                write!(f, "atomic number {n} is outside 1..=118")
            }
            Self::LengthMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "'{field}' has {found} entries but the molecule has \
                 {expected} atoms"
            ),
            Self::PartialMetadata { missing } => write!(
                f,
                "atom metadata must be supplied all together; missing: {}",
                missing.join(", ")
            ),
            Self::NonFiniteCoordinate { index } => {
                write!(f, "atom {index} has a non-finite coordinate")
            }
            Self::AtomIndexOutOfRange { index, len } => {
                write!(f, "atom index {index} out of range ({len} atoms)")
            }
            Self::BondIndexOutOfRange { index, len } => {
                write!(f, "bond index {index} out of range ({len} bonds)")
            }
            Self::SelfBond(index) => {
                write!(f, "atom {index} cannot be bonded to itself")
            }
            Self::InvalidBondOrder(order) => {
                write!(f, "bond order must be positive, got {order}")
            }
            Self::MissingBonds(repr) => write!(
                f,
                "{repr} needs bonding data; add bonds or call \
                 compute_bonding first"
            ),
            Self::MissingMetadata(repr) => write!(
                f,
                "{repr} needs atom names, residues and chains for every atom"
            ),
            Self::EmptyMolecule(repr) => {
                write!(f, "{repr} needs at least one atom")
            }
            Self::EmptyMask => write!(f, "ROI mask has no set voxels"),
            Self::InvalidOption { name, value } => {
                write!(f, "option '{name}' has invalid value {value}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for MolVizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolVizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Shorthand for results carrying a [`MolVizError`].
pub type Result<T> = std::result::Result<T, MolVizError>;
