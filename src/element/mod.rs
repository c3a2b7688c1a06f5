//! Periodic table lookups: symbols, names, radii, and display colors.
//!
//! The table is static and immutable. Symbol and name lookups go through a
//! lazily built hash index; lookups by atomic number index the table
//! directly.

mod table;

use std::str::FromStr;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
pub use table::ElementData;
use table::ELEMENTS;

use crate::error::{MolVizError, Result};

/// Highest atomic number present in the table.
pub const MAX_ATOMIC_NUMBER: u8 = 118;

/// Which atomic radius to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadiusType {
    /// Van der Waals radius (space-filling representations).
    VanDerWaals,
    /// Single-bond covalent radius (bond perception).
    Covalent,
}

impl FromStr for RadiusType {
    type Err = MolVizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vdw" | "vanderwaals" | "van_der_waals" => Ok(Self::VanDerWaals),
            "covalent" => Ok(Self::Covalent),
            _ => Err(MolVizError::InvalidRadiusType(s.to_owned())),
        }
    }
}

/// Read-only view over the periodic table.
///
/// Zero-sized; constructing one is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicTable;

impl PeriodicTable {
    /// Create a handle to the static table.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Full record for an atomic number.
    pub fn element(self, atomic_number: u8) -> Result<&'static ElementData> {
        element(atomic_number)
    }

    /// Atomic number for a symbol (`"C"`) or English name (`"Carbon"`),
    /// case-insensitive.
    pub fn atomic_number(self, symbol_or_name: &str) -> Result<u8> {
        let key = symbol_or_name.trim().to_ascii_lowercase();
        name_index()
            .get(key.as_str())
            .copied()
            .ok_or_else(|| MolVizError::UnknownElement(symbol_or_name.to_owned()))
    }

    /// Chemical symbol, e.g. `"O"` for 8.
    pub fn atomic_symbol(self, atomic_number: u8) -> Result<&'static str> {
        Ok(element(atomic_number)?.symbol)
    }

    /// English element name, e.g. `"Nitrogen"` for 7.
    pub fn element_name(self, atomic_number: u8) -> Result<&'static str> {
        Ok(element(atomic_number)?.name)
    }

    /// Atomic radius in angstroms.
    pub fn atomic_radius(
        self,
        atomic_number: u8,
        radius_type: RadiusType,
    ) -> Result<f32> {
        Ok(element(atomic_number)?.radius(radius_type))
    }

    /// Atomic radius with the radius type given as text (`"VDW"` or
    /// `"Covalent"`).
    pub fn atomic_radius_by_name(
        self,
        atomic_number: u8,
        radius_type: &str,
    ) -> Result<f32> {
        let radius_type = radius_type.parse::<RadiusType>()?;
        self.atomic_radius(atomic_number, radius_type)
    }

    /// Normalized RGB display color.
    pub fn atom_color(self, atomic_number: u8) -> Result<[f32; 3]> {
        Ok(element(atomic_number)?.color())
    }
}

/// Look up the record for an atomic number.
pub fn element(atomic_number: u8) -> Result<&'static ElementData> {
    if atomic_number == 0 {
        return Err(MolVizError::UnknownElement(atomic_number.to_string()));
    }
    ELEMENTS
        .get(usize::from(atomic_number) - 1)
        .ok_or_else(|| MolVizError::UnknownElement(atomic_number.to_string()))
}

/// Whether `atomic_number` names an element in the table.
#[must_use]
pub fn is_valid_atomic_number(atomic_number: u8) -> bool {
    (1..=MAX_ATOMIC_NUMBER).contains(&atomic_number)
}

/// Lowercased symbol and name → atomic number. Symbols are at most two
/// characters and names at least three, so the two key sets never collide.
fn name_index() -> &'static FxHashMap<String, u8> {
    static INDEX: OnceLock<FxHashMap<String, u8>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = FxHashMap::default();
        for data in &ELEMENTS {
            let _ = map.insert(data.symbol.to_ascii_lowercase(), data.number);
            let _ = map.insert(data.name.to_ascii_lowercase(), data.number);
        }
        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_lookups() {
        let table = PeriodicTable::new();
        assert_eq!(table.atomic_number("C").unwrap(), 6);
        assert_eq!(table.atomic_number("carbon").unwrap(), 6);
        assert_eq!(table.element_name(7).unwrap(), "Nitrogen");
        assert_eq!(table.atomic_symbol(8).unwrap(), "O");
    }

    #[test]
    fn radii_match_reference_values() {
        let table = PeriodicTable::new();
        let h = table.atomic_radius(1, RadiusType::VanDerWaals).unwrap();
        assert!((h - 1.2).abs() < 0.1);
        let c = table.atomic_radius_by_name(6, "Covalent").unwrap();
        assert!((c - 0.75).abs() < 0.1);
    }

    #[test]
    fn hydrogen_is_white() {
        let table = PeriodicTable::new();
        assert_eq!(table.atom_color(1).unwrap(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn bad_radius_type_is_invalid_argument() {
        let err = PeriodicTable::new()
            .atomic_radius_by_name(4, "test")
            .unwrap_err();
        assert!(matches!(err, MolVizError::InvalidRadiusType(_)));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn unknown_elements_are_rejected() {
        let table = PeriodicTable::new();
        assert!(table.atomic_symbol(0).is_err());
        assert!(table.atomic_symbol(119).is_err());
        assert!(table.atomic_number("Xx").is_err());
        assert!(table.atomic_number("").is_err());
    }

    #[test]
    fn every_element_round_trips() {
        let table = PeriodicTable::new();
        for n in 1..=MAX_ATOMIC_NUMBER {
            let name = table.element_name(n).unwrap();
            let symbol = table.atomic_symbol(n).unwrap();
            assert_eq!(table.atomic_number(name).unwrap(), n, "{name}");
            assert_eq!(table.atomic_number(symbol).unwrap(), n, "{symbol}");
            let via_name =
                table.atomic_symbol(table.atomic_number(name).unwrap());
            assert_eq!(via_name.unwrap(), symbol);
        }
    }

    #[test]
    fn table_is_ordered_and_sane() {
        for (i, data) in ELEMENTS.iter().enumerate() {
            assert_eq!(usize::from(data.number), i + 1);
            assert!(data.vdw_radius > 0.0);
            assert!(data.covalent_radius > 0.0);
            assert!(data.color().iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
