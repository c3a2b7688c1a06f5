use serde::{Deserialize, Serialize};

/// Per-atom descriptive arrays, all with one entry per atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomMetadata {
    pub(crate) names: Vec<String>,
    pub(crate) model: Vec<u32>,
    pub(crate) residue_seq: Vec<i32>,
    pub(crate) chain: Vec<u8>,
    pub(crate) is_hetatm: Vec<bool>,
}

impl AtomMetadata {
    /// Number of atoms described.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no atoms are described.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Atom name, trimmed of PDB column padding.
    #[must_use]
    pub fn atom_name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str).map(str::trim)
    }

    /// Model index.
    #[must_use]
    pub fn model(&self, index: usize) -> Option<u32> {
        self.model.get(index).copied()
    }

    /// Residue sequence number.
    #[must_use]
    pub fn residue_seq(&self, index: usize) -> Option<i32> {
        self.residue_seq.get(index).copied()
    }

    /// Chain identifier byte.
    #[must_use]
    pub fn chain(&self, index: usize) -> Option<u8> {
        self.chain.get(index).copied()
    }

    /// Hetero-atom flag.
    #[must_use]
    pub fn is_hetatm(&self, index: usize) -> Option<bool> {
        self.is_hetatm.get(index).copied()
    }

    pub(super) fn push_default(&mut self) {
        self.names.push(String::new());
        self.model.push(self.model.last().copied().unwrap_or(1));
        self.residue_seq.push(0);
        self.chain.push(b' ');
        self.is_hetatm.push(false);
    }
}

/// Secondary structure class of a residue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryStructure {
    /// Alpha helix.
    Helix,
    /// Beta strand.
    Sheet,
    /// Anything else.
    #[default]
    Coil,
}

/// Residue span `(start_chain, start_residue) ..= (end_chain, end_residue)`
/// marking a helix or sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecondaryRange {
    /// Chain of the first residue.
    pub start_chain: u8,
    /// First residue number (inclusive).
    pub start_residue: i32,
    /// Chain of the last residue.
    pub end_chain: u8,
    /// Last residue number (inclusive).
    pub end_residue: i32,
}

impl SecondaryRange {
    /// Create a range.
    #[must_use]
    pub fn new(
        start_chain: u8,
        start_residue: i32,
        end_chain: u8,
        end_residue: i32,
    ) -> Self {
        Self {
            start_chain,
            start_residue,
            end_chain,
            end_residue,
        }
    }

    /// Whether residue `residue` of chain `chain` falls inside the span.
    #[must_use]
    pub fn contains(&self, chain: u8, residue: i32) -> bool {
        if self.start_chain == self.end_chain {
            chain == self.start_chain
                && (self.start_residue..=self.end_residue).contains(&residue)
        } else {
            (chain == self.start_chain && residue >= self.start_residue)
                || (chain == self.end_chain && residue <= self.end_residue)
        }
    }
}
