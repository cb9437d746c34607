//! Amino-acid alphabet used to validate sanitized sequences.
//!
//! The FASTA iterators only need one question answered per character: is this
//! a known residue? [`ResidueLookup`] is that seam; [`StandardResidues`]
//! answers it with the proteomics one-letter alphabet, which covers all 26
//! Latin letters once ambiguity and non-standard codes are included.

use serde::{Deserialize, Serialize};

/// One-letter amino-acid codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AminoAcid {
    /// Alanine
    A,
    /// Asparagine or aspartic acid
    B,
    /// Cysteine
    C,
    /// Aspartic acid
    D,
    /// Glutamic acid
    E,
    /// Phenylalanine
    F,
    /// Glycine
    G,
    /// Histidine
    H,
    /// Isoleucine
    I,
    /// Isoleucine or leucine
    J,
    /// Lysine
    K,
    /// Leucine
    L,
    /// Methionine
    M,
    /// Asparagine
    N,
    /// Pyrrolysine
    O,
    /// Proline
    P,
    /// Glutamine
    Q,
    /// Arginine
    R,
    /// Serine
    S,
    /// Threonine
    T,
    /// Selenocysteine
    U,
    /// Valine
    V,
    /// Tryptophan
    W,
    /// Unknown amino acid
    X,
    /// Tyrosine
    Y,
    /// Glutamine or glutamic acid
    Z,
}

impl AminoAcid {
    /// All residues in alphabetical order
    pub const ALL: [AminoAcid; 26] = [
        AminoAcid::A,
        AminoAcid::B,
        AminoAcid::C,
        AminoAcid::D,
        AminoAcid::E,
        AminoAcid::F,
        AminoAcid::G,
        AminoAcid::H,
        AminoAcid::I,
        AminoAcid::J,
        AminoAcid::K,
        AminoAcid::L,
        AminoAcid::M,
        AminoAcid::N,
        AminoAcid::O,
        AminoAcid::P,
        AminoAcid::Q,
        AminoAcid::R,
        AminoAcid::S,
        AminoAcid::T,
        AminoAcid::U,
        AminoAcid::V,
        AminoAcid::W,
        AminoAcid::X,
        AminoAcid::Y,
        AminoAcid::Z,
    ];

    /// Look up a residue by its one-letter code (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        Self::ALL.get(index).copied()
    }

    /// Upper-case one-letter code
    pub fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Position in the alphabet (0 for `A`, 25 for `Z`)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the code denotes exactly one amino acid, i.e. is not one of
    /// the ambiguity codes `B`, `J`, `X` or `Z`
    pub fn is_unique(self) -> bool {
        !matches!(self, AminoAcid::B | AminoAcid::J | AminoAcid::X | AminoAcid::Z)
    }
}

impl std::fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Residue lookup queried once per character during sanitization
pub trait ResidueLookup: Send + Sync {
    /// Return the residue for an (already upper-cased) character
    fn residue(&self, c: char) -> Option<AminoAcid>;
}

/// The standard one-letter alphabet
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardResidues;

impl ResidueLookup for StandardResidues {
    fn residue(&self, c: char) -> Option<AminoAcid> {
        AminoAcid::from_char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_is_case_insensitive() {
        assert_eq!(AminoAcid::from_char('k'), Some(AminoAcid::K));
        assert_eq!(AminoAcid::from_char('K'), Some(AminoAcid::K));
        assert_eq!(AminoAcid::from_char('1'), None);
        assert_eq!(AminoAcid::from_char('*'), None);
        assert_eq!(AminoAcid::from_char('é'), None);
    }

    #[test]
    fn test_alphabet_order_matches_letters() {
        for (i, aa) in AminoAcid::ALL.iter().enumerate() {
            assert_eq!(aa.index(), i);
            assert_eq!(AminoAcid::from_char(aa.to_char()), Some(*aa));
        }
    }

    #[test]
    fn test_unique_residues() {
        let ambiguous: Vec<char> = AminoAcid::ALL
            .iter()
            .filter(|aa| !aa.is_unique())
            .map(|aa| aa.to_char())
            .collect();
        assert_eq!(ambiguous, vec!['B', 'J', 'X', 'Z']);
    }
}
