use serde::{Deserialize, Serialize};

use crate::header::{DatabaseType, Header};

/// One complete FASTA entry: a parsed header and its full sequence
///
/// Proteins are only built by [`FastaIterator`](super::FastaIterator) once a
/// header and its sequence lines have been fully assembled, and are never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protein {
    header: Header,
    sequence: String,
    decoy: bool,
}

impl Protein {
    pub(crate) fn new(header: Header, sequence: String, decoy: bool) -> Self {
        Self {
            header,
            sequence,
            decoy,
        }
    }

    /// Accession, or the full header text when the header had none
    pub fn accession(&self) -> &str {
        self.header.accession_or_rest()
    }

    /// Concatenated sequence lines
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The parsed header this entry started with
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Database flavour of the header
    pub fn database_type(&self) -> DatabaseType {
        self.header.database_type
    }

    /// Whether the accession carries a decoy flag
    pub fn is_decoy(&self) -> bool {
        self.decoy
    }

    /// Sequence length in residues
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Whether the sequence is empty (never true for iterator output)
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Split into header and sequence
    pub fn into_parts(self) -> (Header, String) {
        (self.header, self.sequence)
    }
}
