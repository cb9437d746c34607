//! One-pass statistics over a FASTA database
//!
//! [`FastaSummary`] is what a search engine wants to know about a database
//! before using it: how many entries, how many are decoys, which header
//! flavours it mixes, and how residues are distributed.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use serde::Serialize;

use crate::fasta::{FastaConfig, FastaError, FastaIterator, Protein};
use crate::header::DatabaseType;
use crate::residue::AminoAcid;

/// Aggregate statistics of a FASTA file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FastaSummary {
    /// Number of entries
    pub sequences: u64,
    /// Entries without a decoy flag
    pub targets: u64,
    /// Entries with a decoy flag
    pub decoys: u64,
    /// Entries per header flavour
    pub database_types: BTreeMap<DatabaseType, u64>,
    /// Total residues over all entries
    pub residues: u64,
    /// Occurrences of each recognised one-letter code
    pub residue_counts: BTreeMap<char, u64>,
    /// Characters outside the amino-acid alphabet (only seen without sanitization)
    pub unknown_residues: u64,
    /// Length of the shortest entry
    pub min_length: Option<usize>,
    /// Length of the longest entry
    pub max_length: Option<usize>,
}

impl FastaSummary {
    /// Read a whole file and summarize it
    pub fn scan<P: AsRef<Path>>(path: P, config: FastaConfig) -> Result<Self, FastaError> {
        let proteins = FastaIterator::open_with_config(path, config)?;
        Self::from_iterator(&proteins)
    }

    /// Summarize the remaining proteins of an iterator
    pub fn from_iterator<R: BufRead>(proteins: &FastaIterator<R>) -> Result<Self, FastaError> {
        let mut summary = Self::default();
        for protein in proteins.proteins() {
            summary.add(&protein?);
        }
        Ok(summary)
    }

    /// Account for one protein
    pub fn add(&mut self, protein: &Protein) {
        self.sequences += 1;
        if protein.is_decoy() {
            self.decoys += 1;
        } else {
            self.targets += 1;
        }
        *self
            .database_types
            .entry(protein.database_type())
            .or_insert(0) += 1;

        let mut length = 0;
        for c in protein.sequence().chars() {
            length += 1;
            match AminoAcid::from_char(c) {
                Some(aa) => *self.residue_counts.entry(aa.to_char()).or_insert(0) += 1,
                None => self.unknown_residues += 1,
            }
        }
        self.residues += length as u64;
        self.min_length = Some(self.min_length.map_or(length, |m| m.min(length)));
        self.max_length = Some(self.max_length.map_or(length, |m| m.max(length)));
    }

    /// Most frequent header flavour
    pub fn main_database_type(&self) -> Option<DatabaseType> {
        self.database_types
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(db, _)| *db)
    }

    /// Mean entry length in residues
    pub fn mean_length(&self) -> f64 {
        if self.sequences == 0 {
            0.0
        } else {
            self.residues as f64 / self.sequences as f64
        }
    }
}
