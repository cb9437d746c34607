//! # FASTA Header Parsing
//!
//! Parses a single `>` header line into a structured [`Header`]: the database
//! flavour it was written in, the accession, an optional sequence location and
//! the free-text description.
//!
//! ## Recognised Layouts
//!
//! ```text
//! >sp|P12345|ACTB_HUMAN Actin, cytoplasmic 1 OS=Homo sapiens     UniProt
//! >tr|Q9XYZ1|Q9XYZ1_MOUSE Uncharacterized protein                UniProt
//! >sw|P12345|ACTB_HUMAN Actin                                    SwissProt (legacy)
//! >gi|4557757|ref|NP_000240.1| mutL homolog 1                    NCBI
//! >IPI:IPI00000001.2|SWISS-PROT:O95793-1|...                     IPI
//! >HIT000000001.10|HIX0021591.10|AB002292.2|...|DH domain         H-Invitational
//! >M. tub.H37Rv|Rv0001|dnaA                                      M. tuberculosis
//! >CG1234-PA pep:known ...                                       Drosophila
//! >dm345_3L-sense [234353534-234353938]                          Drosophila
//! >AT1G08520.1 | Symbol: PDE166 | ... | chr1:... | Aliases: ...  Arabidopsis (TAIR)
//! >nrAt0.2_1<TAB>(TR:Q8HT11_ARATH) Photosystem II ...            Arabidopsis (PSB)
//! >ENSP00000354587 (100-240) some description                    Generic
//! ```

mod parser;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Source database flavour detected from a header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DatabaseType {
    /// UniProtKB (`sp|` or `tr|`)
    UniProt,
    /// Pre-2008 SwissProt (`sw|`)
    SwissProt,
    /// NCBI (`gi|`)
    Ncbi,
    /// International Protein Index (`IPI:` / `ipi|`)
    Ipi,
    /// H-Invitational (`HIT...|`)
    HInvitational,
    /// Mycobacterium tuberculosis (`M. tub.xxx|Rvxxx|`)
    Tuberculosis,
    /// Drosophila melanogaster (`CG... pep:` and translated `dm...` genome entries)
    Drosophila,
    /// Arabidopsis thaliana (TAIR `|`-separated and PSB `nrAt` headers)
    Arabidopsis,
    /// First whitespace-delimited token
    Generic,
}

impl DatabaseType {
    /// Short display name
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::UniProt => "UniProt",
            DatabaseType::SwissProt => "SwissProt",
            DatabaseType::Ncbi => "NCBI",
            DatabaseType::Ipi => "IPI",
            DatabaseType::HInvitational => "H-Inv",
            DatabaseType::Tuberculosis => "M.tub",
            DatabaseType::Drosophila => "D.mel",
            DatabaseType::Arabidopsis => "A.thal",
            DatabaseType::Generic => "Generic",
        }
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed FASTA header line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Detected database flavour
    pub database_type: DatabaseType,
    /// Accession token with format prefixes and location stripped
    pub accession: String,
    /// Free-text description following the accession
    pub description: String,
    /// Start of the sequence location, if the accession carried `(start-end)`
    pub start: Option<u32>,
    /// End of the sequence location
    pub end: Option<u32>,
    /// `^A`-separated addenda, if present
    pub addenda: Option<String>,
    /// The trimmed header line as read, including the leading `>`
    pub raw_line: String,
}

impl Header {
    /// Parse a header line.
    ///
    /// The line is expected to start with `>`; callers guarantee this (both
    /// iterators only hand over lines they have already checked). A missing
    /// `>` is tolerated and the line is parsed as if it were present.
    pub fn parse(line: &str) -> Self {
        parser::parse_header(line)
    }

    /// The accession, or the whole header text when no accession was found
    pub fn accession_or_rest(&self) -> &str {
        if self.accession.is_empty() {
            self.rest()
        } else {
            &self.accession
        }
    }

    /// Header text after the leading `>`
    pub fn rest(&self) -> &str {
        self.raw_line.strip_prefix('>').unwrap_or(&self.raw_line).trim()
    }

    /// Sequence location `(start, end)` when both are known
    pub fn location(&self) -> Option<(u32, u32)> {
        self.start.zip(self.end)
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw_line)
    }
}
