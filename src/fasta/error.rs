/// Errors that can occur while reading a FASTA file
#[derive(Debug, thiserror::Error)]
pub enum FastaError {
    /// The file could not be opened, or a read failed mid-stream
    #[error("I/O error: {0}")]
    IoFailure(#[from] std::io::Error),

    /// A header with no sequence body, or sequence data before any header
    #[error("Malformed record '{accession}' at line {line}")]
    MalformedRecord {
        /// Accession of the offending header (empty for orphan sequence data)
        accession: String,
        /// 1-based line of the offending header, or of the first orphan
        /// sequence line
        line: u64,
    },

    /// Sanitization found a character that is not a known amino acid
    #[error("Unrecognized residue '{residue}' in sequence of '{accession}'")]
    UnrecognizedResidue {
        /// The offending character, after upper-casing
        residue: char,
        /// Accession of the record being sanitized
        accession: String,
    },
}

impl FastaError {
    /// Whether the error describes bad input rather than an infrastructure failure
    pub fn is_data_error(&self) -> bool {
        !matches!(self, FastaError::IoFailure(_))
    }
}
