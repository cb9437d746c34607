use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::decoy::DECOY_FLAGS;

/// Default input buffer size for FASTA reading (64KB)
pub const DEFAULT_INPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Character used upstream to mark masked or ambiguous residues
pub const DEFAULT_FORBIDDEN_MARKER: char = '*';

/// Text encoding of the FASTA file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// UTF-8; invalid byte sequences are reported as I/O errors
    #[default]
    Utf8,
    /// ISO-8859-1, one byte per character
    Latin1,
}

impl TextEncoding {
    /// Decode one line of raw bytes
    pub fn decode(self, bytes: &[u8]) -> std::io::Result<Cow<'_, str>> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            TextEncoding::Latin1 => Ok(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())),
        }
    }
}

/// Configuration shared by [`FastaIterator`](super::FastaIterator) and
/// [`HeaderIterator`](super::HeaderIterator)
#[derive(Debug, Clone, PartialEq)]
pub struct FastaConfig {
    /// Size of the input buffer in bytes
    pub buffer_size: usize,

    /// Text encoding of the file
    pub encoding: TextEncoding,

    /// Strip the forbidden marker, upper-case and validate every residue
    pub sanitize: bool,

    /// Character dropped from sequences when sanitizing
    pub forbidden_marker: char,

    /// Skip entries whose accession carries a decoy flag
    pub target_only: bool,

    /// Flags marking decoy accessions (matched as prefix or suffix)
    pub decoy_flags: Vec<String>,
}

impl Default for FastaConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_INPUT_BUFFER_SIZE,
            encoding: TextEncoding::Utf8,
            sanitize: false,
            forbidden_marker: DEFAULT_FORBIDDEN_MARKER,
            target_only: false,
            decoy_flags: DECOY_FLAGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FastaConfig {
    /// Enable or disable sequence sanitization
    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    /// Only iterate target (non-decoy) entries
    pub fn with_target_only(mut self, target_only: bool) -> Self {
        self.target_only = target_only;
        self
    }

    /// Set the input buffer size
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Set the text encoding
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the character stripped during sanitization
    pub fn with_forbidden_marker(mut self, marker: char) -> Self {
        self.forbidden_marker = marker;
        self
    }

    /// Replace the decoy flag list
    pub fn with_decoy_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.decoy_flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `accession` is a decoy under this configuration
    pub fn is_decoy(&self, accession: &str) -> bool {
        crate::decoy::decoy_flag(accession, &self.decoy_flags).is_some()
    }
}
