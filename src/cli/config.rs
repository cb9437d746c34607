//! TOML configuration file support.
//!
//! Reader settings that rarely change between runs can live in a file
//! instead of on the command line:
//!
//! ```toml
//! # protfasta.toml
//! [reader]
//! sanitize = true
//! target_only = false
//! forbidden_marker = "*"
//! buffer_size = 262144
//! encoding = "latin1"
//! decoy_flags = ["REVERSED", "DECOY"]
//!
//! [pool]
//! workers = 4
//! ```

use anyhow::{Context, Result};
use protfasta::fasta::{FastaConfig, TextEncoding};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for protfasta.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Reader settings.
    #[serde(default)]
    pub reader: ReaderSection,

    /// Worker pool settings for the check command.
    #[serde(default)]
    pub pool: PoolSection,
}

/// Settings applied to both FASTA iterators.
#[derive(Debug, Default, Deserialize)]
pub struct ReaderSection {
    /// Strip the forbidden marker, upper-case and validate residues.
    pub sanitize: Option<bool>,

    /// Skip decoy entries.
    pub target_only: Option<bool>,

    /// Character removed during sanitization.
    pub forbidden_marker: Option<char>,

    /// Input buffer size in bytes.
    pub buffer_size: Option<usize>,

    /// Text encoding of the input (`utf8` or `latin1`).
    pub encoding: Option<TextEncoding>,

    /// Accession prefixes/suffixes that mark decoys.
    pub decoy_flags: Option<Vec<String>>,
}

/// Settings for the worker pool.
#[derive(Debug, Default, Deserialize)]
pub struct PoolSection {
    /// Number of worker threads.
    pub workers: Option<usize>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load the file if one was given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Build a reader configuration; `target_only` from the command line wins.
    pub fn fasta_config(&self, target_only: bool) -> FastaConfig {
        let reader = &self.reader;
        let mut config = FastaConfig::default();
        if let Some(sanitize) = reader.sanitize {
            config = config.with_sanitize(sanitize);
        }
        if let Some(marker) = reader.forbidden_marker {
            config = config.with_forbidden_marker(marker);
        }
        if let Some(buffer_size) = reader.buffer_size {
            config = config.with_buffer_size(buffer_size);
        }
        if let Some(encoding) = reader.encoding {
            config = config.with_encoding(encoding);
        }
        if let Some(flags) = &reader.decoy_flags {
            config = config.with_decoy_flags(flags.iter().cloned());
        }
        config.with_target_only(target_only || reader.target_only.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r##"
            [reader]
            sanitize = true
            target_only = false
            forbidden_marker = "#"
            buffer_size = 262144
            encoding = "latin1"
            decoy_flags = ["REV_"]

            [pool]
            workers = 4
        "##;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.reader.sanitize, Some(true));
        assert_eq!(config.reader.forbidden_marker, Some('#'));
        assert_eq!(config.reader.encoding, Some(TextEncoding::Latin1));
        assert_eq!(config.pool.workers, Some(4));

        let fasta = config.fasta_config(false);
        assert!(fasta.sanitize);
        assert!(!fasta.target_only);
        assert_eq!(fasta.buffer_size, 262_144);
        assert_eq!(fasta.decoy_flags, vec!["REV_".to_string()]);
        assert!(fasta.is_decoy("REV_P12345"));
    }

    #[test]
    fn test_flag_overrides_file() {
        let config = Config::from_str("[reader]\ntarget_only = false\n").unwrap();
        assert!(config.fasta_config(true).target_only);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.reader.sanitize, None);
        assert_eq!(config.pool.workers, None);
        assert_eq!(config.fasta_config(false), FastaConfig::default());
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        assert!(Config::from_str("[reader]\nencoding = \"ebcdic\"\n").is_err());
    }
}
