//! # protfasta - Streaming FASTA Protein Reader
//!
//! `protfasta` reads FASTA protein databases one record at a time, so that
//! files of any size can be fed to digestion engines, indexers and search
//! pipelines without being loaded into memory.
//!
//! ## Key Features
//!
//! - **Lazy Records**: [`FastaIterator`](fasta::FastaIterator) assembles one
//!   header plus its concatenated sequence per call, with one header of
//!   lookahead.
//!
//! - **Thread-Shareable**: Both iterators take `&self` and serialize each read
//!   internally, so worker threads can drain one reader without corrupting the
//!   stream. See [`pool::for_each_protein`].
//!
//! - **Byte-Accurate Progress**: Percent-complete is computed from bytes
//!   consumed, not characters decoded.
//!
//! - **Sanitization**: Optional stripping of stop markers, upper-casing and
//!   validation against the amino-acid alphabet.
//!
//! - **Header Parsing**: UniProt, SwissProt, NCBI, IPI and generic header
//!   layouts, with decoy detection.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use protfasta::fasta::{FastaConfig, FastaIterator};
//!
//! let proteins = FastaIterator::open_with_config(
//!     "uniprot_human.fasta",
//!     FastaConfig::default().with_sanitize(true).with_target_only(true),
//! )?;
//!
//! for protein in proteins.proteins() {
//!     let protein = protein?;
//!     println!("{} ({} aa)", protein.accession(), protein.len());
//! }
//! # Ok::<(), protfasta::fasta::FastaError>(())
//! ```
//!
//! ## Header-Only Scan
//!
//! ```rust,no_run
//! use protfasta::fasta::HeaderIterator;
//!
//! let headers = HeaderIterator::open("uniprot_human.fasta")?
//!     .with_progress(|percent| eprintln!("{:.0}%", percent));
//!
//! while let Some(header) = headers.next_header()? {
//!     println!("{}\t{}", header.accession, header.database_type);
//! }
//! # Ok::<(), protfasta::fasta::FastaError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod decoy;
pub mod fasta;
pub mod header;
pub mod pool;
pub mod residue;
pub mod summary;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::decoy::{is_decoy_accession, DECOY_FLAGS};
    pub use crate::fasta::{
        FastaConfig, FastaError, FastaIterator, HeaderIterator, Protein, TextEncoding,
    };
    pub use crate::header::{DatabaseType, Header};
    pub use crate::pool::{for_each_protein, PoolStats};
    pub use crate::residue::{AminoAcid, ResidueLookup, StandardResidues};
    pub use crate::summary::FastaSummary;
}
