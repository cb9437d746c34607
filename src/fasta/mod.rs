//! # FASTA Reader Module
//!
//! Streaming, thread-shareable readers for FASTA protein databases.
//!
//! ## Design Goals
//!
//! - **Streaming**: One record in memory at a time, whatever the file size
//! - **Shareable**: Worker threads pull records from one reader through `&self`
//! - **Progress**: Byte-accurate percent-complete, independent of encoding
//! - **Fail-fast**: Bad records surface as typed errors on the call that finds them
//!
//! ## Layering
//!
//! ```text
//! File ─▶ BufReader ─▶ CountingReader ─▶ LineCursor ─┬─▶ FastaIterator  (header + sequence)
//!          (bytes)      (byte offset)     (lines)     └─▶ HeaderIterator (header lines only)
//! ```
//!
//! [`FastaIterator`] keeps exactly one header of lookahead: the header line
//! that ends a record's sequence is parsed, held, and becomes the header of
//! the next record on the following call.

mod config;
mod cursor;
mod error;
mod headers;
mod iterators;
mod protein;
mod proteins;


use std::sync::{Mutex, MutexGuard, PoisonError};

pub use config::{FastaConfig, TextEncoding, DEFAULT_FORBIDDEN_MARKER, DEFAULT_INPUT_BUFFER_SIZE};
pub use cursor::{CountingReader, LineCursor};
pub use error::FastaError;
pub use headers::HeaderIterator;
pub use iterators::{HeaderLines, Proteins};
pub use protein::Protein;
pub use proteins::{sanitize_sequence, FastaIterator};

/// Acquire the reader lock, recovering it if a holder panicked
///
/// Reader state is only ever mutated between whole lines, so a poisoned lock
/// still guards a usable cursor.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
