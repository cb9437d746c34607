use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, Mutex};

use log::trace;

use super::config::FastaConfig;
use super::cursor::LineCursor;
use super::iterators::Proteins;
use super::protein::Protein;
use super::{lock, FastaError};
use crate::header::Header;
use crate::residue::{ResidueLookup, StandardResidues};

/// Streaming protein reader that can be shared between threads
///
/// Each call to [`next_record`](Self::next_record) holds an internal mutex for
/// the whole read-and-assemble step, so any number of threads may pull
/// records from one instance through a shared reference. Every record is
/// delivered to exactly one caller.
///
/// # Example
/// ```rust,no_run
/// use protfasta::fasta::{FastaConfig, FastaIterator};
///
/// let proteins = FastaIterator::open_with_config(
///     "uniprot_human.fasta",
///     FastaConfig::default().with_sanitize(true),
/// )?;
/// while let Some(protein) = proteins.next_record()? {
///     println!("{}\t{}", protein.accession(), protein.len());
/// }
/// # Ok::<(), protfasta::fasta::FastaError>(())
/// ```
pub struct FastaIterator<R> {
    state: Mutex<RecordState<R>>,
    config: FastaConfig,
    residues: Arc<dyn ResidueLookup>,
}

/// Everything guarded by the iterator mutex
struct RecordState<R> {
    cursor: LineCursor<R>,
    /// Header read while finishing the previous record, with its line
    /// number; at most one
    pending_header: Option<(Header, u64)>,
    records_read: u64,
}

impl FastaIterator<BufReader<File>> {
    /// Open a FASTA file with the default configuration
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FastaError> {
        Self::open_with_config(path, FastaConfig::default())
    }

    /// Open a FASTA file with a custom configuration
    pub fn open_with_config<P: AsRef<Path>>(
        path: P,
        config: FastaConfig,
    ) -> Result<Self, FastaError> {
        let cursor = LineCursor::open(path, &config)?;
        Ok(Self::with_cursor(cursor, config))
    }
}

impl<R: BufRead> FastaIterator<R> {
    /// Create an iterator over any buffered reader of `byte_length` bytes
    pub fn from_reader(reader: R, byte_length: u64, config: FastaConfig) -> Self {
        let cursor = LineCursor::new(reader, byte_length, config.encoding);
        Self::with_cursor(cursor, config)
    }

    fn with_cursor(cursor: LineCursor<R>, config: FastaConfig) -> Self {
        Self {
            state: Mutex::new(RecordState {
                cursor,
                pending_header: None,
                records_read: 0,
            }),
            config,
            residues: Arc::new(StandardResidues),
        }
    }

    /// Validate sanitized residues against a custom alphabet
    pub fn with_residue_lookup<L: ResidueLookup + 'static>(mut self, lookup: L) -> Self {
        self.residues = Arc::new(lookup);
        self
    }

    /// Read the next protein, or `None` once the input is exhausted
    ///
    /// After the first `None` every further call returns `None`. A
    /// [`MalformedRecord`](FastaError::MalformedRecord) or
    /// [`UnrecognizedResidue`](FastaError::UnrecognizedResidue) affects only
    /// the record that caused it; the following call resumes with the next
    /// record. An [`IoFailure`](FastaError::IoFailure) is terminal.
    pub fn next_record(&self) -> Result<Option<Protein>, FastaError> {
        let mut state = lock(&self.state);
        loop {
            let Some(Entry {
                header,
                line,
                sequence: raw_sequence,
            }) = read_entry(&mut state)?
            else {
                return Ok(None);
            };

            if raw_sequence.is_empty() {
                return Err(malformed(&header, line));
            }

            let decoy = self.config.is_decoy(header.accession_or_rest());
            if decoy && self.config.target_only {
                trace!("Skipping decoy entry {}", header.accession_or_rest());
                continue;
            }

            let sequence = if self.config.sanitize {
                sanitize_sequence(
                    &raw_sequence,
                    self.config.forbidden_marker,
                    self.residues.as_ref(),
                    header.accession_or_rest(),
                )?
            } else {
                raw_sequence
            };

            if sequence.is_empty() {
                return Err(malformed(&header, line));
            }

            state.records_read += 1;
            return Ok(Some(Protein::new(header, sequence, decoy)));
        }
    }

    /// Borrowing iterator over the remaining proteins
    pub fn proteins(&self) -> Proteins<'_, R> {
        Proteins { iter: self }
    }

    /// Percentage of the input consumed so far
    pub fn progress_percent(&self) -> f64 {
        lock(&self.state).cursor.progress_percent()
    }

    /// Whether the iterator has reached its terminal state
    pub fn is_exhausted(&self) -> bool {
        lock(&self.state).cursor.is_exhausted()
    }

    /// Number of proteins returned so far
    pub fn records_read(&self) -> u64 {
        lock(&self.state).records_read
    }

    /// The configuration this iterator was created with
    pub fn config(&self) -> &FastaConfig {
        &self.config
    }

    /// Release the file handle; later calls return `None`. Idempotent.
    pub fn close(&self) {
        let mut state = lock(&self.state);
        state.pending_header = None;
        state.cursor.close();
    }
}

/// A header, the line it was read from, and its raw sequence
struct Entry {
    header: Header,
    line: u64,
    sequence: String,
}

fn malformed(header: &Header, line: u64) -> FastaError {
    FastaError::MalformedRecord {
        accession: header.accession_or_rest().to_string(),
        line,
    }
}

/// Assemble the next header and its raw sequence using one-line lookahead
fn read_entry<R: BufRead>(state: &mut RecordState<R>) -> Result<Option<Entry>, FastaError> {
    if state.cursor.is_exhausted() {
        return Ok(None);
    }

    let mut header = state.pending_header.take();
    let mut sequence = String::new();
    let mut sequence_start = 0;

    while let Some(line) = state.cursor.next_line()? {
        let line_number = state.cursor.lines_read();
        if line.starts_with('>') {
            let parsed = (Header::parse(&line), line_number);
            if header.is_some() {
                state.pending_header = Some(parsed);
                break;
            }
            if !sequence.is_empty() {
                // sequence data before the first header of the file
                state.pending_header = Some(parsed);
                return Err(FastaError::MalformedRecord {
                    accession: String::new(),
                    line: sequence_start,
                });
            }
            header = Some(parsed);
        } else if !line.is_empty() {
            if sequence.is_empty() {
                sequence_start = line_number;
            }
            sequence.push_str(&line);
        }
    }

    match header {
        Some((header, line)) => Ok(Some(Entry {
            header,
            line,
            sequence,
        })),
        None if sequence.is_empty() => Ok(None),
        None => Err(FastaError::MalformedRecord {
            accession: String::new(),
            line: sequence_start,
        }),
    }
}

/// Drop `forbidden_marker`, upper-case and validate every residue
///
/// Fails with [`FastaError::UnrecognizedResidue`] on the first character the
/// lookup does not know.
pub fn sanitize_sequence(
    raw: &str,
    forbidden_marker: char,
    residues: &dyn ResidueLookup,
    accession: &str,
) -> Result<String, FastaError> {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == forbidden_marker {
            continue;
        }
        let upper = c.to_ascii_uppercase();
        if residues.residue(upper).is_none() {
            return Err(FastaError::UnrecognizedResidue {
                residue: upper,
                accession: accession.to_string(),
            });
        }
        cleaned.push(upper);
    }
    Ok(cleaned)
}
