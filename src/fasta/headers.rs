use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Mutex;

use log::{debug, trace};

use super::config::FastaConfig;
use super::cursor::LineCursor;
use super::iterators::HeaderLines;
use super::{lock, FastaError};
use crate::header::Header;

type CancelCheck = Box<dyn Fn() -> bool + Send + Sync>;
type ProgressCallback = Box<dyn Fn(f64) + Send + Sync>;

/// Header-only scan over a FASTA file
///
/// Sequence lines are read past without being accumulated, which makes this
/// the cheap path for enumerating accessions. Like
/// [`FastaIterator`](super::FastaIterator) it may be shared between threads.
///
/// An optional cancellation check is polled before every line read, and an
/// optional progress callback receives the consumed percentage after every
/// line. Both run while the internal lock is held and must not call back into
/// the iterator.
///
/// # Example
/// ```rust,no_run
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use protfasta::fasta::HeaderIterator;
///
/// let stop = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&stop);
/// let headers = HeaderIterator::open("db.fasta")?
///     .with_cancellation(move || flag.load(Ordering::Relaxed))
///     .with_progress(|percent| log::info!("{:.0}%", percent));
///
/// while let Some(line) = headers.next_header_line()? {
///     println!("{}", line);
/// }
/// # Ok::<(), protfasta::fasta::FastaError>(())
/// ```
pub struct HeaderIterator<R> {
    cursor: Mutex<LineCursor<R>>,
    config: FastaConfig,
    cancel: Option<CancelCheck>,
    progress: Option<ProgressCallback>,
}

impl HeaderIterator<BufReader<File>> {
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

impl<R: BufRead> HeaderIterator<R> {
    /// Create a header scan over any buffered reader of `byte_length` bytes
    pub fn from_reader(reader: R, byte_length: u64, config: FastaConfig) -> Self {
        let cursor = LineCursor::new(reader, byte_length, config.encoding);
        Self::with_cursor(cursor, config)
    }

    fn with_cursor(cursor: LineCursor<R>, config: FastaConfig) -> Self {
        Self {
            cursor: Mutex::new(cursor),
            config,
            cancel: None,
            progress: None,
        }
    }

    /// Stop the scan as soon as `should_stop` returns true
    pub fn with_cancellation<F>(mut self, should_stop: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.cancel = Some(Box::new(should_stop));
        self
    }

    /// Report the consumed percentage after every line read
    pub fn with_progress<F>(mut self, on_progress: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(on_progress));
        self
    }

    /// Return the next header line (trimmed, including `>`), or `None` at
    /// end of input or after cancellation
    ///
    /// A read failure is returned once and ends the scan.
    pub fn next_header_line(&self) -> Result<Option<String>, FastaError> {
        let mut cursor = lock(&self.cursor);
        loop {
            if cursor.is_exhausted() {
                return Ok(None);
            }
            if self.cancel.as_ref().is_some_and(|should_stop| should_stop()) {
                debug!(
                    "Header scan cancelled at {:.1}%",
                    cursor.progress_percent()
                );
                cursor.close();
                return Ok(None);
            }

            let Some(line) = cursor.next_line()? else {
                return Ok(None);
            };
            if let Some(on_progress) = &self.progress {
                on_progress(cursor.progress_percent());
            }

            if !line.starts_with('>') {
                continue;
            }
            if self.config.target_only {
                let header = Header::parse(&line);
                if self.config.is_decoy(header.accession_or_rest()) {
                    trace!("Skipping decoy header {}", header.accession_or_rest());
                    continue;
                }
            }
            return Ok(Some(line));
        }
    }

    /// Return the next header, parsed
    pub fn next_header(&self) -> Result<Option<Header>, FastaError> {
        Ok(self.next_header_line()?.map(|line| Header::parse(&line)))
    }

    /// Borrowing iterator over the remaining header lines
    pub fn lines(&self) -> HeaderLines<'_, R> {
        HeaderLines { iter: self }
    }

    /// Percentage of the input consumed so far
    pub fn progress_percent(&self) -> f64 {
        lock(&self.cursor).progress_percent()
    }

    /// Whether the scan has reached its terminal state
    pub fn is_exhausted(&self) -> bool {
        lock(&self.cursor).is_exhausted()
    }

    /// Release the file handle; later calls return `None`. Idempotent.
    pub fn close(&self) {
        lock(&self.cursor).close();
    }
}
