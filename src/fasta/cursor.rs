//! Byte-counted line cursor over a FASTA source
//!
//! Progress is measured in bytes consumed from the raw stream by
//! [`CountingReader`], independently of how those bytes decode into
//! characters, so multi-byte encodings do not skew the percentage.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use super::config::{FastaConfig, TextEncoding};

/// Buffered reader wrapper that counts the bytes handed to its consumer
#[derive(Debug)]
pub struct CountingReader<R> {
    inner: R,
    bytes_read: u64,
}

impl<R> CountingReader<R> {
    /// Wrap a reader
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bytes_read: 0,
        }
    }

    /// Bytes consumed so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Unwrap the inner reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes_read += n as u64;
        Ok(n)
    }
}

impl<R: BufRead> BufRead for CountingReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.bytes_read += amt as u64;
        self.inner.consume(amt);
    }
}

/// Line-at-a-time view of a FASTA source
///
/// Lines are returned trimmed of surrounding whitespace (so LF and CRLF files
/// read identically). Blank lines are passed through; filtering them is left
/// to the iterators.
pub struct LineCursor<R> {
    reader: Option<CountingReader<R>>,
    encoding: TextEncoding,
    file_length: u64,
    bytes_read: u64,
    lines_read: u64,
    end_of_file: bool,
    buf: Vec<u8>,
}

impl LineCursor<BufReader<File>> {
    /// Open a file with the buffer size and encoding from `config`
    pub fn open<P: AsRef<Path>>(path: P, config: &FastaConfig) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let file_length = file.metadata()?.len();
        debug!(
            "Opened FASTA file {} ({} bytes, {}KB buffer)",
            path.display(),
            file_length,
            config.buffer_size / 1024
        );
        let reader = BufReader::with_capacity(config.buffer_size, file);
        Ok(Self::new(reader, file_length, config.encoding))
    }
}

impl<R: BufRead> LineCursor<R> {
    /// Create a cursor over any buffered reader whose total size is
    /// `file_length` bytes
    pub fn new(reader: R, file_length: u64, encoding: TextEncoding) -> Self {
        Self {
            reader: Some(CountingReader::new(reader)),
            encoding,
            file_length,
            bytes_read: 0,
            lines_read: 0,
            end_of_file: false,
            buf: Vec::with_capacity(256),
        }
    }

    /// Read the next line, trimmed, or `None` at end of input
    ///
    /// A read or decode error closes the cursor; later calls return `None`.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.end_of_file {
            return Ok(None);
        }
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        self.buf.clear();
        let result = reader.read_until(b'\n', &mut self.buf);
        self.bytes_read = reader.bytes_read();
        let n = match result {
            Ok(n) => n,
            Err(e) => return Err(self.fail(e)),
        };

        if n == 0 {
            self.end_of_file = true;
            debug!(
                "Reached end of FASTA input after {} lines ({} bytes)",
                self.lines_read, self.bytes_read
            );
            return Ok(None);
        }

        self.lines_read += 1;
        let decoded = self
            .encoding
            .decode(&self.buf)
            .map(|line| line.trim().to_string());
        match decoded {
            Ok(line) => Ok(Some(line)),
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Read failures end the stream: the line that failed is already
    /// consumed, so nothing after it can be assembled reliably.
    fn fail(&mut self, e: io::Error) -> io::Error {
        debug!("FASTA read failed at line {}: {}", self.lines_read, e);
        self.close();
        e
    }

    /// Percentage of the input consumed, in `[0, 100]`
    ///
    /// An empty input reports 100 from the start; any input reports exactly
    /// 100 once end of file has been reached.
    pub fn progress_percent(&self) -> f64 {
        if self.file_length == 0 || self.end_of_file {
            return 100.0;
        }
        (100.0 * self.bytes_read as f64 / self.file_length as f64).min(100.0)
    }

    /// Release the underlying reader. Safe to call more than once.
    pub fn close(&mut self) {
        if self.reader.take().is_some() {
            debug!(
                "Closed FASTA input after {} lines ({} bytes)",
                self.lines_read, self.bytes_read
            );
        }
    }

    /// Whether end of file has been reached
    pub fn is_end_of_file(&self) -> bool {
        self.end_of_file
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Whether no more lines can be produced
    pub fn is_exhausted(&self) -> bool {
        self.end_of_file || self.reader.is_none()
    }

    /// Bytes consumed so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Total input length in bytes
    pub fn file_length(&self) -> u64 {
        self.file_length
    }

    /// Number of lines returned so far
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }
}
