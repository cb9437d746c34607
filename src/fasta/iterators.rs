use std::io::BufRead;

use super::{FastaError, FastaIterator, HeaderIterator, Protein};

/// Iterator over the proteins of a (possibly shared) [`FastaIterator`]
pub struct Proteins<'a, R> {
    pub(super) iter: &'a FastaIterator<R>,
}

impl<R: BufRead> Iterator for Proteins<'_, R> {
    type Item = Result<Protein, FastaError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next_record() {
            Ok(Some(protein)) => Some(Ok(protein)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Iterator over the header lines of a (possibly shared) [`HeaderIterator`]
pub struct HeaderLines<'a, R> {
    pub(super) iter: &'a HeaderIterator<R>,
}

impl<R: BufRead> Iterator for HeaderLines<'_, R> {
    type Item = Result<String, FastaError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next_header_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
