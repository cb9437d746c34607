//! Tests for sharing one reader between threads
//!
//! This test suite validates:
//! - Every record is delivered to exactly one thread
//! - Sequences are never interleaved between records
//! - The worker pool over a file on disk
//! - Property-based testing of record assembly

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Cursor;
use std::sync::Arc;
use std::thread;

use protfasta::fasta::{FastaConfig, FastaIterator, HeaderIterator};
use protfasta::pool::for_each_protein;
use tempfile::tempdir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Sequence derived from the record index, so a reader can verify it
fn sequence_for(i: usize) -> String {
    const ALPHABET: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";
    (0..20 + i % 90)
        .map(|j| ALPHABET[(i * 7 + j) % ALPHABET.len()] as char)
        .collect()
}

/// FASTA text with `n` records, sequences wrapped at 30 residues
fn create_test_fasta(n: usize) -> String {
    let mut text = String::new();
    for i in 0..n {
        text.push_str(&format!(">tr|Q{:06}|Q{:06}_YEAST test protein {}\n", i, i, i));
        let sequence = sequence_for(i);
        for chunk in sequence.as_bytes().chunks(30) {
            text.push_str(std::str::from_utf8(chunk).unwrap());
            text.push('\n');
        }
    }
    text
}

fn index_of(accession: &str) -> usize {
    accession.trim_start_matches('Q').parse().unwrap()
}

// ============================================================================
// Shared Iterator Tests
// ============================================================================

#[test]
fn test_threads_share_record_iterator() {
    const RECORDS: usize = 2_000;
    const THREADS: usize = 8;

    let text = create_test_fasta(RECORDS);
    let len = text.len() as u64;
    let proteins = Arc::new(FastaIterator::from_reader(
        Cursor::new(text.into_bytes()),
        len,
        FastaConfig::default().with_sanitize(true),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let proteins = Arc::clone(&proteins);
            thread::spawn(move || {
                let mut seen = Vec::new();
                while let Some(protein) = proteins.next_record().unwrap() {
                    seen.push((protein.accession().to_string(), protein.sequence().to_string()));
                }
                seen
            })
        })
        .collect();

    let mut all: HashMap<String, String> = HashMap::new();
    for handle in handles {
        for (accession, sequence) in handle.join().unwrap() {
            assert!(all.insert(accession, sequence).is_none(), "record delivered twice");
        }
    }

    assert_eq!(all.len(), RECORDS);
    for (accession, sequence) in &all {
        assert_eq!(sequence, &sequence_for(index_of(accession)));
    }
    assert_eq!(proteins.records_read(), RECORDS as u64);
    assert_eq!(proteins.progress_percent(), 100.0);
}

#[test]
fn test_threads_share_header_iterator() {
    const RECORDS: usize = 1_000;

    let text = create_test_fasta(RECORDS);
    let len = text.len() as u64;
    let headers = HeaderIterator::from_reader(
        Cursor::new(text.into_bytes()),
        len,
        FastaConfig::default(),
    );

    let lines: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| headers.lines().map(|l| l.unwrap()).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(lines.len(), RECORDS);
    let unique: HashSet<_> = lines.iter().collect();
    assert_eq!(unique.len(), RECORDS);
}

#[test]
fn test_pool_over_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("yeast.fasta");
    fs::write(&path, create_test_fasta(750)).unwrap();

    let proteins =
        FastaIterator::open_with_config(&path, FastaConfig::default().with_sanitize(true))
            .unwrap();
    let (checked, stats) = for_each_protein(&proteins, 6, |protein| {
        protein.sequence() == sequence_for(index_of(protein.accession()))
    })
    .unwrap();

    assert_eq!(checked.len(), 750);
    assert!(checked.into_iter().all(|ok| ok));
    assert_eq!(stats.records_processed, 750);
    assert_eq!(stats.per_worker.len(), 6);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn record() -> impl Strategy<Value = (String, Vec<String>)> {
        (
            "[A-Z][A-Z0-9_]{0,12}",
            prop::collection::vec("[ACDEFGHIKLMNPQRSTVWY]{1,40}", 1..6),
        )
    }

    proptest! {
        /// Test that record count and concatenated sequences survive any wrapping
        #[test]
        fn test_records_reassembled(
            records in prop::collection::vec(record(), 0..30),
            crlf in any::<bool>(),
            trailing_newline in any::<bool>(),
        ) {
            let eol = if crlf { "\r\n" } else { "\n" };
            let mut text = String::new();
            for (accession, lines) in &records {
                text.push('>');
                text.push_str(accession);
                for line in lines {
                    text.push_str(eol);
                    text.push_str(line);
                }
                text.push_str(eol);
            }
            if !trailing_newline && !text.is_empty() {
                text.truncate(text.len() - eol.len());
            }

            let len = text.len() as u64;
            let proteins = FastaIterator::from_reader(
                Cursor::new(text.into_bytes()),
                len,
                FastaConfig::default(),
            );

            let mut count = 0;
            while let Some(protein) = proteins.next_record().unwrap() {
                let (accession, lines) = &records[count];
                prop_assert_eq!(protein.accession(), accession.as_str());
                prop_assert_eq!(protein.sequence(), lines.concat());
                count += 1;
            }
            prop_assert_eq!(count, records.len());
            prop_assert_eq!(proteins.progress_percent(), 100.0);
        }

        /// Test that the header scan sees exactly one line per record
        #[test]
        fn test_header_count_matches_records(records in prop::collection::vec(record(), 0..30)) {
            let text: String = records
                .iter()
                .map(|(accession, lines)| format!(">{}\n{}\n", accession, lines.join("\n")))
                .collect();
            let len = text.len() as u64;
            let headers = HeaderIterator::from_reader(
                Cursor::new(text.into_bytes()),
                len,
                FastaConfig::default(),
            );
            prop_assert_eq!(headers.lines().count(), records.len());
        }

        /// Test that progress never decreases and stays within bounds
        #[test]
        fn test_progress_bounded(records in prop::collection::vec(record(), 1..20)) {
            let text: String = records
                .iter()
                .map(|(accession, lines)| format!(">{}\n{}\n", accession, lines.join("\n")))
                .collect();
            let len = text.len() as u64;
            let proteins = FastaIterator::from_reader(
                Cursor::new(text.into_bytes()),
                len,
                FastaConfig::default(),
            );

            let mut last = proteins.progress_percent();
            while proteins.next_record().unwrap().is_some() {
                let progress = proteins.progress_percent();
                prop_assert!(progress >= last && progress <= 100.0);
                last = progress;
            }
            prop_assert_eq!(last, 100.0);
        }
    }
}
