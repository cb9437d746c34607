#![no_main]

use libfuzzer_sys::fuzz_target;
use protfasta::fasta::{FastaConfig, FastaIterator, HeaderIterator};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let len = data.len() as u64;

    // Arbitrary bytes must produce records or errors, never a panic, and
    // every error must leave the iterator able to continue.
    for config in [
        FastaConfig::default(),
        FastaConfig::default().with_sanitize(true).with_target_only(true),
    ] {
        let proteins = FastaIterator::from_reader(Cursor::new(data), len, config.clone());
        let mut calls = 0;
        while calls <= data.len() + 1 {
            calls += 1;
            match proteins.next_record() {
                Ok(Some(protein)) => assert!(!protein.sequence().is_empty()),
                Ok(None) => break,
                Err(_) => {}
            }
        }
        assert!(proteins.progress_percent() <= 100.0);

        let headers = HeaderIterator::from_reader(Cursor::new(data), len, config);
        for line in headers.lines().take(data.len() + 1) {
            if let Ok(line) = line {
                assert!(line.starts_with('>'));
            }
        }
    }
});
