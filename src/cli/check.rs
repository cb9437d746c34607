use anyhow::{Context, Result};
use log::info;
use protfasta::fasta::{FastaConfig, FastaIterator};
use protfasta::pool::{default_workers, for_each_protein};
use std::path::PathBuf;
use std::time::Instant;

/// Read every record of a FASTA file with sanitization on
pub fn run(file: PathBuf, config: FastaConfig, workers: Option<usize>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let workers = workers.unwrap_or_else(default_workers);
    info!("Checking {} with {} workers", file.display(), workers);

    let start = Instant::now();
    let proteins = FastaIterator::open_with_config(&file, config.with_sanitize(true))
        .with_context(|| format!("Failed to open {}", file.display()))?;

    match for_each_protein(&proteins, workers, |protein| protein.len() as u64) {
        Ok((lengths, stats)) => {
            let residues: u64 = lengths.iter().sum();
            println!(
                "OK: {} sequences, {} residues ({:.2}s)",
                stats.records_processed,
                residues,
                start.elapsed().as_secs_f64()
            );
            for (worker, processed) in stats.per_worker.iter().enumerate() {
                info!("  worker {}: {} sequences", worker, processed);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Check failed: {}", e);
            std::process::exit(1);
        }
    }
}
