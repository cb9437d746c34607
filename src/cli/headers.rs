use anyhow::{Context, Result};
use log::info;
use protfasta::fasta::{FastaConfig, HeaderIterator};
use protfasta::header::Header;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Progress is logged each time another tenth of the file has been read
const PROGRESS_STEP: f64 = 10.0;

/// Print the header lines of a FASTA file
pub fn run(file: PathBuf, config: FastaConfig, parsed: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let last_step = AtomicU64::new(0);
    let headers = HeaderIterator::open_with_config(&file, config)
        .with_context(|| format!("Failed to open {}", file.display()))?
        .with_progress(move |percent| {
            let step = (percent / PROGRESS_STEP) as u64;
            if step > last_step.swap(step, Ordering::Relaxed) {
                info!("Read {:.0}% of input", step as f64 * PROGRESS_STEP);
            }
        });

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut count = 0u64;
    for line in headers.lines() {
        let line = line.with_context(|| format!("Failed to read {}", file.display()))?;
        if parsed {
            let header = Header::parse(&line);
            writeln!(
                out,
                "{}\t{}\t{}",
                header.accession_or_rest(),
                header.database_type,
                header.description
            )?;
        } else {
            writeln!(out, "{}", line)?;
        }
        count += 1;
    }
    out.flush()?;

    info!("{} headers", count);
    Ok(())
}
