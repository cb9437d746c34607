use anyhow::{Context, Result};
use protfasta::fasta::FastaConfig;
use protfasta::summary::FastaSummary;
use std::path::{Path, PathBuf};

/// Display summary statistics of a FASTA file
pub fn run(file: PathBuf, config: FastaConfig, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let summary = FastaSummary::scan(&file, config)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    if json {
        let text = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{}", text);
        return Ok(());
    }

    print_summary(&file, &summary);
    Ok(())
}

fn title(text: &str) -> String {
    #[cfg(feature = "colorized_output")]
    {
        console::style(text).bold().cyan().to_string()
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        text.to_string()
    }
}

fn print_summary(file: &Path, summary: &FastaSummary) {
    println!("{}", title("FASTA File Information"));
    println!("{}", title("======================"));
    println!("File: {}", file.display());
    println!();

    println!("{}", title("Entries:"));
    println!("  Sequences: {}", summary.sequences);
    println!("  Targets:   {}", summary.targets);
    println!("  Decoys:    {}", summary.decoys);
    for (database_type, count) in &summary.database_types {
        println!("  {:<10} {}", format!("{}:", database_type), count);
    }
    println!();

    println!("{}", title("Lengths:"));
    println!("  Residues: {}", summary.residues);
    if let (Some(min), Some(max)) = (summary.min_length, summary.max_length) {
        println!("  Shortest: {}", min);
        println!("  Longest:  {}", max);
        println!("  Mean:     {:.1}", summary.mean_length());
    }
    println!();

    println!("{}", title("Composition:"));
    for (residue, count) in &summary.residue_counts {
        let share = 100.0 * *count as f64 / summary.residues.max(1) as f64;
        println!("  {}  {:>12}  {:5.2}%", residue, count, share);
    }
    if summary.unknown_residues > 0 {
        println!("  ?  {:>12}", summary.unknown_residues);
    }
}
