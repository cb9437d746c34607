//! # protfasta
//!
//! A command-line tool for inspecting and validating FASTA protein databases.
//!
//! ## Usage
//!
//! ```bash
//! # Summary statistics (sequence count, decoys, residue composition)
//! protfasta info uniprot_human.fasta --json
//!
//! # Header lines, optionally parsed, without decoys
//! protfasta headers uniprot_human.fasta --parsed --target-only
//!
//! # Validate every residue with 8 worker threads
//! protfasta check uniprot_human.fasta --workers 8
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
