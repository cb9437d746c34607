use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod config;
mod headers;
mod info;

use config::Config;

/// protfasta - Streaming FASTA protein database reader
#[derive(Parser)]
#[command(name = "protfasta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load reader settings from a TOML config file
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Skip decoy entries
    #[arg(long, global = true)]
    target_only: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a FASTA file
    Info {
        /// Input FASTA file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the header lines of a FASTA file
    Headers {
        /// Input FASTA file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print accession and database type instead of the raw line
        #[arg(long)]
        parsed: bool,
    },

    /// Read every record with sanitization on and report the first error
    Check {
        /// Input FASTA file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of worker threads (default: available parallelism)
        #[arg(short = 'w', long)]
        workers: Option<usize>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let fasta_config = config.fasta_config(cli.target_only);

    match cli.command {
        Commands::Info { file, json } => info::run(file, fasta_config, json),
        Commands::Headers { file, parsed } => headers::run(file, fasta_config, parsed),
        Commands::Check { file, workers } => {
            check::run(file, fasta_config, workers.or(config.pool.workers))
        }
    }
}
