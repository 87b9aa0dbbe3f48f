//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unzipr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the ZIP archive; its entries are extracted into the
    /// archive's own directory
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}
