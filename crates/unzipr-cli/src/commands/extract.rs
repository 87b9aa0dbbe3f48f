//! Extract command implementation.

use crate::cli::Cli;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use unzipr_core::ExtractConfig;
use unzipr_core::default_destination;
use unzipr_core::extract_archive;

/// Extracts `cli.archive` into the directory that contains it.
pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let destination = add_archive_context(default_destination(&cli.archive), &cli.archive)?;
    tracing::debug!(
        archive = %cli.archive.display(),
        destination = %destination.display(),
        "starting extraction"
    );

    let report = add_archive_context(
        extract_archive(&cli.archive, &destination, &ExtractConfig::default()),
        &cli.archive,
    )?;

    formatter.format_extraction_result(&destination, &report)
}
