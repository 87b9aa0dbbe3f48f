//! Error conversion utilities for CLI.
//!
//! Converts unzipr-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance. The typed error
//! stays in the chain so `Caused by:` shows the underlying cause.

use anyhow::Result;
use std::path::Path;
use unzipr_core::ExtractionError;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    let archive = archive.display();
    let message = match &err {
        ExtractionError::ArchiveOpen { .. } => format!(
            "Cannot read archive '{archive}'\n\
             HINT: Check that the file exists and is readable."
        ),
        ExtractionError::InvalidArchive(_) => format!(
            "Invalid archive '{archive}'\n\
             HINT: The file is not a ZIP archive or is corrupted."
        ),
        ExtractionError::PathTraversal { name } => format!(
            "Security violation: Archive '{archive}' attempted path traversal with '{name}'\n\
             HINT: This archive may be malicious. Do not extract from untrusted sources."
        ),
        ExtractionError::InvalidEntryName { name, .. } => {
            format!("Archive '{archive}' contains an unusable entry name {name:?}")
        }
        ExtractionError::OutputOpen { path, .. } => format!(
            "Cannot create '{}' while extracting '{archive}'\n\
             HINT: Check permissions, and that no directory already occupies that path.",
            path.display()
        ),
        ExtractionError::DirectoryCreation { path, .. } => format!(
            "Cannot create directory '{}' while extracting '{archive}'\n\
             HINT: Check permissions, and that no file already occupies that path.",
            path.display()
        ),
        ExtractionError::Copy { path, .. } => format!(
            "Failed writing '{}' while extracting '{archive}'\n\
             HINT: The archive may be truncated, or the disk may be full.",
            path.display()
        ),
        ExtractionError::Io(_) => format!("I/O error while processing '{archive}'"),
    };

    anyhow::Error::new(err).context(message)
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}
