//! Core extraction engine.

use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::time::Instant;

use tracing::debug;
use tracing::info;
use tracing::warn;

use super::file::extract_file;
use crate::ExtractConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::formats::ArchiveEntry;
use crate::formats::EntryStream;
use crate::fs::ensure_dir_all;
use crate::types::DestDir;
use crate::types::EntryPath;
use crate::types::EntryType;

/// Sequential archive extractor.
///
/// Walks the entries of an archive in stored order and writes each one under
/// the destination directory. The first failure aborts the run; entries
/// already written stay on disk.
///
/// # Examples
///
/// ```no_run
/// use unzipr_core::ExtractConfig;
/// use unzipr_core::extraction::Extractor;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut extractor = Extractor::new(ExtractConfig::default());
/// let report = extractor.extract(Path::new("photos.zip"), Path::new("/tmp/photos"))?;
/// println!("{} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Extractor {
    buffer: CopyBuffer,
}

impl Extractor {
    /// Creates a new extractor with the given configuration.
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            buffer: CopyBuffer::with_size(config.buffer_size),
        }
    }

    /// Extracts the archive at `archive_path` into `dest_dir`.
    ///
    /// `dest_dir` is created with all missing ancestors once the archive has
    /// been opened, so an unreadable archive leaves the filesystem untouched.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while creating the destination, opening
    /// the archive or writing an entry.
    pub fn extract(&mut self, archive_path: &Path, dest_dir: &Path) -> Result<ExtractionReport> {
        let start = Instant::now();
        let mut stream = EntryStream::open(archive_path)?;
        let dest = DestDir::create(dest_dir)?;

        info!(
            archive = %archive_path.display(),
            dest = %dest.as_path().display(),
            entries = stream.len(),
            "extracting archive"
        );

        let mut report = self.extract_entries(&mut stream, &dest)?;
        report.duration = start.elapsed();

        info!(
            files = report.files_extracted,
            directories = report.directories_created,
            bytes = report.bytes_written,
            "extraction complete"
        );
        Ok(report)
    }

    /// Extracts every remaining entry of `stream` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns the first entry that cannot be read or written.
    pub fn extract_entries<R: Read + Seek>(
        &mut self,
        stream: &mut EntryStream<R>,
        dest: &DestDir,
    ) -> Result<ExtractionReport> {
        let mut report = ExtractionReport::new();

        if let Err(err) = self.process_all(stream, dest, &mut report) {
            warn!(
                completed = report.total_items(),
                total = stream.len(),
                "extraction aborted: {err}"
            );
            return Err(err);
        }

        Ok(report)
    }

    fn process_all<R: Read + Seek>(
        &mut self,
        stream: &mut EntryStream<R>,
        dest: &DestDir,
        report: &mut ExtractionReport,
    ) -> Result<()> {
        while let Some(mut entry) = stream.next_entry()? {
            self.process_entry(&mut entry, dest, report)?;
        }
        Ok(())
    }

    fn process_entry<R: Read>(
        &mut self,
        entry: &mut ArchiveEntry<'_, R>,
        dest: &DestDir,
        report: &mut ExtractionReport,
    ) -> Result<()> {
        let entry_path = EntryPath::parse(entry.name())?;
        let target = dest.join(&entry_path);

        match entry.kind() {
            EntryType::Directory => {
                ensure_dir_all(&target)?;
                report.directories_created += 1;
                debug!(path = %target.display(), "directory");
            }
            EntryType::File => {
                if entry_path.is_empty() {
                    return Err(ExtractionError::InvalidEntryName {
                        name: entry.name().to_string(),
                        reason: "file entry has no file name",
                    });
                }
                let written = extract_file(entry, &target, &mut self.buffer)?;
                report.files_extracted += 1;
                report.bytes_written += written;
                debug!(path = %target.display(), bytes = written, "file");
            }
        }

        Ok(())
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}
