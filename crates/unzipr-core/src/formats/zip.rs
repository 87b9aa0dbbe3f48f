//! ZIP entry stream.
//!
//! [`EntryStream`] presents a ZIP archive as a lazy, finite, non-restartable
//! sequence of [`ArchiveEntry`] values in stored order. Each entry borrows
//! the stream, so it has to be dropped before the next one is requested;
//! dropping it releases the reader-side state for that entry.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use zip::ZipArchive;
use zip::read::ZipFile;

use crate::ExtractionError;
use crate::Result;
use crate::types::EntryType;

/// Sequential reader over the entries of a ZIP archive.
pub struct EntryStream<R: Read + Seek> {
    archive: ZipArchive<R>,
    next_index: usize,
}

impl EntryStream<BufReader<File>> {
    /// Opens the archive at `path`.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::ArchiveOpen` if the file is missing or unreadable
    /// - `ExtractionError::InvalidArchive` if it is not a ZIP archive
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ExtractionError::ArchiveOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> EntryStream<R> {
    /// Wraps an already opened reader.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::Io` if the reader fails
    /// - `ExtractionError::InvalidArchive` if the central directory is
    ///   missing or corrupt
    pub fn new(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self {
            archive,
            next_index: 0,
        })
    }

    /// Number of entries stored in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the archive stores no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Advances to the next entry, or returns `None` once all entries have
    /// been produced.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry header is corrupt or uses an
    /// unsupported feature (encryption, unknown compression method).
    pub fn next_entry(&mut self) -> Result<Option<ArchiveEntry<'_, R>>> {
        if self.next_index >= self.archive.len() {
            return Ok(None);
        }

        let index = self.next_index;
        self.next_index += 1;

        let file = self.archive.by_index(index)?;
        let kind = EntryType::from_is_dir(file.is_dir());
        Ok(Some(ArchiveEntry { file, kind }))
    }
}

/// One entry read from an [`EntryStream`].
///
/// Reading from an entry yields its decompressed content. Directory entries
/// read as empty.
pub struct ArchiveEntry<'a, R: Read> {
    file: ZipFile<'a, R>,
    kind: EntryType,
}

impl<R: Read> ArchiveEntry<'_, R> {
    /// Entry name as stored in the archive.
    #[must_use]
    pub fn name(&self) -> &str {
        self.file.name()
    }

    /// Whether this is a file or a directory marker.
    #[must_use]
    pub const fn kind(&self) -> EntryType {
        self.kind
    }

    /// Uncompressed size recorded in the archive.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.file.size()
    }
}

impl<R: Read> Read for ArchiveEntry<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buf)
    }
}
