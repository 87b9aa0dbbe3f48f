//! Test utilities for building ZIP archives in memory.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::path::Path;

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Creates an in-memory ZIP archive from `(name, content)` pairs, stored
/// uncompressed.
///
/// # Examples
///
/// ```
/// use unzipr_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// assert!(!zip_data.is_empty());
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    entries
        .iter()
        .fold(ZipTestBuilder::new(), |builder, (name, data)| {
            builder.add_file(name, data)
        })
        .build()
}

/// Builder for ZIP test archives with files and directory markers.
///
/// # Examples
///
/// ```
/// use unzipr_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_directory("notes/")
///     .add_file("notes/todo.txt", b"buy milk")
///     .build();
/// assert!(!zip_data.is_empty());
/// ```
pub struct ZipTestBuilder {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a stored (uncompressed) file.
    #[must_use]
    pub fn add_file(self, name: &str, data: &[u8]) -> Self {
        self.add_with_method(name, data, CompressionMethod::Stored)
    }

    /// Adds a deflate-compressed file.
    #[must_use]
    pub fn add_deflated_file(self, name: &str, data: &[u8]) -> Self {
        self.add_with_method(name, data, CompressionMethod::Deflated)
    }

    fn add_with_method(mut self, name: &str, data: &[u8], method: CompressionMethod) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(method)
            .unix_permissions(0o644);

        self.zip.start_file(name, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory marker entry.
    #[must_use]
    pub fn add_directory(mut self, name: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(name, options).unwrap();
        self
    }

    /// Builds and returns the ZIP archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }

    /// Builds the archive and writes it to `path`.
    pub fn write_to(self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
