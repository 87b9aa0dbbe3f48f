//! Streaming ZIP extraction into a destination directory.
//!
//! `unzipr-core` reads the entries of a ZIP archive one at a time, in the
//! order they are stored, and recreates them under a destination directory.
//! Missing directories along every entry path are created on demand, and
//! entry names that would escape the destination are rejected.
//!
//! # Examples
//!
//! ```no_run
//! use unzipr_core::ExtractConfig;
//! use unzipr_core::default_destination;
//! use unzipr_core::extract_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dest = default_destination("downloads/archive.zip")?;
//! let report = extract_archive("downloads/archive.zip", &dest, &ExtractConfig::default())?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod fs;
pub mod report;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod types;

pub use api::default_destination;
pub use api::extract_archive;
pub use config::ExtractConfig;
pub use error::ExtractionError;
pub use error::Result;
pub use report::ExtractionReport;

pub use types::DestDir;
pub use types::EntryPath;
pub use types::EntryType;
