//! Archive format readers.

pub mod zip;

pub use self::zip::ArchiveEntry;
pub use self::zip::EntryStream;
