//! Types shared by the entry stream and the extractor.
//!
//! Path types are validated upon construction and cannot be created from raw
//! strings without going through validation.

pub mod dest_dir;
pub mod entry_path;
pub mod entry_type;

pub use dest_dir::DestDir;
pub use entry_path::EntryPath;
pub use entry_type::EntryType;
