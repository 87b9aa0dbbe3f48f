//! Entry-by-entry extraction.

pub mod engine;
mod file;

pub use engine::Extractor;
