// Fri Oct 16 2026 - Alex

pub mod manager;
pub mod writer;

pub use manager::{ManifestEntry, OutputError, OutputManager};
pub use writer::CodeWriter;
