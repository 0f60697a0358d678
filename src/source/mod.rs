// Mon Oct 19 2026 - Alex

pub mod catalog;

pub use catalog::JsonCatalog;

use crate::documentation::DocumentationTable;
use crate::structure::{ReflectedLayout, StructureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown record: 0x{0:02X}")]
    UnknownRecord(u32),
    #[error("Duplicate record: 0x{0:02X}")]
    DuplicateRecord(u32),
    #[error("Record 0x{id:02X}: {source}")]
    Structure {
        id: u32,
        #[source]
        source: StructureError,
    },
}

/// Supplies the reflected field layout of a record.
pub trait LayoutProvider {
    fn layout(&self, record_id: u32) -> Result<ReflectedLayout, SourceError>;
}

/// Supplies the documentation table of a record.
pub trait DocumentationProvider {
    fn documentation(&self, record_id: u32) -> Result<DocumentationTable, SourceError>;

    /// Every record this provider documents.
    fn record_ids(&self) -> Vec<u32>;
}
