// Thu Oct 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("Field not found: {0}")]
    FieldNotFound(String),
    #[error("Duplicate field: {0}")]
    DuplicateField(String),
    #[error("Inheritance cycle through {0}")]
    HierarchyCycle(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
