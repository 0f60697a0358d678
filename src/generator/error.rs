// Fri Oct 16 2026 - Alex

use crate::source::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Cannot find modifier for field '{field}' of type {data_type}")]
    UnresolvedModifier { field: String, data_type: String },
    #[error(transparent)]
    Source(#[from] SourceError),
}
