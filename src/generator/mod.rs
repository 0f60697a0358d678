// Fri Oct 16 2026 - Alex

pub mod aligner;
pub mod class;
pub mod error;
pub mod naming;
pub mod render;

pub use aligner::{AlignedField, FieldAligner, FieldAlignment};
pub use class::{GeneratedClass, WrapperGenerator};
pub use error::GeneratorError;
pub use render::{RenderedField, Renderer};
