// Mon Oct 19 2026 - Alex

pub mod config;
pub mod documentation;
pub mod generator;
pub mod modifier;
pub mod output;
pub mod source;
pub mod structure;
pub mod ui;
pub mod utils;

pub use config::GeneratorConfig;
pub use documentation::{DocumentationTable, DocumentedField};
pub use generator::{GeneratedClass, GeneratorError, WrapperGenerator};
pub use modifier::{Modifier, ModifierRegistry};
pub use source::{DocumentationProvider, JsonCatalog, LayoutProvider};
pub use structure::{DataType, ReflectedField, ReflectedLayout, TypeHierarchy};
