// Thu Oct 15 2026 - Alex

pub mod field;
pub mod table;

pub use field::DocumentedField;
pub use table::DocumentationTable;
