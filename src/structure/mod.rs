// Thu Oct 15 2026 - Alex

pub mod error;
pub mod field;
pub mod inheritance;
pub mod layout;
pub mod type_info;

pub use error::StructureError;
pub use field::ReflectedField;
pub use inheritance::TypeHierarchy;
pub use layout::ReflectedLayout;
pub use type_info::{ClassType, DataType, PrimitiveType};
