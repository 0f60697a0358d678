// Thu Oct 15 2026 - Alex

use crate::structure::DataType;
use std::fmt;

/// A declared field of a record as reported by reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectedField {
    name: String,
    data_type: DataType,
}

impl ReflectedField {
    pub fn new(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }
}

impl fmt::Display for ReflectedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.data_type)
    }
}
