// Thu Oct 15 2026 - Alex

use crate::documentation::DocumentedField;
use serde::{Deserialize, Serialize};

/// The documented fields of a record, in network order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationTable {
    pub record_name: String,
    pub fields: Vec<DocumentedField>,
}

impl DocumentationTable {
    pub fn new(record_name: &str) -> Self {
        Self {
            record_name: record_name.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, display_name: &str, documented_type: &str, note: &str) -> Self {
        self.fields.push(DocumentedField::new(display_name, documented_type, note));
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentedField> {
        self.fields.iter()
    }
}
