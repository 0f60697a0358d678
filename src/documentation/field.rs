// Thu Oct 15 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a record's documentation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentedField {
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "type")]
    pub documented_type: String,
    #[serde(default)]
    pub note: String,
}

impl DocumentedField {
    pub fn new(display_name: &str, documented_type: &str, note: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            documented_type: documented_type.to_string(),
            note: note.to_string(),
        }
    }
}

impl fmt::Display for DocumentedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.documented_type)
    }
}
