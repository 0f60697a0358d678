// Mon Oct 19 2026 - Alex

use crate::documentation::{DocumentationTable, DocumentedField};
use crate::source::{DocumentationProvider, LayoutProvider, SourceError};
use crate::structure::{DataType, ReflectedField, ReflectedLayout, StructureError, TypeHierarchy};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    supertypes: IndexMap<String, String>,
    #[serde(default)]
    records: Vec<RecordEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntry {
    pub id: u32,
    pub name: String,
    /// Declared fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
    /// Field names in wire order; declaration order when absent.
    #[serde(default)]
    pub network_order: Option<Vec<String>>,
    #[serde(default)]
    pub documentation: Vec<DocumentedField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub signature: String,
}

/// Both record views read from a single JSON document:
///
/// ```json
/// {
///   "supertypes": { "net.minecraft.server.EnumDifficulty": "java.lang.Enum" },
///   "records": [{
///     "id": 1, "name": "Login Request",
///     "fields": [{ "name": "a", "type": "int" }],
///     "network_order": ["a"],
///     "documentation": [{ "name": "Entity ID", "type": "int", "note": "The player's id" }]
///   }]
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    hierarchy: TypeHierarchy,
    records: IndexMap<u32, RecordEntry>,
}

impl JsonCatalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::from_file(file)
    }

    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    fn from_file(file: CatalogFile) -> Result<Self, SourceError> {
        let mut hierarchy = TypeHierarchy::new();
        hierarchy.extend(file.supertypes);

        let mut records = IndexMap::with_capacity(file.records.len());
        for record in file.records {
            let id = record.id;
            if records.insert(id, record).is_some() {
                return Err(SourceError::DuplicateRecord(id));
            }
        }

        log::debug!("Loaded catalog with {} records and {} supertypes", records.len(), hierarchy.len());
        Ok(Self { hierarchy, records })
    }

    pub fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }

    pub fn record(&self, record_id: u32) -> Result<&RecordEntry, SourceError> {
        self.records.get(&record_id).ok_or(SourceError::UnknownRecord(record_id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LayoutProvider for JsonCatalog {
    fn layout(&self, record_id: u32) -> Result<ReflectedLayout, SourceError> {
        let record = self.record(record_id)?;
        let structure = |source: StructureError| SourceError::Structure { id: record_id, source };

        let fields = record
            .fields
            .iter()
            .map(|f| DataType::parse(&f.signature, &self.hierarchy).map(|ty| ReflectedField::new(&f.name, ty)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(structure)?;

        let layout = match &record.network_order {
            Some(order) => ReflectedLayout::new(fields, order.as_slice()),
            None => ReflectedLayout::sequential(fields),
        };
        layout.map_err(structure)
    }
}

impl DocumentationProvider for JsonCatalog {
    fn documentation(&self, record_id: u32) -> Result<DocumentationTable, SourceError> {
        let record = self.record(record_id)?;
        Ok(DocumentationTable {
            record_name: record.name.clone(),
            fields: record.documentation.clone(),
        })
    }

    fn record_ids(&self) -> Vec<u32> {
        self.records.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "supertypes": { "net.minecraft.server.EnumDifficulty": "java.lang.Enum" },
        "records": [
            {
                "id": 20,
                "name": "Named Entity Spawn",
                "fields": [
                    { "name": "a", "type": "int" },
                    { "name": "b", "type": "java.lang.String" },
                    { "name": "c", "type": "int" }
                ],
                "network_order": ["a", "b", "c"],
                "documentation": [
                    { "name": "EID", "type": "int", "note": "Player ID" },
                    { "name": "Player Name", "type": "string", "note": "Name of the player" }
                ]
            },
            {
                "id": 1,
                "name": "Login",
                "fields": [{ "name": "difficulty", "type": "net.minecraft.server.EnumDifficulty" }]
            }
        ]
    }"#;

    #[test]
    fn test_layout_and_documentation() {
        let catalog = JsonCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.record_ids(), vec![20, 1]);

        let layout = catalog.layout(20).unwrap();
        assert_eq!(layout.network_len(), 3);
        assert_eq!(layout.network_field(1).unwrap().data_type().to_string(), "java.lang.String");

        let docs = catalog.documentation(20).unwrap();
        assert_eq!(docs.record_name, "Named Entity Spawn");
        assert_eq!(docs.fields[1].documented_type, "string");
    }

    #[test]
    fn test_missing_network_order_uses_declaration_order() {
        let catalog = JsonCatalog::from_json(CATALOG).unwrap();

        let layout = catalog.layout(1).unwrap();
        let field = layout.network_field(0).unwrap();
        assert_eq!(field.name(), "difficulty");
        assert_eq!(field.data_type().superclass(), Some(DataType::class("java.lang.Enum")));
        assert!(catalog.documentation(1).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_record() {
        let catalog = JsonCatalog::from_json(CATALOG).unwrap();
        assert!(matches!(catalog.layout(99), Err(SourceError::UnknownRecord(99))));
        assert!(matches!(catalog.documentation(99), Err(SourceError::UnknownRecord(99))));
    }

    #[test]
    fn test_bad_network_order_reports_record() {
        let json = r#"{ "records": [{ "id": 3, "name": "Chat",
            "fields": [{ "name": "msg", "type": "java.lang.String" }],
            "network_order": ["message"] }] }"#;
        let catalog = JsonCatalog::from_json(json).unwrap();

        match catalog.layout(3) {
            Err(SourceError::Structure { id, source: StructureError::FieldNotFound(name) }) => {
                assert_eq!(id, 3);
                assert_eq!(name, "message");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_record_rejected() {
        let json = r#"{ "records": [{ "id": 3, "name": "A" }, { "id": 3, "name": "B" }] }"#;
        assert!(matches!(JsonCatalog::from_json(json), Err(SourceError::DuplicateRecord(3))));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, CATALOG).unwrap();

        let catalog = JsonCatalog::load(&path).unwrap();
        assert_eq!(catalog.record(1).unwrap().name, "Login");
        assert!(matches!(JsonCatalog::load(dir.path().join("missing.json")), Err(SourceError::Io(_))));
    }
}
