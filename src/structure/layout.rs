// Thu Oct 15 2026 - Alex

use crate::structure::{ReflectedField, StructureError};
use std::collections::HashSet;

/// The reflected view of one record: its fields in declaration ("memory")
/// order plus the order they travel over the wire.
///
/// Network order is stored as indices into the memory order, so a field's
/// identity is its declaration position.
#[derive(Debug, Clone)]
pub struct ReflectedLayout {
    fields: Vec<ReflectedField>,
    network_order: Vec<usize>,
}

impl ReflectedLayout {
    /// Builds a layout from declared fields and the names of those fields in
    /// network order. Fields that are never serialized may be left out of
    /// `network_names`.
    pub fn new<S: AsRef<str>>(fields: Vec<ReflectedField>, network_names: &[S]) -> Result<Self, StructureError> {
        let mut declared = HashSet::new();
        for field in &fields {
            if !declared.insert(field.name()) {
                return Err(StructureError::DuplicateField(field.name().to_string()));
            }
        }

        let mut network_order = Vec::with_capacity(network_names.len());
        for name in network_names {
            let name = name.as_ref();
            let index = fields
                .iter()
                .position(|f| f.name() == name)
                .ok_or_else(|| StructureError::FieldNotFound(name.to_string()))?;
            if network_order.contains(&index) {
                return Err(StructureError::DuplicateField(name.to_string()));
            }
            network_order.push(index);
        }

        Ok(Self { fields, network_order })
    }

    /// A layout whose network order matches declaration order.
    pub fn sequential(fields: Vec<ReflectedField>) -> Result<Self, StructureError> {
        let names: Vec<String> = fields.iter().map(|f| f.name().to_string()).collect();
        Self::new(fields, names.as_slice())
    }

    pub fn memory_order(&self) -> &[ReflectedField] {
        &self.fields
    }

    pub fn in_network_order(&self) -> impl Iterator<Item = &ReflectedField> + '_ {
        self.network_order.iter().map(move |&i| &self.fields[i])
    }

    pub fn network_len(&self) -> usize {
        self.network_order.len()
    }

    /// Declaration position of the field sent at `network_position`.
    pub fn memory_index(&self, network_position: usize) -> Option<usize> {
        self.network_order.get(network_position).copied()
    }

    pub fn network_field(&self, network_position: usize) -> Option<&ReflectedField> {
        self.memory_index(network_position).map(|i| &self.fields[i])
    }

    /// Number of fields of the same type declared before the field at
    /// `memory_index`. This addresses the field among its type's storage slots.
    pub fn storage_index(&self, memory_index: usize) -> Option<usize> {
        let target = self.fields.get(memory_index)?;

        let mut count = 0;
        for (index, field) in self.fields.iter().enumerate() {
            if field.data_type() == target.data_type() {
                if index == memory_index {
                    break;
                }
                count += 1;
            }
        }
        Some(count)
    }
}
