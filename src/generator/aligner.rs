// Fri Oct 16 2026 - Alex

use crate::documentation::{DocumentationTable, DocumentedField};
use crate::generator::GeneratorError;
use crate::modifier::{Modifier, ModifierRegistry};
use crate::structure::{ReflectedField, ReflectedLayout};
use std::fmt;

/// A documented field matched to the reflected field sent at the same
/// network position.
#[derive(Debug, Clone)]
pub struct AlignedField<'a> {
    pub position: usize,
    pub documented: &'a DocumentedField,
    pub reflected: &'a ReflectedField,
    pub modifier: Modifier,
    /// Slot among the fields of the same type, counted in declaration order.
    pub storage_index: usize,
}

#[derive(Debug, Clone)]
pub enum FieldAlignment<'a> {
    Resolved(AlignedField<'a>),
    /// Documentation describes more fields than reflection exposes.
    Unresolved {
        position: usize,
        documented: &'a DocumentedField,
    },
}

impl<'a> FieldAlignment<'a> {
    pub fn documented(&self) -> &'a DocumentedField {
        match self {
            Self::Resolved(field) => field.documented,
            Self::Unresolved { documented, .. } => documented,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Self::Resolved(field) => field.position,
            Self::Unresolved { position, .. } => *position,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl fmt::Display for FieldAlignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(field) => write!(
                f,
                "#{} {} -> {} via {}[{}]",
                field.position,
                field.documented.display_name,
                field.reflected,
                field.modifier.accessor(),
                field.storage_index
            ),
            Self::Unresolved { position, documented } => {
                write!(f, "#{} {} -> <none>", position, documented.display_name)
            }
        }
    }
}

pub struct FieldAligner<'a> {
    layout: &'a ReflectedLayout,
    registry: &'a ModifierRegistry,
}

impl<'a> FieldAligner<'a> {
    pub fn new(layout: &'a ReflectedLayout, registry: &'a ModifierRegistry) -> Self {
        Self { layout, registry }
    }

    /// Aligns the documented field at `position`. An unregistered reflected
    /// type fails the whole record.
    pub fn align_field(&self, position: usize, documented: &'a DocumentedField) -> Result<FieldAlignment<'a>, GeneratorError> {
        let memory_index = match self.layout.memory_index(position) {
            Some(index) => index,
            None => return Ok(FieldAlignment::Unresolved { position, documented }),
        };

        let reflected = &self.layout.memory_order()[memory_index];
        let modifier = self.registry.require(reflected.name(), reflected.data_type())?;
        let storage_index = self.layout.storage_index(memory_index).unwrap_or_default();

        Ok(FieldAlignment::Resolved(AlignedField {
            position,
            documented,
            reflected,
            modifier,
            storage_index,
        }))
    }

    /// One alignment per documented field, in documentation order.
    pub fn align(&self, table: &'a DocumentationTable) -> Result<Vec<FieldAlignment<'a>>, GeneratorError> {
        let mut aligned = Vec::with_capacity(table.len());

        for (position, documented) in table.iter().enumerate() {
            let field = self.align_field(position, documented)?;
            log::debug!("{}", field);
            aligned.push(field);
        }

        Ok(aligned)
    }
}
