// Fri Oct 16 2026 - Alex

use crate::generator::GeneratorError;
use crate::modifier::Modifier;
use crate::structure::DataType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static GLOBAL: Lazy<ModifierRegistry> = Lazy::new(ModifierRegistry::new);

/// Type-to-modifier lookup. Built once; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ModifierRegistry {
    by_input: HashMap<DataType, Modifier>,
}

impl ModifierRegistry {
    fn new() -> Self {
        let by_input = Modifier::ALL.iter().map(|&m| (m.input_type(), m)).collect();
        Self { by_input }
    }

    pub fn global() -> &'static ModifierRegistry {
        &GLOBAL
    }

    /// Exact lookup without climbing.
    pub fn get(&self, data_type: &DataType) -> Option<Modifier> {
        self.by_input.get(data_type).copied()
    }

    /// Finds the modifier for `data_type`, falling back to its nearest
    /// registered ancestor.
    pub fn resolve(&self, data_type: &DataType) -> Option<Modifier> {
        data_type.ancestry().find_map(|ty| self.get(&ty))
    }

    pub fn require(&self, field: &str, data_type: &DataType) -> Result<Modifier, GeneratorError> {
        self.resolve(data_type).ok_or_else(|| GeneratorError::UnresolvedModifier {
            field: field.to_string(),
            data_type: data_type.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.by_input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_input.is_empty()
    }
}
