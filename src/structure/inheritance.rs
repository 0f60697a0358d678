// Thu Oct 15 2026 - Alex

use crate::structure::type_info::{ClassType, OBJECT_CLASS};
use crate::structure::StructureError;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Declared superclass relation for every class a record may reference.
///
/// Classes without an entry (and classes whose parent is `java.lang.Object`)
/// are treated as roots.
#[derive(Debug, Clone, Default)]
pub struct TypeHierarchy {
    supertypes: IndexMap<String, String>,
}

impl TypeHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_supertype(&mut self, class: &str, superclass: &str) {
        self.supertypes.insert(class.to_string(), superclass.to_string());
    }

    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.supertypes.extend(entries);
    }

    pub fn superclass_of(&self, class: &str) -> Option<&str> {
        self.supertypes
            .get(class)
            .map(String::as_str)
            .filter(|parent| *parent != OBJECT_CLASS)
    }

    pub fn len(&self) -> usize {
        self.supertypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supertypes.is_empty()
    }

    /// Ancestor names of `class`, nearest first, excluding the class itself.
    pub fn ancestors(&self, class: &str) -> Result<Vec<String>, StructureError> {
        let mut seen = HashSet::new();
        seen.insert(class.to_string());

        let mut chain = Vec::new();
        let mut current = class;
        while let Some(parent) = self.superclass_of(current) {
            if !seen.insert(parent.to_string()) {
                return Err(StructureError::HierarchyCycle(class.to_string()));
            }
            chain.push(parent.to_string());
            current = parent;
        }
        Ok(chain)
    }

    pub fn is_ancestor(&self, ancestor: &str, class: &str) -> bool {
        self.ancestors(class)
            .map(|chain| chain.iter().any(|name| name == ancestor))
            .unwrap_or(false)
    }

    /// Builds the class type for `name` with its full superclass chain attached.
    pub fn class_type(&self, name: &str) -> Result<ClassType, StructureError> {
        let chain = self.ancestors(name)?;

        let mut parent: Option<ClassType> = None;
        for ancestor in chain.iter().rev() {
            let mut node = ClassType::new(ancestor);
            if let Some(p) = parent.take() {
                node = node.with_superclass(p);
            }
            parent = Some(node);
        }

        let mut class = ClassType::new(name);
        if let Some(p) = parent {
            class = class.with_superclass(p);
        }
        Ok(class)
    }
}
