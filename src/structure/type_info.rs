// Thu Oct 15 2026 - Alex

use crate::structure::{StructureError, TypeHierarchy};
use std::fmt;
use std::hash::{Hash, Hasher};

pub const OBJECT_CLASS: &str = "java.lang.Object";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Primitive(PrimitiveType),
    Array(Box<DataType>),
    Class(ClassType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

/// A reference type together with its ancestry.
///
/// Two class types are the same type when their names match; the superclass
/// chain is carried along only so lookups can climb it.
#[derive(Debug, Clone)]
pub struct ClassType {
    name: String,
    superclass: Option<Box<ClassType>>,
}

impl ClassType {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            superclass: None,
        }
    }

    pub fn with_superclass(mut self, superclass: ClassType) -> Self {
        self.superclass = Some(Box::new(superclass));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn superclass(&self) -> Option<&ClassType> {
        self.superclass.as_deref()
    }
}

impl PartialEq for ClassType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassType {}

impl Hash for ClassType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl DataType {
    pub fn class(name: &str) -> Self {
        Self::Class(ClassType::new(name))
    }

    pub fn array_of(element: DataType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Parses a Java type signature such as `int`, `byte[]` or
    /// `net.minecraft.server.ItemStack[]`. Class ancestry comes from `hierarchy`.
    pub fn parse(signature: &str, hierarchy: &TypeHierarchy) -> Result<Self, StructureError> {
        let signature = signature.trim();
        if signature.is_empty() {
            return Err(StructureError::ParseError("empty type signature".to_string()));
        }

        if let Some(element) = signature.strip_suffix("[]") {
            return Ok(Self::array_of(Self::parse(element, hierarchy)?));
        }

        if let Some(primitive) = PrimitiveType::from_keyword(signature) {
            return Ok(Self::Primitive(primitive));
        }

        let valid = signature
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$'));
        if !valid {
            return Err(StructureError::ParseError(format!("invalid type signature '{}'", signature)));
        }

        Ok(Self::Class(hierarchy.class_type(signature)?))
    }

    /// The immediate supertype that may be searched, or `None` once the root is reached.
    pub fn superclass(&self) -> Option<DataType> {
        match self {
            Self::Primitive(_) | Self::Array(_) => None,
            Self::Class(class) => class.superclass().cloned().map(Self::Class),
        }
    }

    /// Walks this type and its ancestors, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = DataType> {
        std::iter::successors(Some(self.clone()), |current| current.superclass())
    }
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 7] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.keyword() == keyword)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => write!(f, "{}", ty),
            Self::Array(elem) => write!(f, "{}[]", elem),
            Self::Class(class) => write!(f, "{}", class),
        }
    }
}
