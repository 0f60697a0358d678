// Fri Oct 16 2026 - Alex

pub mod registry;

pub use registry::ModifierRegistry;

use crate::structure::{DataType, PrimitiveType};
use std::fmt;

/// Accessor families a wrapper can use to reach a field through the packet
/// container, one per storable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Booleans,
    Bytes,
    Shorts,
    Integers,
    Longs,
    Floats,
    Doubles,
    Enums,
    Strings,
    StringArrays,
    ByteArrays,
    IntegerArrays,
    ItemStacks,
    ItemStackArrays,
    WorldTypes,
    DataWatchers,
    PositionLists,
    Nbt,
    Maps,
    PublicKeys,
}

impl Modifier {
    pub const ALL: [Modifier; 20] = [
        Self::Booleans,
        Self::Bytes,
        Self::Shorts,
        Self::Integers,
        Self::Longs,
        Self::Floats,
        Self::Doubles,
        Self::Enums,
        Self::Strings,
        Self::StringArrays,
        Self::ByteArrays,
        Self::IntegerArrays,
        Self::ItemStacks,
        Self::ItemStackArrays,
        Self::WorldTypes,
        Self::DataWatchers,
        Self::PositionLists,
        Self::Nbt,
        Self::Maps,
        Self::PublicKeys,
    ];

    /// The field type this modifier reads and writes.
    pub fn input_type(self) -> DataType {
        match self {
            Self::Booleans => DataType::Primitive(PrimitiveType::Boolean),
            Self::Bytes => DataType::Primitive(PrimitiveType::Byte),
            Self::Shorts => DataType::Primitive(PrimitiveType::Short),
            Self::Integers => DataType::Primitive(PrimitiveType::Int),
            Self::Longs => DataType::Primitive(PrimitiveType::Long),
            Self::Floats => DataType::Primitive(PrimitiveType::Float),
            Self::Doubles => DataType::Primitive(PrimitiveType::Double),
            Self::Enums => DataType::class("java.lang.Enum"),
            Self::Strings => DataType::class("java.lang.String"),
            Self::StringArrays => DataType::array_of(DataType::class("java.lang.String")),
            Self::ByteArrays => DataType::array_of(DataType::Primitive(PrimitiveType::Byte)),
            Self::IntegerArrays => DataType::array_of(DataType::Primitive(PrimitiveType::Int)),
            Self::ItemStacks => DataType::class("net.minecraft.server.ItemStack"),
            Self::ItemStackArrays => DataType::array_of(DataType::class("net.minecraft.server.ItemStack")),
            Self::WorldTypes => DataType::class("net.minecraft.server.WorldType"),
            Self::DataWatchers => DataType::class("net.minecraft.server.DataWatcher"),
            Self::PositionLists => DataType::class("java.util.List"),
            Self::Nbt => DataType::class("net.minecraft.server.NBTTagCompound"),
            Self::Maps => DataType::class("java.util.Map"),
            Self::PublicKeys => DataType::class("java.security.PublicKey"),
        }
    }

    /// Source spelling of the type the accessor hands back.
    pub fn output_type(self) -> &'static str {
        match self {
            Self::Booleans => "boolean",
            Self::Bytes => "byte",
            Self::Shorts => "short",
            Self::Integers => "int",
            Self::Longs => "long",
            Self::Floats => "float",
            Self::Doubles => "double",
            Self::Enums => "Enum<?>",
            Self::Strings => "String",
            Self::StringArrays => "String[]",
            Self::ByteArrays => "byte[]",
            Self::IntegerArrays => "int[]",
            Self::ItemStacks => "ItemStack",
            Self::ItemStackArrays => "ItemStack[]",
            Self::WorldTypes => "WorldType",
            Self::DataWatchers => "WrappedDataWatcher",
            Self::PositionLists => "List<ChunkPosition>",
            Self::Nbt => "NbtBase<?>",
            Self::Maps => "Map<?,?>",
            Self::PublicKeys => "PublicKey",
        }
    }

    /// The call on the container that yields this modifier, e.g. `getIntegers()`.
    pub fn accessor(self) -> &'static str {
        match self {
            Self::Booleans => "getSpecificModifier(boolean.class)",
            Self::Bytes => "getBytes()",
            Self::Shorts => "getShorts()",
            Self::Integers => "getIntegers()",
            Self::Longs => "getLongs()",
            Self::Floats => "getFloat()",
            Self::Doubles => "getDoubles()",
            Self::Enums => "getSpecificModifier(Enum.class)",
            Self::Strings => "getStrings()",
            Self::StringArrays => "getStringArrays()",
            Self::ByteArrays => "getByteArrays()",
            Self::IntegerArrays => "getIntegerArrays()",
            Self::ItemStacks => "getItemModifier()",
            Self::ItemStackArrays => "getItemArrayModifier()",
            Self::WorldTypes => "getWorldTypeModifier()",
            Self::DataWatchers => "getDataWatcherModifier()",
            Self::PositionLists => "getPositionCollectionModifier()",
            Self::Nbt => "getNbtModifier()",
            Self::Maps => "getSpecificModifier(Map.class)",
            Self::PublicKeys => "getSpecificModifier(PublicKey.class)",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.accessor(), self.output_type())
    }
}
