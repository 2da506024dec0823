//! Descriptor model - attaches a static byte size to a structural type

mod cache;

pub use cache::descriptor_of;

use crate::core::errors::{Result, ZkFixedError};
use crate::core::value::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pad character emitted for unused character slots.
pub const DEFAULT_CHAR: char = '-';

/// Fixed-width primitive kinds. The byte width of each kind is a constant
/// of the wire format and never depends on the value being encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveKind {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    AsciiChar,
    Utf8Char,
    UnicodeChar,
}

impl PrimitiveKind {
    pub const fn byte_size(self) -> usize {
        match self {
            PrimitiveKind::Bool
            | PrimitiveKind::I8
            | PrimitiveKind::U8
            | PrimitiveKind::AsciiChar => 1,
            PrimitiveKind::I16
            | PrimitiveKind::U16
            | PrimitiveKind::Utf8Char
            | PrimitiveKind::UnicodeChar => 2,
            PrimitiveKind::I32 | PrimitiveKind::U32 => 4,
            PrimitiveKind::I64 | PrimitiveKind::U64 => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::I8 => "i8",
            PrimitiveKind::U8 => "u8",
            PrimitiveKind::I16 => "i16",
            PrimitiveKind::U16 => "u16",
            PrimitiveKind::I32 => "i32",
            PrimitiveKind::U32 => "u32",
            PrimitiveKind::I64 => "i64",
            PrimitiveKind::U64 => "u64",
            PrimitiveKind::AsciiChar => "ascii char",
            PrimitiveKind::Utf8Char => "utf8 char",
            PrimitiveKind::UnicodeChar => "unicode char",
        }
    }

    /// Default value used to pad unused capacity: `0`/`false` for numeric
    /// kinds, `'-'` for character kinds.
    pub fn default_value(self) -> Value {
        match self {
            PrimitiveKind::Bool => Value::Bool(false),
            PrimitiveKind::I8 => Value::I8(0),
            PrimitiveKind::U8 => Value::U8(0),
            PrimitiveKind::I16 => Value::I16(0),
            PrimitiveKind::U16 => Value::U16(0),
            PrimitiveKind::I32 => Value::I32(0),
            PrimitiveKind::U32 => Value::U32(0),
            PrimitiveKind::I64 => Value::I64(0),
            PrimitiveKind::U64 => Value::U64(0),
            PrimitiveKind::AsciiChar | PrimitiveKind::Utf8Char | PrimitiveKind::UnicodeChar => {
                Value::Char(DEFAULT_CHAR)
            }
        }
    }
}

/// Character encoding declared for a fixed-length string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CharEncoding {
    /// One byte per character; code points above 255 are rejected.
    Ascii,
    /// One 16-bit code unit per character; no surrogate pairs.
    Utf8,
    /// One 16-bit code point per character; no astral plane.
    Unicode,
}

impl CharEncoding {
    pub const fn char_kind(self) -> PrimitiveKind {
        match self {
            CharEncoding::Ascii => PrimitiveKind::AsciiChar,
            CharEncoding::Utf8 => PrimitiveKind::Utf8Char,
            CharEncoding::Unicode => PrimitiveKind::UnicodeChar,
        }
    }
}

/// Structural description of a serializable type: kind plus children.
///
/// Capacities are declared at construction; a capped list or string without
/// a capacity is unrepresentable. Field order inside [`StructuralType::Struct`]
/// is semantically significant - it fixes the serialized layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StructuralType {
    Primitive(PrimitiveKind),
    String {
        capacity: usize,
        encoding: CharEncoding,
    },
    List {
        capacity: usize,
        element: Box<StructuralType>,
    },
    Nullable(Box<StructuralType>),
    /// A closed set of named variants, encoded as a 4-byte ordinal.
    Enum {
        name: String,
        variants: Vec<String>,
    },
    Struct {
        name: String,
        fields: Vec<(String, StructuralType)>,
    },
}

impl StructuralType {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        StructuralType::Primitive(kind)
    }

    pub fn ascii_string(capacity: usize) -> Self {
        StructuralType::String {
            capacity,
            encoding: CharEncoding::Ascii,
        }
    }

    pub fn utf8_string(capacity: usize) -> Self {
        StructuralType::String {
            capacity,
            encoding: CharEncoding::Utf8,
        }
    }

    pub fn unicode_string(capacity: usize) -> Self {
        StructuralType::String {
            capacity,
            encoding: CharEncoding::Unicode,
        }
    }

    pub fn list(capacity: usize, element: StructuralType) -> Self {
        StructuralType::List {
            capacity,
            element: Box::new(element),
        }
    }

    pub fn nullable(inner: StructuralType) -> Self {
        StructuralType::Nullable(Box::new(inner))
    }

    pub fn enumeration<N, V>(name: N, variants: Vec<V>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        StructuralType::Enum {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    pub fn structure<N, F>(name: N, fields: Vec<(F, StructuralType)>) -> Self
    where
        N: Into<String>,
        F: Into<String>,
    {
        StructuralType::Struct {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(field_name, ty)| (field_name.into(), ty))
                .collect(),
        }
    }

    /// Computes the static byte size of this type.
    ///
    /// The size depends only on the declaration, never on runtime content.
    /// Overflowing `usize` is a configuration error reported here, before
    /// any data is processed.
    pub fn byte_size(&self) -> Result<usize> {
        match self {
            StructuralType::Primitive(kind) => Ok(kind.byte_size()),
            StructuralType::String { capacity, encoding } => capacity
                .checked_mul(encoding.char_kind().byte_size())
                .ok_or_else(|| overflow_error(self)),
            StructuralType::List { capacity, element } => element
                .byte_size()?
                .checked_mul(*capacity)
                .ok_or_else(|| overflow_error(self)),
            StructuralType::Nullable(inner) => inner
                .byte_size()?
                .checked_add(1)
                .ok_or_else(|| overflow_error(self)),
            StructuralType::Enum { name, variants } => {
                if variants.is_empty() {
                    return Err(ZkFixedError::Configuration {
                        reason: format!("enum {} declares no variants", name),
                    });
                }
                // Ordinal, encoded like a u32.
                Ok(PrimitiveKind::U32.byte_size())
            }
            StructuralType::Struct { fields, .. } => {
                let mut total = 0usize;
                for (_, field_type) in fields {
                    total = total
                        .checked_add(field_type.byte_size()?)
                        .ok_or_else(|| overflow_error(self))?;
                }
                Ok(total)
            }
        }
    }

    /// Attaches the computed byte size, producing a [`FixedLengthDescriptor`].
    ///
    /// Resolution is idempotent: resolving the same structural type twice
    /// yields equal descriptors.
    pub fn resolve(&self) -> Result<FixedLengthDescriptor> {
        Ok(FixedLengthDescriptor {
            byte_size: self.byte_size()?,
            shape: self.clone(),
        })
    }

    /// The padding value for this type: primitive defaults at the leaves,
    /// empty/absent composites above them.
    pub fn default_value(&self) -> Value {
        match self {
            StructuralType::Primitive(kind) => kind.default_value(),
            StructuralType::String { .. } => Value::String(String::new()),
            StructuralType::List { .. } => Value::List(Vec::new()),
            StructuralType::Nullable(_) => Value::Nullable(None),
            StructuralType::Enum { variants, .. } => {
                Value::Enum(variants.first().cloned().unwrap_or_default())
            }
            StructuralType::Struct { fields, .. } => Value::Struct(
                fields
                    .iter()
                    .map(|(name, ty)| (name.clone(), ty.default_value()))
                    .collect(),
            ),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            StructuralType::Primitive(kind) => kind.name(),
            StructuralType::String { .. } => "string",
            StructuralType::List { .. } => "list",
            StructuralType::Nullable(_) => "nullable",
            StructuralType::Enum { .. } => "enum",
            StructuralType::Struct { .. } => "struct",
        }
    }
}

fn overflow_error(ty: &StructuralType) -> ZkFixedError {
    ZkFixedError::Configuration {
        reason: format!("byte size of {} declaration overflows usize", ty.kind_name()),
    }
}

/// A structural type with its static byte size attached.
///
/// The size is identical for every value the type can hold; this is the
/// invariant the whole engine exists to uphold.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedLengthDescriptor {
    shape: StructuralType,
    byte_size: usize,
}

impl FixedLengthDescriptor {
    pub fn shape(&self) -> &StructuralType {
        &self.shape
    }

    /// Encoded length in bytes under the byte scheme.
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Encoded length in bits under the bit scheme (always 8x the byte size).
    pub fn bit_size(&self) -> usize {
        self.byte_size * 8
    }
}
