//! Value - dynamic value tree the encode/decode engine walks

use crate::core::errors::{Result, ZkFixedError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A runtime value mirroring a [`StructuralType`](crate::StructuralType).
///
/// Encoding walks a descriptor and a `Value` in lockstep; a shape
/// disagreement between the two is a [`ZkFixedError::TypeMismatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Char(char),
    String(String),
    /// An enum variant, referenced by declared name.
    Enum(String),
    List(Vec<Value>),
    Nullable(Option<Box<Value>>),
    Struct(Vec<(String, Value)>),
}

impl Value {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::I8(_) => "i8",
            Value::U8(_) => "u8",
            Value::I16(_) => "i16",
            Value::U16(_) => "u16",
            Value::I32(_) => "i32",
            Value::U32(_) => "u32",
            Value::I64(_) => "i64",
            Value::U64(_) => "u64",
            Value::Char(_) => "char",
            Value::String(_) => "string",
            Value::Enum(_) => "enum",
            Value::List(_) => "list",
            Value::Nullable(_) => "nullable",
            Value::Struct(_) => "struct",
        }
    }

    /// Consumes a struct value and returns its ordered fields.
    pub fn into_struct(self) -> Result<Vec<(String, Value)>> {
        match self {
            Value::Struct(fields) => Ok(fields),
            other => Err(ZkFixedError::TypeMismatch {
                expected: "struct",
                found: other.kind_name(),
            }),
        }
    }

    /// Consumes a list value and returns its elements.
    pub fn into_list(self) -> Result<Vec<Value>> {
        match self {
            Value::List(elements) => Ok(elements),
            other => Err(ZkFixedError::TypeMismatch {
                expected: "list",
                found: other.kind_name(),
            }),
        }
    }
}
