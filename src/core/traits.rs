//! Core trait: FixedLength - the typed front-end over the descriptor model

use crate::core::errors::{Result, ZkFixedError};
use crate::core::value::Value;
use crate::descriptor::{PrimitiveKind, StructuralType};

/// A type with a fixed-length wire shape.
///
/// `structural_type` declares the shape (and thus the static byte size);
/// `to_value`/`from_value` bridge into the dynamic tree the codec engine
/// walks. Implementations for user structs are written by hand or emitted
/// by an external code generator; they must keep field order stable, since
/// order fixes the serialized layout.
pub trait FixedLength {
    fn structural_type() -> StructuralType;

    fn to_value(&self) -> Result<Value>;

    fn from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

macro_rules! impl_fixed_length_int {
    ($($ty:ty => $kind:ident / $variant:ident),+ $(,)?) => {
        $(
            impl FixedLength for $ty {
                fn structural_type() -> StructuralType {
                    StructuralType::Primitive(PrimitiveKind::$kind)
                }

                fn to_value(&self) -> Result<Value> {
                    Ok(Value::$variant(*self))
                }

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(ZkFixedError::TypeMismatch {
                            expected: stringify!($ty),
                            found: other.kind_name(),
                        }),
                    }
                }
            }
        )+
    };
}

impl_fixed_length_int! {
    i8 => I8 / I8,
    u8 => U8 / U8,
    i16 => I16 / I16,
    u16 => U16 / U16,
    i32 => I32 / I32,
    u32 => U32 / U32,
    i64 => I64 / I64,
    u64 => U64 / U64,
}

impl FixedLength for bool {
    fn structural_type() -> StructuralType {
        StructuralType::Primitive(PrimitiveKind::Bool)
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(ZkFixedError::TypeMismatch {
                expected: "bool",
                found: other.kind_name(),
            }),
        }
    }
}

impl<T: FixedLength> FixedLength for Option<T> {
    fn structural_type() -> StructuralType {
        StructuralType::nullable(T::structural_type())
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::Nullable(match self {
            Some(inner) => Some(Box::new(inner.to_value()?)),
            None => None,
        }))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Nullable(inner) => inner.map(|boxed| T::from_value(*boxed)).transpose(),
            other => Err(ZkFixedError::TypeMismatch {
                expected: "nullable",
                found: other.kind_name(),
            }),
        }
    }
}
