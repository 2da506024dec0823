//! Capacity-carrying wrapper types: FixedString, FixedList

use core::fmt;

use crate::core::errors::{Result, ZkFixedError};
use crate::core::traits::FixedLength;
use crate::core::value::Value;
use crate::descriptor::{StructuralType, DEFAULT_CHAR};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ASCII string with a type-level capacity of `N` characters.
///
/// The capacity is part of the type, so the wire width (`N` bytes) is known
/// statically. Construction validates length, character range and the
/// trailing-pad restriction up front, the same violations the encoder would
/// otherwise report.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedString<const N: usize>(String);

impl<const N: usize> FixedString<N> {
    pub fn new(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        let char_count = s.chars().count();
        if char_count > N {
            return Err(ZkFixedError::LengthExceeded {
                subject: format!("string \"{}\"", s),
                unit: "character",
                actual: char_count,
                capacity: N,
            });
        }
        if let Some(ch) = s.chars().find(|c| (*c as u32) > 0xFF) {
            return Err(ZkFixedError::CharOutOfRange {
                ch,
                encoding: "ASCII",
            });
        }
        // Decoding strips trailing pad characters, so a value ending in
        // one cannot round-trip.
        if s.ends_with(DEFAULT_CHAR) {
            return Err(ZkFixedError::TrailingPad {
                subject: format!("string \"{}\"", s),
                pad: DEFAULT_CHAR,
            });
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const N: usize> FixedLength for FixedString<N> {
    fn structural_type() -> StructuralType {
        StructuralType::ascii_string(N)
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(self.0.clone()))
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::new(s),
            other => Err(ZkFixedError::TypeMismatch {
                expected: "string",
                found: other.kind_name(),
            }),
        }
    }
}

/// A list with a type-level capacity of `N` elements.
///
/// Holds up to `N` values; the encoder pads the remaining slots with the
/// element type's default. Decoding always yields exactly `N` elements -
/// callers tracking a "real" length do so out of band.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixedList<T, const N: usize>(Vec<T>);

impl<T, const N: usize> FixedList<T, N> {
    pub fn new(elements: Vec<T>) -> Result<Self> {
        if elements.len() > N {
            return Err(ZkFixedError::LengthExceeded {
                subject: "list".into(),
                unit: "element",
                actual: elements.len(),
                capacity: N,
            });
        }
        Ok(Self(elements))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T: FixedLength, const N: usize> FixedLength for FixedList<T, N> {
    fn structural_type() -> StructuralType {
        StructuralType::list(N, T::structural_type())
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::List(
            self.0
                .iter()
                .map(FixedLength::to_value)
                .collect::<Result<Vec<_>>>()?,
        ))
    }

    fn from_value(value: Value) -> Result<Self> {
        let elements = value
            .into_list()?
            .into_iter()
            .map(T::from_value)
            .collect::<Result<Vec<_>>>()?;
        Self::new(elements)
    }
}
