//! Encode/decode engine over the two representation schemes

mod composite;
mod primitive;

use crate::core::errors::{Result, ZkFixedError};
use crate::core::traits::FixedLength;
use crate::core::value::Value;
use crate::descriptor::{descriptor_of, FixedLengthDescriptor};
use crate::scheme::{BitScheme, ByteScheme, Scheme, UnitReader};

pub(crate) use composite::{decode_node, encode_node};

fn encode_units<S: Scheme>(
    descriptor: &FixedLengthDescriptor,
    value: &Value,
) -> Result<Vec<S::Unit>> {
    let mut out = Vec::with_capacity(descriptor.byte_size() * S::UNITS_PER_BYTE);
    encode_node::<S>(descriptor.shape(), value, &mut out, false)?;
    debug_assert_eq!(out.len(), descriptor.byte_size() * S::UNITS_PER_BYTE);
    Ok(out)
}

fn decode_units<S: Scheme>(
    descriptor: &FixedLengthDescriptor,
    units: &[S::Unit],
) -> Result<Value> {
    let expected = descriptor.byte_size() * S::UNITS_PER_BYTE;
    if units.len() != expected {
        return Err(ZkFixedError::Deserialization {
            reason: format!(
                "expected exactly {} {} unit(s), got {}",
                expected,
                S::NAME,
                units.len()
            ),
        });
    }
    let mut reader = UnitReader::<S>::new(units);
    let value = decode_node::<S>(descriptor.shape(), &mut reader)?;
    reader.finish()?;
    Ok(value)
}

/// Encodes a value to exactly `descriptor.byte_size()` bytes.
pub fn encode_bytes(descriptor: &FixedLengthDescriptor, value: &Value) -> Result<Vec<u8>> {
    encode_units::<ByteScheme>(descriptor, value)
}

/// Decodes a byte sequence of exactly `descriptor.byte_size()` bytes.
pub fn decode_bytes(descriptor: &FixedLengthDescriptor, bytes: &[u8]) -> Result<Value> {
    decode_units::<ByteScheme>(descriptor, bytes)
}

/// Encodes a value to exactly `descriptor.bit_size()` bits, MSB first.
pub fn encode_bits(descriptor: &FixedLengthDescriptor, value: &Value) -> Result<Vec<bool>> {
    encode_units::<BitScheme>(descriptor, value)
}

/// Decodes a bit sequence of exactly `descriptor.bit_size()` bits.
pub fn decode_bits(descriptor: &FixedLengthDescriptor, bits: &[bool]) -> Result<Value> {
    decode_units::<BitScheme>(descriptor, bits)
}

/// Human-facing byte dump: like [`encode_bytes`], but every capped list and
/// string is preceded by a 4-byte big-endian actual-length count. The
/// prefix is informational only; there is no decode counterpart.
pub fn encode_bytes_with_length(
    descriptor: &FixedLengthDescriptor,
    value: &Value,
) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(descriptor.byte_size());
    encode_node::<ByteScheme>(descriptor.shape(), value, &mut out, true)?;
    Ok(out)
}

/// Encodes a typed value through its cached descriptor.
pub fn to_bytes<T: FixedLength + 'static>(value: &T) -> Result<Vec<u8>> {
    let descriptor = descriptor_of::<T>()?;
    encode_bytes(&descriptor, &value.to_value()?)
}

/// Decodes a typed value; exact inverse of [`to_bytes`].
pub fn from_bytes<T: FixedLength + 'static>(bytes: &[u8]) -> Result<T> {
    let descriptor = descriptor_of::<T>()?;
    T::from_value(decode_bytes(&descriptor, bytes)?)
}

pub fn to_bits<T: FixedLength + 'static>(value: &T) -> Result<Vec<bool>> {
    let descriptor = descriptor_of::<T>()?;
    encode_bits(&descriptor, &value.to_value()?)
}

pub fn from_bits<T: FixedLength + 'static>(bits: &[bool]) -> Result<T> {
    let descriptor = descriptor_of::<T>()?;
    T::from_value(decode_bits(&descriptor, bits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FixedString;
    use crate::descriptor::{PrimitiveKind, StructuralType};

    #[test]
    fn test_decode_bytes_length_check() {
        let descriptor = StructuralType::primitive(PrimitiveKind::U32)
            .resolve()
            .unwrap();
        let err = decode_bytes(&descriptor, &[0, 0, 0]).unwrap_err();
        assert!(matches!(err, ZkFixedError::Deserialization { .. }));
    }

    #[test]
    fn test_typed_round_trip() {
        let bytes = to_bytes(&0x0102_0304u32).unwrap();
        assert_eq!(bytes, vec![1, 2, 3, 4]);
        assert_eq!(from_bytes::<u32>(&bytes).unwrap(), 0x0102_0304);
    }

    #[test]
    fn test_typed_bit_round_trip() {
        let value = Some(FixedString::<4>::new("ok").unwrap());
        let bits = to_bits(&value).unwrap();
        assert_eq!(bits.len(), 8 * (1 + 4));
        assert_eq!(
            from_bits::<Option<FixedString<4>>>(&bits).unwrap(),
            value
        );
    }

    #[test]
    fn test_bit_and_byte_outputs_agree() {
        let descriptor = StructuralType::list(
            3,
            StructuralType::primitive(PrimitiveKind::U16),
        )
        .resolve()
        .unwrap();
        let value = Value::List(vec![Value::U16(7), Value::U16(65535)]);

        let bytes = encode_bytes(&descriptor, &value).unwrap();
        let bits = encode_bits(&descriptor, &value).unwrap();
        assert_eq!(bits.len(), bytes.len() * 8);
        assert_eq!(
            decode_bits(&descriptor, &bits).unwrap(),
            decode_bytes(&descriptor, &bytes).unwrap()
        );
    }
}
