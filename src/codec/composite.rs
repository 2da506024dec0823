//! Composite codecs - capped list, nullable, fixed string, structure

use crate::codec::primitive::{decode_primitive, encode_primitive};
use crate::core::errors::{Result, ZkFixedError};
use crate::core::value::Value;
use crate::descriptor::{StructuralType, DEFAULT_CHAR};
use crate::scheme::{Scheme, UnitReader};

fn write_u32_prefix<S: Scheme>(out: &mut Vec<S::Unit>, count: usize) {
    for byte in (count as u32).to_be_bytes() {
        S::write_byte(out, byte);
    }
}

/// Encodes a value against its declared shape.
///
/// `length_prefixed` selects the human-facing dump variant: every capped
/// list and string is preceded by a 4-byte big-endian actual-length count.
/// The prefix is informational only and never read back by [`decode_node`].
pub(crate) fn encode_node<S: Scheme>(
    shape: &StructuralType,
    value: &Value,
    out: &mut Vec<S::Unit>,
    length_prefixed: bool,
) -> Result<()> {
    match (shape, value) {
        (StructuralType::Primitive(kind), value) => encode_primitive::<S>(*kind, value, out),
        (StructuralType::String { capacity, encoding }, Value::String(s)) => {
            let chars: Vec<char> = s.chars().collect();
            if chars.len() > *capacity {
                return Err(ZkFixedError::LengthExceeded {
                    subject: format!("string \"{}\"", s),
                    unit: "character",
                    actual: chars.len(),
                    capacity: *capacity,
                });
            }
            // A value ending in the pad character would decode to a shorter
            // string; reject it here rather than corrupt it.
            if chars.last() == Some(&DEFAULT_CHAR) {
                return Err(ZkFixedError::TrailingPad {
                    subject: format!("string \"{}\"", s),
                    pad: DEFAULT_CHAR,
                });
            }
            if length_prefixed {
                write_u32_prefix::<S>(out, chars.len());
            }
            let kind = encoding.char_kind();
            for ch in &chars {
                encode_primitive::<S>(kind, &Value::Char(*ch), out)?;
            }
            for _ in chars.len()..*capacity {
                encode_primitive::<S>(kind, &Value::Char(DEFAULT_CHAR), out)?;
            }
            Ok(())
        }
        (StructuralType::List { capacity, element }, Value::List(elements)) => {
            if elements.len() > *capacity {
                return Err(ZkFixedError::LengthExceeded {
                    subject: format!("list of {} element(s)", elements.len()),
                    unit: "element",
                    actual: elements.len(),
                    capacity: *capacity,
                });
            }
            if length_prefixed {
                write_u32_prefix::<S>(out, elements.len());
            }
            for item in elements {
                encode_node::<S>(element, item, out, length_prefixed)?;
            }
            // Unused slots are filled with the element default so output
            // size never depends on the actual element count.
            let padding = element.default_value();
            for _ in elements.len()..*capacity {
                encode_node::<S>(element, &padding, out, length_prefixed)?;
            }
            Ok(())
        }
        (StructuralType::Nullable(inner), Value::Nullable(payload)) => {
            S::write_byte(out, u8::from(payload.is_some()));
            match payload {
                Some(value) => encode_node::<S>(inner, value, out, length_prefixed),
                // The payload slot is emitted even when absent.
                None => encode_node::<S>(inner, &inner.default_value(), out, length_prefixed),
            }
        }
        (StructuralType::Enum { name, variants }, Value::Enum(variant)) => {
            let ordinal = variants
                .iter()
                .position(|candidate| candidate == variant)
                .ok_or_else(|| ZkFixedError::UnknownVariant {
                    enum_name: name.clone(),
                    variant: variant.clone(),
                })?;
            for byte in (ordinal as u32).to_be_bytes() {
                S::write_byte(out, byte);
            }
            Ok(())
        }
        (StructuralType::Struct { name, fields }, Value::Struct(values)) => {
            if fields.len() != values.len() {
                return Err(ZkFixedError::Configuration {
                    reason: format!(
                        "struct {} declares {} field(s) but the value holds {}",
                        name,
                        fields.len(),
                        values.len()
                    ),
                });
            }
            for ((field_name, field_type), (value_name, field_value)) in
                fields.iter().zip(values.iter())
            {
                if field_name != value_name {
                    return Err(ZkFixedError::Configuration {
                        reason: format!(
                            "struct {} declares field `{}` where the value holds `{}`",
                            name, field_name, value_name
                        ),
                    });
                }
                encode_node::<S>(field_type, field_value, out, length_prefixed)?;
            }
            Ok(())
        }
        (shape, value) => Err(ZkFixedError::TypeMismatch {
            expected: shape.kind_name(),
            found: value.kind_name(),
        }),
    }
}

/// Decodes a value of the declared shape, consuming exactly its fixed width.
pub(crate) fn decode_node<S: Scheme>(
    shape: &StructuralType,
    reader: &mut UnitReader<'_, S>,
) -> Result<Value> {
    match shape {
        StructuralType::Primitive(kind) => decode_primitive::<S>(*kind, reader),
        StructuralType::String { capacity, encoding } => {
            let kind = encoding.char_kind();
            let mut chars = String::with_capacity(*capacity);
            for _ in 0..*capacity {
                match decode_primitive::<S>(kind, reader)? {
                    Value::Char(ch) => chars.push(ch),
                    // decode_primitive only returns Char for char kinds
                    other => {
                        return Err(ZkFixedError::TypeMismatch {
                            expected: "char",
                            found: other.kind_name(),
                        })
                    }
                }
            }
            // Trailing pad characters are stripped. Encode rejects values
            // that end in the pad character, so the trim is exact and
            // decode(encode(v)) == v holds for every encodable string.
            let trimmed = chars.trim_end_matches(DEFAULT_CHAR);
            Ok(Value::String(trimmed.to_string()))
        }
        StructuralType::List { capacity, element } => {
            // Always reconstructs exactly `capacity` elements; callers who
            // need the real length track it separately.
            let mut elements = Vec::with_capacity(*capacity);
            for _ in 0..*capacity {
                elements.push(decode_node::<S>(element, reader)?);
            }
            Ok(Value::List(elements))
        }
        StructuralType::Nullable(inner) => {
            let flag = reader.read_byte()?;
            if flag == 0 {
                // Absent: consume the payload slot without interpreting it,
                // so arbitrary slot content never fails a null decode.
                for _ in 0..inner.byte_size()? {
                    reader.read_byte()?;
                }
                Ok(Value::Nullable(None))
            } else {
                let payload = decode_node::<S>(inner, reader)?;
                Ok(Value::Nullable(Some(Box::new(payload))))
            }
        }
        StructuralType::Enum { name, variants } => {
            let ordinal = u32::from_be_bytes(reader.read_array::<4>()?);
            match variants.get(ordinal as usize) {
                Some(variant) => Ok(Value::Enum(variant.clone())),
                None => Err(ZkFixedError::Deserialization {
                    reason: format!(
                        "ordinal {} is out of range for enum {} ({} variant(s))",
                        ordinal,
                        name,
                        variants.len()
                    ),
                }),
            }
        }
        StructuralType::Struct { fields, .. } => {
            let mut values = Vec::with_capacity(fields.len());
            for (field_name, field_type) in fields {
                values.push((field_name.clone(), decode_node::<S>(field_type, reader)?));
            }
            Ok(Value::Struct(values))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PrimitiveKind;
    use crate::scheme::ByteScheme;

    fn encode(shape: &StructuralType, value: &Value) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        encode_node::<ByteScheme>(shape, value, &mut out, false)?;
        Ok(out)
    }

    fn decode(shape: &StructuralType, bytes: &[u8]) -> Value {
        let mut reader = UnitReader::<ByteScheme>::new(bytes);
        let value = decode_node::<ByteScheme>(shape, &mut reader).unwrap();
        reader.finish().unwrap();
        value
    }

    #[test]
    fn test_string_pads_to_capacity() {
        let shape = StructuralType::ascii_string(3);
        let bytes = encode(&shape, &Value::String("ab".into())).unwrap();
        assert_eq!(bytes, vec![97, 98, 45]);
        assert_eq!(decode(&shape, &bytes), Value::String("ab".into()));
    }

    #[test]
    fn test_string_capacity_violation() {
        let shape = StructuralType::ascii_string(2);
        let err = encode(&shape, &Value::String("abc".into())).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "string \"abc\" exceeds 2-character capacity (actual length 3)"
        );
    }

    #[test]
    fn test_string_trailing_pad_rejected() {
        let shape = StructuralType::ascii_string(3);
        let err = encode(&shape, &Value::String("a-".into())).unwrap_err();
        assert_eq!(
            err,
            ZkFixedError::TrailingPad {
                subject: "string \"a-\"".into(),
                pad: DEFAULT_CHAR,
            }
        );

        // An interior pad character is fine.
        let bytes = encode(&shape, &Value::String("a-b".into())).unwrap();
        assert_eq!(decode(&shape, &bytes), Value::String("a-b".into()));
    }

    #[test]
    fn test_list_pads_with_element_default() {
        let shape = StructuralType::list(5, StructuralType::Primitive(PrimitiveKind::I32));
        let value = Value::List(vec![Value::I32(1), Value::I32(2), Value::I32(3)]);
        let bytes = encode(&shape, &value).unwrap();
        assert_eq!(bytes.len(), 20);
        assert_eq!(&bytes[12..], &[0u8; 8]);

        // Decode always yields exactly n elements.
        let decoded = decode(&shape, &bytes);
        assert_eq!(
            decoded,
            Value::List(vec![
                Value::I32(1),
                Value::I32(2),
                Value::I32(3),
                Value::I32(0),
                Value::I32(0),
            ])
        );
    }

    #[test]
    fn test_nullable_always_emits_payload_slot() {
        let shape = StructuralType::nullable(StructuralType::Primitive(PrimitiveKind::I32));
        let absent = encode(&shape, &Value::Nullable(None)).unwrap();
        assert_eq!(absent, vec![0, 0, 0, 0, 0]);
        let present =
            encode(&shape, &Value::Nullable(Some(Box::new(Value::I32(42))))).unwrap();
        assert_eq!(present, vec![1, 0, 0, 0, 42]);
        assert_eq!(absent.len(), present.len());
    }

    #[test]
    fn test_nullable_absent_ignores_payload_content() {
        let shape = StructuralType::nullable(StructuralType::Primitive(PrimitiveKind::U16));
        // Flag says absent; payload bytes are garbage and must be discarded.
        let decoded = decode(&shape, &[0, 0xDE, 0xAD]);
        assert_eq!(decoded, Value::Nullable(None));

        // Even content invalid for the inner codec is skipped, not decoded.
        let shape = StructuralType::nullable(StructuralType::Primitive(PrimitiveKind::Bool));
        let decoded = decode(&shape, &[0, 7]);
        assert_eq!(decoded, Value::Nullable(None));
    }

    #[test]
    fn test_struct_concatenates_in_declared_order() {
        let shape = StructuralType::structure(
            "Pair",
            vec![
                ("hi", StructuralType::Primitive(PrimitiveKind::U8)),
                ("lo", StructuralType::Primitive(PrimitiveKind::U16)),
            ],
        );
        let value = Value::Struct(vec![
            ("hi".into(), Value::U8(0xAA)),
            ("lo".into(), Value::U16(0x0102)),
        ]);
        let bytes = encode(&shape, &value).unwrap();
        assert_eq!(bytes, vec![0xAA, 0x01, 0x02]);
        assert_eq!(decode(&shape, &bytes), value);
    }

    #[test]
    fn test_struct_field_name_mismatch() {
        let shape = StructuralType::structure(
            "S",
            vec![("a", StructuralType::Primitive(PrimitiveKind::U8))],
        );
        let value = Value::Struct(vec![("b".into(), Value::U8(0))]);
        let err = encode(&shape, &value).unwrap_err();
        assert!(format!("{}", err).contains("field `a`"));
    }

    #[test]
    fn test_enum_encodes_ordinal() {
        let shape = StructuralType::enumeration("Suit", vec!["Hearts", "Spades", "Clubs"]);
        let bytes = encode(&shape, &Value::Enum("Spades".into())).unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 1]);
        assert_eq!(decode(&shape, &bytes), Value::Enum("Spades".into()));
    }

    #[test]
    fn test_enum_unknown_variant() {
        let shape = StructuralType::enumeration("Suit", vec!["Hearts", "Spades"]);
        let err = encode(&shape, &Value::Enum("Diamonds".into())).unwrap_err();
        assert_eq!(
            err,
            ZkFixedError::UnknownVariant {
                enum_name: "Suit".into(),
                variant: "Diamonds".into(),
            }
        );
    }

    #[test]
    fn test_enum_decode_rejects_out_of_range_ordinal() {
        let shape = StructuralType::enumeration("Suit", vec!["Hearts", "Spades"]);
        let mut reader = UnitReader::<ByteScheme>::new(&[0, 0, 0, 9]);
        let err = decode_node::<ByteScheme>(&shape, &mut reader).unwrap_err();
        assert!(format!("{}", err).contains("ordinal 9"));
    }

    #[test]
    fn test_length_prefixed_dump() {
        let shape = StructuralType::ascii_string(3);
        let mut out = Vec::new();
        encode_node::<ByteScheme>(&shape, &Value::String("ab".into()), &mut out, true).unwrap();
        assert_eq!(out, vec![0, 0, 0, 2, 97, 98, 45]);
    }

    #[test]
    fn test_shape_mismatch() {
        let shape = StructuralType::list(2, StructuralType::Primitive(PrimitiveKind::U8));
        let err = encode(&shape, &Value::U8(1)).unwrap_err();
        assert_eq!(
            err,
            ZkFixedError::TypeMismatch {
                expected: "list",
                found: "u8"
            }
        );
    }
}
