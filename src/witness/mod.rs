//! Witness projection - JSON and bit representations for the circuit loader

use serde_json::{json, Map};

use crate::codec;
use crate::core::errors::{Result, ZkFixedError};
use crate::core::traits::FixedLength;
use crate::core::value::Value;
use crate::descriptor::{descriptor_of, FixedLengthDescriptor, PrimitiveKind, StructuralType};

/// Projects an encodable value into the JSON object shape the external
/// circuit-witness loader consumes: one key per struct field, numerals as
/// decimal strings, nullables as `{"is_null": bool, "inner": ...}`, lists
/// as arrays of exactly `n` elements.
///
/// Pure and stateless; the fixed-length invariants of the binary path are
/// untouched, only the output representation changes.
pub fn to_witness_json(
    descriptor: &FixedLengthDescriptor,
    value: &Value,
) -> Result<serde_json::Value> {
    project(descriptor.shape(), value)
}

pub fn to_witness_json_string(
    descriptor: &FixedLengthDescriptor,
    value: &Value,
) -> Result<String> {
    serde_json::to_string(&to_witness_json(descriptor, value)?).map_err(|e| {
        ZkFixedError::Deserialization {
            reason: format!("witness JSON rendering failed: {}", e),
        }
    })
}

/// Typed convenience over [`to_witness_json`].
pub fn witness_json_of<T: FixedLength + 'static>(value: &T) -> Result<serde_json::Value> {
    let descriptor = descriptor_of::<T>()?;
    to_witness_json(&descriptor, &value.to_value()?)
}

/// The bit-granularity witness, paired with the JSON form for loaders that
/// consume raw bit sequences.
pub fn to_witness_bits(
    descriptor: &FixedLengthDescriptor,
    value: &Value,
) -> Result<Vec<bool>> {
    codec::encode_bits(descriptor, value)
}

fn project_primitive(kind: PrimitiveKind, value: &Value) -> Result<serde_json::Value> {
    match (kind, value) {
        (PrimitiveKind::Bool, Value::Bool(b)) => Ok(json!(b)),
        (PrimitiveKind::I8, Value::I8(v)) => Ok(json!(v.to_string())),
        (PrimitiveKind::U8, Value::U8(v)) => Ok(json!(v.to_string())),
        (PrimitiveKind::I16, Value::I16(v)) => Ok(json!(v.to_string())),
        (PrimitiveKind::U16, Value::U16(v)) => Ok(json!(v.to_string())),
        (PrimitiveKind::I32, Value::I32(v)) => Ok(json!(v.to_string())),
        (PrimitiveKind::U32, Value::U32(v)) => Ok(json!(v.to_string())),
        (PrimitiveKind::I64, Value::I64(v)) => Ok(json!(v.to_string())),
        (PrimitiveKind::U64, Value::U64(v)) => Ok(json!(v.to_string())),
        (
            PrimitiveKind::AsciiChar | PrimitiveKind::Utf8Char | PrimitiveKind::UnicodeChar,
            Value::Char(c),
        ) => Ok(json!((*c as u32).to_string())),
        (kind, value) => Err(ZkFixedError::TypeMismatch {
            expected: kind.name(),
            found: value.kind_name(),
        }),
    }
}

fn project(shape: &StructuralType, value: &Value) -> Result<serde_json::Value> {
    match (shape, value) {
        (StructuralType::Primitive(kind), value) => project_primitive(*kind, value),
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
            let char_shape = StructuralType::Primitive(encoding.char_kind());
            let pad = char_shape.default_value();
            let mut out = Vec::with_capacity(*capacity);
            for ch in &chars {
                out.push(project(&char_shape, &Value::Char(*ch))?);
            }
            for _ in chars.len()..*capacity {
                out.push(project(&char_shape, &pad)?);
            }
            Ok(serde_json::Value::Array(out))
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
            let pad = element.default_value();
            let mut out = Vec::with_capacity(*capacity);
            for item in elements {
                out.push(project(element, item)?);
            }
            for _ in elements.len()..*capacity {
                out.push(project(element, &pad)?);
            }
            Ok(serde_json::Value::Array(out))
        }
        (StructuralType::Nullable(inner), Value::Nullable(payload)) => {
            let inner_json = match payload {
                Some(value) => project(inner, value)?,
                None => project(inner, &inner.default_value())?,
            };
            Ok(json!({
                "is_null": payload.is_none(),
                "inner": inner_json,
            }))
        }
        (StructuralType::Enum { name, variants }, Value::Enum(variant)) => {
            let ordinal = variants
                .iter()
                .position(|candidate| candidate == variant)
                .ok_or_else(|| ZkFixedError::UnknownVariant {
                    enum_name: name.clone(),
                    variant: variant.clone(),
                })?;
            Ok(json!(ordinal.to_string()))
        }
        (StructuralType::Struct { name, fields }, Value::Struct(values)) => {
            // Same shape checks as the binary encoder.
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
            let mut object = Map::with_capacity(fields.len());
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
                object.insert(field_name.clone(), project(field_type, field_value)?);
            }
            Ok(serde_json::Value::Object(object))
        }
        (shape, value) => Err(ZkFixedError::TypeMismatch {
            expected: shape.kind_name(),
            found: value.kind_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numerals_render_as_decimal_strings() {
        let descriptor = StructuralType::primitive(PrimitiveKind::I32)
            .resolve()
            .unwrap();
        let json = to_witness_json(&descriptor, &Value::I32(-42)).unwrap();
        assert_eq!(json, json!("-42"));
    }

    #[test]
    fn test_nullable_projection_shape() {
        let descriptor = StructuralType::nullable(StructuralType::primitive(PrimitiveKind::U8))
            .resolve()
            .unwrap();
        let none = to_witness_json(&descriptor, &Value::Nullable(None)).unwrap();
        assert_eq!(none, json!({"is_null": true, "inner": "0"}));

        let some =
            to_witness_json(&descriptor, &Value::Nullable(Some(Box::new(Value::U8(9)))))
                .unwrap();
        assert_eq!(some, json!({"is_null": false, "inner": "9"}));
    }

    #[test]
    fn test_list_projection_padded_to_capacity() {
        let descriptor = StructuralType::list(
            4,
            StructuralType::primitive(PrimitiveKind::U16),
        )
        .resolve()
        .unwrap();
        let json =
            to_witness_json(&descriptor, &Value::List(vec![Value::U16(1), Value::U16(2)]))
                .unwrap();
        assert_eq!(json, json!(["1", "2", "0", "0"]));
    }

    #[test]
    fn test_string_projection_uses_code_points() {
        let descriptor = StructuralType::ascii_string(3).resolve().unwrap();
        let json = to_witness_json(&descriptor, &Value::String("ab".into())).unwrap();
        // 'a' = 97, 'b' = 98, pad '-' = 45
        assert_eq!(json, json!(["97", "98", "45"]));
    }

    #[test]
    fn test_struct_projection_keeps_field_order() {
        let descriptor = StructuralType::structure(
            "Order",
            vec![
                ("zeta", StructuralType::primitive(PrimitiveKind::U8)),
                ("alpha", StructuralType::primitive(PrimitiveKind::U8)),
            ],
        )
        .resolve()
        .unwrap();
        let value = Value::Struct(vec![
            ("zeta".into(), Value::U8(1)),
            ("alpha".into(), Value::U8(2)),
        ]);
        let rendered = to_witness_json_string(&descriptor, &value).unwrap();
        assert_eq!(rendered, r#"{"zeta":"1","alpha":"2"}"#);
    }

    #[test]
    fn test_struct_projection_rejects_field_name_mismatch() {
        let descriptor = StructuralType::structure(
            "S",
            vec![("a", StructuralType::primitive(PrimitiveKind::U8))],
        )
        .resolve()
        .unwrap();
        let value = Value::Struct(vec![("b".into(), Value::U8(0))]);
        let err = to_witness_json(&descriptor, &value).unwrap_err();
        assert!(format!("{}", err).contains("field `a`"));
    }

    #[test]
    fn test_enum_projection_renders_ordinal() {
        let descriptor = StructuralType::enumeration("Suit", vec!["Hearts", "Spades"])
            .resolve()
            .unwrap();
        let json = to_witness_json(&descriptor, &Value::Enum("Spades".into())).unwrap();
        assert_eq!(json, json!("1"));
    }

    #[test]
    fn test_witness_bits_matches_bit_size() {
        let descriptor = StructuralType::primitive(PrimitiveKind::U32)
            .resolve()
            .unwrap();
        let bits = to_witness_bits(&descriptor, &Value::U32(1)).unwrap();
        assert_eq!(bits.len(), descriptor.bit_size());
    }

    #[test]
    fn test_typed_projection() {
        let json = witness_json_of(&Some(300u16)).unwrap();
        assert_eq!(json, json!({"is_null": false, "inner": "300"}));
    }
}
