//! Primitive codecs - fixed-width, big-endian, scheme-generic

use crate::core::errors::{Result, ZkFixedError};
use crate::core::value::Value;
use crate::descriptor::PrimitiveKind;
use crate::scheme::{Scheme, UnitReader};

fn write_bytes<S: Scheme>(out: &mut Vec<S::Unit>, bytes: &[u8]) {
    for byte in bytes {
        S::write_byte(out, *byte);
    }
}

fn encoding_name(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::AsciiChar => "ASCII",
        PrimitiveKind::Utf8Char => "UTF-8",
        _ => "Unicode",
    }
}

/// Encodes one primitive value as its fixed-width big-endian pattern.
pub(crate) fn encode_primitive<S: Scheme>(
    kind: PrimitiveKind,
    value: &Value,
    out: &mut Vec<S::Unit>,
) -> Result<()> {
    match (kind, value) {
        (PrimitiveKind::Bool, Value::Bool(v)) => S::write_byte(out, u8::from(*v)),
        (PrimitiveKind::I8, Value::I8(v)) => write_bytes::<S>(out, &v.to_be_bytes()),
        (PrimitiveKind::U8, Value::U8(v)) => write_bytes::<S>(out, &v.to_be_bytes()),
        (PrimitiveKind::I16, Value::I16(v)) => write_bytes::<S>(out, &v.to_be_bytes()),
        (PrimitiveKind::U16, Value::U16(v)) => write_bytes::<S>(out, &v.to_be_bytes()),
        (PrimitiveKind::I32, Value::I32(v)) => write_bytes::<S>(out, &v.to_be_bytes()),
        (PrimitiveKind::U32, Value::U32(v)) => write_bytes::<S>(out, &v.to_be_bytes()),
        (PrimitiveKind::I64, Value::I64(v)) => write_bytes::<S>(out, &v.to_be_bytes()),
        (PrimitiveKind::U64, Value::U64(v)) => write_bytes::<S>(out, &v.to_be_bytes()),
        (PrimitiveKind::AsciiChar, Value::Char(c)) => {
            let code = *c as u32;
            if code > 0xFF {
                return Err(ZkFixedError::CharOutOfRange {
                    ch: *c,
                    encoding: encoding_name(kind),
                });
            }
            S::write_byte(out, code as u8);
        }
        (PrimitiveKind::Utf8Char | PrimitiveKind::UnicodeChar, Value::Char(c)) => {
            // One 16-bit code unit per character; no surrogate pairs.
            let code = *c as u32;
            if code > 0xFFFF {
                return Err(ZkFixedError::CharOutOfRange {
                    ch: *c,
                    encoding: encoding_name(kind),
                });
            }
            write_bytes::<S>(out, &(code as u16).to_be_bytes());
        }
        (kind, value) => {
            return Err(ZkFixedError::TypeMismatch {
                expected: kind.name(),
                found: value.kind_name(),
            })
        }
    }
    Ok(())
}

/// Decodes one primitive value; exact inverse of [`encode_primitive`].
pub(crate) fn decode_primitive<S: Scheme>(
    kind: PrimitiveKind,
    reader: &mut UnitReader<'_, S>,
) -> Result<Value> {
    let value = match kind {
        PrimitiveKind::Bool => match reader.read_byte()? {
            0 => Value::Bool(false),
            1 => Value::Bool(true),
            other => {
                return Err(ZkFixedError::Deserialization {
                    reason: format!("invalid boolean byte {:#04x}", other),
                })
            }
        },
        PrimitiveKind::I8 => Value::I8(i8::from_be_bytes(reader.read_array()?)),
        PrimitiveKind::U8 => Value::U8(u8::from_be_bytes(reader.read_array()?)),
        PrimitiveKind::I16 => Value::I16(i16::from_be_bytes(reader.read_array()?)),
        PrimitiveKind::U16 => Value::U16(u16::from_be_bytes(reader.read_array()?)),
        PrimitiveKind::I32 => Value::I32(i32::from_be_bytes(reader.read_array()?)),
        PrimitiveKind::U32 => Value::U32(u32::from_be_bytes(reader.read_array()?)),
        PrimitiveKind::I64 => Value::I64(i64::from_be_bytes(reader.read_array()?)),
        PrimitiveKind::U64 => Value::U64(u64::from_be_bytes(reader.read_array()?)),
        PrimitiveKind::AsciiChar => Value::Char(char::from(reader.read_byte()?)),
        PrimitiveKind::Utf8Char | PrimitiveKind::UnicodeChar => {
            let code = u16::from_be_bytes(reader.read_array()?);
            let ch = char::from_u32(u32::from(code)).ok_or_else(|| {
                ZkFixedError::Deserialization {
                    reason: format!("code unit {:#06x} is not a valid character", code),
                }
            })?;
            Value::Char(ch)
        }
    };
    Ok(value)
}
