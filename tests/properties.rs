//! Property-based tests for zkfixed using proptest
//!
//! Verifies the serialization laws hold for random inputs:
//! - Round trip: decode(encode(v)) == v
//! - Fixed length: output width depends on the type, never the value
//! - Capacity: boundary succeeds, overflow fails
//! - Scheme equivalence: bit output is 8x byte output, same decoded value

use proptest::prelude::*;
use zkfixed::{
    decode_bits, decode_bytes, encode_bits, encode_bytes, from_bytes, to_bytes, FixedString,
    PrimitiveKind, StructuralType, Value,
};

// Strings that cannot end in the pad character, which pure fixed-length
// decoding cannot represent.
fn ascii_content() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,8}".prop_map(|s| s.trim_end().to_string())
}

// ============================================================
// 1. Round-trip law
// ============================================================
proptest! {
    #[test]
    fn prop_round_trip_u64(v in any::<u64>()) {
        let bytes = to_bytes(&v).unwrap();
        prop_assert_eq!(from_bytes::<u64>(&bytes).unwrap(), v);
    }

    #[test]
    fn prop_round_trip_i32(v in any::<i32>()) {
        let bytes = to_bytes(&v).unwrap();
        prop_assert_eq!(from_bytes::<i32>(&bytes).unwrap(), v);
    }

    #[test]
    fn prop_round_trip_string(s in ascii_content()) {
        let value = FixedString::<8>::new(s).unwrap();
        let bytes = to_bytes(&value).unwrap();
        prop_assert_eq!(from_bytes::<FixedString<8>>(&bytes).unwrap(), value);
    }

    #[test]
    fn prop_round_trip_nullable(v in any::<Option<u32>>()) {
        let bytes = to_bytes(&v).unwrap();
        prop_assert_eq!(from_bytes::<Option<u32>>(&bytes).unwrap(), v);
    }
}

// ============================================================
// 2. Fixed-length invariant
// ============================================================
proptest! {
    #[test]
    fn prop_fixed_length_strings(a in ascii_content(), b in ascii_content()) {
        let descriptor = StructuralType::ascii_string(8).resolve().unwrap();
        let enc_a = encode_bytes(&descriptor, &Value::String(a)).unwrap();
        let enc_b = encode_bytes(&descriptor, &Value::String(b)).unwrap();
        prop_assert_eq!(enc_a.len(), enc_b.len());
        prop_assert_eq!(enc_a.len(), descriptor.byte_size());
    }

    #[test]
    fn prop_fixed_length_lists(items in prop::collection::vec(any::<u16>(), 0..=6)) {
        let descriptor = StructuralType::list(
            6,
            StructuralType::primitive(PrimitiveKind::U16),
        )
        .resolve()
        .unwrap();
        let value = Value::List(items.into_iter().map(Value::U16).collect());
        let bytes = encode_bytes(&descriptor, &value).unwrap();
        prop_assert_eq!(bytes.len(), 12);
    }

    #[test]
    fn prop_fixed_length_nullable(v in any::<Option<u64>>()) {
        let bytes = to_bytes(&v).unwrap();
        prop_assert_eq!(bytes.len(), 9);
    }
}

// ============================================================
// 3. Capacity violations
// ============================================================
proptest! {
    #[test]
    fn prop_overflowing_string_fails(len in 9usize..32) {
        let descriptor = StructuralType::ascii_string(8).resolve().unwrap();
        let s = "x".repeat(len);
        let err = encode_bytes(&descriptor, &Value::String(s)).unwrap_err();
        let msg = format!("{}", err);
        prop_assert!(msg.contains("exceeds 8-character capacity"));
    }

    #[test]
    fn prop_overflowing_list_fails(extra in 1usize..8) {
        let descriptor = StructuralType::list(
            4,
            StructuralType::primitive(PrimitiveKind::U8),
        )
        .resolve()
        .unwrap();
        let value = Value::List(vec![Value::U8(0); 4 + extra]);
        let err = encode_bytes(&descriptor, &value).unwrap_err();
        let msg = format!("{}", err);
        prop_assert!(msg.contains("capacity"));
    }
}

#[test]
fn test_boundary_list_succeeds() {
    let descriptor = StructuralType::list(4, StructuralType::primitive(PrimitiveKind::U8))
        .resolve()
        .unwrap();
    let value = Value::List(vec![Value::U8(9); 4]);
    assert_eq!(encode_bytes(&descriptor, &value).unwrap(), vec![9, 9, 9, 9]);
}

// ============================================================
// 4. Bit/byte scheme equivalence
// ============================================================
proptest! {
    #[test]
    fn prop_bit_scheme_is_eight_times_byte_scheme(
        amount in any::<u64>(),
        memo in ascii_content(),
        tag in any::<Option<u8>>(),
    ) {
        let descriptor = StructuralType::structure(
            "Record",
            vec![
                ("amount", StructuralType::primitive(PrimitiveKind::U64)),
                ("memo", StructuralType::ascii_string(8)),
                (
                    "tag",
                    StructuralType::nullable(StructuralType::primitive(PrimitiveKind::U8)),
                ),
            ],
        )
        .resolve()
        .unwrap();
        let value = Value::Struct(vec![
            ("amount".into(), Value::U64(amount)),
            ("memo".into(), Value::String(memo)),
            (
                "tag".into(),
                Value::Nullable(tag.map(|t| Box::new(Value::U8(t)))),
            ),
        ]);

        let bytes = encode_bytes(&descriptor, &value).unwrap();
        let bits = encode_bits(&descriptor, &value).unwrap();
        prop_assert_eq!(bits.len(), 8 * bytes.len());
        prop_assert_eq!(
            decode_bits(&descriptor, &bits).unwrap(),
            decode_bytes(&descriptor, &bytes).unwrap()
        );
    }
}

// ============================================================
// 5. Nullable padding
// ============================================================
proptest! {
    #[test]
    fn prop_null_decode_ignores_payload(payload in any::<[u8; 4]>()) {
        let descriptor = StructuralType::nullable(
            StructuralType::primitive(PrimitiveKind::U32),
        )
        .resolve()
        .unwrap();
        let mut bytes = vec![0u8];
        bytes.extend_from_slice(&payload);
        prop_assert_eq!(
            decode_bytes(&descriptor, &bytes).unwrap(),
            Value::Nullable(None)
        );
    }

    #[test]
    fn prop_null_decode_ignores_invalid_payload(payload in 2u8..) {
        // Content the inner bool codec would reject is still skipped.
        let descriptor = StructuralType::nullable(
            StructuralType::primitive(PrimitiveKind::Bool),
        )
        .resolve()
        .unwrap();
        prop_assert_eq!(
            decode_bytes(&descriptor, &[0, payload]).unwrap(),
            Value::Nullable(None)
        );
    }
}
