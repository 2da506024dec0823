//! Fuzz target for byte-scheme decoding
//! Tests: decode_bytes() with arbitrary byte sequences
//! Goal: Ensure no panics, only Ok or Err

#![no_main]

use libfuzzer_sys::fuzz_target;
use zkfixed::{decode_bytes, PrimitiveKind, StructuralType};

fuzz_target!(|data: &[u8]| {
    let descriptor = StructuralType::structure(
        "Fuzzed",
        vec![
            ("id", StructuralType::primitive(PrimitiveKind::U64)),
            ("flag", StructuralType::primitive(PrimitiveKind::Bool)),
            ("memo", StructuralType::ascii_string(8)),
            (
                "items",
                StructuralType::list(
                    4,
                    StructuralType::nullable(StructuralType::primitive(PrimitiveKind::U16)),
                ),
            ),
        ],
    )
    .resolve()
    .expect("static descriptor resolves");

    // Should never panic, only return Ok or Err
    let _ = decode_bytes(&descriptor, data);
});
