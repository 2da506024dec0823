//! Fuzz target for bit-scheme decoding
//! Tests: decode_bits() with arbitrary bit sequences
//! Goal: Ensure no panics, only Ok or Err

#![no_main]

use libfuzzer_sys::fuzz_target;
use zkfixed::{decode_bits, PrimitiveKind, StructuralType};

fuzz_target!(|data: &[u8]| {
    let descriptor = StructuralType::nullable(StructuralType::structure(
        "Fuzzed",
        vec![
            ("value", StructuralType::primitive(PrimitiveKind::I32)),
            ("name", StructuralType::unicode_string(4)),
        ],
    ))
    .resolve()
    .expect("static descriptor resolves");

    let bits: Vec<bool> = data
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
        .collect();

    // Should never panic, only return Ok or Err
    let _ = decode_bits(&descriptor, &bits);
});
