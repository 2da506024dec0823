//! # Basic Encode Example
//!
//! Declares a fixed-length record type, encodes a value under both
//! representation schemes, and projects the JSON witness.

use zkfixed::{
    decode_bytes, encode_bits, encode_bytes, encode_bytes_with_length, to_witness_json_string,
    PrimitiveKind, StructuralType, Value,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== zkfixed Basic Encode Example ===\n");

    // 1. Declare the type: every capacity is fixed up front.
    println!("1. Declaring the record type...");
    let descriptor = StructuralType::structure(
        "Transfer",
        vec![
            ("amount", StructuralType::primitive(PrimitiveKind::U64)),
            ("memo", StructuralType::ascii_string(12)),
            (
                "expiry",
                StructuralType::nullable(StructuralType::primitive(PrimitiveKind::I64)),
            ),
        ],
    )
    .resolve()?;
    println!("   Static byte size: {}", descriptor.byte_size());
    println!("   Static bit size:  {}", descriptor.bit_size());

    // 2. Encode a value; actual content never changes the output width.
    println!("\n2. Encoding...");
    let value = Value::Struct(vec![
        ("amount".into(), Value::U64(250)),
        ("memo".into(), Value::String("rent".into())),
        ("expiry".into(), Value::Nullable(None)),
    ]);
    let bytes = encode_bytes(&descriptor, &value)?;
    println!("   Byte scheme: {} bytes: {:?}", bytes.len(), bytes);

    let bits = encode_bits(&descriptor, &value)?;
    println!("   Bit scheme:  {} bits (8x the byte count)", bits.len());

    // 3. Round trip.
    println!("\n3. Decoding...");
    let decoded = decode_bytes(&descriptor, &bytes)?;
    println!("   Decoded: {:?}", decoded);
    assert_eq!(decoded, value);

    // 4. Debug dump with informational length prefixes.
    println!("\n4. Length-prefixed dump (debug only)...");
    let dump = encode_bytes_with_length(&descriptor, &value)?;
    println!("   {:?}", dump);

    // 5. JSON witness for the circuit loader.
    println!("\n5. Witness projection...");
    println!("   {}", to_witness_json_string(&descriptor, &value)?);

    Ok(())
}
