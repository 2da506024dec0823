//! # Encode/Decode Benchmark
//!
//! Measures fixed-length encode and decode throughput for a nested record
//! under both representation schemes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zkfixed::{
    decode_bytes, encode_bits, encode_bytes, PrimitiveKind, StructuralType, Value,
};

fn record_descriptor() -> zkfixed::FixedLengthDescriptor {
    StructuralType::structure(
        "Record",
        vec![
            ("id", StructuralType::primitive(PrimitiveKind::U64)),
            ("name", StructuralType::ascii_string(32)),
            (
                "values",
                StructuralType::list(16, StructuralType::primitive(PrimitiveKind::U32)),
            ),
            (
                "parent",
                StructuralType::nullable(StructuralType::primitive(PrimitiveKind::U64)),
            ),
        ],
    )
    .resolve()
    .unwrap()
}

fn record_value() -> Value {
    Value::Struct(vec![
        ("id".into(), Value::U64(12345)),
        ("name".into(), Value::String("benchmark record".into())),
        (
            "values".into(),
            Value::List((0..10u32).map(Value::U32).collect()),
        ),
        (
            "parent".into(),
            Value::Nullable(Some(Box::new(Value::U64(1)))),
        ),
    ])
}

fn bench_encode_bytes(c: &mut Criterion) {
    let descriptor = record_descriptor();
    let value = record_value();

    c.bench_function("encode_bytes_record", |b| {
        b.iter(|| {
            let _bytes = encode_bytes(black_box(&descriptor), black_box(&value)).unwrap();
        });
    });
}

fn bench_encode_bits(c: &mut Criterion) {
    let descriptor = record_descriptor();
    let value = record_value();

    c.bench_function("encode_bits_record", |b| {
        b.iter(|| {
            let _bits = encode_bits(black_box(&descriptor), black_box(&value)).unwrap();
        });
    });
}

fn bench_decode_bytes(c: &mut Criterion) {
    let descriptor = record_descriptor();
    let bytes = encode_bytes(&descriptor, &record_value()).unwrap();

    c.bench_function("decode_bytes_record", |b| {
        b.iter(|| {
            let _value = decode_bytes(black_box(&descriptor), black_box(&bytes)).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_encode_bytes,
    bench_encode_bits,
    bench_decode_bytes
);
criterion_main!(benches);
