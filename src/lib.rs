//! zkfixed - fixed-length binary serialization for zero-knowledge circuits
//!
//! Encodes arbitrarily nested data into byte or bit sequences whose length
//! depends only on the declared type, never on runtime content. Two values
//! of the same declared type always serialize to buffers of identical
//! length, so a downstream arithmetic circuit can fix every field's offset
//! and width at compile time.
//!
//! The building blocks:
//! - [`StructuralType`] / [`FixedLengthDescriptor`]: a type description
//!   with a static byte size attached.
//! - [`Value`] and the [`FixedLength`] trait: the dynamic tree the engine
//!   walks, and the typed front-end over it.
//! - [`encode_bytes`]/[`decode_bytes`] and [`encode_bits`]/[`decode_bits`]:
//!   the byte- and bit-granularity representation schemes.
//! - [`Surrogate`]/[`ConversionProvider`] and [`SerializerRegistry`]:
//!   serializable stand-ins for foreign types, with polymorphic lookup by
//!   concrete runtime type.
//! - `witness` (feature `serde`): the JSON projection consumed by the
//!   external circuit-witness loader.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms, unused_qualifications, missing_debug_implementations)]

pub mod codec;
pub mod core;
pub mod descriptor;
pub mod registry;
pub mod scheme;
pub mod surrogate;

#[cfg(feature = "serde")]
pub mod witness;

pub use crate::core::{
    errors::{Result, ZkFixedError},
    traits::FixedLength,
    types::{FixedList, FixedString},
    value::Value,
};

pub use crate::descriptor::{
    descriptor_of, CharEncoding, FixedLengthDescriptor, PrimitiveKind, StructuralType,
    DEFAULT_CHAR,
};

pub use crate::codec::{
    decode_bits, decode_bytes, encode_bits, encode_bytes, encode_bytes_with_length, from_bits,
    from_bytes, to_bits, to_bytes,
};

pub use crate::scheme::{BitScheme, ByteScheme, Scheme, UnitReader};

pub use crate::registry::{global, RegisteredCodec, SerializerRegistry};

pub use crate::surrogate::{ConversionProvider, Surrogate};

#[cfg(feature = "serde")]
pub use crate::witness::{
    to_witness_bits, to_witness_json, to_witness_json_string, witness_json_of,
};
