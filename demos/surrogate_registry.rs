//! # Surrogate Registry Example
//!
//! Maps a foreign type onto a serializable surrogate, registers it, and
//! encodes through the registry's dynamic lookup.

use zkfixed::{
    ConversionProvider, FixedLength, Result, SerializerRegistry, StructuralType, Surrogate,
    Value,
};

// A type from a foreign ledger crate: no serialization support of its own.
#[derive(Debug, PartialEq)]
struct AccountRef {
    index: u32,
    shard: u16,
}

struct AccountRefSurrogate {
    index: u32,
    shard: u16,
}

impl FixedLength for AccountRefSurrogate {
    fn structural_type() -> StructuralType {
        StructuralType::structure(
            "AccountRef",
            vec![
                ("index", u32::structural_type()),
                ("shard", u16::structural_type()),
            ],
        )
    }

    fn to_value(&self) -> Result<Value> {
        Ok(Value::Struct(vec![
            ("index".into(), self.index.to_value()?),
            ("shard".into(), self.shard.to_value()?),
        ]))
    }

    fn from_value(value: Value) -> Result<Self> {
        let mut fields = value.into_struct()?.into_iter();
        let mut next = |name: &str| {
            fields
                .next()
                .map(|(_, v)| v)
                .ok_or_else(|| zkfixed::ZkFixedError::Deserialization {
                    reason: format!("missing field `{}`", name),
                })
        };
        Ok(Self {
            index: u32::from_value(next("index")?)?,
            shard: u16::from_value(next("shard")?)?,
        })
    }
}

impl Surrogate for AccountRefSurrogate {
    type Original = AccountRef;

    fn into_original(self) -> Result<AccountRef> {
        Ok(AccountRef {
            index: self.index,
            shard: self.shard,
        })
    }
}

struct AccountRefProvider;

impl ConversionProvider for AccountRefProvider {
    type Original = AccountRef;
    type Surrogate = AccountRefSurrogate;

    fn from_original(&self, original: &AccountRef) -> Result<AccountRefSurrogate> {
        Ok(AccountRefSurrogate {
            index: original.index,
            shard: original.shard,
        })
    }
}

fn main() -> Result<()> {
    println!("=== zkfixed Surrogate Registry Example ===\n");

    // 1. Initialization phase: register every codec, then seal.
    println!("1. Registering surrogates...");
    let registry = SerializerRegistry::new();
    registry.register(AccountRefProvider)?;
    registry.seal();
    println!("   {:?}", registry);

    // 2. Encode through dynamic lookup by concrete runtime type.
    println!("\n2. Encoding a foreign value...");
    let account = AccountRef { index: 7, shard: 2 };
    let bytes = registry.encode_bytes_dyn(&account)?;
    println!("   {} bytes: {:?}", bytes.len(), bytes);

    // 3. Decode back to the original type.
    println!("\n3. Decoding...");
    let decoded: AccountRef = registry.decode_bytes_as(&bytes)?;
    println!("   Decoded: {:?}", decoded);
    assert_eq!(decoded, account);

    // 4. Name-based lookup.
    println!("\n4. Lookup by simple name...");
    let codec = registry.codec_by_name("AccountRef")?;
    println!("   {} -> {} bytes", codec.qualified_name(), codec.descriptor().byte_size());

    Ok(())
}
