//! SerializerRegistry - runtime type identity to codec resolution

use core::fmt;
use std::any::{self, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::codec;
use crate::core::errors::{Result, ZkFixedError};
use crate::core::traits::FixedLength;
use crate::core::value::Value;
use crate::descriptor::FixedLengthDescriptor;
use crate::surrogate::{ConversionProvider, Surrogate};

type EncodeFn = Box<dyn Fn(&dyn Any) -> Result<Value> + Send + Sync>;
type DecodeFn = Box<dyn Fn(Value) -> Result<Box<dyn Any>> + Send + Sync>;

struct CodecEntry {
    qualified_name: &'static str,
    simple_name: &'static str,
    descriptor: Arc<FixedLengthDescriptor>,
    encode: EncodeFn,
    decode: DecodeFn,
}

/// A resolved registration: the descriptor plus type-erased conversion
/// closures for one concrete original type.
#[derive(Clone)]
pub struct RegisteredCodec(Arc<CodecEntry>);

impl RegisteredCodec {
    pub fn qualified_name(&self) -> &'static str {
        self.0.qualified_name
    }

    pub fn simple_name(&self) -> &'static str {
        self.0.simple_name
    }

    pub fn descriptor(&self) -> &FixedLengthDescriptor {
        &self.0.descriptor
    }

    /// Projects a foreign value into the dynamic value tree via its
    /// registered surrogate.
    pub fn project(&self, value: &dyn Any) -> Result<Value> {
        (self.0.encode)(value)
    }

    pub fn encode_bytes(&self, value: &dyn Any) -> Result<Vec<u8>> {
        codec::encode_bytes(&self.0.descriptor, &self.project(value)?)
    }

    pub fn encode_bits(&self, value: &dyn Any) -> Result<Vec<bool>> {
        codec::encode_bits(&self.0.descriptor, &self.project(value)?)
    }

    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Box<dyn Any>> {
        (self.0.decode)(codec::decode_bytes(&self.0.descriptor, bytes)?)
    }
}

impl fmt::Debug for RegisteredCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCodec")
            .field("type", &self.0.qualified_name)
            .field("byte_size", &self.0.descriptor.byte_size())
            .finish()
    }
}

struct Inner {
    entries: HashMap<TypeId, RegisteredCodec>,
    sealed: bool,
}

/// Process-wide mapping from concrete runtime types to their codecs.
///
/// Populated during an explicit initialization phase and read-only
/// afterwards: call [`seal`](SerializerRegistry::seal) once registration is
/// complete, after which further registration is a hard error. Insertions
/// are lock-guarded, so concurrent initialization cannot register the same
/// type twice unnoticed.
pub struct SerializerRegistry {
    inner: RwLock<Inner>,
}

impl SerializerRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                sealed: false,
            }),
        }
    }

    /// Registers the surrogate mapping produced by `provider` for its
    /// original type. At most one codec may exist per concrete type.
    pub fn register<P>(&self, provider: P) -> Result<()>
    where
        P: ConversionProvider + Send + Sync + 'static,
        P::Original: 'static,
        P::Surrogate: 'static,
    {
        let descriptor = Arc::new(<P::Surrogate as FixedLength>::structural_type().resolve()?);
        let qualified = any::type_name::<P::Original>();
        let encode: EncodeFn = Box::new(move |value: &dyn Any| {
            let original =
                value
                    .downcast_ref::<P::Original>()
                    .ok_or(ZkFixedError::TypeMismatch {
                        expected: qualified,
                        found: "value of a different concrete type",
                    })?;
            provider.from_original(original)?.to_value()
        });
        let decode: DecodeFn = Box::new(|value: Value| {
            let surrogate = P::Surrogate::from_value(value)?;
            Ok(Box::new(surrogate.into_original()?) as Box<dyn Any>)
        });
        self.insert(TypeId::of::<P::Original>(), qualified, descriptor, encode, decode)
    }

    /// Registers a type that is its own serializable shape (no surrogate
    /// conversion needed).
    pub fn register_self<T>(&self) -> Result<()>
    where
        T: FixedLength + 'static,
    {
        let descriptor = Arc::new(T::structural_type().resolve()?);
        let qualified = any::type_name::<T>();
        let encode: EncodeFn = Box::new(move |value: &dyn Any| {
            value
                .downcast_ref::<T>()
                .ok_or(ZkFixedError::TypeMismatch {
                    expected: qualified,
                    found: "value of a different concrete type",
                })?
                .to_value()
        });
        let decode: DecodeFn =
            Box::new(|value: Value| Ok(Box::new(T::from_value(value)?) as Box<dyn Any>));
        self.insert(TypeId::of::<T>(), qualified, descriptor, encode, decode)
    }

    fn insert(
        &self,
        type_id: TypeId,
        qualified_name: &'static str,
        descriptor: Arc<FixedLengthDescriptor>,
        encode: EncodeFn,
        decode: DecodeFn,
    ) -> Result<()> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.sealed {
            return Err(ZkFixedError::RegistrySealed);
        }
        if inner.entries.contains_key(&type_id) {
            return Err(ZkFixedError::DuplicateRegistration {
                type_name: qualified_name.to_string(),
            });
        }
        inner.entries.insert(
            type_id,
            RegisteredCodec(Arc::new(CodecEntry {
                qualified_name,
                simple_name: simple_name_of(qualified_name),
                descriptor,
                encode,
                decode,
            })),
        );
        Ok(())
    }

    /// Marks the initialization phase as finished; all later registration
    /// attempts fail with [`ZkFixedError::RegistrySealed`].
    pub fn seal(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sealed
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact lookup by concrete type.
    pub fn codec_of<T: 'static>(&self) -> Result<RegisteredCodec> {
        self.codec_for_type_id(TypeId::of::<T>())
            .ok_or_else(|| ZkFixedError::UnregisteredType {
                type_name: any::type_name::<T>().to_string(),
            })
    }

    pub fn codec_for_type_id(&self, type_id: TypeId) -> Option<RegisteredCodec> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .get(&type_id)
            .cloned()
    }

    /// Lookup by type name.
    ///
    /// A name containing `::` must match a qualified name exactly. A bare
    /// simple name matches across all registrations; more than one hit is
    /// an ambiguity error listing every candidate, never a silent pick.
    pub fn codec_by_name(&self, name: &str) -> Result<RegisteredCodec> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        if name.contains("::") {
            return inner
                .entries
                .values()
                .find(|codec| codec.qualified_name() == name)
                .cloned()
                .ok_or_else(|| ZkFixedError::UnregisteredType {
                    type_name: name.to_string(),
                });
        }
        let mut matches: Vec<&RegisteredCodec> = inner
            .entries
            .values()
            .filter(|codec| codec.simple_name() == name)
            .collect();
        match matches.len() {
            0 => Err(ZkFixedError::UnregisteredType {
                type_name: name.to_string(),
            }),
            1 => Ok(matches.remove(0).clone()),
            _ => {
                let mut candidates: Vec<String> = matches
                    .iter()
                    .map(|codec| codec.qualified_name().to_string())
                    .collect();
                candidates.sort();
                Err(ZkFixedError::AmbiguousType {
                    simple_name: name.to_string(),
                    candidates,
                })
            }
        }
    }

    /// Encodes a value whose concrete type is only known at runtime, e.g.
    /// an interface-typed field.
    pub fn encode_bytes_dyn(&self, value: &dyn Any) -> Result<Vec<u8>> {
        self.codec_for_value(value)?.encode_bytes(value)
    }

    pub fn encode_bits_dyn(&self, value: &dyn Any) -> Result<Vec<bool>> {
        self.codec_for_value(value)?.encode_bits(value)
    }

    /// Decodes bytes back into the concrete original type `F`.
    pub fn decode_bytes_as<F: 'static>(&self, bytes: &[u8]) -> Result<F> {
        let boxed = self.codec_of::<F>()?.decode_bytes(bytes)?;
        boxed
            .downcast::<F>()
            .map(|value| *value)
            .map_err(|_| ZkFixedError::TypeMismatch {
                expected: any::type_name::<F>(),
                found: "decoded value of a different concrete type",
            })
    }

    fn codec_for_value(&self, value: &dyn Any) -> Result<RegisteredCodec> {
        self.codec_for_type_id(value.type_id())
            .ok_or_else(|| ZkFixedError::UnregisteredType {
                type_name: format!("<dynamic type {:?}>", value.type_id()),
            })
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerRegistry")
            .field("registered", &self.len())
            .field("sealed", &self.is_sealed())
            .finish()
    }
}

static GLOBAL: OnceLock<SerializerRegistry> = OnceLock::new();

/// The process-wide registry. Register all codecs during startup, then call
/// `global().seal()`; steady-state encode only reads it.
pub fn global() -> &'static SerializerRegistry {
    GLOBAL.get_or_init(SerializerRegistry::new)
}

fn simple_name_of(qualified: &'static str) -> &'static str {
    // "crate::module::Type" -> "Type"; generic parameters are ignored for
    // simple-name purposes.
    let base = qualified.split('<').next().unwrap_or(qualified);
    base.rsplit("::").next().unwrap_or(base)
}
