//! Error types for the zkfixed library

use core::fmt;

pub type Result<T> = core::result::Result<T, ZkFixedError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZkFixedError {
    /// A type declaration the engine cannot attach a fixed size to
    /// (e.g. a size overflowing `usize`). Raised at descriptor-build
    /// time, before any data is processed.
    Configuration {
        reason: String,
    },
    /// A value holds more characters/elements than its declared capacity.
    LengthExceeded {
        subject: String,
        unit: &'static str,
        actual: usize,
        capacity: usize,
    },
    /// A character falls outside the declared character codec's range.
    CharOutOfRange {
        ch: char,
        encoding: &'static str,
    },
    /// A string value ends in the pad character; the decoder could not
    /// distinguish it from padding, so encoding rejects it outright.
    TrailingPad {
        subject: String,
        pad: char,
    },
    /// An enum value names a variant its declaration does not contain.
    UnknownVariant {
        enum_name: String,
        variant: String,
    },
    /// A value's shape does not match the descriptor it is encoded against.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Malformed or truncated input on the decode path.
    Deserialization {
        reason: String,
    },
    /// The same concrete type was registered twice.
    DuplicateRegistration {
        type_name: String,
    },
    /// More than one registered type matches a simple name and no
    /// qualified name disambiguates.
    AmbiguousType {
        simple_name: String,
        candidates: Vec<String>,
    },
    /// No codec is registered for the requested type.
    UnregisteredType {
        type_name: String,
    },
    /// Registration was attempted after the registry was sealed.
    RegistrySealed,
}

impl fmt::Display for ZkFixedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZkFixedError::Configuration { reason } => {
                write!(f, "Configuration error: {}", reason)
            }
            ZkFixedError::LengthExceeded {
                subject,
                unit,
                actual,
                capacity,
            } => {
                write!(
                    f,
                    "{} exceeds {}-{} capacity (actual length {})",
                    subject, capacity, unit, actual
                )
            }
            ZkFixedError::CharOutOfRange { ch, encoding } => {
                write!(
                    f,
                    "character '{}' (U+{:04X}) is outside the {} codec's supported range",
                    ch, *ch as u32, encoding
                )
            }
            ZkFixedError::TrailingPad { subject, pad } => {
                write!(
                    f,
                    "{} ends in the pad character '{}' and is not representable",
                    subject, pad
                )
            }
            ZkFixedError::UnknownVariant { enum_name, variant } => {
                write!(
                    f,
                    "variant `{}` is not declared by enum {}",
                    variant, enum_name
                )
            }
            ZkFixedError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
            ZkFixedError::Deserialization { reason } => {
                write!(f, "Deserialization error: {}", reason)
            }
            ZkFixedError::DuplicateRegistration { type_name } => {
                write!(f, "duplicate codec registration for type {}", type_name)
            }
            ZkFixedError::AmbiguousType {
                simple_name,
                candidates,
            } => {
                write!(
                    f,
                    "type name `{}` is ambiguous; candidates: {}; use the fully qualified name",
                    simple_name,
                    candidates.join(", ")
                )
            }
            ZkFixedError::UnregisteredType { type_name } => {
                write!(f, "no codec registered for type {}", type_name)
            }
            ZkFixedError::RegistrySealed => {
                write!(f, "registry is sealed; registration is only allowed during initialization")
            }
        }
    }
}

impl std::error::Error for ZkFixedError {}
