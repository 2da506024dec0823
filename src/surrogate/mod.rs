//! Surrogate/conversion layer - serializable stand-ins for foreign types

use crate::core::errors::Result;
use crate::core::traits::FixedLength;

/// A locally-serializable stand-in for a foreign type.
///
/// The surrogate is transient: it is constructed during encode, and
/// consumed by `into_original` once decode has rebuilt it.
pub trait Surrogate: FixedLength {
    type Original;

    fn into_original(self) -> Result<Self::Original>;
}

/// Owns the forward direction of a surrogate mapping: foreign value in,
/// surrogate out. Split from [`Surrogate`] so the foreign type itself never
/// needs modification.
pub trait ConversionProvider {
    type Original;
    type Surrogate: Surrogate<Original = Self::Original>;

    fn from_original(&self, original: &Self::Original) -> Result<Self::Surrogate>;
}
