//! Representation schemes - byte- and bit-granularity transfer units

use core::fmt;
use core::marker::PhantomData;

use crate::core::errors::{Result, ZkFixedError};

/// A representation scheme fixes the atomic transfer unit the codecs emit
/// and consume. Codecs themselves are scheme-agnostic: they move whole
/// bytes, and the scheme decides how a byte is packed into units.
pub trait Scheme {
    type Unit: Copy + PartialEq + fmt::Debug;

    /// Units per byte: 1 for the byte scheme, 8 for the bit scheme.
    const UNITS_PER_BYTE: usize;

    const NAME: &'static str;

    fn write_byte(out: &mut Vec<Self::Unit>, byte: u8);

    /// Reassembles one byte from exactly `UNITS_PER_BYTE` units.
    fn read_byte(units: &[Self::Unit]) -> u8;
}

/// Whole-byte transfer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteScheme;

impl Scheme for ByteScheme {
    type Unit = u8;

    const UNITS_PER_BYTE: usize = 1;

    const NAME: &'static str = "byte";

    fn write_byte(out: &mut Vec<u8>, byte: u8) {
        out.push(byte);
    }

    fn read_byte(units: &[u8]) -> u8 {
        units[0]
    }
}

/// Single-bit transfer units, most significant bit first within each byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitScheme;

impl Scheme for BitScheme {
    type Unit = bool;

    const UNITS_PER_BYTE: usize = 8;

    const NAME: &'static str = "bit";

    fn write_byte(out: &mut Vec<bool>, byte: u8) {
        for shift in (0..8).rev() {
            out.push((byte >> shift) & 1 == 1);
        }
    }

    fn read_byte(units: &[bool]) -> u8 {
        units
            .iter()
            .fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit))
    }
}

/// Cursor over a unit sequence, consumed byte-by-byte during decode.
///
/// Exhaustion and trailing input are both reported as deserialization
/// errors; fixed-length inputs must be consumed exactly.
pub struct UnitReader<'a, S: Scheme> {
    units: &'a [S::Unit],
    pos: usize,
    _scheme: PhantomData<S>,
}

impl<'a, S: Scheme> UnitReader<'a, S> {
    pub fn new(units: &'a [S::Unit]) -> Self {
        Self {
            units,
            pos: 0,
            _scheme: PhantomData,
        }
    }

    pub fn remaining(&self) -> usize {
        self.units.len() - self.pos
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        let end = self.pos + S::UNITS_PER_BYTE;
        let units = self
            .units
            .get(self.pos..end)
            .ok_or_else(|| ZkFixedError::Deserialization {
                reason: format!(
                    "input exhausted: needed {} more {} unit(s), {} remaining",
                    S::UNITS_PER_BYTE,
                    S::NAME,
                    self.remaining()
                ),
            })?;
        self.pos = end;
        Ok(S::read_byte(units))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        for byte in &mut bytes {
            *byte = self.read_byte()?;
        }
        Ok(bytes)
    }

    /// Asserts the input was consumed exactly.
    pub fn finish(self) -> Result<()> {
        if self.pos != self.units.len() {
            return Err(ZkFixedError::Deserialization {
                reason: format!(
                    "{} trailing {} unit(s) after decoding",
                    self.remaining(),
                    S::NAME
                ),
            });
        }
        Ok(())
    }
}

impl<S: Scheme> fmt::Debug for UnitReader<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitReader")
            .field("scheme", &S::NAME)
            .field("pos", &self.pos)
            .field("len", &self.units.len())
            .finish()
    }
}
