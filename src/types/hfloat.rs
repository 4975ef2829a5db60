//! Half-precision floats carried as raw bits.

use std::fmt;
use std::io::{Read, Write};

use bytemuck::{Pod, Zeroable};
use half::f16;

use crate::core::{FormatMetadata, Native, NifType};
use crate::io::{Decode, Encode};
use crate::util::{self, Result};

/// A 16-bit half float stored and compared as its bit pattern.
///
/// Nothing here converts through `f32` on the read or write path, so values
/// pass through unchanged. `-0.0` (`0x8000`) and `+0.0` (`0x0000`) are unequal,
/// and NaN patterns compare equal to themselves. Use [`HalfFloat::to_f32`] for
/// arithmetic.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct HalfFloat(u16);

impl HalfFloat {
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Nearest half to `value`.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self(f16::from_f32(value).to_bits())
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.as_f16().to_f32()
    }

    #[inline]
    pub fn as_f16(self) -> f16 {
        f16::from_bits(self.0)
    }
}

impl From<u16> for HalfFloat {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl From<HalfFloat> for u16 {
    fn from(h: HalfFloat) -> Self {
        h.0
    }
}

impl From<f16> for HalfFloat {
    fn from(h: f16) -> Self {
        Self(h.to_bits())
    }
}

impl fmt::Debug for HalfFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HalfFloat({:#06x} = {})", self.0, self.as_f16())
    }
}

impl fmt::Display for HalfFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f16())
    }
}

impl NifType for HalfFloat {
    type Category = Native;
    const TYPE_NAME: &'static str = "hfloat";
}

impl Decode for HalfFloat {
    fn decode<R: Read + ?Sized>(reader: &mut R, info: &FormatMetadata) -> Result<Self> {
        Ok(Self(util::read_u16(reader, info.byte_order)?))
    }
}

impl Encode for HalfFloat {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, info: &FormatMetadata) -> Result<()> {
        util::write_u16(writer, self.0, info.byte_order)
    }
}
