//! Packed 8-bit RGBA color.

use std::fmt;
use std::io::{Read, Write};

use bytemuck::{Pod, Zeroable};

use crate::core::{FormatMetadata, Native, NifType};
use crate::io::{Decode, Encode};
use crate::util::Result;

/// Four 8-bit channels viewable as one 32-bit word.
///
/// The word holds red in the low byte and alpha in the high byte, so
/// `word().to_le_bytes()` is always `[r, g, b, a]`. Equality compares the
/// word: colors differing in any channel, alpha included, are unequal.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct PackedColor(u32);

impl PackedColor {
    pub const TRANSPARENT: Self = Self(0);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const BLACK: Self = Self::new(0, 0, 0, 0xFF);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    #[inline]
    pub const fn from_channels(channels: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(channels))
    }

    /// Color whose packed word is `word`.
    #[inline]
    pub const fn from_word(word: u32) -> Self {
        Self(word)
    }

    /// The packed 32-bit view.
    #[inline]
    pub const fn word(self) -> u32 {
        self.0
    }

    /// The channel view, `[r, g, b, a]`.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.channels()[0]
    }

    #[inline]
    pub const fn g(self) -> u8 {
        self.channels()[1]
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.channels()[2]
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.channels()[3]
    }

    fn set_channel(&mut self, index: usize, value: u8) {
        let mut c = self.channels();
        c[index] = value;
        self.0 = u32::from_le_bytes(c);
    }

    pub fn set_r(&mut self, r: u8) {
        self.set_channel(0, r);
    }

    pub fn set_g(&mut self, g: u8) {
        self.set_channel(1, g);
    }

    pub fn set_b(&mut self, b: u8) {
        self.set_channel(2, b);
    }

    pub fn set_a(&mut self, a: u8) {
        self.set_channel(3, a);
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_f32(self) -> [f32; 4] {
        self.channels().map(|c| c as f32 / 255.0)
    }
}

impl From<[u8; 4]> for PackedColor {
    fn from(c: [u8; 4]) -> Self {
        Self::from_channels(c)
    }
}

impl From<PackedColor> for [u8; 4] {
    fn from(c: PackedColor) -> Self {
        c.channels()
    }
}

impl fmt::Debug for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.channels();
        write!(f, "PackedColor({}, {}, {}, {})", r, g, b, a)
    }
}

impl NifType for PackedColor {
    type Category = Native;
    const TYPE_NAME: &'static str = "ByteColor4";
}

// Channel bytes are stored in order regardless of the file's byte order.
impl Decode for PackedColor {
    fn decode<R: Read + ?Sized>(reader: &mut R, _info: &FormatMetadata) -> Result<Self> {
        let mut c = [0u8; 4];
        reader.read_exact(&mut c)?;
        Ok(Self::from_channels(c))
    }
}

impl Encode for PackedColor {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, _info: &FormatMetadata) -> Result<()> {
        writer.write_all(&self.channels())?;
        Ok(())
    }
}
