//! Byte order of multi-byte values on disk.

use std::fmt;
use std::io::{Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};

use super::{Error, Result};

/// Convention for multi-byte numbers in a file.
///
/// The discriminants are the codes the format stores in its endian byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ByteOrder {
    /// Most significant byte first.
    Big = 0,
    /// Least significant byte first.
    #[default]
    Little = 1,
}

impl ByteOrder {
    /// Byte order of the machine running this code.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// On-disk code of this byte order.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse the on-disk endian code.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Big),
            1 => Ok(Self::Little),
            other => Err(Error::InvalidByteOrder(other)),
        }
    }

    #[inline]
    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big => write!(f, "big-endian"),
            Self::Little => write!(f, "little-endian"),
        }
    }
}

// Endian-dispatched scalar access. The byteorder traits are generic over a
// compile-time order; the file's order is only known at runtime.
macro_rules! endian_scalar {
    ($read:ident, $write:ident, $ty:ty) => {
        #[doc = concat!("Read a `", stringify!($ty), "` in the given byte order.")]
        #[inline]
        pub fn $read<R: Read + ?Sized>(reader: &mut R, order: ByteOrder) -> Result<$ty> {
            let value = match order {
                ByteOrder::Little => reader.$read::<LittleEndian>()?,
                ByteOrder::Big => reader.$read::<BigEndian>()?,
            };
            Ok(value)
        }

        #[doc = concat!("Write a `", stringify!($ty), "` in the given byte order.")]
        #[inline]
        pub fn $write<W: Write + ?Sized>(writer: &mut W, value: $ty, order: ByteOrder) -> Result<()> {
            match order {
                ByteOrder::Little => writer.$write::<LittleEndian>(value)?,
                ByteOrder::Big => writer.$write::<BigEndian>(value)?,
            }
            Ok(())
        }
    };
}

endian_scalar!(read_u16, write_u16, u16);
endian_scalar!(read_i16, write_i16, i16);
endian_scalar!(read_u32, write_u32, u32);
endian_scalar!(read_i32, write_i32, i32);
endian_scalar!(read_f32, write_f32, f32);
