//! Encoding and decoding of primitives.
//!
//! Every codec call receives the session's [`FormatMetadata`], which selects
//! the byte order and any version-dependent layout. Encoders check a value's
//! limits before writing, so a refused value emits no bytes.

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use crate::core::FormatMetadata;
use crate::util::version::VER_4_1_0_1;
use crate::util::{self, Error, Result};

/// A value that can be read from a NIF stream.
pub trait Decode: Sized {
    fn decode<R: Read + ?Sized>(reader: &mut R, info: &FormatMetadata) -> Result<Self>;
}

/// A value that can be written to a NIF stream.
pub trait Encode {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, info: &FormatMetadata) -> Result<()>;
}

/// Decode one value from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_from_slice<T: Decode>(bytes: &[u8], info: &FormatMetadata) -> Result<(T, usize)> {
    let mut cursor = bytes;
    let value = T::decode(&mut cursor, info)?;
    Ok((value, bytes.len() - cursor.len()))
}

/// Encode one value into a fresh buffer.
pub fn encode_to_vec<T: Encode + ?Sized>(value: &T, info: &FormatMetadata) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    value.encode(&mut buf, info)?;
    Ok(buf)
}

/// Read exactly `len` bytes without trusting `len` for the allocation.
pub(crate) fn read_counted<R: Read + ?Sized>(reader: &mut R, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(64 * 1024));
    let read = reader.take(len as u64).read_to_end(&mut buf)?;
    if read != len {
        return Err(Error::UnexpectedEof);
    }
    Ok(buf)
}

/// Read bytes up to (not including) `\n`, failing once more than `max` bytes
/// precede the terminator.
pub(crate) fn read_line<R: Read + ?Sized>(reader: &mut R, max: Option<usize>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    loop {
        let byte = reader.read_u8()?;
        if byte == b'\n' {
            return Ok(buf);
        }
        buf.push(byte);
        if let Some(max) = max {
            if buf.len() > max {
                tracing::warn!(max, "line exceeds limit without terminator");
                return Err(Error::malformed(format!(
                    "line longer than {} bytes without terminator",
                    max
                )));
            }
        }
    }
}

/// Length of `len` as a `u32` count prefix.
pub(crate) fn count_prefix(len: usize, what: &str) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        tracing::warn!(len, what, "count does not fit in 32 bits");
        Error::constraint(format!("{} of {} elements exceeds u32 count", what, len))
    })
}

impl Decode for u8 {
    #[inline]
    fn decode<R: Read + ?Sized>(reader: &mut R, _info: &FormatMetadata) -> Result<Self> {
        Ok(reader.read_u8()?)
    }
}

impl Encode for u8 {
    #[inline]
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, _info: &FormatMetadata) -> Result<()> {
        writer.write_u8(*self)?;
        Ok(())
    }
}

macro_rules! endian_codec {
    ($ty:ty, $read:ident, $write:ident) => {
        impl Decode for $ty {
            #[inline]
            fn decode<R: Read + ?Sized>(reader: &mut R, info: &FormatMetadata) -> Result<Self> {
                util::$read(reader, info.byte_order)
            }
        }

        impl Encode for $ty {
            #[inline]
            fn encode<W: Write + ?Sized>(&self, writer: &mut W, info: &FormatMetadata) -> Result<()> {
                util::$write(writer, *self, info.byte_order)
            }
        }
    };
}

endian_codec!(u16, read_u16, write_u16);
endian_codec!(i16, read_i16, write_i16);
endian_codec!(u32, read_u32, write_u32);
endian_codec!(i32, read_i32, write_i32);
endian_codec!(f32, read_f32, write_f32);

// Booleans were a full 32-bit integer before 4.1.0.1.
impl Decode for bool {
    fn decode<R: Read + ?Sized>(reader: &mut R, info: &FormatMetadata) -> Result<Self> {
        if info.version < VER_4_1_0_1 {
            Ok(util::read_u32(reader, info.byte_order)? != 0)
        } else {
            Ok(reader.read_u8()? != 0)
        }
    }
}

impl Encode for bool {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, info: &FormatMetadata) -> Result<()> {
        if info.version < VER_4_1_0_1 {
            util::write_u32(writer, *self as u32, info.byte_order)
        } else {
            writer.write_u8(*self as u8)?;
            Ok(())
        }
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode<R: Read + ?Sized>(reader: &mut R, info: &FormatMetadata) -> Result<Self> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::decode(reader, info)?);
        }
        items
            .try_into()
            .map_err(|_| Error::other("fixed array length mismatch"))
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, info: &FormatMetadata) -> Result<()> {
        // Encode into a scratch buffer so a refused element emits nothing.
        let mut buf = Vec::new();
        for item in self {
            item.encode(&mut buf, info)?;
        }
        writer.write_all(&buf)?;
        Ok(())
    }
}
