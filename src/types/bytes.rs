//! Raw byte buffers.

use std::io::{Read, Write};
use std::ops::{Deref, DerefMut};

use crate::core::capability::{Iterable, MemberOf, VecFamily};
use crate::core::{Compound, FormatMetadata, NifType};
use crate::io::{count_prefix, read_counted, Decode, Encode};
use crate::util::{self, Result};

/// Ordered, resizable sequence of raw bytes.
///
/// Logically a primitive, but tagged [`Compound`] so traversal walks its
/// elements. Derefs to `Vec<u8>` for append, index and size queries.
/// Stored as a `u32` count followed by the bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteBuffer(Vec<u8>);

impl ByteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for ByteBuffer {
    type Target = Vec<u8>;

    #[inline]
    fn deref(&self) -> &Vec<u8> {
        &self.0
    }
}

impl DerefMut for ByteBuffer {
    #[inline]
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.0
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(v: &[u8]) -> Self {
        Self(v.to_vec())
    }
}

impl From<ByteBuffer> for Vec<u8> {
    fn from(b: ByteBuffer) -> Self {
        b.0
    }
}

impl FromIterator<u8> for ByteBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ByteBuffer {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Iterable for ByteBuffer {
    type Elem = u8;
    type Iter<'a> = std::slice::Iter<'a, u8>;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.0.iter()
    }
}

impl MemberOf<VecFamily> for ByteBuffer {}

impl NifType for ByteBuffer {
    type Category = Compound;
    const TYPE_NAME: &'static str = "ByteArray";
}

impl Decode for ByteBuffer {
    fn decode<R: Read + ?Sized>(reader: &mut R, info: &FormatMetadata) -> Result<Self> {
        let len = util::read_u32(reader, info.byte_order)? as usize;
        Ok(Self(read_counted(reader, len)?))
    }
}

impl Encode for ByteBuffer {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, info: &FormatMetadata) -> Result<()> {
        let len = count_prefix(self.0.len(), "byte buffer")?;
        util::write_u32(writer, len, info.byte_order)?;
        writer.write_all(&self.0)?;
        Ok(())
    }
}
