//! String primitives.
//!
//! | Type | On-disk form |
//! |---|---|
//! | [`HeaderString`] | bytes up to `\n`, at most 255 |
//! | [`LineString`] | bytes up to `\n` |
//! | [`ShortString`] | `u8` length (counting a trailing NUL) + bytes |
//! | [`IndexedString`] | `u32` length + bytes; from 20.1.0.1 a `u32` string table index |
//! | [`CharString`] | 8-byte NUL-padded literal |
//!
//! Stored text is in the exporter's code page, not necessarily UTF-8. Each
//! stored byte maps to the char with the same code point (U+0000..=U+00FF), so
//! decoding never fails on content and encoding reproduces the original bytes.
//! Text holding a char above U+00FF cannot be encoded.

use std::borrow::Borrow;
use std::fmt;
use std::io::{Read, Write};
use std::ops::{Deref, DerefMut};

use byteorder::{ReadBytesExt, WriteBytesExt};
use smallvec::{smallvec, SmallVec};

use crate::core::capability::{MemberOf, TextFamily};
use crate::core::{FormatMetadata, Native, NifType};
use crate::io::{count_prefix, read_counted, read_line, Decode, Encode};
use crate::util::version::{format_version, parse_version, VER_10_0_1_0, VER_20_1_0_1};
use crate::util::{self, Error, Result};

fn refuse(what: &str, reason: String) -> Error {
    tracing::warn!(what, %reason, "refusing to encode");
    Error::constraint(format!("{}: {}", what, reason))
}

/// Stored bytes as text, one char per byte.
fn text_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Text as stored bytes, one byte per char.
fn text_to_bytes(text: &str, what: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| {
            u8::try_from(c)
                .map_err(|_| refuse(what, format!("character {:?} has no single-byte form", c)))
        })
        .collect()
}

// ============================================================================
// HeaderString
// ============================================================================

/// First line of a file, e.g. `"Gamebryo File Format, Version 20.0.0.5"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderString {
    pub header: String,
}

impl HeaderString {
    /// Longest header line, excluding the terminator.
    pub const MAX_LEN: usize = 255;

    pub fn new(header: impl Into<String>) -> Self {
        Self { header: header.into() }
    }

    /// Header line announcing `version`.
    pub fn for_version(version: u32) -> Self {
        let prefix = if version <= VER_10_0_1_0 {
            "NetImmerse File Format, Version "
        } else {
            "Gamebryo File Format, Version "
        };
        Self::new(format!("{}{}", prefix, format_version(version)))
    }

    /// Version announced by the header line, if it names one.
    pub fn version(&self) -> Option<u32> {
        let pos = self.header.find("Version ")?;
        let tail = self.header[pos + "Version ".len()..]
            .split_whitespace()
            .next()?;
        match parse_version(tail) {
            Ok(v) => {
                tracing::trace!(header = %self.header, version = v, "parsed header version");
                Some(v)
            }
            Err(_) => {
                tracing::trace!(header = %self.header, "header names no parsable version");
                None
            }
        }
    }
}

impl Decode for HeaderString {
    fn decode<R: Read + ?Sized>(reader: &mut R, _info: &FormatMetadata) -> Result<Self> {
        let bytes = read_line(reader, Some(Self::MAX_LEN))?;
        Ok(Self { header: text_from_bytes(&bytes) })
    }
}

impl Encode for HeaderString {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, _info: &FormatMetadata) -> Result<()> {
        let bytes = text_to_bytes(&self.header, "header string")?;
        if bytes.len() > Self::MAX_LEN {
            return Err(refuse("header string", format!("{} bytes", bytes.len())));
        }
        if bytes.contains(&b'\n') {
            return Err(refuse("header string", "embedded line break".to_string()));
        }
        writer.write_all(&bytes)?;
        writer.write_u8(b'\n')?;
        Ok(())
    }
}

impl fmt::Display for HeaderString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header)
    }
}

// ============================================================================
// LineString
// ============================================================================

/// Text terminated on disk by a line break.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString {
    pub line: String,
}

impl LineString {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

impl Decode for LineString {
    fn decode<R: Read + ?Sized>(reader: &mut R, _info: &FormatMetadata) -> Result<Self> {
        let bytes = read_line(reader, None)?;
        Ok(Self { line: text_from_bytes(&bytes) })
    }
}

impl Encode for LineString {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, _info: &FormatMetadata) -> Result<()> {
        let bytes = text_to_bytes(&self.line, "line string")?;
        if bytes.contains(&b'\n') {
            return Err(refuse("line string", "embedded line break".to_string()));
        }
        writer.write_all(&bytes)?;
        writer.write_u8(b'\n')?;
        Ok(())
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

// ============================================================================
// ShortString
// ============================================================================

/// Text with a one-byte length prefix.
///
/// The stored length counts a trailing NUL, so the text itself is at most
/// [`ShortString::MAX_LEN`] bytes (one per char).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortString {
    pub str: String,
}

impl ShortString {
    pub const MAX_LEN: usize = 254;

    pub fn new(s: impl Into<String>) -> Self {
        Self { str: s.into() }
    }

    /// True if the text can be encoded.
    pub fn fits(&self) -> bool {
        self.str.chars().count() <= Self::MAX_LEN
            && self.str.chars().all(|c| c != '\0' && u32::from(c) <= 0xFF)
    }
}

impl Decode for ShortString {
    fn decode<R: Read + ?Sized>(reader: &mut R, _info: &FormatMetadata) -> Result<Self> {
        let len = reader.read_u8()? as usize;
        let mut buf: SmallVec<[u8; 256]> = smallvec![0; len];
        reader.read_exact(&mut buf)?;

        let text = match buf.iter().position(|&b| b == 0) {
            Some(nul) => &buf[..nul],
            None => &buf[..],
        };
        if text.len() > Self::MAX_LEN {
            tracing::warn!(len, "short string has no room for its terminator");
            return Err(Error::malformed(format!(
                "short string of {} bytes exceeds {}",
                text.len(),
                Self::MAX_LEN
            )));
        }
        Ok(Self { str: text_from_bytes(text) })
    }
}

impl Encode for ShortString {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, _info: &FormatMetadata) -> Result<()> {
        let bytes = text_to_bytes(&self.str, "short string")?;
        let len = bytes.len();
        if len > Self::MAX_LEN {
            return Err(refuse("short string", format!("{} bytes exceeds {}", len, Self::MAX_LEN)));
        }
        if bytes.contains(&0) {
            return Err(refuse("short string", "embedded NUL".to_string()));
        }
        let mut buf: SmallVec<[u8; 256]> = SmallVec::with_capacity(len + 2);
        buf.push((len + 1) as u8);
        buf.extend_from_slice(&bytes);
        buf.push(0);
        writer.write_all(&buf)?;
        Ok(())
    }
}

impl fmt::Display for ShortString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.str)
    }
}

// ============================================================================
// Text values: IndexedString and CharString
// ============================================================================

/// Plain-text behaviour shared by the string types that stand in for `String`.
macro_rules! text_value {
    ($name:ident, $type_name:literal) => {
        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl NifType for $name {
            type Category = Native;
            const TYPE_NAME: &'static str = $type_name;
        }

        impl MemberOf<TextFamily> for $name {}

        impl Deref for $name {
            type Target = String;

            #[inline]
            fn deref(&self) -> &String {
                &self.0
            }
        }

        impl DerefMut for $name {
            #[inline]
            fn deref_mut(&mut self) -> &mut String {
                &mut self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(s: $name) -> Self {
                s.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<String> for $name {
            fn eq(&self, other: &String) -> bool {
                &self.0 == other
            }
        }

        impl PartialEq<$name> for String {
            fn eq(&self, other: &$name) -> bool {
                self == &other.0
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// String the format refers to by its position in the file's string table.
///
/// Behaves as a `String` for all value purposes but is a [`Native`] leaf.
///
/// Before 20.1.0.1 it is stored inline (`u32` length + bytes) and the plain
/// [`Decode`] / [`Encode`] impls handle it. From 20.1.0.1 on it is stored as a
/// `u32` index into the file's string table; those versions go through
/// [`IndexedString::decode_with_table`] / [`IndexedString::encode_with_table`],
/// and the plain impls refuse them without touching the stream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexedString(String);

text_value!(IndexedString, "string");

/// Table index marking an absent string.
pub const NULL_STRING_INDEX: u32 = u32::MAX;

impl IndexedString {
    /// True if `info` stores these strings as string table indices.
    #[inline]
    pub fn uses_string_table(info: &FormatMetadata) -> bool {
        info.version >= VER_20_1_0_1
    }

    /// Look up a table entry. [`NULL_STRING_INDEX`] resolves to the empty string.
    pub fn resolve<T: StringTable + ?Sized>(index: u32, table: &T) -> Option<Self> {
        if index == NULL_STRING_INDEX {
            return Some(Self::default());
        }
        table.lookup(index).map(Self::from)
    }

    /// Read either form, resolving a table index through `table`.
    pub fn decode_with_table<R, T>(reader: &mut R, info: &FormatMetadata, table: &T) -> Result<Self>
    where
        R: Read + ?Sized,
        T: StringTable + ?Sized,
    {
        if !Self::uses_string_table(info) {
            return Self::decode_inline(reader, info);
        }
        let index = util::read_u32(reader, info.byte_order)?;
        Self::resolve(index, table).ok_or_else(|| {
            tracing::warn!(index, "string table index out of range");
            Error::malformed(format!("string table index {} out of range", index))
        })
    }

    /// Write either form, interning into `table` when indices are used.
    ///
    /// The empty string is written as [`NULL_STRING_INDEX`].
    pub fn encode_with_table<W, T>(
        &self,
        writer: &mut W,
        info: &FormatMetadata,
        table: &mut T,
    ) -> Result<()>
    where
        W: Write + ?Sized,
        T: StringTable + ?Sized,
    {
        if !Self::uses_string_table(info) {
            return self.encode_inline(writer, info);
        }
        let index = if self.0.is_empty() {
            NULL_STRING_INDEX
        } else {
            table.intern(&self.0)
        };
        util::write_u32(writer, index, info.byte_order)
    }

    fn decode_inline<R: Read + ?Sized>(reader: &mut R, info: &FormatMetadata) -> Result<Self> {
        let len = util::read_u32(reader, info.byte_order)? as usize;
        let bytes = read_counted(reader, len)?;
        Ok(Self(text_from_bytes(&bytes)))
    }

    fn encode_inline<W: Write + ?Sized>(&self, writer: &mut W, info: &FormatMetadata) -> Result<()> {
        let bytes = text_to_bytes(&self.0, "indexed string")?;
        let len = count_prefix(bytes.len(), "indexed string")?;
        util::write_u32(writer, len, info.byte_order)?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

impl Decode for IndexedString {
    fn decode<R: Read + ?Sized>(reader: &mut R, info: &FormatMetadata) -> Result<Self> {
        if Self::uses_string_table(info) {
            tracing::warn!(version = %format_version(info.version), "indexed string needs a string table");
            return Err(Error::malformed(format!(
                "indexed string is a string table index at version {}",
                format_version(info.version)
            )));
        }
        Self::decode_inline(reader, info)
    }
}

impl Encode for IndexedString {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, info: &FormatMetadata) -> Result<()> {
        if Self::uses_string_table(info) {
            return Err(refuse(
                "indexed string",
                format!("string table index required at version {}", format_version(info.version)),
            ));
        }
        self.encode_inline(writer, info)
    }
}

/// Inline literal character buffer, fixed at [`CharString::LEN`] bytes on disk.
///
/// Behaves as a `String` for all value purposes but is a [`Native`] leaf.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharString(String);

text_value!(CharString, "char8string");

impl CharString {
    pub const LEN: usize = 8;
}

impl Decode for CharString {
    fn decode<R: Read + ?Sized>(reader: &mut R, _info: &FormatMetadata) -> Result<Self> {
        let mut buf = [0u8; Self::LEN];
        reader.read_exact(&mut buf)?;
        let end = buf.iter().position(|&b| b == 0).unwrap_or(Self::LEN);
        Ok(Self(text_from_bytes(&buf[..end])))
    }
}

impl Encode for CharString {
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, _info: &FormatMetadata) -> Result<()> {
        let bytes = text_to_bytes(&self.0, "char string")?;
        if bytes.len() > Self::LEN {
            return Err(refuse("char string", format!("{} bytes exceeds {}", bytes.len(), Self::LEN)));
        }
        if bytes.contains(&0) {
            return Err(refuse("char string", "embedded NUL".to_string()));
        }
        let mut buf = [0u8; Self::LEN];
        buf[..bytes.len()].copy_from_slice(&bytes);
        writer.write_all(&buf)?;
        Ok(())
    }
}

// ============================================================================
// String table boundary
// ============================================================================

/// The file's shared string table, owned by the file-level reader or writer.
pub trait StringTable {
    /// Entry at `index`, if present.
    fn lookup(&self, index: u32) -> Option<&str>;

    /// Index of `s`, adding it if absent.
    fn intern(&mut self, s: &str) -> u32;
}

impl StringTable for Vec<String> {
    fn lookup(&self, index: u32) -> Option<&str> {
        self.get(index as usize).map(String::as_str)
    }

    fn intern(&mut self, s: &str) -> u32 {
        if let Some(pos) = self.iter().position(|e| e == s) {
            return pos as u32;
        }
        self.push(s.to_string());
        (self.len() - 1) as u32
    }
}

macro_rules! native_text {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl NifType for $ty {
                type Category = Native;
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

native_text! {
    HeaderString => "HeaderString",
    LineString => "LineString",
    ShortString => "ShortString",
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{category_of, CategoryKind};
    use crate::io::{decode_from_slice, encode_to_vec};
    use crate::util::version::{VER_20_0_0_5, VER_20_2_0_7, VER_3_1, VER_4_0_0_2};
    use crate::util::ByteOrder;

    fn info() -> FormatMetadata {
        FormatMetadata::new(VER_20_0_0_5)
    }

    #[test]
    fn test_header_for_version() {
        let old = HeaderString::for_version(VER_4_0_0_2);
        assert_eq!(old.header, "NetImmerse File Format, Version 4.0.0.2");
        assert_eq!(old.version(), Some(VER_4_0_0_2));

        let new = HeaderString::for_version(VER_20_0_0_5);
        assert_eq!(new.header, "Gamebryo File Format, Version 20.0.0.5");
        assert_eq!(new.version(), Some(VER_20_0_0_5));

        assert_eq!(HeaderString::new("not a nif").version(), None);
    }

    #[test]
    fn test_header_codec() {
        let header = HeaderString::for_version(VER_20_0_0_5);
        let bytes = encode_to_vec(&header, &info()).unwrap();
        assert_eq!(bytes.last(), Some(&b'\n'));
        let (back, used): (HeaderString, usize) = decode_from_slice(&bytes, &info()).unwrap();
        assert_eq!(back, header);
        assert_eq!(used, bytes.len());
    }

    #[test]
    fn test_header_too_long() {
        let long = vec![b'x'; 300];
        let res: Result<(HeaderString, usize)> = decode_from_slice(&long, &info());
        assert!(matches!(res, Err(Error::Malformed(_))));
        let header = HeaderString::new("x".repeat(256));
        assert!(matches!(encode_to_vec(&header, &info()), Err(Error::EncodingConstraint(_))));
    }

    #[test]
    fn test_line_string() {
        let line = LineString::new("exporter settings");
        let bytes = encode_to_vec(&line, &info()).unwrap();
        assert_eq!(bytes, b"exporter settings\n");
        let (back, _): (LineString, usize) = decode_from_slice(&bytes, &info()).unwrap();
        assert_eq!(back, line);
        assert!(encode_to_vec(&LineString::new("a\nb"), &info()).is_err());
    }

    #[test]
    fn test_short_string_layout() {
        let bytes = encode_to_vec(&ShortString::new("abc"), &info()).unwrap();
        assert_eq!(bytes, [4, b'a', b'b', b'c', 0]);
    }

    #[test]
    fn test_short_string_roundtrip_limits() {
        for len in [0usize, 1, 100, ShortString::MAX_LEN] {
            let s = ShortString::new("q".repeat(len));
            let bytes = encode_to_vec(&s, &info()).unwrap();
            let (back, used): (ShortString, usize) = decode_from_slice(&bytes, &info()).unwrap();
            assert_eq!(back, s);
            assert_eq!(used, len + 2);
        }
    }

    #[test]
    fn test_short_string_too_long() {
        let s = ShortString::new("q".repeat(255));
        assert!(!s.fits());
        let mut out = Vec::new();
        let err = s.encode(&mut out, &info()).unwrap_err();
        assert!(matches!(err, Error::EncodingConstraint(_)));
        assert!(out.is_empty());

        let s = ShortString::new("a\0b");
        assert!(matches!(encode_to_vec(&s, &info()), Err(Error::EncodingConstraint(_))));
    }

    #[test]
    fn test_short_string_malformed() {
        let mut bytes = vec![255u8];
        bytes.extend(std::iter::repeat(b'z').take(255));
        let res: Result<(ShortString, usize)> = decode_from_slice(&bytes, &info());
        assert!(matches!(res, Err(Error::Malformed(_))));

        let truncated = [10u8, b'a', b'b'];
        let res: Result<(ShortString, usize)> = decode_from_slice(&truncated, &info());
        assert!(matches!(res, Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_short_string_without_terminator() {
        let (s, _): (ShortString, usize) = decode_from_slice(&[2, b'h', b'i'], &info()).unwrap();
        assert_eq!(s.str, "hi");
    }

    #[test]
    fn test_indexed_string_text_semantics() {
        let s = IndexedString::from("abc");
        assert_eq!(s, "abc");
        assert_eq!(s, "abc".to_string());
        assert_eq!("abc".to_string(), s);
        assert_eq!(category_of::<IndexedString>(), CategoryKind::Native);

        let mut s = s;
        s.push_str("def");
        assert_eq!(s.len(), 6);
        let plain: String = s.clone().into();
        assert_eq!(plain, "abcdef");
    }

    #[test]
    fn test_indexed_string_codec_big_endian() {
        let info = info().with_byte_order(ByteOrder::Big);
        let bytes = encode_to_vec(&IndexedString::from("hi"), &info).unwrap();
        assert_eq!(bytes, [0, 0, 0, 2, b'h', b'i']);
        let (back, _): (IndexedString, usize) = decode_from_slice(&bytes, &info).unwrap();
        assert_eq!(back, "hi");
    }

    #[test]
    fn test_indexed_string_resolve() {
        let mut table: Vec<String> = Vec::new();
        let a = table.intern("Scene Root");
        let b = table.intern("Bip01");
        assert_eq!(table.intern("Scene Root"), a);
        assert_eq!(IndexedString::resolve(b, &table).unwrap(), "Bip01");
        assert_eq!(IndexedString::resolve(NULL_STRING_INDEX, &table).unwrap(), "");
        assert!(IndexedString::resolve(7, &table).is_none());
    }

    #[test]
    fn test_char_string() {
        let s = CharString::from("BSX");
        assert_eq!(s, "BSX");
        assert_eq!(category_of::<CharString>(), CategoryKind::Native);
        let bytes = encode_to_vec(&s, &info()).unwrap();
        assert_eq!(bytes, [b'B', b'S', b'X', 0, 0, 0, 0, 0]);
        let (back, used): (CharString, usize) = decode_from_slice(&bytes, &info()).unwrap();
        assert_eq!(back, s);
        assert_eq!(used, 8);

        let full = CharString::from("12345678");
        let bytes = encode_to_vec(&full, &info()).unwrap();
        let (back, _): (CharString, usize) = decode_from_slice(&bytes, &info()).unwrap();
        assert_eq!(back, full);

        assert!(encode_to_vec(&CharString::from("123456789"), &info()).is_err());
    }

    #[test]
    fn test_short_string_code_page_byte_roundtrip() {
        let stored = [6u8, b'A', b'n', b'd', b'r', 0xE9, 0];
        let (s, used): (ShortString, usize) = decode_from_slice(&stored, &info()).unwrap();
        assert_eq!(s.str, "Andr\u{e9}");
        assert_eq!(used, stored.len());
        assert_eq!(encode_to_vec(&s, &info()).unwrap(), stored);
    }

    #[test]
    fn test_high_bytes_roundtrip_every_string_type() {
        let raw: Vec<u8> = (0x80u8..=0xFF).collect();

        let mut line = raw.clone();
        line.push(b'\n');
        let (l, _): (LineString, usize) = decode_from_slice(&line, &info()).unwrap();
        assert_eq!(encode_to_vec(&l, &info()).unwrap(), line);

        let (h, _): (HeaderString, usize) = decode_from_slice(&line, &info()).unwrap();
        assert_eq!(encode_to_vec(&h, &info()).unwrap(), line);

        let mut inline = (raw.len() as u32).to_le_bytes().to_vec();
        inline.extend_from_slice(&raw);
        let (i, _): (IndexedString, usize) = decode_from_slice(&inline, &info()).unwrap();
        assert_eq!(i.chars().count(), raw.len());
        assert_eq!(encode_to_vec(&i, &info()).unwrap(), inline);

        let fixed = [0xC4u8, 0xD6, 0xDC, 0xE4, 0xF6, 0xFC, 0xDF, 0x80];
        let (c, _): (CharString, usize) = decode_from_slice(&fixed, &info()).unwrap();
        assert_eq!(encode_to_vec(&c, &info()).unwrap(), fixed);
    }

    #[test]
    fn test_wide_chars_refused() {
        let wide = ShortString::new("\u{65e5}\u{672c}");
        assert!(!wide.fits());
        assert!(matches!(encode_to_vec(&wide, &info()), Err(Error::EncodingConstraint(_))));
        assert!(matches!(
            encode_to_vec(&IndexedString::from("\u{2014}"), &info()),
            Err(Error::EncodingConstraint(_))
        ));
        assert!(matches!(
            encode_to_vec(&LineString::new("\u{20ac}"), &info()),
            Err(Error::EncodingConstraint(_))
        ));
    }

    #[test]
    fn test_short_string_limit_counts_stored_bytes() {
        let s = ShortString::new("\u{e9}".repeat(ShortString::MAX_LEN));
        assert!(s.fits());
        let bytes = encode_to_vec(&s, &info()).unwrap();
        assert_eq!(bytes.len(), ShortString::MAX_LEN + 2);
        let (back, _): (ShortString, usize) = decode_from_slice(&bytes, &info()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_indexed_string_plain_codec_refuses_table_versions() {
        let table_era = FormatMetadata::new(VER_20_2_0_7);
        let mut out = Vec::new();
        let err = IndexedString::from("Bip01").encode(&mut out, &table_era).unwrap_err();
        assert!(matches!(err, Error::EncodingConstraint(_)));
        assert!(out.is_empty());

        let stored = [3u8, 0, 0, 0, 0xAA, 0xBB, 0xCC];
        let mut cursor = &stored[..];
        let res = IndexedString::decode(&mut cursor, &table_era);
        assert!(matches!(res, Err(Error::Malformed(_))));
        assert_eq!(cursor.len(), stored.len());
    }

    #[test]
    fn test_indexed_string_table_form() {
        let table_era = FormatMetadata::new(VER_20_2_0_7);
        let mut table: Vec<String> = vec!["Scene Root".to_string()];

        let mut out = Vec::new();
        IndexedString::from("Bip01").encode_with_table(&mut out, &table_era, &mut table).unwrap();
        IndexedString::from("Scene Root").encode_with_table(&mut out, &table_era, &mut table).unwrap();
        IndexedString::default().encode_with_table(&mut out, &table_era, &mut table).unwrap();
        assert_eq!(out, [1, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(table, ["Scene Root", "Bip01"]);

        let mut cursor = &out[..];
        let a = IndexedString::decode_with_table(&mut cursor, &table_era, &table).unwrap();
        let b = IndexedString::decode_with_table(&mut cursor, &table_era, &table).unwrap();
        let c = IndexedString::decode_with_table(&mut cursor, &table_era, &table).unwrap();
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("Bip01", "Scene Root", ""));

        let bad = [9u8, 0, 0, 0];
        let res = IndexedString::decode_with_table(&mut &bad[..], &table_era, &table);
        assert!(matches!(res, Err(Error::Malformed(_))));
    }

    #[test]
    fn test_indexed_string_table_api_inline_before_table_versions() {
        let old = FormatMetadata::new(VER_20_0_0_5);
        let mut table: Vec<String> = Vec::new();
        let mut out = Vec::new();
        IndexedString::from("Bip01").encode_with_table(&mut out, &old, &mut table).unwrap();
        assert_eq!(out, [5, 0, 0, 0, b'B', b'i', b'p', b'0', b'1']);
        assert!(table.is_empty());
        let back = IndexedString::decode_with_table(&mut &out[..], &old, &table).unwrap();
        assert_eq!(back, "Bip01");
    }

    #[test]
    fn test_header_for_early_versions() {
        let h = HeaderString::for_version(VER_3_1);
        assert_eq!(h.header, "NetImmerse File Format, Version 3.1");
        assert_eq!(h.version(), Some(VER_3_1));
    }
}
