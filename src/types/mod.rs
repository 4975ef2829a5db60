//! Primitive value types of the format.
//!
//! - [`HeaderString`], [`LineString`], [`ShortString`] - Line and length-prefixed text
//! - [`IndexedString`], [`CharString`] - `String` stand-ins tagged as native leaves
//! - [`PackedColor`] - 8-bit RGBA with a packed 32-bit view
//! - [`HalfFloat`] - Half float kept as raw bits
//! - [`ByteBuffer`] - Raw bytes, traversed as a compound

mod string;
mod color;
mod hfloat;
mod bytes;

pub use string::*;
pub use color::*;
pub use hfloat::*;
pub use bytes::*;

/// Bit flags field.
pub type Flags = u16;
