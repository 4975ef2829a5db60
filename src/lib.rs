//! # nif
//!
//! Core types of the NIF (NetImmerse / Gamebryo) binary 3D model format.
//!
//! This crate holds the vocabulary every record of the format is built from:
//! the primitive encodings (header and line strings, short and indexed
//! strings, packed colors, half floats, byte buffers), the per-file
//! [`FormatMetadata`] (version, user versions, byte order, provenance), and the
//! type-category and capability machinery generic traversal relies on.
//!
//! ## Modules
//!
//! - [`util`] - Errors, byte order, version numbers
//! - [`core`] - Category markers, capability probes, format metadata
//! - [`types`] - Primitive value types
//! - [`io`] - `Decode` / `Encode` traits
//!
//! ## Example
//!
//! ```
//! use nif::prelude::*;
//! use nif::util::version::VER_20_0_0_5;
//!
//! let info = FormatMetadata::new(VER_20_0_0_5);
//! let bytes = encode_to_vec(&ShortString::new("Scene Root"), &info)?;
//! let (name, _) = decode_from_slice::<ShortString>(&bytes, &info)?;
//! assert_eq!(name.str, "Scene Root");
//! # Ok::<(), nif::Error>(())
//! ```

pub mod util;
pub mod core;
pub mod types;
pub mod io;

// Re-export commonly used types
pub use util::{ByteOrder, Error, Result};
pub use core::FormatMetadata;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{ByteOrder, Error, Result};
    pub use crate::core::{
        category_of, Category, CategoryKind, Compound, FormatMetadata, Iterable, Native, NifType,
    };
    pub use crate::io::{decode_from_slice, encode_to_vec, Decode, Encode};
    pub use crate::types::*;
    pub use crate::{is_iterable, is_member_of};
}
