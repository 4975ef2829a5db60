//! Utility types and functions for the NIF core.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`ByteOrder`] - File byte order and endian-aware scalar access
//! - [`version`] - Packed version numbers

mod error;
mod byte_order;
pub mod version;

pub use error::*;
pub use byte_order::*;
