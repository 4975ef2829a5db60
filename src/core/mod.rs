//! Core layer - type categories, capability probes, and file metadata.
//!
//! This module provides:
//! - [`Native`] / [`Compound`] - Category markers and the [`NifType`] trait
//! - [`capability`] - [`Iterable`] and template-family probes
//! - [`FormatMetadata`] - Version, byte order and provenance of a file

mod category;
pub mod capability;
mod info;

pub use category::{
    category_of, is_compound, is_native, Category, CategoryKind, Compound, Native, NifType,
};
pub use capability::{Family, Iterable, MemberOf, TypeBool, True, False};
pub use info::FormatMetadata;
