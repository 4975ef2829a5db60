//! Type category markers.
//!
//! Every format-level type belongs to exactly one of two categories:
//!
//! - [`Native`]: an atomic leaf for generic traversal, even when it has
//!   sub-fields (strings, colors, half floats).
//! - [`Compound`]: traversal recurses into the type's fields or elements
//!   (byte buffers, fixed arrays, multi-field records).
//!
//! Membership is declared once through [`NifType::Category`]. Because it is an
//! associated type a type cannot name both, and the markers are zero-sized so
//! the tag never costs storage.

use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Native {}
    impl Sealed for super::Compound {}
}

/// Marker for types traversal treats as leaves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Native;

/// Marker for types traversal recurses into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Compound;

/// Runtime name of a category, for diagnostics and dispatch tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Native,
    Compound,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Compound => write!(f, "compound"),
        }
    }
}

/// One of the two category markers. Sealed: no third category exists.
pub trait Category: sealed::Sealed + Copy + Default + 'static {
    const KIND: CategoryKind;
}

impl Category for Native {
    const KIND: CategoryKind = CategoryKind::Native;
}

impl Category for Compound {
    const KIND: CategoryKind = CategoryKind::Compound;
}

/// A type that takes part in the format's generic traversal.
pub trait NifType {
    /// Which category this type belongs to.
    type Category: Category;

    /// Name used in diagnostics.
    const TYPE_NAME: &'static str;
}

/// Category of `T`, resolved at compile time.
#[inline]
pub const fn category_of<T: NifType + ?Sized>() -> CategoryKind {
    <T::Category as Category>::KIND
}

/// Shorthand for [`category_of`] being [`CategoryKind::Native`].
#[inline]
pub const fn is_native<T: NifType + ?Sized>() -> bool {
    matches!(category_of::<T>(), CategoryKind::Native)
}

/// Shorthand for [`category_of`] being [`CategoryKind::Compound`].
#[inline]
pub const fn is_compound<T: NifType + ?Sized>() -> bool {
    matches!(category_of::<T>(), CategoryKind::Compound)
}

macro_rules! native_scalars {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl NifType for $ty {
                type Category = Native;
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

native_scalars! {
    bool => "bool",
    u8 => "byte",
    i8 => "sbyte",
    u16 => "ushort",
    i16 => "short",
    u32 => "uint",
    i32 => "int",
    u64 => "uint64",
    i64 => "int64",
    f32 => "float",
    String => "string",
}

impl<T: NifType, const N: usize> NifType for [T; N] {
    type Category = Compound;
    const TYPE_NAME: &'static str = "array";
}

impl<T: NifType> NifType for Vec<T> {
    type Category = Compound;
    const TYPE_NAME: &'static str = "vector";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<Native>(), 0);
        assert_eq!(std::mem::size_of::<Compound>(), 0);
    }

    #[test]
    fn test_scalar_categories() {
        assert!(is_native::<u32>());
        assert!(is_native::<f32>());
        assert!(!is_compound::<String>());
    }

    #[test]
    fn test_container_categories() {
        assert_eq!(category_of::<[f32; 3]>(), CategoryKind::Compound);
        assert_eq!(category_of::<Vec<u16>>(), CategoryKind::Compound);
    }

    #[test]
    fn test_category_is_const() {
        const KIND: CategoryKind = category_of::<i16>();
        assert_eq!(KIND, CategoryKind::Native);
        assert_eq!(KIND.to_string(), "native");
    }
}
