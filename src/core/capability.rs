//! Compile-time capability probes.
//!
//! Two questions are answered about a concrete type without the type's author
//! opting in to anything beyond the traits it already implements:
//!
//! - [`is_iterable!`](crate::is_iterable): does `T` offer read-only traversal
//!   over its elements (an [`Iterable`] impl)? Resolves to a `bool`.
//! - [`is_member_of!`](crate::is_member_of): is `T` an instantiation of, or
//!   built on, a generic family such as `Vec<_>` or `[_; N]`, whatever its
//!   parameters? Resolves to the zero-sized [`True`] or [`False`].
//!
//! Both probes use method resolution on a zero-sized [`Probe`]: the positive
//! method only exists when the capability bound holds, otherwise resolution
//! falls through to the negative one via auto-ref. An absent capability is a
//! `false` answer, never a build error. Probes must name a concrete type; in
//! generic code use the [`Iterable`] / [`MemberOf`] bounds directly.

use std::collections::VecDeque;
use std::marker::PhantomData;

// ============================================================================
// Type-level booleans
// ============================================================================

/// A boolean carried in the type system.
pub trait TypeBool: Copy + Default + 'static {
    const VALUE: bool;

    #[inline]
    fn value(self) -> bool {
        Self::VALUE
    }
}

/// Type-level `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct True;

/// Type-level `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct False;

impl TypeBool for True {
    const VALUE: bool = true;
}

impl TypeBool for False {
    const VALUE: bool = false;
}

impl From<True> for bool {
    fn from(_: True) -> Self {
        true
    }
}

impl From<False> for bool {
    fn from(_: False) -> Self {
        false
    }
}

// ============================================================================
// Iterable
// ============================================================================

/// Read-only traversal over a value's elements.
///
/// `elements()` yields a cursor running from the first element to the
/// end-of-range; an exhausted cursor is the end sentinel. The cursor type is
/// the implementor's own, so storage need not be contiguous.
pub trait Iterable {
    /// Element type.
    type Elem;

    /// Cursor over the elements.
    type Iter<'a>: Iterator<Item = &'a Self::Elem>
    where
        Self: 'a;

    /// Cursor over all elements in order.
    fn elements(&self) -> Self::Iter<'_>;

    /// Number of elements.
    #[inline]
    fn num_elements(&self) -> usize {
        self.elements().count()
    }
}

impl<T> Iterable for [T] {
    type Elem = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T, const N: usize> Iterable for [T; N] {
    type Elem = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> Iterable for Vec<T> {
    type Elem = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<T> Iterable for VecDeque<T> {
    type Elem = T;
    type Iter<'a> = std::collections::vec_deque::Iter<'a, T> where Self: 'a;

    #[inline]
    fn elements(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

// ============================================================================
// Template families
// ============================================================================

/// Tag naming a generic family of types.
pub trait Family: 'static {}

/// `Vec<T>` for any `T`.
#[derive(Clone, Copy, Debug, Default)]
pub struct VecFamily;

/// `[T; N]` for any `T` and `N`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrayFamily;

/// Owned text values.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextFamily;

impl Family for VecFamily {}
impl Family for ArrayFamily {}
impl Family for TextFamily {}

/// `Self` belongs to family `F`, directly or by wrapping one of its members.
pub trait MemberOf<F: Family> {}

impl<T> MemberOf<VecFamily> for Vec<T> {}
impl<T, const N: usize> MemberOf<ArrayFamily> for [T; N] {}
impl MemberOf<TextFamily> for String {}

// ============================================================================
// Probes
// ============================================================================

/// Zero-sized probe over `T`. Only the probe macros construct it.
#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> Probe<T> {
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

#[doc(hidden)]
pub trait IterableHit {
    #[inline]
    fn iterable_probe(&self) -> True {
        True
    }
}

impl<T: ?Sized + Iterable> IterableHit for Probe<T> {}

#[doc(hidden)]
pub trait IterableMiss {
    #[inline]
    fn iterable_probe(&self) -> False {
        False
    }
}

impl<T: ?Sized> IterableMiss for &Probe<T> {}

/// Zero-sized probe over `T` against family `F`.
#[doc(hidden)]
pub struct FamilyProbe<F, T: ?Sized>(PhantomData<(fn() -> F, fn() -> *const T)>);

impl<F, T: ?Sized> FamilyProbe<F, T> {
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

#[doc(hidden)]
pub trait FamilyHit {
    #[inline]
    fn family_probe(&self) -> True {
        True
    }
}

impl<F: Family, T: ?Sized + MemberOf<F>> FamilyHit for FamilyProbe<F, T> {}

#[doc(hidden)]
pub trait FamilyMiss {
    #[inline]
    fn family_probe(&self) -> False {
        False
    }
}

impl<F, T: ?Sized> FamilyMiss for &FamilyProbe<F, T> {}

/// `true` if the concrete type implements [`Iterable`], `false` otherwise.
///
/// ```
/// use nif::is_iterable;
/// use nif::types::{ByteBuffer, PackedColor};
///
/// assert!(is_iterable!(ByteBuffer));
/// assert!(!is_iterable!(PackedColor));
/// ```
#[macro_export]
macro_rules! is_iterable {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::core::capability::{IterableHit as _, IterableMiss as _};
        $crate::core::capability::TypeBool::value(
            (&$crate::core::capability::Probe::<$t>::new()).iterable_probe(),
        )
    }};
}

/// [`True`] if the concrete type is a member of the family, [`False`] otherwise.
///
/// ```
/// use nif::is_member_of;
/// use nif::core::capability::{TypeBool, VecFamily};
/// use nif::types::{ByteBuffer, HalfFloat};
///
/// assert!(is_member_of!(ByteBuffer, VecFamily).value());
/// assert!(!is_member_of!(HalfFloat, VecFamily).value());
/// ```
#[macro_export]
macro_rules! is_member_of {
    ($t:ty, $family:ty) => {{
        #[allow(unused_imports)]
        use $crate::core::capability::{FamilyHit as _, FamilyMiss as _};
        (&$crate::core::capability::FamilyProbe::<$family, $t>::new()).family_probe()
    }};
}
