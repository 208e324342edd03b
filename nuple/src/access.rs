//! Uniform element access over every storage layout.
//!
//! [`At`] retrieves the element at a type-level index under the three value categories
//! Rust distinguishes: shared borrow, unique borrow, and owned move. Whatever the
//! layout, the handle's category exactly mirrors how the storage itself was accessed;
//! this is the contract that lets the [`Tuple`](crate::Tuple) facade forward value
//! category transparently through indexing, extraction, and invocation.
//!
//! [`AccessBy`] is the same operation as a single generic entry point, parameterized by
//! an access [`Category`] instead of picking one of the three methods.

use crate::storage::{Cons, Storage};
use crate::unary::{LessThan, S, Unary, Z};

/// Access the element at type-level index `N`.
///
/// An index out of range is not an error value but a missing implementation: `At<N>`
/// only exists for `N` strictly less than the storage's length, so misuse fails to
/// compile.
///
/// On the flat and packed layouts every index is a direct field or array-slot selection;
/// on the recursive layout the recursion is entirely type-level and compiles to the same
/// single field offset.
pub trait At<N: Unary>: Storage
where
    N: LessThan<Self::Length>,
{
    /// The type of the element at index `N`.
    type Element;

    /// Borrow the element.
    fn at(&self) -> &Self::Element;

    /// Uniquely borrow the element.
    fn at_mut(&mut self) -> &mut Self::Element;

    /// Move the element out, relinquishing the rest of the storage.
    fn into_at(self) -> Self::Element;
}

impl<H, T: Storage> At<Z> for Cons<H, T> {
    type Element = H;

    fn at(&self) -> &H {
        &self.head
    }

    fn at_mut(&mut self) -> &mut H {
        &mut self.head
    }

    fn into_at(self) -> H {
        self.head
    }
}

impl<H, T, N> At<S<N>> for Cons<H, T>
where
    N: Unary + LessThan<T::Length>,
    T: At<N>,
{
    type Element = T::Element;

    fn at(&self) -> &T::Element {
        self.tail.at()
    }

    fn at_mut(&mut self) -> &mut T::Element {
        self.tail.at_mut()
    }

    fn into_at(self) -> T::Element {
        self.tail.into_at()
    }
}

/// How an access takes its storage and hands back the element: by value, by shared
/// borrow, or by unique borrow.
///
/// This is a sealed trait with exactly three implementors: [`Val`], [`Ref`], and
/// [`Mut`].
pub trait Category: sealed::Category {}

/// Access by value: the storage is consumed and the element is moved out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Val;

/// Access by shared borrow: the storage is borrowed and so is the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ref;

/// Access by unique borrow: the storage is uniquely borrowed and so is the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Mut;

impl Category for Val {}
impl Category for Ref {}
impl Category for Mut {}

/// The handle a `T` becomes under access category `C` for lifetime `'a`: `T` itself,
/// `&'a T`, or `&'a mut T`.
///
/// Applying this to both sides of an access is what keeps the storage argument and the
/// element result under the same category.
pub trait Handle<'a, C: Category> {
    /// The handle type.
    type Of;
}

impl<'a, T> Handle<'a, Val> for T {
    type Of = T;
}

impl<'a, T: 'a> Handle<'a, Ref> for T {
    type Of = &'a T;
}

impl<'a, T: 'a> Handle<'a, Mut> for T {
    type Of = &'a mut T;
}

/// One generic entry point for element access, parameterized by access category: the
/// storage argument and the element result are taken and returned under the *same*
/// category `C`.
///
/// `AccessBy<'a, N, Val>` consumes the storage and yields the element by value;
/// `AccessBy<'a, N, Ref>` and `AccessBy<'a, N, Mut>` borrow it and yield a handle
/// borrowed for the same lifetime.
///
/// # Examples
///
/// ```
/// use nuple::access::AccessBy;
/// use nuple::prelude::*;
/// use nuple::storage::Cons;
/// use nuple::unary::{S, Z};
///
/// let pair: Tuple![u8, &'static str] = tuple!(1, "one");
/// let storage = pair.into_storage();
///
/// let name: &&'static str = <Cons<u8, _> as AccessBy<S<Z>, Ref>>::access(&storage);
/// assert_eq!(*name, "one");
///
/// let byte: u8 = <Cons<u8, _> as AccessBy<Z, Val>>::access(storage);
/// assert_eq!(byte, 1);
/// ```
pub trait AccessBy<'a, N, C>: At<N>
where
    N: Unary + LessThan<Self::Length>,
    C: Category,
    Self: Handle<'a, C>,
    Self::Element: Handle<'a, C>,
{
    /// Retrieve the element at `N` from a storage taken under category `C`, returning
    /// it under the same category.
    fn access(storage: <Self as Handle<'a, C>>::Of) -> <Self::Element as Handle<'a, C>>::Of;
}

impl<'a, N, T> AccessBy<'a, N, Val> for T
where
    N: Unary + LessThan<T::Length>,
    T: At<N>,
{
    fn access(storage: T) -> T::Element {
        storage.into_at()
    }
}

impl<'a, N, T> AccessBy<'a, N, Ref> for T
where
    N: Unary + LessThan<T::Length>,
    T: At<N> + 'a,
    T::Element: 'a,
{
    fn access(storage: &'a T) -> &'a T::Element {
        storage.at()
    }
}

impl<'a, N, T> AccessBy<'a, N, Mut> for T
where
    N: Unary + LessThan<T::Length>,
    T: At<N> + 'a,
    T::Element: 'a,
{
    fn access(storage: &'a mut T) -> &'a mut T::Element {
        storage.at_mut()
    }
}

mod sealed {
    use super::{Mut, Ref, Val};

    pub trait Category {}
    impl Category for Val {}
    impl Category for Ref {}
    impl Category for Mut {}
}
