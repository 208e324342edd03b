//! Structural introspection: naming a tuple's arity, its element types, and the common
//! handle type shared by two storages.

use crate::access::At;
use crate::storage::{Cons, Empty, Storage};
use crate::unary::UnaryOf;

/// The arity of a storage, as a type-level number.
pub type Arity<S> = <S as Storage>::Length;

/// The type of the element at index `I` of storage `S`.
///
/// ```
/// use nuple::introspect::ElementAt;
/// use nuple::storage::Flat2;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ElementAt<Flat2<i32, f64>, 1>, f64);
/// ```
pub type ElementAt<S, const I: usize> = <S as At<UnaryOf<I>>>::Element;

/// The handle type through which both `Self` and `U` can be read.
///
/// A type is its own common handle, and a unique reference weakens to a shared one, so
/// `&'a mut T` and `&'a T` meet at `&'a T`. Anything else has no common handle and the
/// projection does not exist.
pub trait CommonHandle<U> {
    /// The meet of the two handle types.
    type Common;
}

impl<T> CommonHandle<T> for T {
    type Common = T;
}

impl<'a, T> CommonHandle<&'a T> for &'a mut T {
    type Common = &'a T;
}

impl<'a, T> CommonHandle<&'a mut T> for &'a T {
    type Common = &'a T;
}

/// Positionwise [`CommonHandle`] over two equal-length chains.
pub trait Unify<Other> {
    /// The chain of common handles.
    type Unified: Storage;
}

impl Unify<Empty> for Empty {
    type Unified = Empty;
}

impl<A, B, As, Bs> Unify<Cons<B, Bs>> for Cons<A, As>
where
    A: CommonHandle<B>,
    As: Unify<Bs>,
{
    type Unified = Cons<A::Common, As::Unified>;
}

/// The storage of common handles for two storages of equal arity, built by unifying
/// their canonical inductive forms.
///
/// ```
/// use nuple::introspect::Common;
/// use nuple::storage::{Cons, Empty};
/// use static_assertions::assert_type_eq_all;
///
/// type Muts<'a> = Cons<&'a mut u8, Empty>;
/// type Refs<'a> = Cons<&'a u8, Empty>;
///
/// assert_type_eq_all!(Common<Muts<'static>, Refs<'static>>, Refs<'static>);
/// ```
pub type Common<S, P> = <<S as Storage>::List as Unify<<P as Storage>::List>>::Unified;
