//! The closed set of physical layouts a tuple's elements may be stored in: [`Empty`],
//! the generic recursive [`Cons`], the packed homogeneous [`Packed`], and the explicit
//! small layouts [`Flat1`] through [`Flat6`].
//!
//! Which layout a written element-type sequence gets is decided by the
//! [`Tuple!`](crate::Tuple!) selector macro; see its documentation for the precedence
//! rules. Nothing in the public contract of [`Tuple`](crate::Tuple) depends on the
//! choice: every layout implements the same access, traversal, and conversion traits,
//! and tuples of different layouts compare and assign freely.
//!
//! [`Storage`] is sealed: the variant set is closed by construction.

mod cons;
mod empty;
mod flat;
mod packed;

pub use cons::Cons;
pub use empty::Empty;
pub use flat::{Flat1, Flat2, Flat3, Flat4, Flat5, Flat6};
pub use packed::Packed;

use crate::unary::Unary;

/// A physical layout holding the elements of one tuple.
///
/// Every layout can be converted to and from its *canonical inductive form*: the
/// [`Cons`]/[`Empty`] chain holding the same elements in the same order. The generic
/// operations on tuples (traversal, comparison, extraction, conversion) are all written
/// against that form, which is what makes the chosen layout unobservable.
pub trait Storage: Sized + sealed::Storage {
    /// The arity of this layout, as a type-level number.
    type Length: Unary;

    /// The canonical inductive form: a [`Cons`] chain of the same elements.
    type List: Storage;

    /// The arity of this layout, as a value.
    const LEN: usize = <Self::Length as Unary>::VALUE;

    /// Rebuild this layout from its canonical inductive form.
    fn from_list(list: Self::List) -> Self;

    /// Convert this layout into its canonical inductive form, moving the elements.
    fn into_list(self) -> Self::List;
}

/// Borrow a storage as a [`Cons`] chain of shared references to its elements.
///
/// Implemented for `&S` rather than `S` so that a method can demand it for the concrete
/// lifetime of its own borrow (`&'s S: IntoRefList`) without constraining the elements
/// themselves.
pub trait IntoRefList {
    /// The chain of `&T` handles, in element order.
    type RefList: Storage;

    /// Produce the reference chain.
    fn ref_list(self) -> Self::RefList;
}

/// Borrow a storage as a [`Cons`] chain of unique references to its elements.
pub trait IntoMutList {
    /// The chain of `&mut T` handles, in element order.
    type MutList: Storage;

    /// Produce the mutable reference chain.
    fn mut_list(self) -> Self::MutList;
}

pub(crate) mod sealed {
    pub trait Storage {}
}
