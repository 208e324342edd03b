//! Conversions back and forth between native flat tuples like `(P, Q, R)` and the
//! corresponding inductive element lists like `Cons<P, Cons<Q, Cons<R, Empty>>>`.
//!
//! Internally, this library traverses inductive lists, but constructs from and
//! destructures into native tuples, for readability and for integration with the host
//! language's pattern matching. The traits here convert between the two equivalent
//! representations.
//!
//! At present, tuples up to size 32 are supported.

/// Convert a native tuple into its corresponding inductive list.
pub trait IntoList: Sized {
    /// The corresponding inductive list.
    type AsList: ListToTuple<AsTuple = Self>;

    /// Perform the conversion, moving each element.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list into its corresponding native tuple.
pub trait ListToTuple: Sized {
    /// The corresponding native tuple.
    type AsTuple: IntoList<AsList = Self>;

    /// Perform the conversion, moving each element.
    fn into_tuple(self) -> Self::AsTuple;
}

nuple_macro::impl_tuples!(32);
