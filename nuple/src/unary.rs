//! The unary type-level numbers, represented by zero [`Z`] and successor [`S`]: the
//! compile-time index tokens used to select tuple elements. They have no runtime
//! representation beyond being zero-sized.

/// The number zero.
///
/// # Examples
///
/// ```
/// use nuple::unary::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use nuple::unary::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// A convenient type synonym for writing out unary types using constants.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// All unary numbers can be converted to their value-level equivalent `usize`.
///
/// # Examples
///
/// ```
/// use nuple::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<2>>::VALUE, 2);
/// // ...
/// assert_eq!(<UnaryOf<32>>::VALUE, 32);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level number, as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Ensure that a unary number is strictly less than some other number.
///
/// Element access uses this as its range guard: an index is valid for a tuple exactly
/// when it is `LessThan` the tuple's length.
///
/// # Examples
///
/// This compiles, because `1 < 2`:
///
/// ```
/// use nuple::unary::*;
///
/// fn ok() where UnaryOf<1>: LessThan<UnaryOf<2>> {}
/// ```
///
/// But this does not compile, because `2 >= 1`:
///
/// ```compile_fail
/// # use nuple::unary::*;
/// #
/// fn bad() where UnaryOf<2>: LessThan<UnaryOf<1>> {}
/// ```
///
/// Because [`LessThan`] is a *strict* less-than relationship (i.e. `<`, not `<=`), this
/// does not compile either:
///
/// ```compile_fail
/// # use nuple::unary::*;
/// #
/// fn bad() where UnaryOf<16>: LessThan<UnaryOf<16>> {}
/// ```
pub trait LessThan<N: Unary>
where
    Self: Unary,
{
}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// Subtract one unary number from another at the type level. Defined only when the
/// result is non-negative, which is what makes ill-ordered extraction ranges
/// unrepresentable.
///
/// # Examples
///
/// ```
/// use nuple::unary::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(UnaryOf<3>, UnaryOf<1>) as Sub>::Result, UnaryOf<2>);
/// assert_type_eq_all!(<(UnaryOf<7>, UnaryOf<7>) as Sub>::Result, UnaryOf<0>);
/// ```
///
/// `1 - 3` is not a natural number, so this does not compile:
///
/// ```compile_fail
/// # use nuple::unary::*;
/// #
/// fn bad() where (UnaryOf<1>, UnaryOf<3>): Sub {}
/// ```
pub trait Sub: sealed::Sub {
    /// The result of the subtraction.
    type Result: Unary;
}

impl<N: Unary> Sub for (N, Z) {
    type Result = N;
}

impl<N: Unary, M: Unary> Sub for (S<N>, S<M>)
where
    (N, M): Sub,
{
    type Result = <(N, M) as Sub>::Result;
}

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {}

/// A wrapper for type-level `usize` values to allow implementing traits on them.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// A trait which allows conversion from a wrapper type over a type-level `usize` to a
/// unary type-level number representation.
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// A trait which allows conversion from a unary type-level representation to a wrapper
/// over a type-level `usize`.
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

nuple_macro::generate_unary_conversion_impls!(32);

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}

    pub trait Sub {}
    impl<N: Unary, M: Unary> Sub for (N, M) {}
}
