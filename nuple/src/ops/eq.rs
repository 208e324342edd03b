use crate::access::At;
use crate::storage::Storage;
use crate::unary::{LessThan, S, Unary, Z};

/// Pairwise equality of two equal-arity storages, one position per step.
///
/// Implemented on the count of positions left to compare, so resolution is driven by
/// the storages' type-level length; the facade starts the fold at the full length with
/// `I = Z`. An arity mismatch is a missing implementation rather than a runtime
/// `false`, and two empty storages are unconditionally equal.
///
/// ```compile_fail
/// use nuple::prelude::*;
///
/// let a: Tuple![i32] = Tuple::new((1,));
/// let b: Tuple![i32, i32] = Tuple::new((1, 2));
/// let _ = a == b;
/// ```
pub trait EqFold<A, B, I: Unary> {
    /// Compare every position from `I` onward.
    fn eq_from(lhs: &A, rhs: &B) -> bool;
}

impl<A, B, I: Unary> EqFold<A, B, I> for Z {
    fn eq_from(_: &A, _: &B) -> bool {
        true
    }
}

impl<M, A, B, I> EqFold<A, B, I> for S<M>
where
    M: EqFold<A, B, S<I>>,
    I: Unary + LessThan<<A as Storage>::Length> + LessThan<<B as Storage>::Length>,
    A: At<I>,
    B: At<I>,
    <A as At<I>>::Element: PartialEq<<B as At<I>>::Element>,
{
    fn eq_from(lhs: &A, rhs: &B) -> bool {
        <A as At<I>>::at(lhs) == <B as At<I>>::at(rhs) && M::eq_from(lhs, rhs)
    }
}
