use crate::access::At;
use crate::storage::Storage;
use crate::unary::{LessThan, S, Unary, Z};

/// Generalized lexicographic less-than over two equal-arity storages.
///
/// No single shared ordering is assumed across positions: each pair is compared with
/// its own types' `<`. The relation is the fold
///
/// ```text
/// res(0) = e0 < f0
/// res(i) = res(i-1) || (e_i < f_i && !(f_{i-1} < e_{i-1}))
/// ```
///
/// which needs only `<` in both directions at every position and agrees with ordinary
/// lexicographic comparison wherever the per-position relations are total.
///
/// Implemented on the count of positions left to fold; the entry point is the storages'
/// full length with `I = Z`, `res = false`, and `prev_gt = false`.
pub trait OrdFold<A, B, I: Unary> {
    /// Fold every position from `I` onward.
    fn lt_from(lhs: &A, rhs: &B, res: bool, prev_gt: bool) -> bool;
}

impl<A, B, I: Unary> OrdFold<A, B, I> for Z {
    fn lt_from(_: &A, _: &B, res: bool, _prev_gt: bool) -> bool {
        res
    }
}

impl<M, A, B, I> OrdFold<A, B, I> for S<M>
where
    M: OrdFold<A, B, S<I>>,
    I: Unary + LessThan<<A as Storage>::Length> + LessThan<<B as Storage>::Length>,
    A: At<I>,
    B: At<I>,
    <A as At<I>>::Element: PartialOrd<<B as At<I>>::Element>,
    <B as At<I>>::Element: PartialOrd<<A as At<I>>::Element>,
{
    fn lt_from(lhs: &A, rhs: &B, res: bool, prev_gt: bool) -> bool {
        let e = <A as At<I>>::at(lhs);
        let f = <B as At<I>>::at(rhs);
        let res = res || (*e < *f && !prev_gt);
        M::lt_from(lhs, rhs, res, *f < *e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Cons, Empty};
    use crate::unary::UnaryOf;

    fn pair(a: i32, b: i32) -> Cons<i32, Cons<i32, Empty>> {
        Cons {
            head: a,
            tail: Cons {
                head: b,
                tail: Empty,
            },
        }
    }

    fn lt(lhs: &Cons<i32, Cons<i32, Empty>>, rhs: &Cons<i32, Cons<i32, Empty>>) -> bool {
        <UnaryOf<2> as OrdFold<_, _, Z>>::lt_from(lhs, rhs, false, false)
    }

    #[test]
    fn lead_position_dominates_trailing_positions() {
        assert!(lt(&pair(1, 3), &pair(1, 5)));
        assert!(!lt(&pair(2, 0), &pair(1, 5)));
        assert!(lt(&pair(1, 5), &pair(2, 0)));
        assert!(!lt(&pair(1, 5), &pair(1, 5)));
    }

    #[test]
    fn empty_storages_never_compare_less() {
        assert!(!<Z as OrdFold<_, _, Z>>::lt_from(&Empty, &Empty, false, false));
    }
}
