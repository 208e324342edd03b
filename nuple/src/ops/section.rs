use crate::storage::{Cons, Empty, Storage};
use crate::unary::{Unary, S, Z};

/// Copy a contiguous run of `L` elements starting at index `I` out of a borrowed chain
/// into a fresh owned chain.
///
/// `I` and `L` are type-level unary numbers; a run that would read past the end of the
/// chain has no implementation and does not compile. Elements inside the run must be
/// `Clone`; elements outside it are never touched.
pub trait Section<I: Unary, L: Unary> {
    /// The chain holding the copied run.
    type Out: Storage;

    /// Copy the run out.
    fn section(&self) -> Self::Out;
}

// A zero-length run is the empty chain, wherever it starts.
impl<T> Section<Z, Z> for T {
    type Out = Empty;

    fn section(&self) -> Empty {
        Empty
    }
}

impl<'a, A, As, M> Section<Z, S<M>> for Cons<&'a A, As>
where
    A: Clone,
    M: Unary,
    As: Section<Z, M>,
{
    type Out = Cons<A, <As as Section<Z, M>>::Out>;

    fn section(&self) -> Self::Out {
        Cons {
            head: Clone::clone(self.head),
            tail: self.tail.section(),
        }
    }
}

impl<'a, A, As, I, L> Section<S<I>, L> for Cons<&'a A, As>
where
    I: Unary,
    L: Unary,
    As: Section<I, L>,
{
    type Out = <As as Section<I, L>>::Out;

    fn section(&self) -> Self::Out {
        self.tail.section()
    }
}
