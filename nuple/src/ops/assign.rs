use crate::access::At;
use crate::storage::{Cons, Empty, Storage};
use crate::unary::{LessThan, S, Unary};

/// Elementwise conversion-assignment of an owned source chain into a storage of any
/// layout, left to right.
///
/// Implemented on the remaining source chain, with `I` tracking the destination index.
/// Each source element is converted with [`Into`] (so same-type assignment is included)
/// and written into the destination slot.
pub trait AssignInto<A, I: Unary> {
    /// Assign every remaining element in order.
    fn assign_into(self, target: &mut A);
}

impl<A, I: Unary> AssignInto<A, I> for Empty {
    fn assign_into(self, _: &mut A) {}
}

impl<H, T, A, I> AssignInto<A, I> for Cons<H, T>
where
    I: Unary + LessThan<<A as Storage>::Length>,
    A: At<I>,
    H: Into<<A as At<I>>::Element>,
    T: AssignInto<A, S<I>>,
{
    fn assign_into(self, target: &mut A) {
        *<A as At<I>>::at_mut(target) = self.head.into();
        self.tail.assign_into(target);
    }
}

/// Elementwise conversion-assignment through a chain of unique references, left to
/// right.
///
/// The source chain is consumed; each source element is converted with [`Into`] (so
/// same-type assignment is included) and written through the corresponding destination
/// handle.
pub trait ListAssign<Src> {
    /// Assign every position in order.
    fn assign_from(self, src: Src);
}

impl ListAssign<Empty> for Empty {
    fn assign_from(self, _: Empty) {}
}

impl<'a, A, B, As, Bs> ListAssign<Cons<B, Bs>> for Cons<&'a mut A, As>
where
    B: Into<A>,
    As: ListAssign<Bs>,
{
    fn assign_from(self, src: Cons<B, Bs>) {
        *self.head = src.head.into();
        self.tail.assign_from(src.tail);
    }
}
