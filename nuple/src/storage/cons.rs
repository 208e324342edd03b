use super::{sealed, IntoMutList, IntoRefList, Storage};
use crate::unary::S;

/// One node of the generic recursive storage: a head element plus a nested storage for
/// the remaining elements, bottoming out at [`Empty`](super::Empty).
///
/// This is the correctness fallback of the layout set: it alone supports every element
/// sequence, including reference-typed elements and arbitrary arity, and it doubles as
/// the canonical form the generic tuple operations recurse over.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cons<H, T> {
    /// The first element.
    pub head: H,
    /// The storage of all elements after the first.
    pub tail: T,
}

impl<H, T: sealed::Storage> sealed::Storage for Cons<H, T> {}

impl<H, T: Storage> Storage for Cons<H, T> {
    type Length = S<T::Length>;
    type List = Cons<H, T::List>;

    fn from_list(list: Self::List) -> Self {
        Cons {
            head: list.head,
            tail: T::from_list(list.tail),
        }
    }

    fn into_list(self) -> Self::List {
        Cons {
            head: self.head,
            tail: self.tail.into_list(),
        }
    }
}

impl<'a, H, T> IntoRefList for &'a Cons<H, T>
where
    &'a T: IntoRefList,
{
    type RefList = Cons<&'a H, <&'a T as IntoRefList>::RefList>;

    fn ref_list(self) -> Self::RefList {
        Cons {
            head: &self.head,
            tail: IntoRefList::ref_list(&self.tail),
        }
    }
}

impl<'a, H, T> IntoMutList for &'a mut Cons<H, T>
where
    &'a mut T: IntoMutList,
{
    type MutList = Cons<&'a mut H, <&'a mut T as IntoMutList>::MutList>;

    fn mut_list(self) -> Self::MutList {
        Cons {
            head: &mut self.head,
            tail: IntoMutList::mut_list(&mut self.tail),
        }
    }
}
