//! The explicit small layouts: one uniquely named field per element, no recursion, for
//! non-reference sequences of arity 1 through 6. Keeping these flat shortens generated
//! type names and keeps debugger output legible for the overwhelmingly common small
//! tuples.

use super::{sealed, Cons, Empty, IntoMutList, IntoRefList, Storage};
use crate::access::At;
use crate::unary::{S, Z};

/// Explicit storage for one element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat1<T0> {
    /// Element 0.
    pub member0: T0,
}

/// Explicit storage for two elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat2<T0, T1> {
    /// Element 0.
    pub member0: T0,
    /// Element 1.
    pub member1: T1,
}

/// Explicit storage for three elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat3<T0, T1, T2> {
    /// Element 0.
    pub member0: T0,
    /// Element 1.
    pub member1: T1,
    /// Element 2.
    pub member2: T2,
}

/// Explicit storage for four elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat4<T0, T1, T2, T3> {
    /// Element 0.
    pub member0: T0,
    /// Element 1.
    pub member1: T1,
    /// Element 2.
    pub member2: T2,
    /// Element 3.
    pub member3: T3,
}

/// Explicit storage for five elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat5<T0, T1, T2, T3, T4> {
    /// Element 0.
    pub member0: T0,
    /// Element 1.
    pub member1: T1,
    /// Element 2.
    pub member2: T2,
    /// Element 3.
    pub member3: T3,
    /// Element 4.
    pub member4: T4,
}

/// Explicit storage for six elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat6<T0, T1, T2, T3, T4, T5> {
    /// Element 0.
    pub member0: T0,
    /// Element 1.
    pub member1: T1,
    /// Element 2.
    pub member2: T2,
    /// Element 3.
    pub member3: T3,
    /// Element 4.
    pub member4: T4,
    /// Element 5.
    pub member5: T5,
}

macro_rules! cons_list {
    () => { Empty };
    ($head:ty $(, $rest:ty)*) => { Cons<$head, cons_list!($($rest),*)> };
}

macro_rules! cons_expr {
    () => { Empty };
    ($head:expr $(, $rest:expr)*) => { Cons { head: $head, tail: cons_expr!($($rest),*) } };
}

macro_rules! flat_storage {
    ($name:ident, $length:ty, $($member:ident : $t:ident),+) => {
        impl<$($t),+> sealed::Storage for $name<$($t),+> {}

        impl<$($t),+> Storage for $name<$($t),+> {
            type Length = $length;
            type List = cons_list!($($t),+);

            fn from_list(list: Self::List) -> Self {
                $(let Cons { head: $member, tail: list } = list;)+
                let Empty = list;
                $name { $($member),+ }
            }

            fn into_list(self) -> Self::List {
                cons_expr!($(self.$member),+)
            }
        }

        impl<'a, $($t: 'a),+> IntoRefList for &'a $name<$($t),+> {
            type RefList = cons_list!($(&'a $t),+);

            fn ref_list(self) -> Self::RefList {
                cons_expr!($(&self.$member),+)
            }
        }

        impl<'a, $($t: 'a),+> IntoMutList for &'a mut $name<$($t),+> {
            type MutList = cons_list!($(&'a mut $t),+);

            fn mut_list(self) -> Self::MutList {
                cons_expr!($(&mut self.$member),+)
            }
        }
    };
}

flat_storage!(Flat1, S<Z>, member0: T0);
flat_storage!(Flat2, S<S<Z>>, member0: T0, member1: T1);
flat_storage!(Flat3, S<S<S<Z>>>, member0: T0, member1: T1, member2: T2);
flat_storage!(Flat4, S<S<S<S<Z>>>>, member0: T0, member1: T1, member2: T2, member3: T3);
flat_storage!(
    Flat5,
    S<S<S<S<S<Z>>>>>,
    member0: T0,
    member1: T1,
    member2: T2,
    member3: T3,
    member4: T4
);
flat_storage!(
    Flat6,
    S<S<S<S<S<S<Z>>>>>>,
    member0: T0,
    member1: T1,
    member2: T2,
    member3: T3,
    member4: T4,
    member5: T5
);

// Direct field selection, one impl per position, so access never recurses.
macro_rules! flat_at {
    ($name:ident, ($($t:ident),+), $member:ident, $elem:ident, $index:ty) => {
        impl<$($t),+> At<$index> for $name<$($t),+> {
            type Element = $elem;

            fn at(&self) -> &$elem {
                &self.$member
            }

            fn at_mut(&mut self) -> &mut $elem {
                &mut self.$member
            }

            fn into_at(self) -> $elem {
                self.$member
            }
        }
    };
}

flat_at!(Flat1, (T0), member0, T0, Z);

flat_at!(Flat2, (T0, T1), member0, T0, Z);
flat_at!(Flat2, (T0, T1), member1, T1, S<Z>);

flat_at!(Flat3, (T0, T1, T2), member0, T0, Z);
flat_at!(Flat3, (T0, T1, T2), member1, T1, S<Z>);
flat_at!(Flat3, (T0, T1, T2), member2, T2, S<S<Z>>);

flat_at!(Flat4, (T0, T1, T2, T3), member0, T0, Z);
flat_at!(Flat4, (T0, T1, T2, T3), member1, T1, S<Z>);
flat_at!(Flat4, (T0, T1, T2, T3), member2, T2, S<S<Z>>);
flat_at!(Flat4, (T0, T1, T2, T3), member3, T3, S<S<S<Z>>>);

flat_at!(Flat5, (T0, T1, T2, T3, T4), member0, T0, Z);
flat_at!(Flat5, (T0, T1, T2, T3, T4), member1, T1, S<Z>);
flat_at!(Flat5, (T0, T1, T2, T3, T4), member2, T2, S<S<Z>>);
flat_at!(Flat5, (T0, T1, T2, T3, T4), member3, T3, S<S<S<Z>>>);
flat_at!(Flat5, (T0, T1, T2, T3, T4), member4, T4, S<S<S<S<Z>>>>);

flat_at!(Flat6, (T0, T1, T2, T3, T4, T5), member0, T0, Z);
flat_at!(Flat6, (T0, T1, T2, T3, T4, T5), member1, T1, S<Z>);
flat_at!(Flat6, (T0, T1, T2, T3, T4, T5), member2, T2, S<S<Z>>);
flat_at!(Flat6, (T0, T1, T2, T3, T4, T5), member3, T3, S<S<S<Z>>>);
flat_at!(Flat6, (T0, T1, T2, T3, T4, T5), member4, T4, S<S<S<S<Z>>>>);
flat_at!(Flat6, (T0, T1, T2, T3, T4, T5), member5, T5, S<S<S<S<S<Z>>>>>);
