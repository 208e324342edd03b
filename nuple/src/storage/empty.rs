use super::{sealed, IntoMutList, IntoRefList, Storage};
use crate::unary::Z;

/// The storage of the zero-arity tuple. Zero-sized; every empty product type is equal to
/// every other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Empty;

impl sealed::Storage for Empty {}

impl Storage for Empty {
    type Length = Z;
    type List = Empty;

    fn from_list(list: Empty) -> Empty {
        list
    }

    fn into_list(self) -> Empty {
        self
    }
}

impl<'a> IntoRefList for &'a Empty {
    type RefList = Empty;

    fn ref_list(self) -> Empty {
        Empty
    }
}

impl<'a> IntoMutList for &'a mut Empty {
    type MutList = Empty;

    fn mut_list(self) -> Empty {
        Empty
    }
}
