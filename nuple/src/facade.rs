//! The [`Tuple`] facade: one wrapper type presenting every storage layout through the
//! same interface.

use std::cmp::Ordering;
use std::fmt;

use crate::access::At;
use crate::list::{IntoList, ListToTuple};
use crate::ops::{
    AssignInto, ConvertFrom, DebugFold, EqFold, ListAssign, OrdFold, RenderFold, Section,
};
use crate::storage::{IntoMutList, IntoRefList, Storage};
use crate::traverse::FlatCall;
use crate::unary::{LessThan, Number, Sub, ToUnary, UnaryOf, Z};

/// A chain of shared references into `S`, for the duration of one borrow.
type RefChain<'s, S> = <&'s S as IntoRefList>::RefList;

/// A chain of unique references into `S`, for the duration of one borrow.
type MutChain<'s, S> = <&'s mut S as IntoMutList>::MutList;

/// The type-level difference `A - B`.
type Diff<A, B> = <(A, B) as Sub>::Result;

/// A fixed-arity heterogeneous product of values, generic over its storage layout `S`.
///
/// The layout is picked per element-type sequence by the [`Tuple!`](crate::Tuple!)
/// selector macro, and is deliberately unobservable through this interface: indexing,
/// traversal, comparison, extraction, conversion, and rendering behave identically on
/// every layout, and tuples of different layouts holding comparable elements compare
/// with one another directly.
///
/// # Examples
///
/// ```
/// use nuple::prelude::*;
///
/// let t: Tuple![i32, f64, &'static str] = Tuple::new((1, 2.5, "three"));
///
/// assert_eq!(*t.at::<0>(), 1);
/// assert_eq!(*t.at::<2>(), "three");
/// assert_eq!(t.len(), 3);
/// assert_eq!(t.to_string(), "( 1 2.5 three )");
/// ```
///
/// Indexing past the end is rejected at compile time:
///
/// ```compile_fail
/// # use nuple::prelude::*;
/// let t: Tuple![i32, i32] = Tuple::new((1, 2));
/// let _ = t.at::<2>();
/// ```
#[derive(Clone, Copy, Default)]
pub struct Tuple<S> {
    storage: S,
}

impl<S: Storage> Tuple<S> {
    /// The arity of this tuple.
    pub const LEN: usize = S::LEN;

    /// Construct a tuple of storage `S` from a native Rust tuple of its elements.
    ///
    /// The storage is determined by annotation or inference, which is how a
    /// [`Tuple!`](crate::Tuple!)-selected layout gets populated:
    ///
    /// ```
    /// use nuple::prelude::*;
    ///
    /// let packed: Tuple![u8, u8, u8, u8] = Tuple::new((1, 2, 3, 4));
    /// let flat: Tuple![u8, char] = Tuple::new((1, 'x'));
    /// ```
    pub fn new<E>(elements: E) -> Self
    where
        E: IntoList<AsList = S::List>,
    {
        Tuple {
            storage: S::from_list(elements.into_list()),
        }
    }

    /// Wrap an already-built storage.
    pub fn from_storage(storage: S) -> Self {
        Tuple { storage }
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Uniquely borrow the underlying storage.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Unwrap the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// The arity of this tuple.
    pub fn len(&self) -> usize {
        S::LEN
    }

    /// True exactly when this tuple has no elements.
    pub fn is_empty(&self) -> bool {
        S::LEN == 0
    }

    /// Consume the tuple, returning its elements as a native Rust tuple.
    pub fn into_elements(self) -> <S::List as ListToTuple>::AsTuple
    where
        S::List: ListToTuple,
    {
        self.storage.into_list().into_tuple()
    }

    /// Borrow the element at index `I`.
    ///
    /// The index is checked at compile time: `I` must be strictly less than the arity,
    /// or there is no implementation to call.
    pub fn at<const I: usize>(&self) -> &<S as At<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<S::Length>,
        S: At<UnaryOf<I>>,
    {
        <S as At<UnaryOf<I>>>::at(&self.storage)
    }

    /// Uniquely borrow the element at index `I`.
    pub fn at_mut<const I: usize>(&mut self) -> &mut <S as At<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<S::Length>,
        S: At<UnaryOf<I>>,
    {
        <S as At<UnaryOf<I>>>::at_mut(&mut self.storage)
    }

    /// Move the element at index `I` out of the tuple, discarding the rest.
    pub fn into_at<const I: usize>(self) -> <S as At<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<S::Length>,
        S: At<UnaryOf<I>>,
    {
        <S as At<UnaryOf<I>>>::into_at(self.storage)
    }

    /// Borrow every element at once, as a tuple of shared references.
    pub fn as_refs<'s>(&'s self) -> Tuple<RefChain<'s, S>>
    where
        &'s S: IntoRefList,
    {
        Tuple {
            storage: IntoRefList::ref_list(&self.storage),
        }
    }

    /// Uniquely borrow every element at once, as a tuple of unique references.
    pub fn as_muts<'s>(&'s mut self) -> Tuple<MutChain<'s, S>>
    where
        &'s mut S: IntoMutList,
    {
        Tuple {
            storage: IntoMutList::mut_list(&mut self.storage),
        }
    }

    /// Copy the elements of the half-open index range `I0..I1` into a new tuple.
    ///
    /// Both endpoints are compile-time constants; a range that is reversed or reaches
    /// past the end of the tuple does not compile. The extracted elements must be
    /// `Clone`; the others are untouched.
    ///
    /// ```
    /// use nuple::prelude::*;
    ///
    /// let t: Tuple![i32, i32, i32, i32] = Tuple::new((0, 1, 2, 3));
    /// assert_eq!(t.extract::<1, 3>(), tuple!(1, 2));
    /// assert_eq!(t.extract::<2, 2>(), tuple!());
    /// ```
    ///
    /// ```compile_fail
    /// # use nuple::prelude::*;
    /// let t: Tuple![i32, i32, i32] = Tuple::new((0, 1, 2));
    /// let _ = t.extract::<2, 1>();
    /// ```
    pub fn extract<'s, const I0: usize, const I1: usize>(
        &'s self,
    ) -> Tuple<<RefChain<'s, S> as Section<UnaryOf<I0>, Diff<UnaryOf<I1>, UnaryOf<I0>>>>::Out>
    where
        Number<I0>: ToUnary,
        Number<I1>: ToUnary,
        (UnaryOf<I1>, UnaryOf<I0>): Sub,
        &'s S: IntoRefList,
        RefChain<'s, S>: Section<UnaryOf<I0>, Diff<UnaryOf<I1>, UnaryOf<I0>>>,
    {
        Tuple {
            storage: IntoRefList::ref_list(&self.storage).section(),
        }
    }

    /// Copy the elements from index `I0` through the end into a new tuple.
    pub fn extract_from<'s, const I0: usize>(
        &'s self,
    ) -> Tuple<<RefChain<'s, S> as Section<UnaryOf<I0>, Diff<S::Length, UnaryOf<I0>>>>::Out>
    where
        Number<I0>: ToUnary,
        (S::Length, UnaryOf<I0>): Sub,
        &'s S: IntoRefList,
        RefChain<'s, S>: Section<UnaryOf<I0>, Diff<S::Length, UnaryOf<I0>>>,
    {
        Tuple {
            storage: IntoRefList::ref_list(&self.storage).section(),
        }
    }

    /// Copy the tuple into the pair of its first `I0` elements and its remaining
    /// elements.
    ///
    /// ```
    /// use nuple::prelude::*;
    ///
    /// let t: Tuple![i32, i32, i32, i32] = Tuple::new((0, 1, 2, 3));
    /// let (front, back) = t.split::<1>();
    /// assert_eq!(front, tuple!(0));
    /// assert_eq!(back, tuple!(1, 2, 3));
    /// ```
    pub fn split<'s, const I0: usize>(
        &'s self,
    ) -> (
        Tuple<<RefChain<'s, S> as Section<Z, UnaryOf<I0>>>::Out>,
        Tuple<<RefChain<'s, S> as Section<UnaryOf<I0>, Diff<S::Length, UnaryOf<I0>>>>::Out>,
    )
    where
        Number<I0>: ToUnary,
        (S::Length, UnaryOf<I0>): Sub,
        &'s S: IntoRefList,
        RefChain<'s, S>:
            Section<Z, UnaryOf<I0>> + Section<UnaryOf<I0>, Diff<S::Length, UnaryOf<I0>>>,
    {
        let refs = IntoRefList::ref_list(&self.storage);
        let front = Tuple {
            storage: <RefChain<'s, S> as Section<Z, UnaryOf<I0>>>::section(&refs),
        };
        let back = Tuple {
            storage: <RefChain<'s, S> as Section<
                UnaryOf<I0>,
                Diff<S::Length, UnaryOf<I0>>,
            >>::section(&refs),
        };
        (front, back)
    }

    /// Convert every element to the corresponding element type of the target layout,
    /// producing a new tuple.
    ///
    /// Conversion goes through [`ConvertTo`](crate::ops::ConvertTo), so the target must
    /// have the same arity and must differ from the source type at *every* position: a
    /// cast where some element would be "converted" to its own type is rejected at
    /// compile time rather than silently copied.
    ///
    /// ```
    /// use nuple::prelude::*;
    ///
    /// let t: Tuple![i32, f64] = Tuple::new((3, 2.5));
    /// let u: Tuple![i64, f32] = t.cast();
    /// assert_eq!(u, tuple!(3i64, 2.5f32));
    /// ```
    ///
    /// ```compile_fail
    /// # use nuple::prelude::*;
    /// let t: Tuple![i32, f64] = Tuple::new((3, 2.5));
    /// // The first position is an identity conversion, so this does not compile.
    /// let u: Tuple![i32, f32] = t.cast();
    /// ```
    pub fn cast<P>(&self) -> Tuple<P>
    where
        P: Storage<Length = S::Length>,
        P::List: ConvertFrom<S, Z>,
    {
        Tuple {
            storage: P::from_list(<P::List as ConvertFrom<S, Z>>::convert_from(&self.storage)),
        }
    }

    /// Overwrite every element of this tuple with the converted corresponding element
    /// of `source`.
    ///
    /// Each source element is converted with [`Into`], so same-type assignment is
    /// included. Assignment proceeds left to right.
    ///
    /// ```
    /// use nuple::prelude::*;
    ///
    /// let mut t: Tuple![i64, i64] = Tuple::new((0i64, 0i64));
    /// t.set_from(tuple!(1i32, 2i16));
    /// assert_eq!(t, tuple!(1i64, 2i64));
    /// ```
    pub fn set_from<P>(&mut self, source: Tuple<P>) -> &mut Self
    where
        P: Storage<Length = S::Length>,
        P::List: AssignInto<S, Z>,
    {
        source.storage.into_list().assign_into(&mut self.storage);
        self
    }

    /// Assign through a tuple of unique references, converting each source element.
    ///
    /// This is the consuming counterpart of [`set_from`](Tuple::set_from) for tuples
    /// *of* `&mut` handles, as produced by [`tie!`](crate::tie!):
    ///
    /// ```
    /// use nuple::prelude::*;
    ///
    /// let (mut a, mut b) = (0i64, 0i64);
    /// tie!(a, b).assign(tuple!(1i32, 2i16));
    /// assert_eq!((a, b), (1, 2));
    /// ```
    pub fn assign<P>(self, source: Tuple<P>)
    where
        P: Storage,
        S: ListAssign<P::List>,
    {
        self.storage.assign_from(source.storage.into_list());
    }

    /// Invoke `f` with this tuple's elements as its arguments, in positional order.
    ///
    /// ```
    /// use nuple::prelude::*;
    ///
    /// let t: Tuple![i32, i32] = Tuple::new((20, 22));
    /// assert_eq!(t.call(|a, b| a + b), 42);
    /// ```
    pub fn call<F>(self, f: F) -> F::Output
    where
        S::List: ListToTuple,
        F: FlatCall<<S::List as ListToTuple>::AsTuple>,
    {
        f.call_flat(self.storage.into_list().into_tuple())
    }
}

/// Bundle values into a tuple backed by the canonical inductive layout.
///
/// This is what the [`tuple!`](crate::tuple!) macro expands to. Unlike
/// [`Tuple::new`], no annotation is needed: the storage is always the
/// [`Cons`](crate::storage::Cons) chain of the value types, which compares and assigns
/// freely with every other layout.
pub fn make_tuple<E>(elements: E) -> Tuple<E::AsList>
where
    E: IntoList,
    E::AsList: Storage,
{
    Tuple {
        storage: elements.into_list(),
    }
}

impl<S, P> PartialEq<Tuple<P>> for Tuple<S>
where
    S: Storage,
    P: Storage<Length = S::Length>,
    S::Length: EqFold<S, P, Z>,
{
    fn eq(&self, other: &Tuple<P>) -> bool {
        <S::Length as EqFold<S, P, Z>>::eq_from(&self.storage, &other.storage)
    }
}

impl<S> Eq for Tuple<S>
where
    S: Storage,
    S::List: ListToTuple,
    <S::List as ListToTuple>::AsTuple: Eq,
    Tuple<S>: PartialEq<Tuple<S>>,
{
}

impl<S, P> PartialOrd<Tuple<P>> for Tuple<S>
where
    S: Storage,
    P: Storage<Length = S::Length>,
    S::Length: EqFold<S, P, Z> + OrdFold<S, P, Z> + OrdFold<P, S, Z>,
{
    fn partial_cmp(&self, other: &Tuple<P>) -> Option<Ordering> {
        if <S::Length as OrdFold<S, P, Z>>::lt_from(&self.storage, &other.storage, false, false)
        {
            Some(Ordering::Less)
        } else if <S::Length as OrdFold<P, S, Z>>::lt_from(
            &other.storage,
            &self.storage,
            false,
            false,
        ) {
            Some(Ordering::Greater)
        } else if <S::Length as EqFold<S, P, Z>>::eq_from(&self.storage, &other.storage) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Tuple<P>) -> bool {
        <S::Length as OrdFold<S, P, Z>>::lt_from(&self.storage, &other.storage, false, false)
    }

    fn le(&self, other: &Tuple<P>) -> bool {
        !<S::Length as OrdFold<P, S, Z>>::lt_from(&other.storage, &self.storage, false, false)
    }

    fn gt(&self, other: &Tuple<P>) -> bool {
        <S::Length as OrdFold<P, S, Z>>::lt_from(&other.storage, &self.storage, false, false)
    }

    fn ge(&self, other: &Tuple<P>) -> bool {
        !<S::Length as OrdFold<S, P, Z>>::lt_from(&self.storage, &other.storage, false, false)
    }
}

/// Renders as the elements' `Display` forms between parentheses: `( 1 2.5 three )`,
/// or `( )` for the empty tuple.
impl<S> fmt::Display for Tuple<S>
where
    S: Storage,
    S::Length: RenderFold<S, Z>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( ")?;
        <S::Length as RenderFold<S, Z>>::render_from(&self.storage, f)?;
        write!(f, ")")
    }
}

/// Same shape as the `Display` rendering, but with each element's `Debug` form.
impl<S> fmt::Debug for Tuple<S>
where
    S: Storage,
    S::Length: DebugFold<S, Z>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( ")?;
        <S::Length as DebugFold<S, Z>>::render_debug_from(&self.storage, f)?;
        write!(f, ")")
    }
}
