//! Traversal primitives: invoking a function over all elements at once, and visiting
//! them one at a time.

use crate::facade::Tuple;
use crate::list::ListToTuple;
use crate::storage::{Cons, Empty, IntoMutList, IntoRefList, Storage};

/// A callable that can be invoked with its arguments bundled as a native Rust tuple.
///
/// This is the defunctionalized form of "spread the elements into the parameter list":
/// implementations are provided for every closure and function of up to 32 arguments,
/// unpacking the bundle positionally.
pub trait FlatCall<Args> {
    /// What the call returns.
    type Output;

    /// Invoke `self` with the bundled arguments spread positionally.
    fn call_flat(self, args: Args) -> Self::Output;
}

/// Invoke `f` with the elements of `tuple` as its arguments, in positional order.
///
/// The tuple is consumed and its elements are moved into the call, so `f` receives them
/// by value regardless of the tuple's layout.
///
/// ```
/// use nuple::{traverse::apply, tuple};
///
/// let sum = apply(|a: i32, b: i32, c: i32| a + b + c, tuple!(1, 2, 3));
/// assert_eq!(sum, 6);
/// ```
pub fn apply<F, S>(f: F, tuple: Tuple<S>) -> F::Output
where
    S: Storage,
    S::List: ListToTuple,
    F: FlatCall<<S::List as ListToTuple>::AsTuple>,
{
    f.call_flat(tuple.into_storage().into_list().into_tuple())
}

/// A visitor over elements of type `T`, used with [`for_each`].
///
/// A single visitor type may implement `Visit<T>` for several `T`, which is how one
/// traversal can cross a heterogeneous tuple.
pub trait Visit<T> {
    /// Observe one element.
    fn visit(&mut self, element: &T);
}

/// A mutating visitor over elements of type `T`, used with [`for_each_mut`].
pub trait VisitMut<T> {
    /// Observe and possibly rewrite one element.
    fn visit_mut(&mut self, element: &mut T);
}

/// Apply `f` to every element of `tuple` in positional order, by shared reference.
///
/// ```
/// use nuple::{traverse::{for_each, Visit}, tuple};
///
/// struct Count(usize);
///
/// impl<T> Visit<T> for Count {
///     fn visit(&mut self, _: &T) {
///         self.0 += 1;
///     }
/// }
///
/// let mut count = Count(0);
/// for_each(&mut count, &tuple!(1, "two", 3.0));
/// assert_eq!(count.0, 3);
/// ```
pub fn for_each<'t, F, S>(f: &mut F, tuple: &'t Tuple<S>)
where
    S: Storage,
    &'t S: IntoRefList,
    <&'t S as IntoRefList>::RefList: ListVisit<F>,
{
    IntoRefList::ref_list(tuple.storage()).visit_each(f);
}

/// Apply `f` to every element of `tuple` in positional order, by unique reference.
pub fn for_each_mut<'t, F, S>(f: &mut F, tuple: &'t mut Tuple<S>)
where
    S: Storage,
    &'t mut S: IntoMutList,
    <&'t mut S as IntoMutList>::MutList: ListVisitMut<F>,
{
    IntoMutList::mut_list(tuple.storage_mut()).visit_each_mut(f);
}

/// Recursion over a borrowed chain, feeding each element to a [`Visit`] implementation.
pub trait ListVisit<F> {
    /// Visit every element in order.
    fn visit_each(&self, f: &mut F);
}

impl<F> ListVisit<F> for Empty {
    fn visit_each(&self, _: &mut F) {}
}

impl<'a, A, As, F> ListVisit<F> for Cons<&'a A, As>
where
    F: Visit<A>,
    As: ListVisit<F>,
{
    fn visit_each(&self, f: &mut F) {
        f.visit(self.head);
        self.tail.visit_each(f);
    }
}

/// Recursion over a uniquely borrowed chain, feeding each element to a [`VisitMut`]
/// implementation.
pub trait ListVisitMut<F> {
    /// Visit every element in order.
    fn visit_each_mut(self, f: &mut F);
}

impl<F> ListVisitMut<F> for Empty {
    fn visit_each_mut(self, _: &mut F) {}
}

impl<'a, A, As, F> ListVisitMut<F> for Cons<&'a mut A, As>
where
    F: VisitMut<A>,
    As: ListVisitMut<F>,
{
    fn visit_each_mut(self, f: &mut F) {
        f.visit_mut(self.head);
        self.tail.visit_each_mut(f);
    }
}
