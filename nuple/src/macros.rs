/// Construct a tuple from the given values, backed by the canonical inductive layout.
///
/// Unlike [`Tuple::new`](crate::Tuple::new), no annotation is needed; the result
/// compares and assigns freely with tuples of every other layout.
///
/// ```
/// use nuple::prelude::*;
///
/// let t = tuple!(1, "two", 3.0);
/// assert_eq!(*t.at::<1>(), "two");
///
/// let selected: Tuple![i32, i32, i32] = Tuple::new((1, 2, 3));
/// assert_eq!(selected, tuple!(1, 2, 3));
/// ```
#[macro_export]
macro_rules! tuple {
    ($($element:expr),* $(,)?) => {
        $crate::make_tuple(($($element,)*))
    };
}

/// Construct a tuple from the given expressions exactly as written, so references stay
/// references.
///
/// This is the argument-pack builder for [`Tuple::call`](crate::Tuple::call) and
/// [`apply`](crate::traverse::apply): write `&x` or `&mut x` for positions that should
/// be passed by reference, and a bare value for positions that should be moved.
///
/// ```
/// use nuple::prelude::*;
///
/// let owned = String::from("hi");
/// let mut counter = 0;
///
/// forward!(&owned, &mut counter, 1).call(|s: &String, n: &mut i32, inc: i32| {
///     *n += inc + s.len() as i32;
/// });
/// assert_eq!(counter, 3);
/// ```
#[macro_export]
macro_rules! forward {
    ($($element:expr),* $(,)?) => {
        $crate::make_tuple(($($element,)*))
    };
}

/// Construct a tuple of unique references to the given places, for bulk assignment with
/// [`Tuple::assign`](crate::Tuple::assign).
///
/// ```
/// use nuple::prelude::*;
///
/// let (mut a, mut b, mut c) = (0i32, 0i64, 0.0f64);
/// tie!(a, b, c).assign(tuple!(1i32, 2i32, 3.0f32));
/// assert_eq!((a, b, c), (1, 2, 3.0));
/// ```
#[macro_export]
macro_rules! tie {
    ($($place:expr),* $(,)?) => {
        $crate::make_tuple(($(&mut $place,)*))
    };
}
