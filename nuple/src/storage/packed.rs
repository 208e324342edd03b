use super::sealed;

/// Packed homogeneous storage: `N >= 2` elements of one non-reference type `T`, held
/// contiguously in a single array field.
///
/// Compared to the explicit small layouts this produces one field symbol instead of `N`
/// and a much shorter mangled type name, which is why the selector prefers it whenever a
/// sequence qualifies for both.
///
/// Its [`Storage`](super::Storage) and access impls are generated per arity (up to the
/// crate's supported maximum) by `nuple_macro::impl_tuples!`.
#[derive(Debug, Clone, Copy)]
pub struct Packed<T, const N: usize> {
    /// The elements, in order.
    pub elements: [T; N],
}

impl<T, const N: usize> sealed::Storage for Packed<T, N> {}

impl<T: Default, const N: usize> Default for Packed<T, N> {
    fn default() -> Self {
        Packed {
            elements: std::array::from_fn(|_| T::default()),
        }
    }
}
