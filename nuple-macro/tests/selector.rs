use nuple::prelude::*;
use nuple::storage::{Cons, Empty, Flat1, Flat3, Flat6, Packed};
use static_assertions::assert_type_eq_all;

// Zero types select the empty storage.
assert_type_eq_all!(Tuple![], nuple::Tuple<Empty>);

// A single non-reference type selects the one-field flat storage.
assert_type_eq_all!(Tuple![u8], nuple::Tuple<Flat1<u8>>);

// Identically-written non-reference types select packed storage, even at arities the
// flat layouts could also handle.
assert_type_eq_all!(Tuple![i32, i32], nuple::Tuple<Packed<i32, 2>>);
assert_type_eq_all!(Tuple![f32, f32, f32, f32], nuple::Tuple<Packed<f32, 4>>);

// Heterogeneous non-reference types up to six select a flat storage.
assert_type_eq_all!(Tuple![u8, u16, u32], nuple::Tuple<Flat3<u8, u16, u32>>);
assert_type_eq_all!(
    Tuple![u8, u16, u32, u64, i8, i16],
    nuple::Tuple<Flat6<u8, u16, u32, u64, i8, i16>>,
);

// Seven heterogeneous types overflow the flat layouts and fall back to the chain.
assert_type_eq_all!(
    Tuple![u8, u16, u32, u64, i8, i16, i32],
    nuple::Tuple<Cons<u8, Cons<u16, Cons<u32, Cons<u64, Cons<i8, Cons<i16, Cons<i32, Empty>>>>>>>>,
);

// Any reference type forces the chain, even for small or homogeneous sequences.
assert_type_eq_all!(
    Tuple![&'static str, &'static str],
    nuple::Tuple<Cons<&'static str, Cons<&'static str, Empty>>>,
);
assert_type_eq_all!(
    Tuple![i32, &'static mut i32],
    nuple::Tuple<Cons<i32, Cons<&'static mut i32, Empty>>>,
);

// Homogeneity is judged on the written sequence: an alias spelled differently from its
// definition keeps the sequence heterogeneous, so selection stays deterministic without
// type information.
#[allow(dead_code)]
type Byte = u8;
assert_type_eq_all!(Tuple![u8, Byte], nuple::Tuple<nuple::storage::Flat2<u8, u8>>);
