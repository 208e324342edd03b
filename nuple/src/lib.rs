/*!
[![Rust](https://github.com/nuple-rs/nuple/actions/workflows/rust.yml/badge.svg)](https://github.com/nuple-rs/nuple/actions/workflows/rust.yml)
![license: MIT](https://img.shields.io/github/license/nuple-rs/nuple)
[![crates.io](https://img.shields.io/crates/v/nuple)](https://crates.io/crates/nuple)
[![docs.rs documentation](https://docs.rs/nuple/badge.svg)](https://docs.rs/nuple)

> **nuple (noun):** An ordered collection of *n* values, one per position, each of its
> own type.
>
> **nuple (crate):** Fixed-arity heterogeneous products with compiler-selected storage
> layouts for Rust.

A tuple is the simplest aggregate there is, which is exactly why its representation
deserves care: four `f32`s want to be an array, a pair wants to be two named fields, and
a fifteen-element grab bag is happy as a recursive chain. This crate keeps *one* tuple
interface while letting each written sequence of element types get the storage layout
that suits it:

- the [`Tuple!`] macro inspects a written element-type sequence and selects among an
  [`Empty`](storage::Empty) layout, a [`Packed`](storage::Packed) array for homogeneous
  sequences, the explicit small layouts [`Flat1`](storage::Flat1) through
  [`Flat6`](storage::Flat6), and the general recursive [`Cons`](storage::Cons) chain;
- the selection is **deterministic and unobservable**: every layout supports the same
  indexing, traversal, extraction, conversion, comparison, and rendering operations,
  and tuples of different layouts compare and assign with each other freely;
- element access is **compile-time checked**: an out-of-range index or an ill-formed
  extraction range is a type error, not a panic;
- access **preserves value category**: borrowing a tuple borrows its element, uniquely
  borrowing it yields a unique borrow, and consuming it moves the element out, with
  [one generic entry point](access::AccessBy) parameterized by
  [access category](access::Category).

# A quick taste

```
use nuple::prelude::*;

let t: Tuple![i32, f64, &'static str] = Tuple::new((1, 2.5, "three"));

// Compile-time-checked element access.
assert_eq!(*t.at::<0>(), 1);

// Extraction and splitting by constant index.
assert_eq!(t.extract::<1, 3>(), tuple!(2.5, "three"));

// Invocation: spread the elements into a function's parameters.
let t: Tuple![i32, i32, i32] = Tuple::new((1, 2, 3));
assert_eq!(t.call(|a, b, c| a + b + c), 6);

// Rendering.
assert_eq!(tuple!(1, 2, 3).to_string(), "( 1 2 3 )");
```

# Where to look

- [`Tuple`] and the [`Tuple!`] selector macro are the everyday surface.
- The [`storage`] module documents the closed set of layouts and the canonical
  inductive form every operation is written against.
- The [`traverse`] module has [`apply`](traverse::apply) and
  [`for_each`](traverse::for_each) for whole-tuple invocation and visiting.
- The [`ops`] module holds the recursive engines, including the deliberately
  non-reflexive [`ConvertTo`](ops::ConvertTo) behind [`Tuple::cast`].
- The [`unary`] module is the type-level arithmetic the compile-time index checking is
  built from.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// The selector macro and the arity-generic impls expand to absolute `::nuple::` paths,
// which must resolve even when the expansion happens inside this crate.
extern crate self as nuple;

pub mod access;
pub mod introspect;
pub mod list;
pub mod ops;
pub mod storage;
pub mod traverse;
pub mod unary;

mod facade;
mod macros;

pub use facade::{make_tuple, Tuple};
pub use nuple_macro::Tuple;

/// The prelude module for quickly getting started with nuple.
///
/// This module is designed to be imported as `use nuple::prelude::*;`, which brings
/// into scope everything needed to construct, index, and traverse tuples.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::access::{Mut, Ref, Val};
    #[doc(no_inline)]
    pub use crate::ops::ConvertTo;
    #[doc(no_inline)]
    pub use crate::storage::Storage;
    #[doc(no_inline)]
    pub use crate::traverse::{apply, for_each, for_each_mut, FlatCall, Visit, VisitMut};
    #[doc(no_inline)]
    pub use crate::unary::UnaryOf;
    #[doc(no_inline)]
    pub use crate::{forward, make_tuple, tie, tuple, Tuple};
}
