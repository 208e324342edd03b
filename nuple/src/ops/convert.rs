use crate::access::At;
use crate::storage::{Cons, Empty, Storage};
use crate::unary::{LessThan, S, Unary};

/// A deliberate value conversion between two *distinct* types.
///
/// This is the gate behind [`Tuple::cast`](crate::Tuple::cast): unlike [`Into`], there
/// is no blanket identity implementation, so a cast in which some position would convert
/// a type to itself does not compile. Implementations are provided for every ordered
/// pair of distinct numeric primitives, with the semantics of an `as` cast.
///
/// ```compile_fail
/// use nuple::ops::ConvertTo;
///
/// // No identity conversion exists.
/// let x: i32 = ConvertTo::<i32>::convert(1i32);
/// ```
pub trait ConvertTo<U> {
    /// Convert the value.
    fn convert(self) -> U;
}

macro_rules! numeric_conversions {
    ($($src:ty => $($dst:ty),+;)+) => {
        $($(
            impl ConvertTo<$dst> for $src {
                fn convert(self) -> $dst {
                    self as $dst
                }
            }
        )+)+
    };
}

numeric_conversions! {
    i8 => i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    i16 => i8, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    i32 => i8, i16, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    i64 => i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    i128 => i8, i16, i32, i64, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    isize => i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, f32, f64;
    u8 => i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, f32, f64;
    u16 => i8, i16, i32, i64, i128, isize, u8, u32, u64, u128, usize, f32, f64;
    u32 => i8, i16, i32, i64, i128, isize, u8, u16, u64, u128, usize, f32, f64;
    u64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u128, usize, f32, f64;
    u128 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64;
    usize => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, f32, f64;
    f32 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f64;
    f64 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32;
}

/// Build a new owned chain by converting one element of a borrowed storage per node,
/// starting at index `I`.
///
/// Implemented on the chain being built: each node clones the source element at its
/// index and pushes it through [`ConvertTo`], so the chain must differ from the source
/// element type at every position.
pub trait ConvertFrom<A, I: Unary>: Sized {
    /// Convert every element from `I` onward.
    fn convert_from(source: &A) -> Self;
}

impl<A, I: Unary> ConvertFrom<A, I> for Empty {
    fn convert_from(_: &A) -> Empty {
        Empty
    }
}

impl<H, T, A, I> ConvertFrom<A, I> for Cons<H, T>
where
    I: Unary + LessThan<<A as Storage>::Length>,
    A: At<I>,
    <A as At<I>>::Element: Clone + ConvertTo<H>,
    T: ConvertFrom<A, S<I>>,
{
    fn convert_from(source: &A) -> Self {
        Cons {
            head: Clone::clone(<A as At<I>>::at(source)).convert(),
            tail: T::convert_from(source),
        }
    }
}
