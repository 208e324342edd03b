use std::fmt::{self, Formatter};

use crate::access::At;
use crate::storage::Storage;
use crate::unary::{LessThan, S, Unary, Z};

/// Write every element from a position onward, each followed by a single space, using
/// its `Display` form.
///
/// The facade wraps the full run in `"( "` and `")"` to produce the canonical rendering
/// `( e0 e1 ... )`; an empty tuple contributes nothing between the parentheses and so
/// renders as `( )`. Implemented on the count of positions left to write.
pub trait RenderFold<A, I: Unary> {
    /// Render each element from `I` onward.
    fn render_from(storage: &A, f: &mut Formatter<'_>) -> fmt::Result;
}

impl<A, I: Unary> RenderFold<A, I> for Z {
    fn render_from(_: &A, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<M, A, I> RenderFold<A, I> for S<M>
where
    M: RenderFold<A, S<I>>,
    I: Unary + LessThan<<A as Storage>::Length>,
    A: At<I>,
    <A as At<I>>::Element: fmt::Display,
{
    fn render_from(storage: &A, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", <A as At<I>>::at(storage))?;
        M::render_from(storage, f)
    }
}

/// Like [`RenderFold`], but using each element's `Debug` form.
pub trait DebugFold<A, I: Unary> {
    /// Render each element from `I` onward.
    fn render_debug_from(storage: &A, f: &mut Formatter<'_>) -> fmt::Result;
}

impl<A, I: Unary> DebugFold<A, I> for Z {
    fn render_debug_from(_: &A, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<M, A, I> DebugFold<A, I> for S<M>
where
    M: DebugFold<A, S<I>>,
    I: Unary + LessThan<<A as Storage>::Length>,
    A: At<I>,
    <A as At<I>>::Element: fmt::Debug,
{
    fn render_debug_from(storage: &A, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ", <A as At<I>>::at(storage))?;
        M::render_debug_from(storage, f)
    }
}
