//! The engines behind the facade's multi-element operations.
//!
//! Comparison, rendering, assignment, and conversion are each written once as a
//! type-level fold: a trait implemented on a unary counter (or on the chain being
//! consumed or built) that visits one [`At`](crate::access::At) index per step. The
//! folds reach every layout through the accessor, so the same implementations serve
//! every storage, which is what makes the operations layout-transparent. Extraction
//! recurses over borrowed reference chains instead, since its output is a sub-sequence
//! rather than a per-index result.

mod assign;
mod convert;
mod eq;
mod ord;
mod render;
mod section;

pub use assign::{AssignInto, ListAssign};
pub use convert::{ConvertFrom, ConvertTo};
pub use eq::EqFold;
pub use ord::OrdFold;
pub use render::{DebugFold, RenderFold};
pub use section::Section;
