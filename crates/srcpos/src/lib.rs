//! Source positions, ranges, and the algebra for combining them.
//!
//! A [`Pos`] locates one point in a buffer by byte offset, with line and
//! column carried along for display. A [`Range`] is a half-open span between
//! two positions in a named buffer. [`Range::overlap`] and [`range_over`]
//! intersect and enclose ranges; neither ever fails.

mod error;
mod line_index;
mod pos;
mod range;
mod span;

pub use error::{PosError, Result};
pub use line_index::{ColumnUnit, LineIndex};
pub use pos::Pos;
pub use range::{range_between, range_over, Range};
pub use span::ByteSpan;
