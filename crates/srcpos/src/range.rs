use crate::Pos;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A half-open span `[start, end)` of one named source buffer.
///
/// Nothing here checks that `start.byte <= end.byte`. Every operation accepts
/// inverted ranges and works from the byte offsets exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Source identifier, carried through but never inspected
    pub filename: Arc<str>,
    pub start: Pos,
    pub end: Pos,
}

impl Range {
    #[must_use]
    pub fn new(filename: impl Into<Arc<str>>, start: Pos, end: Pos) -> Self {
        Self {
            filename: filename.into(),
            start,
            end,
        }
    }

    /// A zero-width range sitting at `pos`.
    #[must_use]
    pub fn empty_at(filename: impl Into<Arc<str>>, pos: Pos) -> Self {
        Self::new(filename, pos, pos)
    }

    fn with_bounds(&self, start: Pos, end: Pos) -> Self {
        Self {
            filename: Arc::clone(&self.filename),
            start,
            end,
        }
    }

    /// Returns true if the range covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start.byte == self.end.byte
    }

    /// Number of bytes covered. Inverted ranges have length 0.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    #[must_use]
    pub const fn contains_offset(&self, offset: usize) -> bool {
        offset >= self.start.byte && offset < self.end.byte
    }

    #[must_use]
    pub const fn contains_pos(&self, pos: Pos) -> bool {
        self.contains_offset(pos.byte)
    }

    /// Returns true if both ranges cover at least one common byte.
    ///
    /// This is false exactly when [`Range::overlap`] produces a zero-width
    /// range.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        Pos::later(self.start, other.start).byte < Pos::earlier(self.end, other.end).byte
    }

    /// The largest range contained in both `self` and `other`.
    ///
    /// The result starts at the later of the two starts and ends at the
    /// earlier of the two ends, each copied from its input unchanged. When
    /// that interval is inverted the ranges are disjoint, and the result is a
    /// zero-width range at `self.start`. Swapping the operands of a disjoint
    /// pair therefore anchors the empty result at the other range.
    ///
    /// ```
    /// use srcpos::{Pos, Range};
    ///
    /// let a = Range::new("main.hcl", Pos::new(0, 1, 1), Pos::new(2, 1, 3));
    /// let b = Range::new("main.hcl", Pos::new(4, 1, 5), Pos::new(6, 1, 7));
    ///
    /// assert_eq!(a.overlap(&b), Range::empty_at("main.hcl", a.start));
    /// assert_eq!(b.overlap(&a), Range::empty_at("main.hcl", b.start));
    /// ```
    #[must_use]
    pub fn overlap(&self, other: &Self) -> Self {
        self.try_overlap(other)
            .unwrap_or_else(|| self.with_bounds(self.start, self.start))
    }

    /// Like [`Range::overlap`], but reports disjoint ranges as `None` instead
    /// of anchoring an empty range at `self.start`.
    ///
    /// Ranges that merely touch still yield `Some` zero-width range at the
    /// shared boundary.
    #[must_use]
    pub fn try_overlap(&self, other: &Self) -> Option<Self> {
        let start = Pos::later(self.start, other.start);
        let end = Pos::earlier(self.end, other.end);
        if start.byte > end.byte {
            return None;
        }
        Some(self.with_bounds(start, end))
    }

    /// Method form of [`range_over`], with `self` as the first operand.
    #[must_use]
    pub fn range_over(&self, other: &Self) -> Self {
        range_over(self, other)
    }

    /// Splits `self` into the part before `other`, the part shared with
    /// `other`, and the part after it.
    ///
    /// If the shared part is empty, all three results are that same empty
    /// range. When `other` reaches or passes an edge of `self`, the matching
    /// outer part is empty.
    #[must_use]
    pub fn partition_around(&self, other: &Self) -> (Self, Self, Self) {
        let overlap = self.overlap(other);
        if overlap.is_empty() {
            return (overlap.clone(), overlap.clone(), overlap);
        }

        let before = self.with_bounds(self.start, overlap.start);
        let after = self.with_bounds(overlap.end, self.end);
        (before, overlap, after)
    }

    /// Returns true if the range is well formed and fits in a buffer of
    /// `len` bytes.
    #[must_use]
    pub const fn can_slice_bytes(&self, len: usize) -> bool {
        self.start.byte <= self.end.byte && self.end.byte <= len
    }

    /// The bytes of `buf` covered by this range.
    ///
    /// Offsets past the end of `buf` are clamped to its length, and an
    /// inverted range gives an empty slice.
    #[must_use]
    pub fn slice_bytes<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        let start = self.start.byte.min(buf.len());
        let end = self.end.byte.clamp(start, buf.len());
        &buf[start..end]
    }

    /// Widest output [`Range::visualize`] draws before truncating.
    pub const VISUALIZE_WIDTH: usize = 120;

    /// Draws the byte extent of the range, for stacking several ranges on
    /// top of each other when debugging.
    ///
    /// Each byte before `start` is a space and each covered byte is `#`. An
    /// inverted range marks `[end, start)` with `!` instead. Offsets past
    /// [`Range::VISUALIZE_WIDTH`] are cut off and the line ends with `>`.
    #[must_use]
    pub fn visualize(&self) -> String {
        let (lo, hi, mark) = if self.end.byte < self.start.byte {
            (self.end.byte, self.start.byte, "!")
        } else {
            (self.start.byte, self.end.byte, "#")
        };
        let clip = |byte: usize| byte.min(Self::VISUALIZE_WIDTH);

        let mut out = format!("{}{}", " ".repeat(clip(lo)), mark.repeat(clip(hi) - clip(lo)));
        if hi > Self::VISUALIZE_WIDTH {
            out.push('>');
        }
        out
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(f, "{}:{}-{}", self.filename, self.start, self.end.column)
        } else {
            write!(f, "{}:{}-{}", self.filename, self.start, self.end)
        }
    }
}

/// The smallest range containing both `a` and `b`, gap included.
///
/// Starts at the earlier start and ends at the later end, each copied from
/// its input unchanged; the filename comes from `a`. The byte interval is the
/// same whichever way round the operands are passed.
#[must_use]
pub fn range_over(a: &Range, b: &Range) -> Range {
    if a.end.byte < a.start.byte || b.end.byte < b.start.byte {
        tracing::trace!(a = %a, b = %b, "range_over called with an inverted range");
    }

    a.with_bounds(Pos::earlier(a.start, b.start), Pos::later(a.end, b.end))
}

/// A range from the start of `start` to the end of `end`, taking the filename
/// from `start`. The operands are not reordered.
#[must_use]
pub fn range_between(start: &Range, end: &Range) -> Range {
    start.with_bounds(start.start, end.end)
}
