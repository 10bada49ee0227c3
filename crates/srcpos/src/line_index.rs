use crate::{Pos, PosError, Range, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What a column counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnUnit {
    /// UTF-8 bytes
    Bytes,
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-16 code units, as editors speaking LSP expect
    Utf16,
}

impl ColumnUnit {
    fn count(self, segment: &str) -> usize {
        match self {
            Self::Bytes => segment.len(),
            Self::Chars => segment.chars().count(),
            Self::Utf16 => segment.encode_utf16().count(),
        }
    }
}

/// Resolves byte offsets in a buffer into full [`Pos`] triples.
///
/// Line starts are recorded once up front, so each lookup is a binary search
/// over lines followed by a count over a single line.
///
/// # Example
///
/// ```
/// use srcpos::{LineIndex, Pos};
///
/// let index = LineIndex::new("a = 1\nb = 2\n");
///
/// assert_eq!(index.pos_at(0).unwrap(), Pos::new(0, 1, 1));
/// assert_eq!(index.pos_at(8).unwrap(), Pos::new(8, 2, 3));
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    unit: ColumnUnit,
    /// Byte offset of the start of each line
    /// Index 0 is always 0 (start of buffer)
    /// Index N is the byte offset immediately after the Nth '\n'
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Build a line index counting columns in [`ColumnUnit::Chars`].
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self::with_unit(text, ColumnUnit::default())
    }

    #[must_use]
    pub fn with_unit(text: &'a str, unit: ColumnUnit) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(idx, _)| idx + 1),
        );

        tracing::debug!(
            lines = line_starts.len(),
            bytes = text.len(),
            ?unit,
            "Built line index"
        );

        Self {
            text,
            unit,
            line_starts,
        }
    }

    /// What this index counts columns in.
    #[must_use]
    pub const fn unit(&self) -> ColumnUnit {
        self.unit
    }

    /// Number of lines in the buffer. A trailing newline starts a new, empty
    /// line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where the given 1-indexed line begins.
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line.checked_sub(1)?).copied()
    }

    /// Resolve a byte offset into a position.
    ///
    /// The offset one past the last byte is valid and names the end of the
    /// buffer.
    pub fn pos_at(&self, offset: usize) -> Result<Pos> {
        if offset > self.text.len() {
            return Err(PosError::OffsetOutOfBounds {
                offset,
                len: self.text.len(),
            });
        }
        if !self.text.is_char_boundary(offset) {
            return Err(PosError::NotCharBoundary { offset });
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        let line_start = self.line_starts[line];
        let column = self.unit.count(&self.text[line_start..offset]);

        Ok(Pos::new(offset, line + 1, column + 1))
    }

    /// Resolve a pair of byte offsets into a range. The offsets are taken as
    /// given, so `start > end` produces an inverted range.
    pub fn range(&self, filename: impl Into<Arc<str>>, start: usize, end: usize) -> Result<Range> {
        Ok(Range::new(filename, self.pos_at(start)?, self.pos_at(end)?))
    }
}
