use crate::PosError;
use std::fmt;
use std::str::FromStr;

/// A pair of byte offsets written as `START..END`.
///
/// This is the textual form ranges take before they are resolved against a
/// buffer. Inverted spans parse fine; nothing downstream rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteSpan {
    pub start: usize,
    pub end: usize,
}

impl ByteSpan {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl FromStr for ByteSpan {
    type Err = PosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| PosError::InvalidSpan(format!("expected START..END, got '{s}'")))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| PosError::InvalidSpan(format!("'{}' in '{s}': {e}", part.trim())))
        };

        Ok(Self::new(parse(start)?, parse(end)?))
    }
}

impl fmt::Display for ByteSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
