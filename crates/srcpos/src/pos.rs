use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single point in a source buffer.
///
/// `byte` is the canonical key: ordering helpers look at it and nothing else.
/// `line` and `column` are a cache for display and are expected to agree with
/// `byte` for the buffer the position came from.
///
/// Equality compares all three fields. Ordering goes through [`Pos::cmp_byte`]
/// and friends rather than `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Byte offset from the start of the buffer (0-indexed)
    pub byte: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Pos {
    /// The first position of any buffer.
    pub const INITIAL: Self = Self {
        byte: 0,
        line: 1,
        column: 1,
    };

    #[must_use]
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }

    /// Compare two positions by byte offset only.
    #[must_use]
    pub fn cmp_byte(&self, other: &Self) -> Ordering {
        self.byte.cmp(&other.byte)
    }

    /// The position with the smaller byte offset. Ties go to `b`.
    ///
    /// The chosen position is returned as-is, line and column included.
    #[must_use]
    pub const fn earlier(a: Self, b: Self) -> Self {
        if a.byte < b.byte {
            a
        } else {
            b
        }
    }

    /// The position with the larger byte offset. Ties go to `b`.
    #[must_use]
    pub const fn later(a: Self, b: Self) -> Self {
        if a.byte > b.byte {
            a
        } else {
            b
        }
    }
}

impl Default for Pos {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pos() {
        assert_eq!(Pos::default(), Pos::new(0, 1, 1));
        assert_eq!(Pos::INITIAL.to_string(), "1,1");
    }

    #[test]
    fn test_cmp_byte_ignores_line_and_column() {
        let a = Pos::new(4, 1, 5);
        let b = Pos::new(4, 9, 9);
        assert_eq!(a.cmp_byte(&b), Ordering::Equal);
        assert_ne!(a, b);

        assert_eq!(Pos::new(3, 2, 1).cmp_byte(&Pos::new(7, 1, 8)), Ordering::Less);
        assert_eq!(Pos::new(7, 1, 8).cmp_byte(&Pos::new(3, 2, 1)), Ordering::Greater);
    }

    #[test]
    fn test_earlier_and_later_copy_the_chosen_position() {
        let a = Pos::new(2, 1, 3);
        let b = Pos::new(10, 2, 4);

        assert_eq!(Pos::earlier(a, b), a);
        assert_eq!(Pos::earlier(b, a), a);
        assert_eq!(Pos::later(a, b), b);
        assert_eq!(Pos::later(b, a), b);
    }

    #[test]
    fn test_ties_go_to_second_argument() {
        // Same byte, drifted line/column cache
        let a = Pos::new(5, 1, 6);
        let b = Pos::new(5, 3, 1);

        assert_eq!(Pos::earlier(a, b), b);
        assert_eq!(Pos::later(a, b), b);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&Pos::new(7, 2, 1)).unwrap();
        assert_eq!(json, r#"{"byte":7,"line":2,"column":1}"#);

        let pos: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, Pos::new(7, 2, 1));
    }
}
