use thiserror::Error;

pub type Result<T> = std::result::Result<T, PosError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PosError {
    #[error("Offset {offset} is past the end of the source ({len} bytes)")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("Offset {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary { offset: usize },

    #[error("Invalid span: {0}")]
    InvalidSpan(String),
}
