use thiserror::Error;

/// Errors produced by engine transitions and the two codecs.
///
/// Every variant is local to the transition that raised it; the reducer
/// validates before building the next state, so the prior `EditorState` is
/// always retained intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("invalid grid dimensions: {columns}x{rows}")]
    InvalidDimensions { columns: usize, rows: usize },

    #[error("stitch count {actual} does not match {expected} (columns * rows)")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("stitch index {index} out of range for grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("share token could not be decoded: {0}")]
    ShareTokenInvalid(String),

    #[error("text input contains no stitch rows")]
    EmptyInput,
}

pub type EditorResult<T> = Result<T, EditorError>;
