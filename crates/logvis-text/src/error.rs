//! Error types for logical-to-visual reordering.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result type for reordering operations.
pub type Result<T> = std::result::Result<T, BidiError>;

/// Errors that can occur while reordering a string.
#[derive(Error, Debug)]
pub enum BidiError {
    /// Input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8: invalid sequence at byte {valid_up_to}")]
    Encoding {
        /// Length of the valid prefix.
        valid_up_to: usize,
        /// Length of the offending sequence, `None` if the input ends mid-sequence.
        error_len: Option<usize>,
    },

    /// Input exceeds the configured size limit.
    #[error("input of {len} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },

    /// Scratch buffer size cannot be represented.
    #[error("scratch buffer size overflows for input of {len} units")]
    CapacityOverflow { len: usize },

    /// Scratch buffer allocation failed.
    #[error("failed to allocate scratch buffer of {requested} units: {source}")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// A write would have gone past the end of a scratch buffer.
    #[error("code point buffer overflow (capacity {capacity})")]
    BufferOverflow { capacity: usize },

    /// The reordering engine failed.
    #[error(transparent)]
    Reordering(#[from] ReorderError),
}

/// Errors reported by a [`ReorderEngine`](crate::bidi::ReorderEngine).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// Output slice does not match the number of logical code points.
    #[error("visual buffer holds {visual} code points, expected {logical}")]
    LengthMismatch { logical: usize, visual: usize },

    /// The engine could not allocate its working copy of the text.
    #[error("failed to allocate {requested} bytes of engine scratch space: {source}")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// Engine-specific failure.
    #[error("reordering failed: {0}")]
    Engine(String),
}

impl From<std::str::Utf8Error> for BidiError {
    fn from(err: std::str::Utf8Error) -> Self {
        BidiError::Encoding {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len(),
        }
    }
}
