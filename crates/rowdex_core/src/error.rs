//! Error types for the index core.

use thiserror::Error;

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors that can occur while constructing or driving an index.
///
/// Everything here surfaces synchronously at construction time.
/// A row that simply does not match a signature is not an error;
/// it yields no key (see [`RowSignature`](crate::RowSignature)).
#[derive(Debug, Error)]
pub enum IndexError {
    /// Malformed signature or generator construction.
    #[error("invalid signature: {message}")]
    InvalidSignature {
        /// Description of the violation.
        message: String,
    },

    /// A combination generator was given an empty candidate list.
    ///
    /// There is no valid combination to produce from an empty list,
    /// so this is rejected at construction.
    #[error("empty candidate list at position {position}")]
    EmptyCandidateList {
        /// Position of the offending list.
        position: usize,
    },

    /// A digit vector does not match the radix or field count.
    #[error("digit count mismatch: expected {expected}, got {actual}")]
    DigitCountMismatch {
        /// Number of digits required.
        expected: usize,
        /// Number of digits supplied.
        actual: usize,
    },
}

impl IndexError {
    /// Creates an invalid signature error.
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::InvalidSignature {
            message: message.into(),
        }
    }

    /// Creates an empty candidate list error.
    pub fn empty_candidate_list(position: usize) -> Self {
        Self::EmptyCandidateList { position }
    }

    /// Creates a digit count mismatch error.
    pub fn digit_count_mismatch(expected: usize, actual: usize) -> Self {
        Self::DigitCountMismatch { expected, actual }
    }
}
