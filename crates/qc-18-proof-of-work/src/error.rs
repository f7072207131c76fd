//! Error types for the proof-of-work core

use thiserror::Error;

/// Result type alias for proof-of-work operations
pub type Result<T> = std::result::Result<T, PowError>;

/// Errors that can occur while constructing or driving the PoW engines.
///
/// Per-attempt outcomes (solved / not solved, accepted / rejected) are
/// reported as plain booleans, not as errors: a failed mining attempt or
/// a rejected block is an expected, non-exceptional result.
#[derive(Debug, Error)]
pub enum PowError {
    /// Map and/or cache allocation failed at engine construction.
    #[error("allocation failure: requested {requested_bytes} bytes")]
    AllocationFailure {
        /// Number of bytes that could not be allocated
        requested_bytes: usize,
    },

    /// A byte slice handed to `BlockTrailer::from_bytes` was not exactly
    /// [`crate::trailer::TRAILER_LEN`] bytes long.
    #[error("invalid trailer length: expected {expected}, got {actual}")]
    InvalidTrailerLength {
        /// Required length
        expected: usize,
        /// Actual length received
        actual: usize,
    },

    /// A static-map engine was requested while one was already live.
    #[error("static peach map is already in use")]
    StaticMapBusy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_failure_message() {
        let err = PowError::AllocationFailure {
            requested_bytes: 1024,
        };
        assert_eq!(err.to_string(), "allocation failure: requested 1024 bytes");
    }

    #[test]
    fn invalid_trailer_length_message() {
        let err = PowError::InvalidTrailerLength {
            expected: 160,
            actual: 159,
        };
        assert_eq!(
            err.to_string(),
            "invalid trailer length: expected 160, got 159"
        );
    }
}
