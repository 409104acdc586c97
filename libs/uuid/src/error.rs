//! Error types for UUID generation, construction, and parsing.

use thiserror::Error;

/// Errors that can occur when generating, constructing, or parsing a UUID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UuidError {
    /// The operating system's secure random source could not supply bytes.
    #[error("failed to read from OS entropy source: {0}")]
    Entropy(String),

    /// The input buffer or string has the wrong length.
    #[error("invalid UUID length: expected {expected}, got {actual}")]
    InvalidLength { expected: &'static str, actual: usize },

    /// Brace pairing or hyphen placement is wrong.
    #[error("invalid UUID string format: {reason}")]
    InvalidFormat { reason: &'static str },

    /// A character outside `[0-9a-fA-F]` appears where a hex digit belongs.
    #[error("invalid hex digit {found:?} at index {index}")]
    InvalidHexDigit { found: char, index: usize },
}

impl UuidError {
    /// Returns true if this error came from rejecting textual or byte input.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            UuidError::InvalidLength { .. }
                | UuidError::InvalidFormat { .. }
                | UuidError::InvalidHexDigit { .. }
        )
    }

    /// Returns true if this error indicates the random source failed.
    pub fn is_entropy_error(&self) -> bool {
        matches!(self, UuidError::Entropy(_))
    }
}
