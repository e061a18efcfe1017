//! Error types for the symbol codec.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while configuring a codec or decoding symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The alphabet reports a unit width outside `1..=8`.
    #[error("unsupported unit width: {0} bits (must be 1-8)")]
    UnsupportedWidth(u8),

    /// A symbol has no value in the alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The rejected symbol as it appeared in the input.
        symbol: char,
        /// Zero-based character position in the input.
        position: usize,
    },
}
