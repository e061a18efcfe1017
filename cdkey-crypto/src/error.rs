//! Error types for obfuscation and pairing operations.

use thiserror::Error;

/// Result type for obfuscation operations.
pub type ObfuscationResult<T> = Result<T, ObfuscationError>;

/// Result type for pairing operations.
pub type PairingResult<T> = Result<T, PairingError>;

/// Errors from the block obfuscator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObfuscationError {
    /// The block has fewer than two words (eight bytes).
    #[error("block too short: need at least {min} {unit}, got {actual}")]
    BlockTooShort {
        /// Minimum accepted size.
        min: usize,
        /// Size that was supplied.
        actual: usize,
        /// Either `"words"` or `"bytes"`.
        unit: &'static str,
    },
}

/// Errors from parsing domain parameters or decoding pairing elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// The parameter text is not a sequence of `key value` pairs.
    #[error("malformed pairing parameters: {0}")]
    MalformedParams(String),

    /// A required parameter is absent.
    #[error("missing pairing parameter: {0}")]
    MissingParam(&'static str),

    /// The parameters describe a curve this backend does not implement.
    #[error("unsupported pairing type: {0}")]
    UnsupportedType(String),

    /// A parameter value disagrees with the backend's curve.
    #[error("pairing parameter {name} does not match the curve")]
    ParamMismatch {
        /// Parameter key.
        name: String,
    },

    /// A byte blob is shorter than the element encoding requires.
    #[error("{element} encoding too short: expected {expected} bytes, got {actual}")]
    EncodingTooShort {
        /// Which element was being decoded.
        element: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// A byte blob does not encode a valid element.
    #[error("invalid {0} encoding")]
    InvalidEncoding(&'static str),
}
