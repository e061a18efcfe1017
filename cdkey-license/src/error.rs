//! Error types for license key generation and reading.

use cdkey_codec::CodecError;
use cdkey_crypto::{ObfuscationError, PairingError};
use thiserror::Error;

/// Result type for license key operations.
pub type KeygenResult<T> = Result<T, KeygenError>;

/// Broad category of a [`KeygenError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Key material or domain parameters were rejected at construction.
    Configuration,
    /// A key could not be produced from valid key material.
    Generation,
    /// A license key string could not be read back.
    Decode,
}

/// License key errors.
#[derive(Debug, Error)]
pub enum KeygenError {
    /// Domain parameters could not be parsed or name an unsupported curve.
    #[error("invalid pairing parameters: {0}")]
    InvalidParameters(#[from] PairingError),

    /// Generator blob is shorter than a compressed G2 element.
    #[error("generator too short: expected at least {expected} bytes, got {actual}")]
    GeneratorTooShort {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Secret key blob is shorter than a scalar.
    #[error("secret key too short: expected at least {expected} bytes, got {actual}")]
    SecretKeyTooShort {
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Generator blob does not decode to a usable point.
    #[error("invalid generator encoding")]
    InvalidGenerator,

    /// Secret key blob does not decode to a scalar.
    #[error("invalid secret key encoding")]
    InvalidSecretKey,

    /// Public key blob is too short or does not decode to a usable point.
    #[error("invalid public key encoding")]
    InvalidPublicKey,

    /// Message plus signature is too short for the obfuscation block.
    #[error("signed record too short to obfuscate: {0} bytes")]
    RecordTooShort(usize),

    /// The obfuscation step rejected the record.
    #[error("obfuscation failed: {0}")]
    Obfuscation(#[from] ObfuscationError),

    /// A license key contains a symbol outside the alphabet.
    #[error("invalid license key: {0}")]
    InvalidKey(#[from] CodecError),

    /// A license key has the wrong number of symbols.
    #[error("invalid license key length: expected {expected} symbols, got {actual}")]
    InvalidKeyLength {
        /// Symbols in a well-formed key, separators excluded.
        expected: usize,
        /// Symbols supplied.
        actual: usize,
    },
}

impl KeygenError {
    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameters(_)
            | Self::GeneratorTooShort { .. }
            | Self::SecretKeyTooShort { .. }
            | Self::InvalidGenerator
            | Self::InvalidSecretKey
            | Self::InvalidPublicKey => ErrorKind::Configuration,
            Self::RecordTooShort(_) | Self::Obfuscation(_) => ErrorKind::Generation,
            Self::InvalidKey(_) | Self::InvalidKeyLength { .. } => ErrorKind::Decode,
        }
    }
}
