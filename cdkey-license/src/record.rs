//! Wire-level pieces of a license key: the signed message, the record that
//! carries it, and the key that scrambles the record prefix.

use crate::error::{KeygenError, KeygenResult};
use cdkey_crypto::{BlockObfuscator, OBFUSCATION_KEY_SIZE, PREFIX_SIZE};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a packed [`Message`] in bytes.
pub const MESSAGE_SIZE: usize = 5;

/// The signed payload of a license key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Issue counter.
    pub serial: u32,
    /// Feature flags, one bit per feature.
    pub features: u8,
}

impl Message {
    /// Creates a message.
    #[must_use]
    pub const fn new(serial: u32, features: u8) -> Self {
        Self { serial, features }
    }

    /// Packs the message as big-endian serial followed by the feature byte.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; MESSAGE_SIZE] {
        let s = self.serial.to_be_bytes();
        [s[0], s[1], s[2], s[3], self.features]
    }

    /// Unpacks a message from the first five bytes of `bytes`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [a, b, c, d, features, ..] => Some(Self {
                serial: u32::from_be_bytes([*a, *b, *c, *d]),
                features: *features,
            }),
            _ => None,
        }
    }
}

/// Message bytes followed by the x-only signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRecord {
    bytes: Vec<u8>,
}

impl SignedRecord {
    /// Concatenates a message and its signature.
    ///
    /// # Errors
    ///
    /// Returns [`KeygenError::RecordTooShort`] if the result cannot fill the
    /// eight-byte obfuscation block.
    pub fn new(message: &Message, signature: &[u8]) -> KeygenResult<Self> {
        let mut bytes = Vec::with_capacity(MESSAGE_SIZE + signature.len());
        bytes.extend_from_slice(&message.to_bytes());
        bytes.extend_from_slice(signature);
        if bytes.len() < PREFIX_SIZE {
            return Err(KeygenError::RecordTooShort(bytes.len()));
        }
        Ok(Self { bytes })
    }

    /// Scrambles the record prefix in place.
    pub(crate) fn obfuscate(&mut self, key: &ObfuscationKey) -> KeygenResult<()> {
        key.obfuscator().encode_prefix(&mut self.bytes)?;
        Ok(())
    }

    /// Returns the record bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a record holds at least one obfuscation block.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// 16-byte obfuscation key taken from the compressed public key.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ObfuscationKey {
    bytes: [u8; OBFUSCATION_KEY_SIZE],
}

impl ObfuscationKey {
    /// Takes the first 16 bytes of `public_key`; a shorter encoding is
    /// padded with zero bytes.
    #[must_use]
    pub fn from_public_key(public_key: &[u8]) -> Self {
        let mut bytes = [0u8; OBFUSCATION_KEY_SIZE];
        let n = public_key.len().min(OBFUSCATION_KEY_SIZE);
        bytes[..n].copy_from_slice(&public_key[..n]);
        Self { bytes }
    }

    /// Returns the key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; OBFUSCATION_KEY_SIZE] {
        &self.bytes
    }

    /// Builds the block obfuscator for this key.
    #[must_use]
    pub fn obfuscator(&self) -> BlockObfuscator {
        BlockObfuscator::from_key_bytes(&self.bytes)
    }
}

impl std::fmt::Debug for ObfuscationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObfuscationKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
