//! Reading the message back out of a license key.
//!
//! The reader undoes the formatting and the prefix scramble using only the
//! public key. It does not check the signature: a reader accepts any
//! well-formed key and reports what it claims to be.

use crate::error::{KeygenError, KeygenResult};
use crate::generator::GROUP_SEPARATOR;
use crate::record::{Message, ObfuscationKey, MESSAGE_SIZE};
use cdkey_codec::{ungroup, CrockfordCodec};
use cdkey_crypto::{Bls12Pairing, Pairing, PairingParams};
use tracing::debug;

/// A reader over the BLS12-381 backend.
pub type Bls12KeyReader = LicenseKeyReader<Bls12Pairing>;

/// Recovers `{serial, features}` from issued license keys.
#[derive(Debug)]
pub struct LicenseKeyReader<P> {
    pairing: P,
    key: ObfuscationKey,
    codec: CrockfordCodec,
}

impl<P: Pairing> LicenseKeyReader<P> {
    /// Builds a reader from textual domain parameters and a compressed
    /// public key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the parameters cannot be parsed or
    /// the public key does not decode.
    pub fn new(params: &str, public_key: &[u8]) -> KeygenResult<Self> {
        let params = PairingParams::parse(params)?;
        let pairing = P::from_params(&params)?;

        let compressed = public_key
            .get(..pairing.g2_compressed_len())
            .ok_or(KeygenError::InvalidPublicKey)?;
        pairing
            .g2_from_compressed(compressed)
            .map_err(|_| KeygenError::InvalidPublicKey)?;
        let key = ObfuscationKey::from_public_key(compressed);

        Ok(Self::from_parts(pairing, key))
    }

    pub(crate) fn from_parts(pairing: P, key: ObfuscationKey) -> Self {
        Self {
            pairing,
            key,
            codec: CrockfordCodec::default(),
        }
    }

    /// Number of symbols in a key, separators excluded.
    pub fn symbol_count(&self) -> usize {
        self.codec
            .encoded_len(MESSAGE_SIZE + self.pairing.g1_x_only_len())
    }

    /// Reads the message carried by `license_key`.
    ///
    /// Surrounding whitespace and group separators are ignored, and the
    /// usual transcription slips (`o`, `i`, `l`, lowercase) are tolerated.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the key contains a symbol outside the
    /// alphabet or has the wrong length.
    pub fn read(&self, license_key: &str) -> KeygenResult<Message> {
        let symbols = ungroup(license_key.trim(), GROUP_SEPARATOR);
        let expected = self.symbol_count();
        let actual = symbols.chars().count();
        if actual != expected {
            return Err(KeygenError::InvalidKeyLength { expected, actual });
        }

        let mut record = self.codec.decode(&symbols)?;
        self.key.obfuscator().decode_prefix(&mut record)?;

        let message = Message::from_bytes(&record)
            .ok_or(KeygenError::InvalidKeyLength { expected, actual })?;
        debug!(serial = message.serial, features = message.features, "read license key");
        Ok(message)
    }
}
