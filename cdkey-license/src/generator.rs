//! License key generation.
//!
//! A key is produced as follows:
//!
//! 1. pack `serial` (big-endian) and `features` into a 5-byte message
//! 2. digest the message and hash the digest into G1, giving `h`
//! 3. sign: `sig = h^sk`, serialized x-only
//! 4. record = message ++ sig
//! 5. scramble the first 8 bytes of the record with a key taken from the
//!    compressed public key `pk = g^sk`
//! 6. Crockford-encode the record and group it by six with `-`
//!
//! Only the 8-byte prefix is scrambled; the rest of the signature is
//! emitted as is. Changing that would change the key format.

use crate::error::{KeygenError, KeygenResult};
use crate::reader::LicenseKeyReader;
use crate::record::{Message, ObfuscationKey, SignedRecord};
use cdkey_codec::{group, CrockfordCodec};
use cdkey_crypto::{Bls12Pairing, Pairing, PairingParams};
use sha2::{Digest, Sha256};
use std::marker::PhantomData;
use tracing::debug;
use zeroize::Zeroizing;

/// Symbols per group in a formatted key.
pub const GROUP_SIZE: usize = 6;

/// Separator between symbol groups.
pub const GROUP_SEPARATOR: char = '-';

/// A generator over the BLS12-381 backend with SHA-256 digests.
pub type Bls12KeyGenerator = LicenseKeyGenerator<Bls12Pairing>;

/// Issues license keys from a fixed generator and secret key.
///
/// The generator owns its key material for its whole lifetime. The secret
/// scalar is kept as its canonical bytes, zeroized on drop, and decoded
/// afresh on every call, so `generate` never mutates shared state and can be
/// called from several threads at once. Only the byte form is wiped; the
/// decoded backend scalar is not.
pub struct LicenseKeyGenerator<P: Pairing, D = Sha256> {
    pairing: P,
    g: P::G2,
    secret: Zeroizing<Vec<u8>>,
    codec: CrockfordCodec,
    digest: PhantomData<fn() -> D>,
}

impl<P: Pairing, D: Digest> LicenseKeyGenerator<P, D> {
    /// Builds a generator from textual domain parameters, a compressed G2
    /// generator and a secret scalar.
    ///
    /// Blobs longer than the required encoding are accepted; only their
    /// prefix is read.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the parameters cannot be parsed, if
    /// either blob is too short, or if either blob fails to decode. No
    /// secret bytes are retained on failure.
    pub fn new(params: &str, g: &[u8], secret_key: &[u8]) -> KeygenResult<Self> {
        let params = PairingParams::parse(params)?;
        let pairing = P::from_params(&params)?;

        let g_len = pairing.g2_compressed_len();
        if g.len() < g_len {
            return Err(KeygenError::GeneratorTooShort {
                expected: g_len,
                actual: g.len(),
            });
        }

        let sk_len = pairing.scalar_len();
        if secret_key.len() < sk_len {
            return Err(KeygenError::SecretKeyTooShort {
                expected: sk_len,
                actual: secret_key.len(),
            });
        }

        let g = pairing
            .g2_from_compressed(g)
            .map_err(|_| KeygenError::InvalidGenerator)?;
        pairing
            .scalar_from_bytes(secret_key)
            .map_err(|_| KeygenError::InvalidSecretKey)?;

        debug!(pairing = params.pairing_type(), "license key generator ready");

        Ok(Self {
            pairing,
            g,
            secret: Zeroizing::new(secret_key[..sk_len].to_vec()),
            codec: CrockfordCodec::default(),
            digest: PhantomData,
        })
    }

    /// Generates the license key for `serial` and `features`.
    ///
    /// The result is a pure function of the key material and the two
    /// arguments.
    ///
    /// # Errors
    ///
    /// Returns a generation error if the signed record is too short to be
    /// obfuscated. Nothing is returned on failure.
    pub fn generate(&self, serial: u32, features: u8) -> KeygenResult<String> {
        let message = Message::new(serial, features);
        let digest = D::digest(message.to_bytes());

        let sk = self.secret_scalar()?;
        let h = self.pairing.hash_to_g1(&digest);
        let signature = self.pairing.g1_mul(&h, &sk);

        let mut record = SignedRecord::new(&message, &self.pairing.g1_to_x_only(&signature))?;
        let key = self.derive_obfuscation_key(&sk);
        record.obfuscate(&key)?;

        let encoded = self.codec.encode(record.as_bytes());
        debug!(
            serial,
            features,
            record_len = record.len(),
            symbols = encoded.len(),
            "generated license key"
        );
        Ok(group(&encoded, GROUP_SIZE, GROUP_SEPARATOR))
    }

    /// Returns the compressed public key `g^sk`.
    ///
    /// Computed on demand; the generator never stores it.
    pub fn public_key(&self) -> KeygenResult<Vec<u8>> {
        let sk = self.secret_scalar()?;
        Ok(self.compressed_public_key(&sk))
    }

    /// Returns the key used to scramble the record prefix.
    pub fn obfuscation_key(&self) -> KeygenResult<ObfuscationKey> {
        let sk = self.secret_scalar()?;
        Ok(self.derive_obfuscation_key(&sk))
    }

    /// Returns the pairing backend.
    pub fn pairing(&self) -> &P {
        &self.pairing
    }

    /// Builds a reader for keys issued by this generator.
    pub fn reader(&self) -> KeygenResult<LicenseKeyReader<P>>
    where
        P: Clone,
    {
        Ok(LicenseKeyReader::from_parts(
            self.pairing.clone(),
            self.obfuscation_key()?,
        ))
    }

    // The returned backend scalar has no zeroize support and is dropped
    // without being wiped.
    fn secret_scalar(&self) -> KeygenResult<P::Scalar> {
        self.pairing
            .scalar_from_bytes(&self.secret)
            .map_err(|_| KeygenError::InvalidSecretKey)
    }

    fn compressed_public_key(&self, sk: &P::Scalar) -> Vec<u8> {
        let pk = self.pairing.g2_mul(&self.g, sk);
        self.pairing.g2_to_compressed(&pk)
    }

    fn derive_obfuscation_key(&self, sk: &P::Scalar) -> ObfuscationKey {
        ObfuscationKey::from_public_key(&self.compressed_public_key(sk))
    }
}

impl<P: Pairing, D> std::fmt::Debug for LicenseKeyGenerator<P, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseKeyGenerator")
            .field("secret", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
