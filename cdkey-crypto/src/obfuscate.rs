//! Keyed block mixing (corrected block TEA / XXTEA).
//!
//! This is a light, reversible scramble of a few words under a 128-bit key.
//! It hides structure in the license key prefix; it is not meant to resist
//! a determined attacker.

use crate::error::{ObfuscationError, ObfuscationResult};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the obfuscation key in bytes.
pub const OBFUSCATION_KEY_SIZE: usize = 16;

/// Number of bytes `encode_prefix` and `decode_prefix` transform.
pub const PREFIX_SIZE: usize = 8;

const DELTA: u32 = 0x9E37_79B9;

#[inline]
fn mx(sum: u32, y: u32, z: u32, p: usize, e: u32, key: &[u32; 4]) -> u32 {
    let k = key[(p & 3) ^ e as usize];
    (((z >> 5) ^ (y << 2)).wrapping_add((y >> 3) ^ (z << 4)))
        ^ ((sum ^ y).wrapping_add(k ^ z))
}

fn rounds(n: usize) -> u32 {
    6 + 52 / n as u32
}

/// XXTEA-family obfuscator bound to one key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct BlockObfuscator {
    key: [u32; 4],
}

impl BlockObfuscator {
    /// Creates an obfuscator from four key words.
    pub fn new(key: [u32; 4]) -> Self {
        Self { key }
    }

    /// Creates an obfuscator from 16 key bytes, read as little-endian words.
    pub fn from_key_bytes(bytes: &[u8; OBFUSCATION_KEY_SIZE]) -> Self {
        let mut key = [0u32; 4];
        for (word, chunk) in key.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { key }
    }

    /// Mixes `block` in place (forward direction).
    ///
    /// # Errors
    ///
    /// Returns [`ObfuscationError::BlockTooShort`] if `block` has fewer than
    /// two words.
    pub fn encode_words(&self, block: &mut [u32]) -> ObfuscationResult<()> {
        let n = check_words(block)?;
        let mut rounds = rounds(n);
        let mut sum: u32 = 0;
        let mut z = block[n - 1];

        while rounds > 0 {
            rounds -= 1;
            sum = sum.wrapping_add(DELTA);
            let e = (sum >> 2) & 3;
            for p in 0..n {
                let y = block[(p + 1) % n];
                block[p] = block[p].wrapping_add(mx(sum, y, z, p, e, &self.key));
                z = block[p];
            }
        }
        Ok(())
    }

    /// Reverses [`encode_words`](Self::encode_words) in place.
    ///
    /// # Errors
    ///
    /// Returns [`ObfuscationError::BlockTooShort`] if `block` has fewer than
    /// two words.
    pub fn decode_words(&self, block: &mut [u32]) -> ObfuscationResult<()> {
        let n = check_words(block)?;
        let mut rounds = rounds(n);
        let mut sum = rounds.wrapping_mul(DELTA);
        let mut y = block[0];

        while rounds > 0 {
            rounds -= 1;
            let e = (sum >> 2) & 3;
            for p in (0..n).rev() {
                let z = block[(p + n - 1) % n];
                block[p] = block[p].wrapping_sub(mx(sum, y, z, p, e, &self.key));
                y = block[p];
            }
            sum = sum.wrapping_sub(DELTA);
        }
        Ok(())
    }

    /// Mixes the first eight bytes of `bytes` as two little-endian words.
    /// Bytes past the prefix are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ObfuscationError::BlockTooShort`] if `bytes` is shorter than
    /// eight bytes.
    pub fn encode_prefix(&self, bytes: &mut [u8]) -> ObfuscationResult<()> {
        self.with_prefix(bytes, Self::encode_words)
    }

    /// Reverses [`encode_prefix`](Self::encode_prefix).
    ///
    /// # Errors
    ///
    /// Returns [`ObfuscationError::BlockTooShort`] if `bytes` is shorter than
    /// eight bytes.
    pub fn decode_prefix(&self, bytes: &mut [u8]) -> ObfuscationResult<()> {
        self.with_prefix(bytes, Self::decode_words)
    }

    fn with_prefix(
        &self,
        bytes: &mut [u8],
        op: fn(&Self, &mut [u32]) -> ObfuscationResult<()>,
    ) -> ObfuscationResult<()> {
        if bytes.len() < PREFIX_SIZE {
            return Err(ObfuscationError::BlockTooShort {
                min: PREFIX_SIZE,
                actual: bytes.len(),
                unit: "bytes",
            });
        }

        let prefix = &mut bytes[..PREFIX_SIZE];
        let mut words = [
            u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]),
            u32::from_le_bytes([prefix[4], prefix[5], prefix[6], prefix[7]]),
        ];
        op(self, &mut words)?;
        prefix[..4].copy_from_slice(&words[0].to_le_bytes());
        prefix[4..].copy_from_slice(&words[1].to_le_bytes());
        words.zeroize();
        Ok(())
    }
}

impl std::fmt::Debug for BlockObfuscator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockObfuscator")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

fn check_words(block: &[u32]) -> ObfuscationResult<usize> {
    if block.len() < 2 {
        return Err(ObfuscationError::BlockTooShort {
            min: 2,
            actual: block.len(),
            unit: "words",
        });
    }
    Ok(block.len())
}
