//! Bitstream to symbol-sequence transcoding.
//!
//! Input bytes are read as one big-endian bitstream and cut into groups of
//! `unit_width` bits. A trailing group shorter than the unit is
//! left-justified (zero-filled in its low bits) and still emitted, so
//! decoding yields the original bytes followed by at most one unit of zero
//! padding, which is dropped because it never completes a byte.

use crate::alphabet::{Alphabet, CrockfordAlphabet};
use crate::error::{CodecError, CodecResult};

/// A codec over the Crockford base-32 alphabet.
pub type CrockfordCodec = SymbolCodec<CrockfordAlphabet>;

/// Generic transcoder between bytes and symbols of an [`Alphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCodec<A> {
    alphabet: A,
    width: u32,
}

impl<A: Alphabet> SymbolCodec<A> {
    /// Creates a codec for the given alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnsupportedWidth`] if the alphabet's unit width
    /// is not in `1..=8`.
    pub fn new(alphabet: A) -> CodecResult<Self> {
        let width = alphabet.unit_width();
        if !(1..=8).contains(&width) {
            return Err(CodecError::UnsupportedWidth(width));
        }
        Ok(Self {
            alphabet,
            width: u32::from(width),
        })
    }

    /// Returns the alphabet this codec maps through.
    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    /// Number of symbols `encode` produces for `byte_len` input bytes.
    pub fn encoded_len(&self, byte_len: usize) -> usize {
        (byte_len * 8).div_ceil(self.width as usize)
    }

    /// Encodes bytes into symbols. Never fails.
    pub fn encode(&self, bytes: &[u8]) -> String {
        let mask = (1u32 << self.width) - 1;
        let mut out = String::with_capacity(self.encoded_len(bytes.len()));
        let mut acc: u32 = 0;
        let mut bits: u32 = 0;

        for &byte in bytes {
            acc = (acc << 8) | u32::from(byte);
            bits += 8;
            while bits >= self.width {
                bits -= self.width;
                out.push(self.alphabet.forward(((acc >> bits) & mask) as u8));
            }
            acc &= (1u32 << bits) - 1;
        }

        if bits > 0 {
            let tail = (acc << (self.width - bits)) & mask;
            out.push(self.alphabet.forward(tail as u8));
        }

        out
    }

    /// Decodes symbols back into bytes.
    ///
    /// Leftover bits that do not complete a byte are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidSymbol`] for the first symbol the
    /// alphabet rejects; no partial output is returned.
    pub fn decode(&self, symbols: &str) -> CodecResult<Vec<u8>> {
        let mut out = Vec::with_capacity(symbols.len() * self.width as usize / 8);
        let mut acc: u32 = 0;
        let mut bits: u32 = 0;

        for (position, symbol) in symbols.chars().enumerate() {
            let value = self
                .alphabet
                .reverse_tolerant(symbol)
                .filter(|&v| u32::from(v) >> self.width == 0)
                .ok_or(CodecError::InvalidSymbol { symbol, position })?;

            acc = (acc << self.width) | u32::from(value);
            bits += self.width;
            if bits >= 8 {
                bits -= 8;
                out.push((acc >> bits) as u8);
                acc &= (1u32 << bits) - 1;
            }
        }

        Ok(out)
    }
}

impl Default for SymbolCodec<CrockfordAlphabet> {
    fn default() -> Self {
        Self {
            alphabet: CrockfordAlphabet,
            width: u32::from(CrockfordAlphabet::UNIT_WIDTH),
        }
    }
}

/// Inserts `separator` after every `every`-th symbol, except after the last.
///
/// `every == 0` returns the input unchanged.
pub fn group(symbols: &str, every: usize, separator: char) -> String {
    if every == 0 {
        return symbols.to_string();
    }

    let count = symbols.chars().count();
    let mut out = String::with_capacity(symbols.len() + count / every);
    for (i, symbol) in symbols.chars().enumerate() {
        out.push(symbol);
        let written = i + 1;
        if written % every == 0 && written != count {
            out.push(separator);
        }
    }
    out
}

/// Removes every `separator` from grouped input.
pub fn ungroup(symbols: &str, separator: char) -> String {
    symbols.chars().filter(|&c| c != separator).collect()
}
