//! Alphabet capability and the Crockford base-32 alphabet.

/// A symbol set that maps fixed-width bit groups to characters and back.
///
/// `forward` must be total over `[0, 2^unit_width)`. `reverse_tolerant` may
/// normalize human-entered input before looking it up and returns `None` for
/// anything it cannot map.
pub trait Alphabet {
    /// Number of bits carried by one symbol (1-8).
    fn unit_width(&self) -> u8;

    /// Maps a value in `[0, 2^unit_width)` to its symbol.
    fn forward(&self, value: u8) -> char;

    /// Maps a symbol back to its value, tolerating known ambiguities.
    fn reverse_tolerant(&self, symbol: char) -> Option<u8>;
}

/// Crockford base-32 symbols, indexed by value.
pub const CROCKFORD_SYMBOLS: [u8; 32] = *b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// The Crockford base-32 alphabet.
///
/// Digits plus letters without `I`, `L`, `O` and `U`. Decoding is
/// case-insensitive, reads `I`/`L` as `1` and `O` as `0`, and always rejects
/// `U` so it is never mistaken for `V`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrockfordAlphabet;

impl CrockfordAlphabet {
    /// Bits per Crockford symbol.
    pub const UNIT_WIDTH: u8 = 5;
}

impl Alphabet for CrockfordAlphabet {
    fn unit_width(&self) -> u8 {
        Self::UNIT_WIDTH
    }

    fn forward(&self, value: u8) -> char {
        char::from(CROCKFORD_SYMBOLS[usize::from(value & 0x1F)])
    }

    fn reverse_tolerant(&self, symbol: char) -> Option<u8> {
        if !symbol.is_ascii_alphanumeric() {
            return None;
        }

        let normalized = match symbol.to_ascii_uppercase() {
            'U' => return None,
            'I' | 'L' => b'1',
            'O' => b'0',
            other => other as u8,
        };

        CROCKFORD_SYMBOLS
            .iter()
            .position(|&s| s == normalized)
            .map(|index| index as u8)
    }
}
