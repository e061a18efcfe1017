//! Symbol codec for cdkey license keys.
//!
//! Turns arbitrary bytes into short runs of human-transcribable symbols and
//! back. The codec is generic over an [`Alphabet`]; the only alphabet shipped
//! today is [`CrockfordAlphabet`], a 32-symbol set that tolerates the usual
//! transcription mistakes (`o`/`0`, `i`/`l`/`1`, lowercase).
//!
//! ```
//! use cdkey_codec::{group, CrockfordCodec};
//!
//! let codec = CrockfordCodec::default();
//! let symbols = codec.encode(b"foobar");
//! assert_eq!(symbols, "CSQPYRK1E8");
//! assert_eq!(group(&symbols, 6, '-'), "CSQPYR-K1E8");
//! assert_eq!(codec.decode("csqpyrkie8").unwrap(), b"foobar");
//! ```

mod alphabet;
mod coder;
mod error;

pub use alphabet::{Alphabet, CrockfordAlphabet, CROCKFORD_SYMBOLS};
pub use coder::{group, ungroup, CrockfordCodec, SymbolCodec};
pub use error::{CodecError, CodecResult};
