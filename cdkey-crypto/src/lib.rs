//! Cryptographic building blocks for cdkey.
//!
//! - [`BlockObfuscator`]: XXTEA-family keyed mixing used to scramble the
//!   license key prefix
//! - [`Pairing`]: the pairing operations the key generator relies on, with
//!   [`Bls12Pairing`] as the concrete backend
//! - [`PairingParams`]: textual domain parameters

mod error;
mod obfuscate;
mod pairing;

pub use error::{ObfuscationError, ObfuscationResult, PairingError, PairingResult};
pub use obfuscate::{BlockObfuscator, OBFUSCATION_KEY_SIZE, PREFIX_SIZE};
pub use pairing::{Bls12Pairing, Pairing, PairingParams};
