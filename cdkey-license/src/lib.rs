//! Short, pairing-signed license keys.
//!
//! A license key carries a 32-bit serial and an 8-bit feature mask, signed
//! with a BLS-style pairing signature. The record is lightly scrambled and
//! rendered in Crockford base-32, grouped by six:
//!
//! ```text
//! 4K0ZQM-7R2D9V-...-T
//! ```
//!
//! - [`LicenseKeyGenerator`] issues keys from a generator and secret key
//! - [`LicenseKeyReader`] recovers the serial and features from a key using
//!   only the public key (no signature check)
//!
//! The serial counter belongs to the caller; the generator only ever takes
//! it as an argument.

mod error;
mod generator;
mod reader;
mod record;

pub use error::{ErrorKind, KeygenError, KeygenResult};
pub use generator::{Bls12KeyGenerator, LicenseKeyGenerator, GROUP_SEPARATOR, GROUP_SIZE};
pub use reader::{Bls12KeyReader, LicenseKeyReader};
pub use record::{Message, ObfuscationKey, SignedRecord, MESSAGE_SIZE};
