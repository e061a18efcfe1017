//! Pairing capability.
//!
//! License keys are signed in the first source group of a bilinear pairing
//! and the public key lives in the second. The generator only needs the
//! handful of operations below, so any curve library can sit behind
//! [`Pairing`]. [`Bls12Pairing`] is the backend shipped with cdkey.
//!
//! Group operations are written additively by most curve libraries; the
//! `*_mul` methods are the exponentiations `h^sk` and `g^sk`.

mod bls12;
mod params;

pub use bls12::Bls12Pairing;
pub use params::PairingParams;

use crate::error::PairingResult;

/// Operations the license generator needs from a pairing-friendly curve.
pub trait Pairing: Sized {
    /// Element of the first source group (signatures).
    type G1;
    /// Element of the second source group (generator, public key).
    type G2;
    /// Exponent (secret key).
    type Scalar;

    /// Builds the backend for the given domain parameters.
    ///
    /// # Errors
    ///
    /// Fails if the parameters name another curve or disagree with this one.
    fn from_params(params: &PairingParams) -> PairingResult<Self>;

    /// Byte length of a serialized scalar.
    fn scalar_len(&self) -> usize;

    /// Byte length of a compressed G2 element.
    fn g2_compressed_len(&self) -> usize;

    /// Byte length of an x-only G1 element.
    fn g1_x_only_len(&self) -> usize;

    /// Reads a scalar from the first [`scalar_len`](Self::scalar_len) bytes.
    ///
    /// # Errors
    ///
    /// Fails if `bytes` is too short or is not a canonical scalar.
    fn scalar_from_bytes(&self, bytes: &[u8]) -> PairingResult<Self::Scalar>;

    /// Reads a G2 element from the first
    /// [`g2_compressed_len`](Self::g2_compressed_len) bytes.
    ///
    /// # Errors
    ///
    /// Fails if `bytes` is too short or is not a valid, non-identity point.
    fn g2_from_compressed(&self, bytes: &[u8]) -> PairingResult<Self::G2>;

    /// Maps a digest to a point of G1.
    fn hash_to_g1(&self, digest: &[u8]) -> Self::G1;

    /// Computes `base^exp` in G1.
    fn g1_mul(&self, base: &Self::G1, exp: &Self::Scalar) -> Self::G1;

    /// Computes `base^exp` in G2.
    fn g2_mul(&self, base: &Self::G2, exp: &Self::Scalar) -> Self::G2;

    /// Serializes a G1 element as its x-coordinate only.
    fn g1_to_x_only(&self, point: &Self::G1) -> Vec<u8>;

    /// Serializes a G2 element in compressed form.
    fn g2_to_compressed(&self, point: &Self::G2) -> Vec<u8>;
}
