//! Shared test helpers for license key tests.

#![allow(dead_code)]

use bls12_381::{G2Affine, G2Projective, Scalar};
use cdkey_crypto::Bls12Pairing;
use cdkey_license::Bls12KeyGenerator;

/// Returns the canonical BLS12-381 parameter text.
pub fn params() -> String {
    Bls12Pairing::params_text()
}

/// Returns a fixed compressed G2 generator.
pub fn generator_bytes() -> Vec<u8> {
    G2Affine::from(G2Projective::generator() * Scalar::from(0x5EED_u64))
        .to_compressed()
        .to_vec()
}

/// Returns a big-endian secret scalar.
pub fn secret_key_bytes(value: u64) -> Vec<u8> {
    let mut bytes = Scalar::from(value).to_bytes();
    bytes.reverse();
    bytes.to_vec()
}

/// Returns the compressed public key for `generator_bytes()` and `secret`.
pub fn public_key_bytes(secret: u64) -> Vec<u8> {
    let g = G2Projective::generator() * Scalar::from(0x5EED_u64);
    G2Affine::from(g * Scalar::from(secret)).to_compressed().to_vec()
}

/// Builds a generator with a fixed secret key.
pub fn test_generator() -> Bls12KeyGenerator {
    generator_with_secret(0xC0FF_EE15_600D_u64)
}

/// Builds a generator with the given secret key.
pub fn generator_with_secret(secret: u64) -> Bls12KeyGenerator {
    Bls12KeyGenerator::new(&params(), &generator_bytes(), &secret_key_bytes(secret)).unwrap()
}
