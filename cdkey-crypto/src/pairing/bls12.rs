//! BLS12-381 backend.

use super::{Pairing, PairingParams};
use crate::error::{PairingError, PairingResult};
use bls12_381::hash_to_curve::{ExpandMsgXmd, HashToCurve};
use bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};
use sha2_09::Sha256;
use zeroize::Zeroize;

const SCALAR_LEN: usize = 32;
const G1_X_ONLY_LEN: usize = 48;
const G2_COMPRESSED_LEN: usize = 96;

/// Flag bits in the first byte of a compressed point: compression,
/// infinity and sign.
const FLAG_MASK: u8 = 0b1110_0000;

/// BLS12-381 with signatures in G1 and keys in G2.
///
/// Scalars are 32 bytes big-endian. Hash-to-G1 is the SSWU random-oracle
/// construction over `expand_message_xmd(SHA-256)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bls12Pairing;

impl Bls12Pairing {
    /// Value of the `type` parameter.
    pub const TYPE: &'static str = "bls12_381";

    /// Base field modulus `q`, decimal.
    pub const FIELD_MODULUS: &'static str = "4002409555221667393417789825735904156556882819939007885332058136124031650490837864442687629129015664037894272559787";

    /// Prime group order `r`, decimal.
    pub const GROUP_ORDER: &'static str =
        "52435875175126190479447740508185965837690552500527637822603658699938581184513";

    /// Domain separation tag for hash-to-G1.
    pub const HASH_DST: &'static [u8] = b"CDKEY-V01-CS01-with-BLS12381G1_XMD:SHA-256_SSWU_RO_";

    /// The canonical parameter description for this curve.
    pub fn params_text() -> String {
        format!(
            "type {}\nq {}\nr {}\n",
            Self::TYPE,
            Self::FIELD_MODULUS,
            Self::GROUP_ORDER
        )
    }
}

fn take_prefix<const N: usize>(bytes: &[u8], element: &'static str) -> PairingResult<[u8; N]> {
    bytes
        .get(..N)
        .and_then(|prefix| <[u8; N]>::try_from(prefix).ok())
        .ok_or(PairingError::EncodingTooShort {
            element,
            expected: N,
            actual: bytes.len(),
        })
}

impl Pairing for Bls12Pairing {
    type G1 = G1Projective;
    type G2 = G2Projective;
    type Scalar = Scalar;

    fn from_params(params: &PairingParams) -> PairingResult<Self> {
        if params.pairing_type() != Self::TYPE {
            return Err(PairingError::UnsupportedType(
                params.pairing_type().to_string(),
            ));
        }

        for (name, expected) in [("q", Self::FIELD_MODULUS), ("r", Self::GROUP_ORDER)] {
            if let Some(value) = params.get(name) {
                if value != expected {
                    return Err(PairingError::ParamMismatch {
                        name: name.to_string(),
                    });
                }
            }
        }

        Ok(Self)
    }

    fn scalar_len(&self) -> usize {
        SCALAR_LEN
    }

    fn g2_compressed_len(&self) -> usize {
        G2_COMPRESSED_LEN
    }

    fn g1_x_only_len(&self) -> usize {
        G1_X_ONLY_LEN
    }

    fn scalar_from_bytes(&self, bytes: &[u8]) -> PairingResult<Scalar> {
        let mut le = take_prefix::<SCALAR_LEN>(bytes, "scalar")?;
        le.reverse();
        let scalar = Option::<Scalar>::from(Scalar::from_bytes(&le));
        le.zeroize();
        scalar.ok_or(PairingError::InvalidEncoding("scalar"))
    }

    fn g2_from_compressed(&self, bytes: &[u8]) -> PairingResult<G2Projective> {
        let compressed = take_prefix::<G2_COMPRESSED_LEN>(bytes, "G2 element")?;
        Option::<G2Affine>::from(G2Affine::from_compressed(&compressed))
            .filter(|point| !bool::from(point.is_identity()))
            .map(G2Projective::from)
            .ok_or(PairingError::InvalidEncoding("G2 element"))
    }

    fn hash_to_g1(&self, digest: &[u8]) -> G1Projective {
        <G1Projective as HashToCurve<ExpandMsgXmd<Sha256>>>::hash_to_curve(digest, Self::HASH_DST)
    }

    fn g1_mul(&self, base: &G1Projective, exp: &Scalar) -> G1Projective {
        base * exp
    }

    fn g2_mul(&self, base: &G2Projective, exp: &Scalar) -> G2Projective {
        base * exp
    }

    fn g1_to_x_only(&self, point: &G1Projective) -> Vec<u8> {
        let mut bytes = G1Affine::from(point).to_compressed();
        bytes[0] &= !FLAG_MASK;
        bytes.to_vec()
    }

    fn g2_to_compressed(&self, point: &G2Projective) -> Vec<u8> {
        G2Affine::from(point).to_compressed().to_vec()
    }
}
