//! Record-level behaviour, driven through a toy pairing with tiny encodings.

use cdkey_crypto::{Pairing, PairingError, PairingParams, PairingResult};
use cdkey_license::{
    ErrorKind, KeygenError, LicenseKeyGenerator, Message, ObfuscationKey, SignedRecord,
    MESSAGE_SIZE,
};

/// Arithmetic mod a small prime; not a pairing, just the right shape.
#[derive(Debug, Clone, Copy)]
struct ToyPairing {
    sig_len: usize,
}

const MODULUS: u64 = 65_521;

impl Pairing for ToyPairing {
    type G1 = u64;
    type G2 = u64;
    type Scalar = u64;

    fn from_params(params: &PairingParams) -> PairingResult<Self> {
        if params.pairing_type() != "toy" {
            return Err(PairingError::UnsupportedType(params.pairing_type().into()));
        }
        let sig_len = params
            .get("sig")
            .and_then(|v| v.parse().ok())
            .ok_or(PairingError::MissingParam("sig"))?;
        Ok(Self { sig_len })
    }

    fn scalar_len(&self) -> usize {
        2
    }

    fn g2_compressed_len(&self) -> usize {
        4
    }

    fn g1_x_only_len(&self) -> usize {
        self.sig_len
    }

    fn scalar_from_bytes(&self, bytes: &[u8]) -> PairingResult<u64> {
        Ok(u64::from(u16::from_be_bytes([bytes[0], bytes[1]])))
    }

    fn g2_from_compressed(&self, bytes: &[u8]) -> PairingResult<u64> {
        Ok(u64::from(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])) % MODULUS)
    }

    fn hash_to_g1(&self, digest: &[u8]) -> u64 {
        u64::from(u16::from_be_bytes([digest[0], digest[1]])) % MODULUS
    }

    fn g1_mul(&self, base: &u64, exp: &u64) -> u64 {
        base * exp % MODULUS
    }

    fn g2_mul(&self, base: &u64, exp: &u64) -> u64 {
        base * exp % MODULUS
    }

    fn g1_to_x_only(&self, point: &u64) -> Vec<u8> {
        point.to_be_bytes()[8 - self.sig_len..].to_vec()
    }

    fn g2_to_compressed(&self, point: &u64) -> Vec<u8> {
        (*point as u32).to_be_bytes().to_vec()
    }
}

fn toy_generator(sig_len: usize) -> LicenseKeyGenerator<ToyPairing> {
    LicenseKeyGenerator::new(&format!("type toy sig {sig_len}"), &[0, 0, 1, 3], &[0, 7]).unwrap()
}

#[test]
fn record_shorter_than_block_is_a_generation_error() {
    let generator = toy_generator(2);
    let err = generator.generate(1, 1).unwrap_err();
    assert!(matches!(err, KeygenError::RecordTooShort(7)));
    assert_eq!(err.kind(), ErrorKind::Generation);
}

#[test]
fn record_of_exactly_one_block_is_accepted() {
    let generator = toy_generator(3);
    let key = generator.generate(1, 1).unwrap();
    // 8 bytes = 64 bits = 13 symbols
    assert_eq!(key, cdkey_codec::group(&key.replace('-', ""), 6, '-'));
    assert_eq!(key.replace('-', "").len(), 13);
}

#[test]
fn short_public_key_is_zero_padded() {
    let generator = toy_generator(3);
    let pk = generator.public_key().unwrap();
    assert_eq!(pk.len(), 4);

    let key = generator.obfuscation_key().unwrap();
    assert_eq!(key.as_bytes()[..4], pk[..]);
    assert_eq!(key.as_bytes()[4..], [0u8; 12]);
}

#[test]
fn toy_reader_roundtrip() {
    let generator = toy_generator(6);
    let reader = generator.reader().unwrap();
    let key = generator.generate(0xDEAD_BEEF, 0x5A).unwrap();
    assert_eq!(reader.read(&key).unwrap(), Message::new(0xDEAD_BEEF, 0x5A));
}

// ── Message / SignedRecord / ObfuscationKey ──────────────────────

#[test]
fn message_wire_form_is_big_endian() {
    let message = Message::new(0x0A0B_0C0D, 0xEE);
    assert_eq!(message.to_bytes(), [0x0A, 0x0B, 0x0C, 0x0D, 0xEE]);
    assert_eq!(Message::from_bytes(&message.to_bytes()), Some(message));
    assert_eq!(Message::from_bytes(&[1, 2, 3, 4]), None);
    assert_eq!(MESSAGE_SIZE, 5);
}

#[test]
fn message_serde() {
    let message = Message::new(17, 0b1000_0001);
    let json = serde_json::to_string(&message).unwrap();
    assert_eq!(json, r#"{"serial":17,"features":129}"#);
    let parsed: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, message);
}

#[test]
fn signed_record_concatenates() {
    let record = SignedRecord::new(&Message::new(1, 2), &[9, 9, 9]).unwrap();
    assert_eq!(record.as_bytes(), &[0, 0, 0, 1, 2, 9, 9, 9]);
    assert_eq!(record.len(), 8);
    assert!(!record.is_empty());
}

#[test]
fn signed_record_rejects_short() {
    assert!(matches!(
        SignedRecord::new(&Message::new(1, 2), &[9, 9]),
        Err(KeygenError::RecordTooShort(7))
    ));
}

#[test]
fn obfuscation_key_truncates_long_public_key() {
    let pk: Vec<u8> = (0u8..96).collect();
    let key = ObfuscationKey::from_public_key(&pk);
    assert_eq!(key.as_bytes()[..], pk[..16]);
}

#[test]
fn obfuscation_key_from_empty_is_all_zero() {
    let key = ObfuscationKey::from_public_key(&[]);
    assert_eq!(key.as_bytes(), &[0u8; 16]);
    assert!(format!("{key:?}").contains("REDACTED"));
}
