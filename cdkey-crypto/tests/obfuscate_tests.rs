use cdkey_crypto::{BlockObfuscator, ObfuscationError, PREFIX_SIZE};

// ── Known answers ────────────────────────────────────────────────

#[test]
fn zero_block_zero_key_matches_published_vector() {
    let obf = BlockObfuscator::new([0; 4]);
    let mut block = [0u32; 2];
    obf.encode_words(&mut block).unwrap();
    assert_eq!(block, [0x0537_04AB, 0x575D_8C80]);
}

#[test]
fn known_vector_with_key() {
    let obf = BlockObfuscator::new([0x08, 0x07, 0x06, 0x05]);
    let mut block = [0x01u32, 0x02];
    obf.encode_words(&mut block).unwrap();
    assert_eq!(block, [0xEE2A_4F52, 0xBEAB_0907]);
}

#[test]
fn known_vector_four_words() {
    let obf = BlockObfuscator::new([0; 4]);
    let mut block = [0u32; 4];
    obf.encode_words(&mut block).unwrap();
    assert_eq!(block, [0xE6C8_D5FF, 0x070F_B6E4, 0x98A5_34F7, 0xAC03_E399]);
}

// ── Round trips ──────────────────────────────────────────────────

#[test]
fn decode_reverses_encode() {
    let obf = BlockObfuscator::new([0x0011_2233, 0x4455_6677, 0x8899_AABB, 0xCCDD_EEFF]);
    let original = [0x0123_4567u32, 0x89AB_CDEF];
    let mut block = original;
    obf.encode_words(&mut block).unwrap();
    assert_eq!(block, [0x3435_4989, 0xDD7D_1A7A]);
    obf.decode_words(&mut block).unwrap();
    assert_eq!(block, original);
}

#[test]
fn wrong_key_does_not_decode() {
    let a = BlockObfuscator::new([1, 2, 3, 4]);
    let b = BlockObfuscator::new([1, 2, 3, 5]);
    let original = [7u32, 9];
    let mut block = original;
    a.encode_words(&mut block).unwrap();
    b.decode_words(&mut block).unwrap();
    assert_ne!(block, original);
}

// ── Prefix contract ──────────────────────────────────────────────

#[test]
fn prefix_matches_word_transform() {
    let obf = BlockObfuscator::new([0; 4]);
    let mut bytes = [0u8; PREFIX_SIZE];
    obf.encode_prefix(&mut bytes).unwrap();
    let mut expected = Vec::new();
    expected.extend_from_slice(&0x0537_04ABu32.to_le_bytes());
    expected.extend_from_slice(&0x575D_8C80u32.to_le_bytes());
    assert_eq!(bytes.to_vec(), expected);
}

#[test]
fn prefix_leaves_tail_untouched() {
    let obf = BlockObfuscator::from_key_bytes(&[0xA5; 16]);
    let original: Vec<u8> = (0u8..53).collect();
    let mut bytes = original.clone();
    obf.encode_prefix(&mut bytes).unwrap();
    assert_ne!(bytes[..PREFIX_SIZE], original[..PREFIX_SIZE]);
    assert_eq!(bytes[PREFIX_SIZE..], original[PREFIX_SIZE..]);

    obf.decode_prefix(&mut bytes).unwrap();
    assert_eq!(bytes, original);
}

#[test]
fn short_prefix_is_rejected() {
    let obf = BlockObfuscator::new([0; 4]);
    let mut bytes = [0u8; 7];
    assert_eq!(
        obf.encode_prefix(&mut bytes).unwrap_err(),
        ObfuscationError::BlockTooShort {
            min: 8,
            actual: 7,
            unit: "bytes"
        }
    );
    assert_eq!(bytes, [0u8; 7]);
}

#[test]
fn single_word_is_rejected() {
    let obf = BlockObfuscator::new([0; 4]);
    let mut block = [42u32];
    assert!(obf.encode_words(&mut block).is_err());
    assert!(obf.decode_words(&mut block).is_err());
    assert!(obf.encode_words(&mut []).is_err());
    assert_eq!(block, [42]);
}

#[test]
fn debug_redacts_key() {
    let obf = BlockObfuscator::new([0xDEAD_BEEF; 4]);
    let dbg = format!("{obf:?}");
    assert!(dbg.contains("REDACTED"));
    assert!(!dbg.to_lowercase().contains("deadbeef"));
}
