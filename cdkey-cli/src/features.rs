//! Feature-mask text form: eight binary digits, most significant first.

/// Parses a feature mask written in binary, e.g. `10100000` or `101`.
pub fn parse_features(text: &str) -> Result<u8, String> {
    let text = text.trim();
    if text.is_empty() || text.len() > 8 {
        return Err(format!("expected 1-8 binary digits, got {text:?}"));
    }
    if !text.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(format!("not a binary number: {text:?}"));
    }
    u8::from_str_radix(text, 2).map_err(|e| format!("not a binary number: {text:?}: {e}"))
}

/// Formats a feature mask as eight binary digits.
pub fn format_features(features: u8) -> String {
    format!("{features:08b}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_short_and_full_masks() {
        assert_eq!(parse_features("0"), Ok(0));
        assert_eq!(parse_features("101"), Ok(0b101));
        assert_eq!(parse_features("10000001"), Ok(0x81));
        assert_eq!(parse_features("11111111"), Ok(0xFF));
    }

    #[test]
    fn parse_rejects_bad_masks() {
        assert!(parse_features("").is_err());
        assert!(parse_features("102").is_err());
        assert!(parse_features("111111111").is_err());
        assert!(parse_features("+1").is_err());
    }

    #[test]
    fn format_pads_to_eight_digits() {
        assert_eq!(format_features(0), "00000000");
        assert_eq!(format_features(0b1010_0000), "10100000");
    }
}
