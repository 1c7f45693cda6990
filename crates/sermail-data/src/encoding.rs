//! Base64 helpers for attachment content.
//!
//! Attachment payloads travel as standard-alphabet, padded Base64. A string
//! is only accepted when it is the exact encoding of its own decoding, so
//! inputs with stray whitespace, missing padding or non-zero trailing bits
//! are rejected even though a lenient decoder would accept them.

use crate::error::{Result, ValidationError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes data as Base64.
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes Base64 data.
///
/// # Errors
///
/// Returns an error if the input is not valid Base64.
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(data)
        .map_err(|_| ValidationError::InvalidBase64.into())
}

/// Returns true if `data` decodes and re-encodes to exactly itself.
#[must_use]
pub fn is_canonical_base64(data: &str) -> bool {
    STANDARD
        .decode(data)
        .is_ok_and(|bytes| STANDARD.encode(bytes) == data)
}

/// Checks that `data` is canonical Base64.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidBase64`] if the round trip does not
/// reproduce the input.
pub fn ensure_canonical_base64(data: &str) -> Result<()> {
    if is_canonical_base64(data) {
        Ok(())
    } else {
        Err(ValidationError::InvalidBase64.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base64_encode_decode() {
        let data = b"Hello, World!";
        let encoded = encode_base64(data);
        assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");

        let decoded = decode_base64(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_canonical_accepts_padded() {
        assert!(is_canonical_base64("VGhpcyBpcyBhIHRlc3Qh"));
        assert!(is_canonical_base64("SGk="));
        assert!(is_canonical_base64(""));
    }

    #[test]
    fn test_canonical_rejects_non_canonical() {
        // Trailing bits set in the last symbol.
        assert!(!is_canonical_base64("SGl="));
        assert!(!is_canonical_base64("SGk"));
        assert!(!is_canonical_base64("SGk=\n"));
        assert!(!is_canonical_base64(" SGk="));
        assert!(!is_canonical_base64("not base64!"));
        assert!(!is_canonical_base64("SGVsbG8_"));
    }

    #[test]
    fn test_ensure_canonical() {
        assert!(ensure_canonical_base64("SGk=").is_ok());
        let err = ensure_canonical_base64("SGk").unwrap_err();
        assert!(matches!(
            err.validation(),
            Some(ValidationError::InvalidBase64)
        ));
    }

    proptest! {
        #[test]
        fn prop_encoded_bytes_are_canonical(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let encoded = encode_base64(&bytes);
            prop_assert!(is_canonical_base64(&encoded));
            prop_assert_eq!(decode_base64(&encoded).unwrap(), bytes);
        }

        #[test]
        fn prop_accepted_strings_round_trip(s in "[A-Za-z0-9+/=]{0,24}") {
            if is_canonical_base64(&s) {
                let decoded = decode_base64(&s).unwrap();
                prop_assert_eq!(encode_base64(&decoded), s);
            }
        }
    }
}
