//! Reversible binary-to-text transform for stored file content.
//!
//! The config table stores content in a `TEXT` column, so raw bytes (NULs,
//! invalid UTF-8) are carried as standard padded base64.

use crate::error::CodecError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes arbitrary bytes as storage-safe text.
///
/// Total over all inputs; the empty slice encodes to the empty string.
///
/// # Examples
///
/// ```
/// use confstash::core::codec;
///
/// assert_eq!(codec::encode(b"hello"), "aGVsbG8=");
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes text produced by [`encode`] back into the original bytes.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] if `text` contains characters outside the
/// base64 alphabet or has malformed padding.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(b""), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_binary_round_trip() {
        let data = [0x00, 0xff, 0xfe, b'\n', b'\'', b'"', b';', 0x80];
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }

    #[test]
    fn test_encoding_is_text_safe() {
        let all: Vec<u8> = (0..=255u8).collect();
        let text = encode(&all);
        assert!(
            text.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        );
    }

    #[test]
    fn test_decode_invalid_alphabet() {
        let err = decode("not*base64!").unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn test_decode_bad_padding() {
        assert!(decode("aGVsbG8").is_err());
        assert!(decode("aGVsbG8==").is_err());
    }
}
