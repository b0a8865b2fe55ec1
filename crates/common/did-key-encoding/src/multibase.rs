//! Multibase encoding/decoding utilities
//!
//! Multibase is a protocol for self-describing base encodings.
//! The first character indicates the encoding used. did:key only uses
//! base58btc (`z`).
//!
//! See: <https://github.com/multiformats/multibase>

use crate::EncodingError;
use crate::multicodec::{MultiEncoded, MultiEncodedBuf};

/// Multibase prefix for base58btc (Bitcoin alphabet)
pub const BASE58BTC_PREFIX: char = 'z';

/// Encode bytes as bare base58btc (no multibase prefix)
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode bare base58btc (no multibase prefix)
pub fn decode_base58(s: &str) -> Result<Vec<u8>, EncodingError> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| EncodingError::InvalidBase58(e.to_string()))
}

/// Decode a base58btc multibase string (must start with 'z')
///
/// Returns the decoded bytes without the prefix.
pub fn decode_base58btc(s: &str) -> Result<Vec<u8>, EncodingError> {
    let Some(encoded) = s.strip_prefix(BASE58BTC_PREFIX) else {
        let prefix = s.chars().next().unwrap_or('\0');
        return Err(EncodingError::InvalidMultibasePrefix(prefix));
    };

    decode_base58(encoded)
}

/// Encode bytes as base58btc with multibase prefix 'z'
pub fn encode_base58btc(bytes: &[u8]) -> String {
    format!("{}{}", BASE58BTC_PREFIX, encode_base58(bytes))
}

/// Decode a multikey string (multibase + multicodec encoded)
///
/// Returns just the key bytes without the multicodec prefix.
pub fn decode_multikey(key: &str) -> Result<Vec<u8>, EncodingError> {
    decode_multikey_with_codec(key).map(|(_, bytes)| bytes)
}

/// Decode a multikey string and return both codec and key bytes
pub fn decode_multikey_with_codec(key: &str) -> Result<(u64, Vec<u8>), EncodingError> {
    let bytes = decode_base58btc(key)?;
    let multi_encoded = MultiEncoded::new(&bytes)?;
    Ok((multi_encoded.codec(), multi_encoded.data().to_vec()))
}

/// Encode key bytes with a multicodec prefix as a multibase (base58btc) string
///
/// The result is the did:key fingerprint, e.g. `z6Mk...` for Ed25519.
pub fn encode_multikey(codec: u64, key_bytes: &[u8]) -> String {
    let encoded = MultiEncodedBuf::encode_raw(codec, key_bytes);
    encode_base58btc(encoded.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ED25519_PUB, X25519_PUB};

    #[test]
    fn test_decode_base58btc() {
        // "z" + base58btc("hello") = "zCn8eVZg"
        let result = decode_base58btc("zCn8eVZg").unwrap();
        assert_eq!(result, b"hello");
    }

    #[test]
    fn test_encode_base58btc() {
        assert_eq!(encode_base58btc(b"hello"), "zCn8eVZg");
        assert_eq!(encode_base58(b"hello"), "Cn8eVZg");
    }

    #[test]
    fn test_invalid_prefix() {
        let result = decode_base58btc("fABCDEF"); // 'f' is hex, not base58btc
        assert!(matches!(
            result.unwrap_err(),
            EncodingError::InvalidMultibasePrefix('f')
        ));
    }

    #[test]
    fn test_invalid_base58() {
        // '0', 'O', 'I', 'l' are not valid base58 characters
        let result = decode_base58btc("z0OIl");
        assert!(matches!(result.unwrap_err(), EncodingError::InvalidBase58(_)));
    }

    #[test]
    fn test_ed25519_fingerprint() {
        // Public key of the all-zero Ed25519 seed
        let public: [u8; 32] = [
            0x3b, 0x6a, 0x27, 0xbc, 0xce, 0xb6, 0xa4, 0x2d, 0x62, 0xa3, 0xa8, 0xd0, 0x2a, 0x6f,
            0x0d, 0x73, 0x65, 0x32, 0x15, 0x77, 0x1d, 0xe2, 0x43, 0xa6, 0x3a, 0xc0, 0x48, 0xa1,
            0x8b, 0x59, 0xda, 0x29,
        ];
        let fingerprint = encode_multikey(ED25519_PUB, &public);
        assert_eq!(
            fingerprint,
            "z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"
        );

        let (codec, bytes) = decode_multikey_with_codec(&fingerprint).unwrap();
        assert_eq!(codec, ED25519_PUB);
        assert_eq!(bytes, public);
    }

    #[test]
    fn test_x25519_fingerprint_prefix() {
        assert!(encode_multikey(X25519_PUB, &[0u8; 32]).starts_with("z6LS"));
        assert!(encode_multikey(X25519_PUB, &[0xffu8; 32]).starts_with("z6LS"));
    }
}
