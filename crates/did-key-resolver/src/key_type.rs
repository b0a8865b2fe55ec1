//! Key types that can be generated or resolved

use std::{fmt, str::FromStr};

use did_key_crypto::Curve;
use serde::{Deserialize, Serialize};

use crate::{errors::DIDKeyError, handler::WebCryptoParams};

/// Every key type known to the registry
///
/// BLS12-381 types are resolve-only: they own a prefix but no generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Ed25519,
    Secp256k1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    X25519,
    #[serde(rename = "bls12381-g1")]
    Bls12381G1,
    #[serde(rename = "bls12381-g2")]
    Bls12381G2,
}

impl KeyType {
    pub const ALL: [KeyType; 8] = [
        KeyType::Ed25519,
        KeyType::Secp256k1,
        KeyType::Secp256r1,
        KeyType::Secp384r1,
        KeyType::Secp521r1,
        KeyType::X25519,
        KeyType::Bls12381G1,
        KeyType::Bls12381G2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Ed25519 => "ed25519",
            KeyType::Secp256k1 => "secp256k1",
            KeyType::Secp256r1 => "secp256r1",
            KeyType::Secp384r1 => "secp384r1",
            KeyType::Secp521r1 => "secp521r1",
            KeyType::X25519 => "x25519",
            KeyType::Bls12381G1 => "bls12381-g1",
            KeyType::Bls12381G2 => "bls12381-g2",
        }
    }

    /// The 12 character DID prefix (`did:key:` + multicodec header) owned by this type
    pub fn prefix(&self) -> &'static str {
        match self {
            KeyType::Ed25519 => "did:key:z6Mk",
            KeyType::Secp256k1 => "did:key:zQ3s",
            KeyType::Secp256r1 => "did:key:zDna",
            KeyType::Secp384r1 => "did:key:z82L",
            KeyType::Secp521r1 => "did:key:z2J9",
            KeyType::X25519 => "did:key:z6LS",
            KeyType::Bls12381G1 => "did:key:z3tE",
            KeyType::Bls12381G2 => "did:key:zUC7",
        }
    }

    pub fn curve(&self) -> Curve {
        match self {
            KeyType::Ed25519 => Curve::Ed25519,
            KeyType::Secp256k1 => Curve::Secp256k1,
            KeyType::Secp256r1 => Curve::P256,
            KeyType::Secp384r1 => Curve::P384,
            KeyType::Secp521r1 => Curve::P521,
            KeyType::X25519 => Curve::X25519,
            KeyType::Bls12381G1 => Curve::Bls12381G1,
            KeyType::Bls12381G2 => Curve::Bls12381G2,
        }
    }

    /// Fixed web-crypto descriptor for the NIST curves
    ///
    /// These types cannot be generated from a seed, so generation always
    /// uses this descriptor instead of caller options.
    pub fn web_crypto_params(&self) -> Option<WebCryptoParams> {
        let crv_or_size = match self {
            KeyType::Secp256r1 => "P-256",
            KeyType::Secp384r1 => "P-384",
            KeyType::Secp521r1 => "P-521",
            _ => return None,
        };

        Some(WebCryptoParams {
            kty: "EC",
            crv_or_size,
        })
    }
}

impl FromStr for KeyType {
    type Err = DIDKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyType::ALL
            .into_iter()
            .find(|key_type| key_type.as_str() == s)
            .ok_or_else(|| DIDKeyError::UnsupportedType(s.to_string()))
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_distinct_and_twelve_chars() {
        for (i, a) in KeyType::ALL.iter().enumerate() {
            assert_eq!(a.prefix().len(), 12);
            for b in &KeyType::ALL[i + 1..] {
                assert_ne!(a.prefix(), b.prefix());
            }
        }
    }

    #[test]
    fn prefixes_match_encoded_keys() {
        for key_type in KeyType::ALL {
            let codec = key_type.curve().public_codec();
            let length = did_key_encoding::Codec::from_u64(codec)
                .expected_key_length()
                .unwrap();
            let mut key = vec![0x42u8; length];
            // SEC1 compressed tag, or the BLS12-381 compression flag
            key[0] = match key_type {
                KeyType::Bls12381G1 | KeyType::Bls12381G2 => 0xa0,
                _ => 0x02,
            };

            let fingerprint = did_key_encoding::encode_multikey(codec, &key);
            assert_eq!(&format!("did:key:{fingerprint}")[..12], key_type.prefix());
        }
    }

    #[test]
    fn parse_and_display() {
        for key_type in KeyType::ALL {
            assert_eq!(key_type.as_str().parse::<KeyType>().unwrap(), key_type);
        }
        assert_eq!(KeyType::Bls12381G2.to_string(), "bls12381-g2");
        assert!(matches!(
            "rsa".parse::<KeyType>(),
            Err(DIDKeyError::UnsupportedType(_))
        ));
    }

    #[test]
    fn only_nist_curves_have_web_crypto_params() {
        assert_eq!(
            KeyType::Secp384r1.web_crypto_params(),
            Some(WebCryptoParams {
                kty: "EC",
                crv_or_size: "P-384"
            })
        );
        assert_eq!(KeyType::Secp256k1.web_crypto_params(), None);
        assert_eq!(KeyType::Ed25519.web_crypto_params(), None);
    }
}
