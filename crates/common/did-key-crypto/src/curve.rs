//! Curve enumeration

use std::fmt;

use did_key_encoding::{
    BLS12381_G1_PUB, BLS12381_G2_PUB, Codec, ED25519_PUB, P256_PUB, P384_PUB, P521_PUB,
    SECP256K1_PUB, X25519_PUB,
};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::CryptoError;

/// Curves whose public keys can appear in a did:key identifier
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Zeroize)]
pub enum Curve {
    Ed25519,
    X25519,
    Secp256k1,
    P256,
    P384,
    P521,
    Bls12381G1,
    Bls12381G2,
}

impl Curve {
    /// The JWK `crv` member for this curve
    pub fn jwk_name(&self) -> &'static str {
        match self {
            Curve::Ed25519 => "Ed25519",
            Curve::X25519 => "X25519",
            Curve::Secp256k1 => "secp256k1",
            Curve::P256 => "P-256",
            Curve::P384 => "P-384",
            Curve::P521 => "P-521",
            Curve::Bls12381G1 => "BLS12381_G1",
            Curve::Bls12381G2 => "BLS12381_G2",
        }
    }

    /// The JWK `kty` member for this curve
    pub fn jwk_key_type(&self) -> &'static str {
        match self {
            Curve::Ed25519 | Curve::X25519 => "OKP",
            _ => "EC",
        }
    }

    /// Multicodec for the public key
    pub fn public_codec(&self) -> u64 {
        match self {
            Curve::Ed25519 => ED25519_PUB,
            Curve::X25519 => X25519_PUB,
            Curve::Secp256k1 => SECP256K1_PUB,
            Curve::P256 => P256_PUB,
            Curve::P384 => P384_PUB,
            Curve::P521 => P521_PUB,
            Curve::Bls12381G1 => BLS12381_G1_PUB,
            Curve::Bls12381G2 => BLS12381_G2_PUB,
        }
    }

    /// Compresses affine coordinates into the SEC1 point used by did:key
    pub fn compress_point(&self, x: &[u8], y: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self {
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::compress(x, y),
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::compress(x, y),
            #[cfg(feature = "p384")]
            Curve::P384 => crate::p384::compress(x, y),
            #[cfg(feature = "p521")]
            Curve::P521 => crate::p521::compress(x, y),
            _ => Err(CryptoError::UnsupportedCurve(format!(
                "{self} has no x/y point form"
            ))),
        }
    }

    /// Resolve the curve carried by a multicodec prefix
    pub fn from_codec(codec: Codec) -> Result<Self, CryptoError> {
        match codec {
            Codec::Ed25519Pub => Ok(Curve::Ed25519),
            Codec::X25519Pub => Ok(Curve::X25519),
            Codec::Secp256k1Pub => Ok(Curve::Secp256k1),
            Codec::P256Pub => Ok(Curve::P256),
            Codec::P384Pub => Ok(Curve::P384),
            Codec::P521Pub => Ok(Curve::P521),
            Codec::Bls12381G1Pub => Ok(Curve::Bls12381G1),
            Codec::Bls12381G2Pub => Ok(Curve::Bls12381G2),
            Codec::Unknown(codec) => Err(CryptoError::UnsupportedCurve(format!(
                "Unsupported key type codec (0x{codec:x})"
            ))),
        }
    }
}

impl TryFrom<&str> for Curve {
    type Error = CryptoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Ed25519" => Ok(Curve::Ed25519),
            "X25519" => Ok(Curve::X25519),
            "secp256k1" => Ok(Curve::Secp256k1),
            "P-256" => Ok(Curve::P256),
            "P-384" => Ok(Curve::P384),
            "P-521" => Ok(Curve::P521),
            "BLS12381_G1" => Ok(Curve::Bls12381G1),
            "BLS12381_G2" => Ok(Curve::Bls12381G2),
            _ => Err(CryptoError::UnsupportedCurve(value.to_string())),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.jwk_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jwk_names_round_trip() {
        for curve in [
            Curve::Ed25519,
            Curve::X25519,
            Curve::Secp256k1,
            Curve::P256,
            Curve::P384,
            Curve::P521,
            Curve::Bls12381G1,
            Curve::Bls12381G2,
        ] {
            assert_eq!(Curve::try_from(curve.jwk_name()).unwrap(), curve);
            assert_eq!(
                Curve::from_codec(Codec::from_u64(curve.public_codec())).unwrap(),
                curve
            );
        }
    }

    #[test]
    fn okp_curves_have_no_point_form() {
        assert!(Curve::Ed25519.compress_point(&[0u8; 32], &[0u8; 32]).is_err());
        assert!(Curve::Bls12381G1.compress_point(&[0u8; 48], &[]).is_err());
    }

    #[test]
    fn unknown_curve() {
        assert!(matches!(
            Curve::try_from("Ed448"),
            Err(CryptoError::UnsupportedCurve(_))
        ));
    }
}
