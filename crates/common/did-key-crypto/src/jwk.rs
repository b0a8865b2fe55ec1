//! JWK (JSON Web Key) types per RFC 7517

use did_key_encoding::MultiEncoded;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CryptoError, Curve};

/// RFC 7517 JWK Struct
///
/// Serializes with `kid` first, followed by `kty` and the curve parameters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct JWK {
    #[serde(rename = "kid")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key_id: Option<String>,
    #[serde(flatten)]
    pub params: Params,
}

impl JWK {
    /// Returns the `crv` member as written in the JWK
    pub fn curve_name(&self) -> &str {
        match &self.params {
            Params::EC(params) => &params.curve,
            Params::OKP(params) => &params.curve,
        }
    }

    /// Returns the `kty` member as written in the JWK
    pub fn key_type_name(&self) -> &'static str {
        match &self.params {
            Params::EC(_) => "EC",
            Params::OKP(_) => "OKP",
        }
    }

    /// Returns the Curve for a JWK, rejecting unknown or mismatched curves
    pub fn curve(&self) -> Result<Curve, CryptoError> {
        let curve = Curve::try_from(self.curve_name())?;
        if curve.jwk_key_type() != self.key_type_name() {
            return Err(CryptoError::UnsupportedCurve(format!(
                "{} is not a {} curve",
                self.curve_name(),
                self.key_type_name()
            )));
        }
        Ok(curve)
    }

    /// Private scalar/seed (`d`), if present
    pub fn private_key(&self) -> Option<&str> {
        match &self.params {
            Params::EC(params) => params.d.as_deref(),
            Params::OKP(params) => params.d.as_deref(),
        }
    }

    /// Copy of this JWK with the private member removed
    pub fn to_public(&self) -> JWK {
        let mut public = self.clone();
        match &mut public.params {
            Params::EC(params) => params.d = None,
            Params::OKP(params) => params.d = None,
        }
        public
    }

    /// Converts a multikey string (`z...`) into a public JWK
    pub fn from_multikey(key: &str) -> Result<Self, CryptoError> {
        let data = did_key_encoding::decode_base58btc(key)?;
        let decoded = MultiEncoded::new(&data)?;

        let curve = Curve::from_codec(decoded.codec_type())?;
        Self::from_public_bytes(curve, decoded.data())
    }

    /// Builds a public JWK from the raw public key embedded in a did:key identifier
    pub fn from_public_bytes(curve: Curve, data: &[u8]) -> Result<Self, CryptoError> {
        match curve {
            #[cfg(feature = "p256")]
            Curve::P256 => crate::p256::public_jwk(data),
            #[cfg(feature = "p384")]
            Curve::P384 => crate::p384::public_jwk(data),
            #[cfg(feature = "p521")]
            Curve::P521 => crate::p521::public_jwk(data),
            #[cfg(feature = "k256")]
            Curve::Secp256k1 => crate::secp256k1::public_jwk(data),
            #[cfg(feature = "ed25519")]
            Curve::Ed25519 => crate::ed25519::public_jwk(data),
            #[cfg(feature = "ed25519")]
            Curve::X25519 => crate::ed25519::x25519_public_jwk(data),
            Curve::Bls12381G1 | Curve::Bls12381G2 => crate::bls12381::public_jwk(curve, data),
            #[allow(unreachable_patterns)]
            other => Err(CryptoError::UnsupportedCurve(format!(
                "{other} support is not enabled"
            ))),
        }
    }
}

/// JWK Key Types and associated Parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
#[serde(tag = "kty")]
pub enum Params {
    EC(ECParams),
    OKP(OctectParams),
}

/// Elliptic Curve parameters (P-256, P-384, P-521, secp256k1, BLS12-381)
///
/// BLS12-381 keys carry the whole compressed point in `x` and have no `y`.
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct ECParams {
    #[serde(rename = "crv")]
    pub curve: String,
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<String>,
}

/// Octet Key Pair parameters (Ed25519, X25519)
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct OctectParams {
    #[serde(rename = "crv")]
    pub curve: String,
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<String>,
}
