//! BLS12-381 public keys
//!
//! Only resolution is supported. The compressed G1 (48 bytes) or G2 (96 bytes)
//! point is carried whole in the JWK `x` member.

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};

use crate::{CryptoError, Curve, ECParams, JWK, Params, error::Result};

/// Compressed point length for a BLS12-381 group
pub fn key_length(curve: Curve) -> Result<usize> {
    match curve {
        Curve::Bls12381G1 => Ok(48),
        Curve::Bls12381G2 => Ok(96),
        other => Err(CryptoError::UnsupportedCurve(format!(
            "{other} is not a BLS12-381 group"
        ))),
    }
}

/// Generates a public JWK from a compressed BLS12-381 point
pub fn public_jwk(curve: Curve, data: &[u8]) -> Result<JWK> {
    let expected = key_length(curve)?;
    if data.len() != expected {
        return Err(CryptoError::KeyError(format!(
            "{curve} public key must be {expected} bytes, got {}",
            data.len()
        )));
    }

    Ok(JWK {
        key_id: None,
        params: Params::EC(ECParams {
            curve: curve.jwk_name().to_string(),
            x: BASE64_URL_SAFE_NO_PAD.encode(data),
            y: None,
            d: None,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn g1_public_jwk() {
        let jwk = public_jwk(Curve::Bls12381G1, &[7u8; 48]).unwrap();
        assert_eq!(
            serde_json::to_value(&jwk).unwrap(),
            serde_json::json!({
                "kty": "EC",
                "crv": "BLS12381_G1",
                "x": BASE64_URL_SAFE_NO_PAD.encode([7u8; 48]),
            })
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(public_jwk(Curve::Bls12381G2, &[7u8; 48]).is_err());
        assert!(public_jwk(Curve::Ed25519, &[7u8; 32]).is_err());
    }
}
