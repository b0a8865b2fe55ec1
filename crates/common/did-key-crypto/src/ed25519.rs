//! Ed25519 and X25519 key operations

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha512};
use x25519_dalek::{PublicKey, StaticSecret};

use crate::{CryptoError, Curve, GeneratedKey, JWK, OctectParams, Params, error::Result};

/// Generates an Ed25519 signing key pair, deterministically when a seed is given
pub fn generate(seed: Option<&[u8; 32]>) -> GeneratedKey {
    let signing_key = match seed {
        Some(seed) => SigningKey::from_bytes(seed),
        None => SigningKey::generate(&mut OsRng),
    };

    let private_bytes = signing_key.to_bytes().to_vec();
    let public_bytes = signing_key.verifying_key().to_bytes().to_vec();

    GeneratedKey {
        curve: Curve::Ed25519,
        jwk: okp_jwk(Curve::Ed25519, &public_bytes, Some(&private_bytes)),
        private_bytes,
        public_bytes,
    }
}

/// Generates an X25519 key agreement key pair, deterministically when a seed is given
pub fn generate_x25519(seed: Option<&[u8; 32]>) -> GeneratedKey {
    let secret = match seed {
        Some(seed) => StaticSecret::from(*seed),
        None => StaticSecret::random_from_rng(OsRng),
    };

    x25519_from_secret(&secret)
}

/// Derives the X25519 key agreement key pair belonging to an Ed25519 seed
pub fn derive_x25519(ed25519_seed: &[u8; 32]) -> GeneratedKey {
    let secret = StaticSecret::from(ed25519_private_to_x25519(ed25519_seed));
    x25519_from_secret(&secret)
}

fn x25519_from_secret(secret: &StaticSecret) -> GeneratedKey {
    let public = PublicKey::from(secret);
    let private_bytes = secret.to_bytes().to_vec();
    let public_bytes = public.to_bytes().to_vec();

    GeneratedKey {
        curve: Curve::X25519,
        jwk: okp_jwk(Curve::X25519, &public_bytes, Some(&private_bytes)),
        private_bytes,
        public_bytes,
    }
}

/// Converts an Ed25519 private key to an X25519 private key
pub fn ed25519_private_to_x25519(secret: &[u8; 32]) -> [u8; 32] {
    let mut h = Sha512::digest(secret);

    h[0] &= 248;
    h[31] &= 127;
    h[31] |= 64;

    let mut result = [0u8; 32];
    result.copy_from_slice(&h[..32]);
    result
}

/// Converts a raw Ed25519 public key to the matching raw X25519 public key
pub fn ed25519_public_to_x25519(public: &[u8]) -> Result<[u8; 32]> {
    let vk = VerifyingKey::try_from(public)
        .map_err(|e| CryptoError::KeyError(format!("Couldn't create ED25519 VerifyingKey: {e}")))?;

    Ok(vk.to_montgomery().to_bytes())
}

/// Generates a public JWK from Ed25519 raw bytes
pub fn public_jwk(data: &[u8]) -> Result<JWK> {
    check_length(Curve::Ed25519, data)?;
    Ok(okp_jwk(Curve::Ed25519, data, None))
}

/// Generates a public JWK from X25519 raw bytes
pub fn x25519_public_jwk(data: &[u8]) -> Result<JWK> {
    check_length(Curve::X25519, data)?;
    Ok(okp_jwk(Curve::X25519, data, None))
}

fn check_length(curve: Curve, data: &[u8]) -> Result<()> {
    if data.len() != 32 {
        return Err(CryptoError::KeyError(format!(
            "{curve} public key must be 32 bytes, got {}",
            data.len()
        )));
    }
    Ok(())
}

fn okp_jwk(curve: Curve, public: &[u8], private: Option<&[u8]>) -> JWK {
    JWK {
        key_id: None,
        params: Params::OKP(OctectParams {
            curve: curve.jwk_name().to_string(),
            x: BASE64_URL_SAFE_NO_PAD.encode(public),
            d: private.map(|d| BASE64_URL_SAFE_NO_PAD.encode(d)),
        }),
    }
}
