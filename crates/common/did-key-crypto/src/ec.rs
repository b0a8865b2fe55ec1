//! SEC1 key handling shared by the short Weierstrass curves
//!
//! Each curve module expands [`sec1_curve!`] against its RustCrypto crate, giving
//! every curve the same `generate`, `public_jwk` and `compress` surface.

macro_rules! sec1_curve {
    ($krate:ident, $curve:expr) => {
        use ::$krate::{PublicKey, SecretKey, elliptic_curve::sec1::ToEncodedPoint};
        use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
        use rand::rngs::OsRng;

        use crate::{CryptoError, Curve, ECParams, GeneratedKey, JWK, Params, error::Result};

        const CURVE: Curve = $curve;

        /// Generates a key pair, deterministically when secret material is given
        pub fn generate(secret: Option<&[u8]>) -> Result<GeneratedKey> {
            let secret_key = match secret {
                Some(secret) => SecretKey::from_slice(secret).map_err(|e| {
                    CryptoError::KeyError(format!("{CURVE} secret material isn't valid: {e}"))
                })?,
                None => SecretKey::random(&mut OsRng),
            };

            let public_key = secret_key.public_key();
            let private_bytes = secret_key.to_bytes().to_vec();

            let mut jwk = jwk_from_public(&public_key)?;
            if let Params::EC(params) = &mut jwk.params {
                params.d = Some(BASE64_URL_SAFE_NO_PAD.encode(&private_bytes));
            }

            Ok(GeneratedKey {
                curve: CURVE,
                public_bytes: public_key.to_encoded_point(true).as_bytes().to_vec(),
                private_bytes,
                jwk,
            })
        }

        /// Generates a public JWK from SEC1 bytes (compressed or uncompressed)
        pub fn public_jwk(data: &[u8]) -> Result<JWK> {
            let public_key = PublicKey::from_sec1_bytes(data)
                .map_err(|e| CryptoError::KeyError(format!("{CURVE} public key isn't valid: {e}")))?;

            jwk_from_public(&public_key)
        }

        /// Compresses affine `x`/`y` coordinates into the SEC1 form used by did:key
        pub fn compress(x: &[u8], y: &[u8]) -> Result<Vec<u8>> {
            let mut uncompressed = Vec::with_capacity(1 + x.len() + y.len());
            uncompressed.push(0x04);
            uncompressed.extend_from_slice(x);
            uncompressed.extend_from_slice(y);

            let public_key = PublicKey::from_sec1_bytes(&uncompressed).map_err(|e| {
                CryptoError::KeyError(format!("{CURVE} coordinates aren't a valid point: {e}"))
            })?;

            Ok(public_key.to_encoded_point(true).as_bytes().to_vec())
        }

        fn jwk_from_public(public_key: &PublicKey) -> Result<JWK> {
            let point = public_key.to_encoded_point(false);

            Ok(JWK {
                key_id: None,
                params: Params::EC(ECParams {
                    curve: CURVE.jwk_name().to_string(),
                    x: BASE64_URL_SAFE_NO_PAD.encode(
                        point
                            .x()
                            .ok_or_else(|| CryptoError::KeyError("Couldn't get X coordinate".into()))?,
                    ),
                    y: Some(BASE64_URL_SAFE_NO_PAD.encode(
                        point
                            .y()
                            .ok_or_else(|| CryptoError::KeyError("Couldn't get Y coordinate".into()))?,
                    )),
                    d: None,
                }),
            })
        }
    };
}

pub(crate) use sec1_curve;
