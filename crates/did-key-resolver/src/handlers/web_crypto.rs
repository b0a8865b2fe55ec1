//! Web-crypto handler for the NIST curves (P-256, P-384, P-521)
//!
//! NIST keys are only generated from the OS RNG; the generate options must be
//! the `{kty, crvOrSize}` descriptor. Both representations use `JsonWebKey2020`.

use did_key_crypto::{Curve, GeneratedKey, p256, p384, p521};
use did_key_document::{DidGeneration, DidResolution, KeyMaterial, ResolutionOptions};
use tracing::debug;

use super::{Layout, build_document, build_generation, decode_did_key};
use crate::{
    errors::HandlerError,
    handler::{GenerateOptions, KeyHandler, WebCryptoParams},
};

pub struct WebCryptoHandler;

fn generate_key(params: &WebCryptoParams) -> Result<GeneratedKey, HandlerError> {
    match (params.kty, params.crv_or_size) {
        ("EC", "P-256") => Ok(p256::generate(None)?),
        ("EC", "P-384") => Ok(p384::generate(None)?),
        ("EC", "P-521") => Ok(p521::generate(None)?),
        (kty, crv) => Err(HandlerError::UnsupportedOptions(format!(
            "no web-crypto generator for kty ({kty}) crv ({crv})"
        ))),
    }
}

impl KeyHandler for WebCryptoHandler {
    fn name(&self) -> &str {
        "WebCrypto"
    }

    fn generate(
        &self,
        options: &GenerateOptions,
        resolution: &ResolutionOptions,
    ) -> Result<DidGeneration, HandlerError> {
        let GenerateOptions::WebCrypto(params) = options else {
            return Err(HandlerError::UnsupportedOptions(format!(
                "NIST curve keys need web-crypto options, got {options:?}"
            )));
        };

        let key = KeyMaterial::from(generate_key(params)?);

        debug!("generated {} key ({})", key.curve(), key.fingerprint());
        build_generation(&Layout::Single(&key), resolution.accept)
    }

    fn resolve(
        &self,
        did: &str,
        resolution: &ResolutionOptions,
    ) -> Result<DidResolution, HandlerError> {
        let key = decode_did_key(did, &[Curve::P256, Curve::P384, Curve::P521])?;
        let document = build_document(&Layout::Single(&key), resolution.accept)?;
        Ok(DidResolution::new(document, resolution.accept))
    }
}
