//! secp256k1 handler

use did_key_crypto::{Curve, secp256k1};
use did_key_document::{DidGeneration, DidResolution, KeyMaterial, ResolutionOptions};
use tracing::debug;

use super::{Layout, build_document, build_generation, decode_did_key};
use crate::{
    errors::HandlerError,
    handler::{GenerateOptions, KeyHandler},
};

pub struct Secp256k1Handler;

impl KeyHandler for Secp256k1Handler {
    fn name(&self) -> &str {
        "Secp256k1"
    }

    fn generate(
        &self,
        options: &GenerateOptions,
        resolution: &ResolutionOptions,
    ) -> Result<DidGeneration, HandlerError> {
        let seed = options.seed_32()?;
        let key = KeyMaterial::from(secp256k1::generate(seed.as_ref().map(|s| s.as_slice()))?);

        debug!("generated secp256k1 key ({})", key.fingerprint());
        build_generation(&Layout::Single(&key), resolution.accept)
    }

    fn resolve(
        &self,
        did: &str,
        resolution: &ResolutionOptions,
    ) -> Result<DidResolution, HandlerError> {
        let key = decode_did_key(did, &[Curve::Secp256k1])?;
        let document = build_document(&Layout::Single(&key), resolution.accept)?;
        Ok(DidResolution::new(document, resolution.accept))
    }
}
