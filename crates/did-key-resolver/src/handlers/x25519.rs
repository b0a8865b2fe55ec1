//! X25519 handler
//!
//! X25519 keys can't sign, so the document only lists the key under `keyAgreement`.

use did_key_crypto::{Curve, ed25519};
use did_key_document::{DidGeneration, DidResolution, KeyMaterial, ResolutionOptions};
use tracing::debug;

use super::{Layout, build_document, build_generation, decode_did_key};
use crate::{
    errors::HandlerError,
    handler::{GenerateOptions, KeyHandler},
};

pub struct X25519Handler;

impl KeyHandler for X25519Handler {
    fn name(&self) -> &str {
        "X25519"
    }

    fn generate(
        &self,
        options: &GenerateOptions,
        resolution: &ResolutionOptions,
    ) -> Result<DidGeneration, HandlerError> {
        let seed = options.seed_32()?;
        let key = KeyMaterial::from(ed25519::generate_x25519(seed.as_ref()));

        debug!("generated x25519 key ({})", key.fingerprint());
        build_generation(&Layout::AgreementOnly(&key), resolution.accept)
    }

    fn resolve(
        &self,
        did: &str,
        resolution: &ResolutionOptions,
    ) -> Result<DidResolution, HandlerError> {
        let key = decode_did_key(did, &[Curve::X25519])?;
        let document = build_document(&Layout::AgreementOnly(&key), resolution.accept)?;
        Ok(DidResolution::new(document, resolution.accept))
    }
}
