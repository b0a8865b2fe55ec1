//! Ed25519 handler
//!
//! Every Ed25519 did:key also carries the X25519 key derived from it, which is
//! the `keyAgreement` target.

use did_key_crypto::{Curve, ed25519};
use did_key_document::{DidGeneration, DidResolution, KeyMaterial, ResolutionOptions};
use tracing::debug;
use zeroize::Zeroizing;

use super::{Layout, build_document, build_generation, decode_did_key};
use crate::{
    errors::HandlerError,
    handler::{GenerateOptions, KeyHandler},
};

pub struct Ed25519Handler;

impl KeyHandler for Ed25519Handler {
    fn name(&self) -> &str {
        "Ed25519"
    }

    fn generate(
        &self,
        options: &GenerateOptions,
        resolution: &ResolutionOptions,
    ) -> Result<DidGeneration, HandlerError> {
        let seed = options.seed_32()?;
        let signing = ed25519::generate(seed.as_ref());

        let mut private = Zeroizing::new([0u8; 32]);
        private.copy_from_slice(&signing.private_bytes);
        let agreement = KeyMaterial::from(ed25519::derive_x25519(&private));
        let signing = KeyMaterial::from(signing);

        debug!("generated ed25519 key ({})", signing.fingerprint());
        build_generation(
            &Layout::SigningWithAgreement {
                signing: &signing,
                agreement: &agreement,
            },
            resolution.accept,
        )
    }

    fn resolve(
        &self,
        did: &str,
        resolution: &ResolutionOptions,
    ) -> Result<DidResolution, HandlerError> {
        let signing = decode_did_key(did, &[Curve::Ed25519])?;
        let agreement = KeyMaterial::new(
            Curve::X25519,
            ed25519::ed25519_public_to_x25519(signing.public_bytes())?.to_vec(),
            None,
        )?;

        let document = build_document(
            &Layout::SigningWithAgreement {
                signing: &signing,
                agreement: &agreement,
            },
            resolution.accept,
        )?;
        Ok(DidResolution::new(document, resolution.accept))
    }
}
