//! BLS12-381 handler (resolve only)

use did_key_crypto::Curve;
use did_key_document::{DidGeneration, DidResolution, ResolutionOptions};

use super::{Layout, build_document, decode_did_key};
use crate::{
    errors::HandlerError,
    handler::{GenerateOptions, KeyHandler},
};

pub struct Bls12381Handler;

impl KeyHandler for Bls12381Handler {
    fn name(&self) -> &str {
        "Bls12381"
    }

    fn generate(
        &self,
        _options: &GenerateOptions,
        _resolution: &ResolutionOptions,
    ) -> Result<DidGeneration, HandlerError> {
        Err(HandlerError::UnsupportedOptions(
            "BLS12-381 keys can only be resolved".to_string(),
        ))
    }

    fn resolve(
        &self,
        did: &str,
        resolution: &ResolutionOptions,
    ) -> Result<DidResolution, HandlerError> {
        let key = decode_did_key(did, &[Curve::Bls12381G1, Curve::Bls12381G2])?;
        let document = build_document(&Layout::Single(&key), resolution.accept)?;
        Ok(DidResolution::new(document, resolution.accept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use did_key_document::ContentType;
    use did_key_encoding::{BLS12381_G1_PUB, BLS12381_G2_PUB, encode_multikey};

    #[test]
    fn resolve_g1_and_g2() {
        for (codec, length, type_) in [
            (BLS12381_G1_PUB, 48, "Bls12381G1Key2020"),
            (BLS12381_G2_PUB, 96, "Bls12381G2Key2020"),
        ] {
            let mut key = vec![0x11u8; length];
            key[0] = 0xa0;
            let did = format!("did:key:{}", encode_multikey(codec, &key));

            let resolved = Bls12381Handler
                .resolve(&did, &ResolutionOptions::new(ContentType::DidLdJson))
                .unwrap();
            let vm = &resolved.did_document.verification_method[0];
            assert_eq!(vm.type_, type_);
            assert_eq!(vm.get_public_key_bytes().unwrap(), key);

            let resolved = Bls12381Handler
                .resolve(&did, &ResolutionOptions::default())
                .unwrap();
            let jwk = resolved.did_document.verification_method[0]
                .public_key_jwk()
                .unwrap();
            assert_eq!(jwk.key_type_name(), "EC");
        }
    }

    #[test]
    fn generate_is_unsupported() {
        assert!(Bls12381Handler
            .generate(&GenerateOptions::Random, &ResolutionOptions::default())
            .is_err());
    }
}
