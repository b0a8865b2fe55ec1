//! Process-wide key type registry
//!
//! Two lookup tables built once on first use: key type → handler for
//! generation, and 12 character DID prefix → handler for resolution.

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use crate::{
    errors::DIDKeyError,
    handler::AsyncKeyHandler,
    handlers::{
        Bls12381Handler, Ed25519Handler, Secp256k1Handler, WebCryptoHandler, X25519Handler,
    },
    key_type::KeyType,
};

/// Length of the `did:key:` + multibase header used as the prefix key
pub const PREFIX_LENGTH: usize = 12;

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The shared registry
pub fn registry() -> &'static Registry {
    &REGISTRY
}

pub struct Registry {
    by_type: HashMap<KeyType, Arc<dyn AsyncKeyHandler>>,
    by_prefix: HashMap<&'static str, Arc<dyn AsyncKeyHandler>>,
}

impl Registry {
    fn new() -> Self {
        let ed25519: Arc<dyn AsyncKeyHandler> = Arc::new(Ed25519Handler);
        let x25519: Arc<dyn AsyncKeyHandler> = Arc::new(X25519Handler);
        let secp256k1: Arc<dyn AsyncKeyHandler> = Arc::new(Secp256k1Handler);
        let web_crypto: Arc<dyn AsyncKeyHandler> = Arc::new(WebCryptoHandler);
        let bls12381: Arc<dyn AsyncKeyHandler> = Arc::new(Bls12381Handler);

        let generators = [
            (KeyType::Ed25519, &ed25519),
            (KeyType::X25519, &x25519),
            (KeyType::Secp256k1, &secp256k1),
            (KeyType::Secp256r1, &web_crypto),
            (KeyType::Secp384r1, &web_crypto),
            (KeyType::Secp521r1, &web_crypto),
        ];
        let resolve_only = [
            (KeyType::Bls12381G1, &bls12381),
            (KeyType::Bls12381G2, &bls12381),
        ];

        let mut by_type = HashMap::new();
        let mut by_prefix = HashMap::new();
        for (key_type, handler) in generators {
            by_type.insert(key_type, Arc::clone(handler));
            by_prefix.insert(key_type.prefix(), Arc::clone(handler));
        }
        for (key_type, handler) in resolve_only {
            by_prefix.insert(key_type.prefix(), Arc::clone(handler));
        }

        Registry { by_type, by_prefix }
    }

    /// Handler that generates keys of `key_type`
    pub fn handler_for_type(&self, key_type: KeyType) -> Result<&dyn AsyncKeyHandler, DIDKeyError> {
        self.by_type
            .get(&key_type)
            .map(|handler| handler.as_ref())
            .ok_or_else(|| DIDKeyError::UnsupportedType(key_type.to_string()))
    }

    /// Handler that resolves `did`, chosen by its first 12 characters
    pub fn handler_for_prefix(&self, did: &str) -> Result<&dyn AsyncKeyHandler, DIDKeyError> {
        did.get(..PREFIX_LENGTH)
            .and_then(|prefix| self.by_prefix.get(prefix))
            .map(|handler| handler.as_ref())
            .ok_or_else(|| {
                DIDKeyError::UnsupportedPrefix(did.chars().take(PREFIX_LENGTH).collect())
            })
    }

    /// Key types that can be generated
    pub fn generator_types(&self) -> impl Iterator<Item = KeyType> + '_ {
        self.by_type.keys().copied()
    }
}
