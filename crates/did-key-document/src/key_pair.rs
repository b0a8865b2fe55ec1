//! Exported key pairs
//!
//! A key pair is scoped to one verification method of one DID. It is either
//! JWK-form (`JsonWebKey2020`) or Base58-form (the Linked-Data key suites).

use did_key_crypto::JWK;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A key pair exported by a did:key handler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum KeyPair {
    Jwk(JsonWebKeyPair),
    Base58(Base58KeyPair),
}

/// `{id, type, controller, publicKeyJwk, privateKeyJwk}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct JsonWebKeyPair {
    pub id: String,

    #[serde(rename = "type")]
    pub type_: String,

    pub controller: String,

    pub public_key_jwk: JWK,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub private_key_jwk: Option<JWK>,
}

/// `{id, type, controller, publicKeyBase58, privateKeyBase58}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Base58KeyPair {
    pub id: String,

    #[serde(rename = "type")]
    pub type_: String,

    pub controller: String,

    pub public_key_base58: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub private_key_base58: Option<String>,
}

impl KeyPair {
    /// Verification method id this key belongs to
    pub fn id(&self) -> &str {
        match self {
            KeyPair::Jwk(kp) => &kp.id,
            KeyPair::Base58(kp) => &kp.id,
        }
    }

    /// The DID controlling this key
    pub fn controller(&self) -> &str {
        match self {
            KeyPair::Jwk(kp) => &kp.controller,
            KeyPair::Base58(kp) => &kp.controller,
        }
    }

    /// Verification method type this key was exported as
    pub fn key_type(&self) -> &str {
        match self {
            KeyPair::Jwk(kp) => &kp.type_,
            KeyPair::Base58(kp) => &kp.type_,
        }
    }

    /// Re-scopes the key to another verification method id and controller
    pub fn set_scope(&mut self, id: &str, controller: &str) {
        match self {
            KeyPair::Jwk(kp) => {
                kp.id = id.to_string();
                kp.controller = controller.to_string();
            }
            KeyPair::Base58(kp) => {
                kp.id = id.to_string();
                kp.controller = controller.to_string();
            }
        }
    }

    /// Does this key carry private material?
    pub fn has_private_key(&self) -> bool {
        match self {
            KeyPair::Jwk(kp) => kp.private_key_jwk.is_some(),
            KeyPair::Base58(kp) => kp.private_key_base58.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_deserialize_picks_representation() {
        let jwk: KeyPair = serde_json::from_str(
            r#"{
                "id": "did:example:123#0",
                "type": "JsonWebKey2020",
                "controller": "did:example:123",
                "publicKeyJwk": {"kty": "OKP", "crv": "X25519", "x": "W_Vcc7guviK-gPNDBmevVw-uJVamQV5rMNQGUwCqlH0"}
            }"#,
        )
        .unwrap();
        assert!(matches!(jwk, KeyPair::Jwk(_)));
        assert!(!jwk.has_private_key());

        let base58: KeyPair = serde_json::from_str(
            r#"{
                "id": "did:example:123#0",
                "type": "X25519KeyAgreementKey2019",
                "controller": "did:example:123",
                "publicKeyBase58": "7By6kV2t2d188odEM4ExAve1UithKT6dLva4dwsDT3ak",
                "privateKeyBase58": "11111111111111111111111111111111"
            }"#,
        )
        .unwrap();
        assert!(matches!(base58, KeyPair::Base58(_)));
        assert!(base58.has_private_key());
        assert_eq!(base58.key_type(), "X25519KeyAgreementKey2019");
    }

    #[test]
    fn set_scope_rewrites_id_and_controller() {
        let mut kp = KeyPair::Base58(Base58KeyPair {
            id: "did:key:z6Mk#z6Mk".to_string(),
            type_: "Ed25519VerificationKey2018".to_string(),
            controller: "did:key:z6Mk".to_string(),
            public_key_base58: "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS".to_string(),
            private_key_base58: None,
        });

        kp.set_scope("did:jwk:abc", "did:jwk:abc");
        assert_eq!(kp.id(), "did:jwk:abc");
        assert_eq!(kp.controller(), "did:jwk:abc");
    }
}
