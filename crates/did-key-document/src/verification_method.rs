//! DID Verification Method Definition
//! <https://www.w3.org/TR/cid-1.0/#verification-methods>

use did_key_crypto::JWK;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::DocumentError;

/// The `type` of every JWK-bearing verification method
pub const JSON_WEB_KEY_2020: &str = "JsonWebKey2020";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: Url,

    #[serde(rename = "type")]
    pub type_: String,

    pub controller: Url,

    #[serde(flatten)]
    pub material: VerificationMaterial,
}

/// Public key carried by a verification method
///
/// did:key methods use exactly one of the two forms, never both.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum VerificationMaterial {
    #[serde(rename_all = "camelCase")]
    Jwk { public_key_jwk: JWK },

    #[serde(rename_all = "camelCase")]
    Base58 { public_key_base58: String },
}

impl VerificationMethod {
    /// Returns the public JWK if this method carries one
    pub fn public_key_jwk(&self) -> Option<&JWK> {
        match &self.material {
            VerificationMaterial::Jwk { public_key_jwk } => Some(public_key_jwk),
            VerificationMaterial::Base58 { .. } => None,
        }
    }

    /// Returns the raw public key bytes
    ///
    /// Only the Base58 form is supported; JWK coordinates are curve specific
    /// and are handled by [`crate::KeyMaterial`].
    pub fn get_public_key_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        match &self.material {
            VerificationMaterial::Base58 { public_key_base58 } => {
                Ok(did_key_encoding::decode_base58(public_key_base58)?)
            }
            VerificationMaterial::Jwk { .. } => Err(DocumentError::UnsupportedKeyType(format!(
                "VerificationMethod ({}) carries a JWK, not raw key bytes",
                self.id
            ))),
        }
    }
}

/// https://www.w3.org/TR/cid-1.0/#verification-relationships
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum VerificationRelationship {
    /// Reference to a Verification Method
    Reference(Url),
    /// Embedded Verification Method
    VerificationMethod(Box<VerificationMethod>),
}

impl VerificationRelationship {
    /// Returns the id of the verification-method
    pub fn get_id(&self) -> &str {
        match self {
            VerificationRelationship::Reference(url) => url.as_str(),
            VerificationRelationship::VerificationMethod(map) => map.id.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_base58_method() {
        let vm: VerificationMethod = serde_json::from_str(
            r#"{
                "id": "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
                "type": "Ed25519VerificationKey2018",
                "controller": "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
                "publicKeyBase58": "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS"
            }"#,
        )
        .unwrap();

        assert!(vm.public_key_jwk().is_none());
        assert_eq!(vm.get_public_key_bytes().unwrap().len(), 32);
    }

    #[test]
    fn deserialize_jwk_method() {
        let vm: VerificationMethod = serde_json::from_str(
            r#"{
                "id": "did:example:123#key-0",
                "type": "JsonWebKey2020",
                "controller": "did:example:123",
                "publicKeyJwk": {
                    "kty": "OKP",
                    "crv": "Ed25519",
                    "x": "O2onvM62pC1io6jQKm8Nc2UyFXcd4kOmOsBIoYtZ2ik"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(vm.public_key_jwk().unwrap().curve_name(), "Ed25519");
        assert!(vm.get_public_key_bytes().is_err());
    }

    #[test]
    fn relationship_ids() {
        let reference: VerificationRelationship =
            serde_json::from_str(r#""did:example:123#key-0""#).unwrap();
        assert_eq!(reference.get_id(), "did:example:123#key-0");
    }
}
