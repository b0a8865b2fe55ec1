/*!
*   DID Document definitions for did:key and did:jwk
*
*   Besides the document itself this crate carries the two key pair
*   representations produced by did:key handlers (JWK and Base58) and the
*   [`KeyMaterial`] that converts between them.
*/

use serde::{Deserialize, Serialize};
use url::Url;

use crate::verification_method::{VerificationMethod, VerificationRelationship};

pub mod builder;
pub mod document;
mod error;
pub mod key_material;
pub mod key_pair;
pub mod resolution;
pub mod verification_method;

pub use builder::DocumentBuilder;
pub use document::DocumentExt;
pub use error::DocumentError;
pub use key_material::KeyMaterial;
pub use key_pair::{Base58KeyPair, JsonWebKeyPair, KeyPair};
pub use resolution::{ContentType, DidGeneration, DidResolution, ResolutionMetadata, ResolutionOptions};
pub use verification_method::VerificationMaterial;

/// JSON-LD context of every DID document
pub const DID_V1_CONTEXT: &str = "https://www.w3.org/ns/did/v1";

/// A [DID Document]
///
/// [DID Document]: https://www.w3.org/TR/did-1.1/
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "@context")]
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub context: Vec<String>,

    /// DID Subject Identifier
    /// <https://www.w3.org/TR/cid-1.0/#subjects>
    pub id: Url,

    /// https://www.w3.org/TR/cid-1.0/#verification-methods
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub verification_method: Vec<VerificationMethod>,

    /// https://www.w3.org/TR/cid-1.0/#authentication
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub authentication: Vec<VerificationRelationship>,

    /// https://www.w3.org/TR/cid-1.0/#assertion
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub assertion_method: Vec<VerificationRelationship>,

    /// https://www.w3.org/TR/cid-1.0/#capability-invocation
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub capability_invocation: Vec<VerificationRelationship>,

    /// https://www.w3.org/TR/cid-1.0/#capability-delegation
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub capability_delegation: Vec<VerificationRelationship>,

    /// https://www.w3.org/TR/cid-1.0/#key-agreement
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub key_agreement: Vec<VerificationRelationship>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_id() {
        assert!(Url::parse("did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp").is_ok());
        assert!(Url::parse("did:jwk:eyJraWQiOiJrZXktMSIsImt0eSI6Ik9LUCJ9").is_ok());
    }

    #[test]
    fn empty_members_are_omitted() {
        let doc = Document {
            context: Vec::new(),
            id: Url::parse("did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp").unwrap(),
            verification_method: Vec::new(),
            authentication: Vec::new(),
            assertion_method: Vec::new(),
            capability_invocation: Vec::new(),
            capability_delegation: Vec::new(),
            key_agreement: Vec::new(),
        };

        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            r#"{"id":"did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"}"#
        );
    }
}
