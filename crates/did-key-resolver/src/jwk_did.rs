//! did:jwk document synthesis
//!
//! The DID is `did:jwk:` + base64url (no padding) of the public JWK with the
//! chosen `kid` as its first member. The document holds one `JsonWebKey2020`
//! method whose id is the bare DID, referenced from every relationship.

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use did_key_document::{
    ContentType, DidGeneration, Document, DocumentBuilder, DocumentError, KeyMaterial, KeyPair,
    ResolutionOptions, VerificationMaterial,
    verification_method::{JSON_WEB_KEY_2020, VerificationMethod},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::{dispatch, errors::DIDKeyError, handler::GenerateOptions, key_type::KeyType};

/// Options for [`crate::DIDKeyClient::generate2`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Generate2Options {
    /// Key type, e.g. `ed25519`
    #[serde(rename = "type")]
    pub key_type: String,
    /// Hex encoded seed; a random key is generated when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub seed: Option<String>,
    /// Key id embedded in the JWK; defaults to the JWK's own `kid`, then the did:key fingerprint
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kid: Option<String>,
}

pub(crate) async fn generate2(options: &Generate2Options) -> Result<DidGeneration, DIDKeyError> {
    let key_type: KeyType = options.key_type.parse()?;

    let generate_options = match &options.seed {
        Some(seed) => GenerateOptions::from_seed(
            hex::decode(seed).map_err(|e| DIDKeyError::InvalidSeed(e.to_string()))?,
        ),
        None => GenerateOptions::Random,
    };

    let generation = dispatch::generate(
        key_type,
        generate_options,
        &ResolutionOptions::new(ContentType::DidJson),
    )
    .await?;

    let mut key = generation.keys.into_iter().next().ok_or_else(|| {
        DIDKeyError::MissingKeyMaterial(format!("{key_type} generation returned no keys"))
    })?;

    let mut jwk = match &key {
        KeyPair::Jwk(kp) => kp.public_key_jwk.to_public(),
        KeyPair::Base58(_) => KeyMaterial::from_key_pair(&key)?.public_jwk()?,
    };

    let kid = options
        .kid
        .clone()
        .or_else(|| jwk.key_id.clone())
        .or_else(|| key.controller().rsplit(':').next().map(str::to_string));
    jwk.key_id = kid;

    let did = format!(
        "did:jwk:{}",
        BASE64_URL_SAFE_NO_PAD.encode(serde_json::to_vec(&jwk)?)
    );
    debug!("synthesized ({did}) from ({})", key.controller());

    let did_url = Url::parse(&did).map_err(DocumentError::from)?;
    let document = DocumentBuilder::from_url(did_url.clone())
        .verification_method(VerificationMethod {
            id: did_url.clone(),
            type_: JSON_WEB_KEY_2020.to_string(),
            controller: did_url,
            material: VerificationMaterial::Jwk {
                public_key_jwk: jwk,
            },
        })
        .relationships(&did, &did)?
        .build();

    key.set_scope(&did, &did);

    let did_document: Document = serde_json::from_value(serde_json::to_value(&document)?)?;

    Ok(DidGeneration {
        did_document,
        keys: vec![key],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_hex_seed() {
        let result = generate2(&Generate2Options {
            key_type: "ed25519".to_string(),
            seed: Some("not hex".to_string()),
            kid: None,
        })
        .await;
        assert!(matches!(result, Err(DIDKeyError::InvalidSeed(_))));
    }

    #[tokio::test]
    async fn unknown_type() {
        let result = generate2(&Generate2Options {
            key_type: "rsa".to_string(),
            ..Default::default()
        })
        .await;
        assert!(matches!(result, Err(DIDKeyError::UnsupportedType(_))));
    }

    #[tokio::test]
    async fn kid_falls_back_to_fingerprint() {
        let generation = generate2(&Generate2Options {
            key_type: "ed25519".to_string(),
            seed: Some("00".repeat(32)),
            kid: None,
        })
        .await
        .unwrap();

        let jwk = generation.did_document.verification_method[0]
            .public_key_jwk()
            .unwrap();
        assert_eq!(
            jwk.key_id.as_deref(),
            Some("z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp")
        );
        assert!(jwk.private_key().is_none());
    }
}
