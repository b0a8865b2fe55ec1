//! Built-in handlers, one per curve family
//!
//! Handlers share the document layout below: verification method ids are
//! `did#<fingerprint>`, did+json documents use `JsonWebKey2020` throughout and
//! did+ld+json documents use the curve's Linked-Data suite when it has one.

use did_key_crypto::Curve;
use did_key_document::{
    ContentType, DID_V1_CONTEXT, DidGeneration, Document, DocumentBuilder, DocumentError,
    KeyMaterial, VerificationMaterial,
    key_material::{
        BLS12381_G1_KEY_2020, BLS12381_G2_KEY_2020, ECDSA_SECP256K1_VERIFICATION_KEY_2019,
        ED25519_VERIFICATION_KEY_2018, X25519_KEY_AGREEMENT_KEY_2019, linked_data_type,
    },
    verification_method::{JSON_WEB_KEY_2020, VerificationMethod},
};
use did_key_encoding::{Codec, decode_multikey_with_codec, encode_base58};
use url::Url;

use crate::errors::HandlerError;

pub mod bls12381;
pub mod ed25519;
pub mod secp256k1;
pub mod web_crypto;
pub mod x25519;

pub use bls12381::Bls12381Handler;
pub use ed25519::Ed25519Handler;
pub use secp256k1::Secp256k1Handler;
pub use web_crypto::WebCryptoHandler;
pub use x25519::X25519Handler;

const DID_KEY_PREFIX: &str = "did:key:";

/// Decodes the public key of a did:key, accepting only the listed curves
pub(crate) fn decode_did_key(did: &str, accepted: &[Curve]) -> Result<KeyMaterial, HandlerError> {
    let fingerprint = did
        .strip_prefix(DID_KEY_PREFIX)
        .map(|id| id.split('#').next().unwrap_or(id))
        .ok_or_else(|| HandlerError::InvalidDid(format!("{did} is not a did:key")))?;

    let (codec, bytes) = decode_multikey_with_codec(fingerprint)?;
    let codec = Codec::from_u64(codec);
    let curve = Curve::from_codec(codec)?;

    if !accepted.contains(&curve) {
        return Err(HandlerError::InvalidDid(format!(
            "{did} carries a {curve} key"
        )));
    }

    if codec.expected_key_length() != Some(bytes.len()) {
        return Err(HandlerError::InvalidDid(format!(
            "{did} has a {} byte {curve} key",
            bytes.len()
        )));
    }

    Ok(KeyMaterial::new(curve, bytes, None)?)
}

fn suite_context(type_: &str) -> &'static str {
    match type_ {
        ED25519_VERIFICATION_KEY_2018 => "https://w3id.org/security/suites/ed25519-2018/v1",
        X25519_KEY_AGREEMENT_KEY_2019 => "https://w3id.org/security/suites/x25519-2019/v1",
        ECDSA_SECP256K1_VERIFICATION_KEY_2019 => {
            "https://w3id.org/security/suites/secp256k1-2019/v1"
        }
        BLS12381_G1_KEY_2020 | BLS12381_G2_KEY_2020 => {
            "https://w3id.org/security/suites/bls12381-2020/v1"
        }
        _ => "https://w3id.org/security/suites/jws-2020/v1",
    }
}

fn verification_method(
    did: &Url,
    key: &KeyMaterial,
    accept: ContentType,
) -> Result<VerificationMethod, HandlerError> {
    let id = Url::parse(&format!("{did}#{}", key.fingerprint()))
        .map_err(DocumentError::from)?;

    let (type_, material) = match (accept, linked_data_type(key.curve())) {
        (ContentType::DidLdJson, Some(type_)) => (
            type_,
            VerificationMaterial::Base58 {
                public_key_base58: encode_base58(key.public_bytes()),
            },
        ),
        _ => (
            JSON_WEB_KEY_2020,
            VerificationMaterial::Jwk {
                public_key_jwk: key.public_jwk()?,
            },
        ),
    };

    Ok(VerificationMethod {
        id,
        type_: type_.to_string(),
        controller: did.clone(),
        material,
    })
}

/// How a did:key document wires its keys into relationships
pub(crate) enum Layout<'a> {
    /// One key used for every relationship
    Single(&'a KeyMaterial),
    /// One key used for key agreement only
    AgreementOnly(&'a KeyMaterial),
    /// A signing key plus a separate key agreement key
    SigningWithAgreement {
        signing: &'a KeyMaterial,
        agreement: &'a KeyMaterial,
    },
}

impl Layout<'_> {
    fn keys(&self) -> Vec<&KeyMaterial> {
        match self {
            Layout::Single(key) | Layout::AgreementOnly(key) => vec![*key],
            Layout::SigningWithAgreement { signing, agreement } => vec![*signing, *agreement],
        }
    }
}

/// Builds the did:key document for `layout`; the DID is named after the first key
pub(crate) fn build_document(
    layout: &Layout,
    accept: ContentType,
) -> Result<Document, HandlerError> {
    let keys = layout.keys();
    let did = Url::parse(&format!("{DID_KEY_PREFIX}{}", keys[0].fingerprint()))
        .map_err(DocumentError::from)?;

    let methods = keys
        .iter()
        .map(|key| verification_method(&did, key, accept))
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = DocumentBuilder::from_url(did);
    if accept == ContentType::DidLdJson {
        builder = builder.context(DID_V1_CONTEXT);
        for vm in &methods {
            builder = builder.context(suite_context(&vm.type_));
        }
    }

    let first = methods[0].id.to_string();
    builder = match layout {
        Layout::Single(_) => builder.relationships(&first, &first)?,
        Layout::AgreementOnly(_) => builder.key_agreement_reference(&first)?,
        Layout::SigningWithAgreement { .. } => {
            builder.relationships(&first, methods[1].id.as_str())?
        }
    };

    for vm in methods {
        builder = builder.verification_method(vm);
    }

    Ok(builder.build())
}

/// Builds the document and exports a private key pair for every verification method
pub(crate) fn build_generation(
    layout: &Layout,
    accept: ContentType,
) -> Result<DidGeneration, HandlerError> {
    let did_document = build_document(layout, accept)?;
    let controller = did_document.id.as_str();

    let keys = layout
        .keys()
        .into_iter()
        .zip(&did_document.verification_method)
        .map(|(key, vm)| key.export(vm.id.as_str(), controller, &vm.type_, true))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DidGeneration { did_document, keys })
}
