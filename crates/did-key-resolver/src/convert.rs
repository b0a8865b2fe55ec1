//! Converts exported key pairs between document representations
//!
//! The DID is resolved twice: as did+json, whose JWK methods the classifier
//! understands, and in the requested representation. Keys are paired with
//! both documents by verification method id and re-exported as the requested
//! method type.

use did_key_document::{
    ContentType, DidGeneration, Document, DocumentExt, KeyPair, ResolutionOptions,
};
use futures_util::future::try_join;
use tracing::debug;

use crate::{classify::classify, dispatch, errors::DIDKeyError};

pub(crate) async fn convert(
    keys: &[KeyPair],
    resolution: &ResolutionOptions,
    strict: bool,
) -> Result<DidGeneration, DIDKeyError> {
    let controller = keys
        .first()
        .ok_or_else(|| DIDKeyError::MissingKeyMaterial("no keys to convert".to_string()))?
        .controller();

    if let Some(other) = keys.iter().find(|key| key.controller() != controller) {
        return Err(DIDKeyError::MixedControllers(format!(
            "{} and {}",
            controller,
            other.controller()
        )));
    }

    debug!(
        "converting {} key(s) of ({controller}) to ({})",
        keys.len(),
        resolution.accept
    );

    let json = ResolutionOptions::new(ContentType::DidJson);
    let (old, new) = try_join(
        dispatch::resolve(controller, &json),
        dispatch::resolve(controller, resolution),
    )
    .await?;

    let keys = keys
        .iter()
        .map(|key| convert_key(key, &old.did_document, &new.did_document, strict))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DidGeneration {
        did_document: new.did_document,
        keys,
    })
}

fn convert_key(
    key: &KeyPair,
    old: &Document,
    new: &Document,
    strict: bool,
) -> Result<KeyPair, DIDKeyError> {
    let not_found = |doc: &Document| {
        DIDKeyError::VerificationMethodNotFound(format!("{} in {}", key.id(), doc.id))
    };

    let vm = new
        .get_verification_method(key.id())
        .ok_or_else(|| not_found(new))?;
    let vm_as_json = old
        .get_verification_method(key.id())
        .ok_or_else(|| not_found(old))?;

    let kind = classify(vm_as_json, strict)?;
    debug!("key ({}) classified as {kind:?}, exporting as {}", key.id(), vm.type_);

    let material = kind.import(key)?;
    Ok(material.export(key.id(), key.controller(), &vm.type_, true)?)
}
