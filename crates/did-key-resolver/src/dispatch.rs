//! Routes generate and resolve calls to the registered handler

use did_key_document::{DidGeneration, DidResolution, ResolutionOptions};
use tracing::debug;

use crate::{
    errors::DIDKeyError, handler::GenerateOptions, key_type::KeyType, registry::registry,
};

/// Options a handler actually receives for `key_type`
///
/// The NIST curves can't derive keys from a seed, so their caller options are
/// replaced by the fixed web-crypto descriptor. Other types pass through.
pub fn effective_generate_options(key_type: KeyType, options: GenerateOptions) -> GenerateOptions {
    match key_type.web_crypto_params() {
        Some(params) => {
            debug!("{key_type} ignores caller options, using {params:?}");
            GenerateOptions::WebCrypto(params)
        }
        None => options,
    }
}

pub async fn generate(
    key_type: KeyType,
    options: GenerateOptions,
    resolution: &ResolutionOptions,
) -> Result<DidGeneration, DIDKeyError> {
    let handler = registry().handler_for_type(key_type)?;
    let options = effective_generate_options(key_type, options);

    debug!(
        "generating {key_type} with handler ({}) accept ({})",
        handler.name(),
        resolution.accept
    );
    Ok(handler.generate(&options, resolution).await?)
}

pub async fn resolve(
    did: &str,
    resolution: &ResolutionOptions,
) -> Result<DidResolution, DIDKeyError> {
    let handler = registry().handler_for_prefix(did)?;

    debug!(
        "resolving did ({did}) with handler ({}) accept ({})",
        handler.name(),
        resolution.accept
    );
    Ok(handler.resolve(did, resolution).await?)
}
