/*!
did:key generation, resolution and key representation conversion

Handlers for each supported curve family sit behind a process-wide registry
that routes by key type (generation) or by the 12 character DID prefix
(resolution). On top of that the client can:

* synthesize a `did:jwk` document from a generated key ([`DIDKeyClient::generate2`])
* convert exported key pairs between the `application/did+json` and
  `application/did+ld+json` representations ([`DIDKeyClient::convert`])

```rust,no_run
use did_key_resolver::{DIDKeyClient, GenerateOptions, config::DIDKeyConfigBuilder};

# async fn run() -> Result<(), did_key_resolver::errors::DIDKeyError> {
let client = DIDKeyClient::new(DIDKeyConfigBuilder::default().build());
let generated = client
    .generate("ed25519", GenerateOptions::Random, None)
    .await?;
let resolved = client
    .resolve(generated.did_document.id.as_str(), None)
    .await?;
assert_eq!(resolved.did_document, generated.did_document);
# Ok(())
# }
```
*/

use config::DIDKeyConfig;
use did_key_document::{
    DidGeneration, DidResolution, KeyPair, verification_method::VerificationMethod,
};
use errors::DIDKeyError;
use tracing::debug;

pub mod classify;
pub mod config;
mod convert;
pub mod dispatch;
pub mod errors;
pub mod handler;
pub mod handlers;
mod jwk_did;
pub mod key_type;
pub mod registry;

pub use classify::{KeyPairKind, classify};
pub use did_key_document::{ContentType, ResolutionOptions};
pub use handler::{GenerateOptions, WebCryptoParams};
pub use jwk_did::Generate2Options;
pub use key_type::KeyType;
pub use registry::registry;

/// [DIDKeyClient] is how you generate, resolve and convert did:key identifiers
#[derive(Clone, Debug)]
pub struct DIDKeyClient {
    config: DIDKeyConfig,
}

impl DIDKeyClient {
    pub fn new(config: DIDKeyConfig) -> Self {
        DIDKeyClient { config }
    }

    pub fn config(&self) -> &DIDKeyConfig {
        &self.config
    }

    fn options(&self, options: Option<ResolutionOptions>) -> ResolutionOptions {
        options.unwrap_or(ResolutionOptions::new(self.config.default_accept))
    }

    fn check_did_size(&self, did: &str) -> Result<(), DIDKeyError> {
        // If DID's size is greater than the limit we don't resolve it
        if did.len() > self.config.max_did_size_in_bytes {
            return Err(DIDKeyError::DIDError(format!(
                "The DID size of {}bytes exceeds the limit of {1}. Please ensure the size is less than {1}.",
                did.len(),
                self.config.max_did_size_in_bytes
            )));
        }
        Ok(())
    }

    /// Generates a did:key of `key_type` (e.g. `ed25519`, `secp256r1`)
    ///
    /// NIST curve types ignore `options` and always use a fresh random key.
    pub async fn generate(
        &self,
        key_type: &str,
        options: GenerateOptions,
        resolution: Option<ResolutionOptions>,
    ) -> Result<DidGeneration, DIDKeyError> {
        let key_type: KeyType = key_type.parse()?;
        dispatch::generate(key_type, options, &self.options(resolution)).await
    }

    /// Generates a key and wraps it in a did:jwk document
    pub async fn generate2(&self, options: &Generate2Options) -> Result<DidGeneration, DIDKeyError> {
        jwk_did::generate2(options).await
    }

    /// Resolves a did:key
    pub async fn resolve(
        &self,
        did: &str,
        resolution: Option<ResolutionOptions>,
    ) -> Result<DidResolution, DIDKeyError> {
        self.check_did_size(did)?;
        dispatch::resolve(did, &self.options(resolution)).await
    }

    /// Re-exports `keys` for the requested document representation
    ///
    /// All keys must share one controller. The returned document is the
    /// controller resolved in the requested representation.
    pub async fn convert(
        &self,
        keys: &[KeyPair],
        resolution: Option<ResolutionOptions>,
    ) -> Result<DidGeneration, DIDKeyError> {
        if let Some(key) = keys.first() {
            self.check_did_size(key.controller())?;
        }
        let resolution = self.options(resolution);
        debug!("convert requested for {} key(s)", keys.len());

        convert::convert(keys, &resolution, self.config.strict_curve_classification).await
    }

    /// Classifies a verification method using this client's strictness setting
    pub fn classify(&self, vm: &VerificationMethod) -> Result<KeyPairKind, DIDKeyError> {
        classify(vm, self.config.strict_curve_classification)
    }
}
