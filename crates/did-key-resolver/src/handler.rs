/*!
 * Curve-family handler traits.
 *
 * Provides [`KeyHandler`] (sync) and [`AsyncKeyHandler`] (async). Every
 * [`KeyHandler`] is automatically an [`AsyncKeyHandler`] via blanket impl, so
 * the registry only needs `Arc<dyn AsyncKeyHandler>`.
 */

use std::{fmt, future::Future, pin::Pin};

use did_key_document::{DidGeneration, DidResolution, ResolutionOptions};
use zeroize::Zeroizing;

use crate::errors::HandlerError;

/// Web-crypto key descriptor, `{kty, crvOrSize}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebCryptoParams {
    pub kty: &'static str,
    pub crv_or_size: &'static str,
}

/// How a handler should produce its key material
#[derive(Clone, Default)]
pub enum GenerateOptions {
    /// Fresh key from the OS random number generator
    #[default]
    Random,
    /// Deterministic key derived from caller supplied secret bytes
    Seed(Zeroizing<Vec<u8>>),
    /// Web-crypto generation for the NIST curves
    WebCrypto(WebCryptoParams),
}

impl GenerateOptions {
    pub fn from_seed(seed: Vec<u8>) -> Self {
        GenerateOptions::Seed(Zeroizing::new(seed))
    }

    /// The 32 byte seed, if any, for handlers that derive keys from one
    pub(crate) fn seed_32(&self) -> Result<Option<[u8; 32]>, HandlerError> {
        match self {
            GenerateOptions::Random => Ok(None),
            GenerateOptions::Seed(seed) => {
                let seed: [u8; 32] = seed.as_slice().try_into().map_err(|_| {
                    HandlerError::UnsupportedOptions(format!(
                        "seed must be 32 bytes, got {}",
                        seed.len()
                    ))
                })?;
                Ok(Some(seed))
            }
            GenerateOptions::WebCrypto(params) => Err(HandlerError::UnsupportedOptions(format!(
                "web-crypto generation ({params:?}) is only available for NIST curves"
            ))),
        }
    }
}

impl fmt::Debug for GenerateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateOptions::Random => write!(f, "Random"),
            GenerateOptions::Seed(_) => write!(f, "Seed(<redacted>)"),
            GenerateOptions::WebCrypto(params) => f.debug_tuple("WebCrypto").field(params).finish(),
        }
    }
}

/// Synchronous handler for one curve family.
///
/// did:key generation and resolution are pure computation, so every built-in
/// handler implements this trait.
pub trait KeyHandler: Send + Sync {
    /// Human-readable name for this handler (e.g., `"Ed25519"`).
    fn name(&self) -> &str;

    /// Generate a key and return its document plus one key pair per verification method.
    fn generate(
        &self,
        options: &GenerateOptions,
        resolution: &ResolutionOptions,
    ) -> Result<DidGeneration, HandlerError>;

    /// Resolve a did:key owned by this handler.
    fn resolve(
        &self,
        did: &str,
        resolution: &ResolutionOptions,
    ) -> Result<DidResolution, HandlerError>;
}

/// Asynchronous handler for one curve family.
///
/// This trait is dyn-compatible: the registry stores handlers as
/// `Arc<dyn AsyncKeyHandler>`.
pub trait AsyncKeyHandler: Send + Sync {
    fn name(&self) -> &str;

    fn generate<'a>(
        &'a self,
        options: &'a GenerateOptions,
        resolution: &'a ResolutionOptions,
    ) -> Pin<Box<dyn Future<Output = Result<DidGeneration, HandlerError>> + Send + 'a>>;

    fn resolve<'a>(
        &'a self,
        did: &'a str,
        resolution: &'a ResolutionOptions,
    ) -> Pin<Box<dyn Future<Output = Result<DidResolution, HandlerError>> + Send + 'a>>;
}

/// Every sync [`KeyHandler`] is automatically an [`AsyncKeyHandler`].
impl<T: KeyHandler> AsyncKeyHandler for T {
    fn name(&self) -> &str {
        KeyHandler::name(self)
    }

    fn generate<'a>(
        &'a self,
        options: &'a GenerateOptions,
        resolution: &'a ResolutionOptions,
    ) -> Pin<Box<dyn Future<Output = Result<DidGeneration, HandlerError>> + Send + 'a>> {
        Box::pin(std::future::ready(KeyHandler::generate(
            self, options, resolution,
        )))
    }

    fn resolve<'a>(
        &'a self,
        did: &'a str,
        resolution: &'a ResolutionOptions,
    ) -> Pin<Box<dyn Future<Output = Result<DidResolution, HandlerError>> + Send + 'a>> {
        Box::pin(std::future::ready(KeyHandler::resolve(
            self, did, resolution,
        )))
    }
}
