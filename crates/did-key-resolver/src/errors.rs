//! Error types for did:key generation, resolution and conversion
use did_key_crypto::CryptoError;
use did_key_document::DocumentError;
use did_key_encoding::EncodingError;
use thiserror::Error;

/// Errors raised inside a single curve-family handler
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The DID does not carry a key this handler understands
    #[error("Invalid DID: {0}")]
    InvalidDid(String),
    /// The generation options can't be used by this handler
    #[error("Unsupported generation options: {0}")]
    UnsupportedOptions(String),
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

/// DIDKeyError is the error type for every public operation of this crate.
#[derive(Error, Debug)]
pub enum DIDKeyError {
    /// No handler is registered for the requested key type
    #[error("Unsupported key type: {0}")]
    UnsupportedType(String),
    /// The first 12 characters of the DID match no registered handler
    #[error("Unsupported DID prefix: {0}")]
    UnsupportedPrefix(String),
    /// Classification needs a JsonWebKey2020 verification method
    #[error("Unsupported verification method type: {0}")]
    UnsupportedVerificationMethodType(String),
    /// The JWK curve is unknown and strict classification is enabled
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),
    /// A key id is missing from one of the resolved documents
    #[error("Verification method not found: {0}")]
    VerificationMethodNotFound(String),
    /// A call that needs at least one key got none
    #[error("Missing key material: {0}")]
    MissingKeyMaterial(String),
    /// Keys passed to a conversion belong to more than one DID
    #[error("Keys span multiple controllers: {0}")]
    MixedControllers(String),
    /// The seed isn't valid hex
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),
    /// The DID was rejected before dispatch
    #[error("DID error: {0}")]
    DIDError(String),
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
