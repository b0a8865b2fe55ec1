//! Error types for DID documents and key pairs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Key error: {0}")]
    Key(String),

    #[error("Unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] did_key_encoding::EncodingError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] did_key_crypto::CryptoError),
}
