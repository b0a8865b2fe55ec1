//! Error types for cryptographic operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Key error: {0}")]
    KeyError(String),

    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("Encoding error: {0}")]
    Encoding(#[from] did_key_encoding::EncodingError),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
