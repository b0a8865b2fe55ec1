//! Multibase and multicodec encoding utilities for did:key
//!
//! This crate provides the byte-level encodings used by every key handler:
//! - Multibase encoding/decoding (base58btc)
//! - Raw base58btc for `publicKeyBase58` style members
//! - Multicodec varint prefixes and codec constants

pub mod multibase;
pub mod multicodec;

pub use multibase::{
    BASE58BTC_PREFIX, decode_base58, decode_base58btc, decode_multikey,
    decode_multikey_with_codec, encode_base58, encode_base58btc, encode_multikey,
};
pub use multicodec::{
    BLS12381_G1_PUB, BLS12381_G2_PUB, Codec, ED25519_PUB, MultiEncoded, MultiEncodedBuf,
    P256_PUB, P384_PUB, P521_PUB, SECP256K1_PUB, X25519_PUB,
};

mod error;
pub use error::EncodingError;
