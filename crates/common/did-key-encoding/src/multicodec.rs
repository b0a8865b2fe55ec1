//! Multicodec encoding/decoding
//!
//! Multicodec is a self-describing format that prefixes data with a varint
//! indicating the type of data that follows. A did:key identifier is the
//! multibase rendering of `varint(codec) || public key bytes`.
//!
//! See: <https://github.com/multiformats/multicodec>

use crate::EncodingError;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

// ****************************************************************************
// Codec Magic Numbers
// See: https://github.com/multiformats/multicodec/blob/master/table.csv
// ****************************************************************************
pub const ED25519_PUB: u64 = 0xed;
pub const X25519_PUB: u64 = 0xec;
pub const SECP256K1_PUB: u64 = 0xe7;
pub const P256_PUB: u64 = 0x1200;
pub const P384_PUB: u64 = 0x1201;
pub const P521_PUB: u64 = 0x1202;
pub const BLS12381_G1_PUB: u64 = 0xea;
pub const BLS12381_G2_PUB: u64 = 0xeb;

/// Public key codecs understood by the did:key handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Codec {
    Ed25519Pub,
    X25519Pub,
    Secp256k1Pub,
    P256Pub,
    P384Pub,
    P521Pub,
    Bls12381G1Pub,
    Bls12381G2Pub,
    Unknown(u64),
}

impl Codec {
    /// Convert a raw codec value to a Codec enum
    pub fn from_u64(value: u64) -> Self {
        match value {
            ED25519_PUB => Codec::Ed25519Pub,
            X25519_PUB => Codec::X25519Pub,
            SECP256K1_PUB => Codec::Secp256k1Pub,
            P256_PUB => Codec::P256Pub,
            P384_PUB => Codec::P384Pub,
            P521_PUB => Codec::P521Pub,
            BLS12381_G1_PUB => Codec::Bls12381G1Pub,
            BLS12381_G2_PUB => Codec::Bls12381G2Pub,
            other => Codec::Unknown(other),
        }
    }

    /// Convert to raw u64 value
    pub fn to_u64(self) -> u64 {
        match self {
            Codec::Ed25519Pub => ED25519_PUB,
            Codec::X25519Pub => X25519_PUB,
            Codec::Secp256k1Pub => SECP256K1_PUB,
            Codec::P256Pub => P256_PUB,
            Codec::P384Pub => P384_PUB,
            Codec::P521Pub => P521_PUB,
            Codec::Bls12381G1Pub => BLS12381_G1_PUB,
            Codec::Bls12381G2Pub => BLS12381_G2_PUB,
            Codec::Unknown(v) => v,
        }
    }

    /// Length of the public key as it appears inside a did:key identifier.
    /// EC points are always in compressed SEC1 form.
    pub fn expected_key_length(&self) -> Option<usize> {
        match self {
            Codec::Ed25519Pub | Codec::X25519Pub => Some(32),
            Codec::Secp256k1Pub | Codec::P256Pub => Some(33),
            Codec::P384Pub => Some(49),
            Codec::P521Pub => Some(67),
            Codec::Bls12381G1Pub => Some(48),
            Codec::Bls12381G2Pub => Some(96),
            Codec::Unknown(_) => None,
        }
    }
}

/// A multicodec-encoded byte slice, split into its codec and payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiEncoded<'a> {
    codec: u64,
    data: &'a [u8],
}

impl<'a> MultiEncoded<'a> {
    /// Parse a multicodec-prefixed byte slice
    pub fn new(bytes: &'a [u8]) -> Result<Self, EncodingError> {
        let (codec, data) = unsigned_varint::decode::u64(bytes)
            .map_err(|e| EncodingError::InvalidMulticodec(format!("varint decode: {e}")))?;

        Ok(MultiEncoded { codec, data })
    }

    /// Raw codec value (u64)
    pub fn codec(&self) -> u64 {
        self.codec
    }

    /// Codec as typed enum
    pub fn codec_type(&self) -> Codec {
        Codec::from_u64(self.codec)
    }

    /// Data bytes (without codec prefix)
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// A multicodec-encoded byte buffer (owned)
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MultiEncodedBuf(Vec<u8>);

impl MultiEncodedBuf {
    /// Encode bytes with the given codec
    pub fn encode(codec: Codec, bytes: &[u8]) -> Self {
        Self::encode_raw(codec.to_u64(), bytes)
    }

    /// Encode bytes with a raw codec value
    pub fn encode_raw(codec: u64, bytes: &[u8]) -> Self {
        let mut codec_buffer = unsigned_varint::encode::u64_buffer();
        let encoded_codec = unsigned_varint::encode::u64(codec, &mut codec_buffer);
        let mut result = Vec::with_capacity(encoded_codec.len() + bytes.len());
        result.extend_from_slice(encoded_codec);
        result.extend_from_slice(bytes);
        Self(result)
    }

    /// Returns a reference to the raw bytes, including the codec prefix
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
