//! Curve key generation and JWK types for did:key handlers
//!
//! This crate provides:
//! - JWK (JSON Web Key) types per RFC 7517
//! - Key generation for Ed25519, X25519, secp256k1, P-256, P-384 and P-521
//! - Public JWK reconstruction from the compressed keys carried in did:key
//! - Ed25519 → X25519 conversion for derived key-agreement keys
//! - BLS12-381 G1/G2 public key encoding (no key generation)

mod curve;
#[cfg(any(feature = "p256", feature = "k256", feature = "p384", feature = "p521"))]
mod ec;
mod error;
mod jwk;

pub mod bls12381;
#[cfg(feature = "ed25519")]
pub mod ed25519;
#[cfg(feature = "p256")]
pub mod p256;
#[cfg(feature = "p384")]
pub mod p384;
#[cfg(feature = "p521")]
pub mod p521;
#[cfg(feature = "k256")]
pub mod secp256k1;

pub use curve::Curve;
pub use error::CryptoError;
pub use jwk::{ECParams, JWK, OctectParams, Params};

/// Freshly generated key material with raw bytes and its private JWK
///
/// `public_bytes` is the form embedded in a did:key identifier: raw 32 bytes for
/// the 25519 curves, compressed SEC1 points for the EC curves.
#[derive(Debug, Clone)]
pub struct GeneratedKey {
    pub curve: Curve,
    pub private_bytes: Vec<u8>,
    pub public_bytes: Vec<u8>,
    pub jwk: JWK,
}
