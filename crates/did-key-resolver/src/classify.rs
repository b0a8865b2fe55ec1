//! Picks the key pair capability that understands a JWK verification method
//!
//! A resolved document does not say which handler produced it, so the
//! `(kty, crv)` pair of the method's public JWK decides.

use did_key_crypto::{Curve, Params};
use did_key_document::{
    DocumentError, KeyMaterial, KeyPair,
    verification_method::{JSON_WEB_KEY_2020, VerificationMethod},
};
use tracing::warn;

use crate::errors::DIDKeyError;

/// Key pair capability selected for a verification method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPairKind {
    Secp256k1,
    Ed25519,
    X25519,
    Bls12381G1,
    Bls12381G2,
    /// Generic web-crypto keys: the NIST curves
    WebCrypto,
}

impl KeyPairKind {
    /// Curves this capability can import
    pub fn curves(&self) -> &'static [Curve] {
        match self {
            KeyPairKind::Secp256k1 => &[Curve::Secp256k1],
            KeyPairKind::Ed25519 => &[Curve::Ed25519],
            KeyPairKind::X25519 => &[Curve::X25519],
            KeyPairKind::Bls12381G1 => &[Curve::Bls12381G1],
            KeyPairKind::Bls12381G2 => &[Curve::Bls12381G2],
            KeyPairKind::WebCrypto => &[Curve::P256, Curve::P384, Curve::P521],
        }
    }

    /// Imports a key pair, checking it belongs to this capability
    pub fn import(&self, key: &KeyPair) -> Result<KeyMaterial, DIDKeyError> {
        let material = KeyMaterial::from_key_pair(key)?;
        if !self.curves().contains(&material.curve()) {
            return Err(DocumentError::UnsupportedKeyType(format!(
                "{} is a {} key, not {self:?}",
                key.id(),
                material.curve()
            ))
            .into());
        }
        Ok(material)
    }
}

/// Classifies a `JsonWebKey2020` verification method by its `(kty, crv)`
///
/// Unknown pairs fall back to [`KeyPairKind::WebCrypto`] unless `strict` is set,
/// in which case they fail with [`DIDKeyError::UnsupportedCurve`].
pub fn classify(vm: &VerificationMethod, strict: bool) -> Result<KeyPairKind, DIDKeyError> {
    if vm.type_ != JSON_WEB_KEY_2020 {
        return Err(DIDKeyError::UnsupportedVerificationMethodType(format!(
            "{} ({})",
            vm.type_, vm.id
        )));
    }

    let jwk = vm.public_key_jwk().ok_or_else(|| {
        DIDKeyError::UnsupportedVerificationMethodType(format!(
            "{} ({}) has no publicKeyJwk",
            vm.type_, vm.id
        ))
    })?;

    let kind = match (&jwk.params, jwk.curve_name()) {
        (Params::EC(_), "secp256k1") => KeyPairKind::Secp256k1,
        (Params::OKP(_), "Ed25519") => KeyPairKind::Ed25519,
        (Params::OKP(_), "X25519") => KeyPairKind::X25519,
        (Params::EC(_), "BLS12381_G1") => KeyPairKind::Bls12381G1,
        (Params::EC(_), "BLS12381_G2") => KeyPairKind::Bls12381G2,
        (Params::EC(_), "P-256" | "P-384" | "P-521") => KeyPairKind::WebCrypto,
        (_, crv) => {
            let kty = jwk.key_type_name();
            if strict {
                return Err(DIDKeyError::UnsupportedCurve(format!(
                    "kty ({kty}) crv ({crv}) in {}",
                    vm.id
                )));
            }
            warn!(
                "verification method ({}) has unrecognised kty ({kty}) crv ({crv}), treating it as a web-crypto key",
                vm.id
            );
            KeyPairKind::WebCrypto
        }
    };

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm(type_: &str, jwk: serde_json::Value) -> VerificationMethod {
        serde_json::from_value(serde_json::json!({
            "id": "did:example:123#0",
            "type": type_,
            "controller": "did:example:123",
            "publicKeyJwk": jwk,
        }))
        .unwrap()
    }

    #[test]
    fn specific_curves() {
        let cases = [
            ("EC", "secp256k1", KeyPairKind::Secp256k1),
            ("OKP", "Ed25519", KeyPairKind::Ed25519),
            ("OKP", "X25519", KeyPairKind::X25519),
            ("EC", "BLS12381_G1", KeyPairKind::Bls12381G1),
            ("EC", "BLS12381_G2", KeyPairKind::Bls12381G2),
            ("EC", "P-384", KeyPairKind::WebCrypto),
        ];

        for (kty, crv, expected) in cases {
            let vm = vm(
                JSON_WEB_KEY_2020,
                serde_json::json!({"kty": kty, "crv": crv, "x": "AA"}),
            );
            assert_eq!(classify(&vm, true).unwrap(), expected);
        }
    }

    #[test]
    fn p256_is_web_crypto() {
        let vm = vm(
            JSON_WEB_KEY_2020,
            serde_json::json!({"kty": "EC", "crv": "P-256", "x": "AA", "y": "AA"}),
        );
        assert_eq!(classify(&vm, false).unwrap(), KeyPairKind::WebCrypto);
    }

    #[test]
    fn unknown_curve_falls_back_unless_strict() {
        let vm = vm(
            JSON_WEB_KEY_2020,
            serde_json::json!({"kty": "OKP", "crv": "Ed448", "x": "AA"}),
        );
        assert_eq!(classify(&vm, false).unwrap(), KeyPairKind::WebCrypto);
        assert!(matches!(
            classify(&vm, true),
            Err(DIDKeyError::UnsupportedCurve(_))
        ));
    }

    #[test]
    fn linked_data_type_is_rejected() {
        let vm: VerificationMethod = serde_json::from_value(serde_json::json!({
            "id": "did:example:123#0",
            "type": "Ed25519VerificationKey2018",
            "controller": "did:example:123",
            "publicKeyBase58": "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS",
        }))
        .unwrap();

        assert!(matches!(
            classify(&vm, false),
            Err(DIDKeyError::UnsupportedVerificationMethodType(_))
        ));
    }

    #[test]
    fn import_checks_curve_family() {
        let key = KeyMaterial::from(did_key_crypto::ed25519::generate(Some(&[0u8; 32])))
            .export("did:example:123#0", "did:example:123", JSON_WEB_KEY_2020, true)
            .unwrap();

        assert!(KeyPairKind::Ed25519.import(&key).is_ok());
        assert!(KeyPairKind::WebCrypto.import(&key).is_err());
    }
}
