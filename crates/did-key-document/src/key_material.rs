//! Curve key material independent of its document representation
//!
//! [`KeyMaterial`] is the pivot for representation changes: import a
//! [`KeyPair`] in either form, then export it as another verification method
//! type. EC public keys are held as compressed SEC1 points, the same bytes a
//! did:key identifier carries.

use std::fmt;

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use did_key_crypto::{Curve, GeneratedKey, JWK, Params};
use did_key_encoding::{decode_base58, encode_base58, encode_multikey};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    Base58KeyPair, DocumentError, JsonWebKeyPair, KeyPair,
    verification_method::JSON_WEB_KEY_2020,
};

pub const ED25519_VERIFICATION_KEY_2018: &str = "Ed25519VerificationKey2018";
pub const X25519_KEY_AGREEMENT_KEY_2019: &str = "X25519KeyAgreementKey2019";
pub const ECDSA_SECP256K1_VERIFICATION_KEY_2019: &str = "EcdsaSecp256k1VerificationKey2019";
pub const BLS12381_G1_KEY_2020: &str = "Bls12381G1Key2020";
pub const BLS12381_G2_KEY_2020: &str = "Bls12381G2Key2020";

/// Linked-Data verification method type for a curve, if one exists
pub fn linked_data_type(curve: Curve) -> Option<&'static str> {
    match curve {
        Curve::Ed25519 => Some(ED25519_VERIFICATION_KEY_2018),
        Curve::X25519 => Some(X25519_KEY_AGREEMENT_KEY_2019),
        Curve::Secp256k1 => Some(ECDSA_SECP256K1_VERIFICATION_KEY_2019),
        Curve::Bls12381G1 => Some(BLS12381_G1_KEY_2020),
        Curve::Bls12381G2 => Some(BLS12381_G2_KEY_2020),
        Curve::P256 | Curve::P384 | Curve::P521 => None,
    }
}

fn curve_for_linked_data_type(type_: &str) -> Result<Curve, DocumentError> {
    match type_ {
        ED25519_VERIFICATION_KEY_2018 => Ok(Curve::Ed25519),
        X25519_KEY_AGREEMENT_KEY_2019 => Ok(Curve::X25519),
        ECDSA_SECP256K1_VERIFICATION_KEY_2019 => Ok(Curve::Secp256k1),
        BLS12381_G1_KEY_2020 => Ok(Curve::Bls12381G1),
        BLS12381_G2_KEY_2020 => Ok(Curve::Bls12381G2),
        _ => Err(DocumentError::UnsupportedKeyType(type_.to_string())),
    }
}

/// Raw key bytes for one curve
#[derive(Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    curve: Curve,
    public_bytes: Vec<u8>,
    private_bytes: Option<Vec<u8>>,
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("curve", &self.curve)
            .field("public_bytes", &self.public_bytes)
            .field("private_bytes", &self.private_bytes.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl From<GeneratedKey> for KeyMaterial {
    fn from(key: GeneratedKey) -> Self {
        KeyMaterial {
            curve: key.curve,
            public_bytes: key.public_bytes,
            private_bytes: Some(key.private_bytes),
        }
    }
}

impl KeyMaterial {
    /// Wraps raw bytes, checking the public key is well formed for `curve`
    pub fn new(
        curve: Curve,
        public_bytes: Vec<u8>,
        private_bytes: Option<Vec<u8>>,
    ) -> Result<Self, DocumentError> {
        JWK::from_public_bytes(curve, &public_bytes)?;
        Ok(KeyMaterial {
            curve,
            public_bytes,
            private_bytes,
        })
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn public_bytes(&self) -> &[u8] {
        &self.public_bytes
    }

    pub fn private_bytes(&self) -> Option<&[u8]> {
        self.private_bytes.as_deref()
    }

    /// Multibase fingerprint, as used after `did:key:` and in fragment ids
    pub fn fingerprint(&self) -> String {
        encode_multikey(self.curve.public_codec(), &self.public_bytes)
    }

    /// Public JWK without a `kid`
    pub fn public_jwk(&self) -> Result<JWK, DocumentError> {
        Ok(JWK::from_public_bytes(self.curve, &self.public_bytes)?)
    }

    /// Private JWK (public members plus `d`), if private bytes are held
    pub fn private_jwk(&self) -> Result<Option<JWK>, DocumentError> {
        let Some(private) = &self.private_bytes else {
            return Ok(None);
        };

        let mut jwk = self.public_jwk()?;
        let d = Some(BASE64_URL_SAFE_NO_PAD.encode(private));
        match &mut jwk.params {
            Params::EC(params) => params.d = d,
            Params::OKP(params) => params.d = d,
        }
        Ok(Some(jwk))
    }

    /// Imports either key pair representation
    pub fn from_key_pair(key_pair: &KeyPair) -> Result<Self, DocumentError> {
        match key_pair {
            KeyPair::Jwk(kp) => Self::from_jwk(&kp.public_key_jwk, kp.private_key_jwk.as_ref()),
            KeyPair::Base58(kp) => Self::from_base58(kp),
        }
    }

    /// Imports a public JWK and, optionally, the matching private JWK
    pub fn from_jwk(public: &JWK, private: Option<&JWK>) -> Result<Self, DocumentError> {
        let curve = public.curve()?;

        let public_bytes = match &public.params {
            Params::OKP(params) => BASE64_URL_SAFE_NO_PAD.decode(&params.x)?,
            Params::EC(params) => {
                let x = BASE64_URL_SAFE_NO_PAD.decode(&params.x)?;
                match &params.y {
                    Some(y) => curve.compress_point(&x, &BASE64_URL_SAFE_NO_PAD.decode(y)?)?,
                    // BLS12-381 keys carry the whole point in `x`
                    None => x,
                }
            }
        };

        let private_bytes = private
            .or(Some(public))
            .and_then(JWK::private_key)
            .map(|d| BASE64_URL_SAFE_NO_PAD.decode(d))
            .transpose()?;

        Self::new(curve, public_bytes, private_bytes)
    }

    fn from_base58(key_pair: &Base58KeyPair) -> Result<Self, DocumentError> {
        let curve = curve_for_linked_data_type(&key_pair.type_)?;

        let mut public_bytes = decode_base58(&key_pair.public_key_base58)?;
        if curve == Curve::Secp256k1 && public_bytes.len() == 65 && public_bytes[0] == 0x04 {
            public_bytes = curve.compress_point(&public_bytes[1..33], &public_bytes[33..])?;
        }

        let mut private_bytes = key_pair
            .private_key_base58
            .as_deref()
            .map(decode_base58)
            .transpose()?;

        // Ed25519 private keys also circulate as seed || public key
        if curve == Curve::Ed25519
            && let Some(private) = &mut private_bytes
            && private.len() == 64
        {
            private.truncate(32);
        }

        Self::new(curve, public_bytes, private_bytes)
    }

    /// Exports this key as a key pair for the verification method `type_`
    ///
    /// `JsonWebKey2020` yields the JWK form; the Linked-Data suite types yield
    /// the Base58 form and must match the curve.
    pub fn export(
        &self,
        id: &str,
        controller: &str,
        type_: &str,
        private_key: bool,
    ) -> Result<KeyPair, DocumentError> {
        if private_key && self.private_bytes.is_none() {
            return Err(DocumentError::Key(format!(
                "{id} has no private key material to export"
            )));
        }

        if type_ == JSON_WEB_KEY_2020 {
            return Ok(KeyPair::Jwk(JsonWebKeyPair {
                id: id.to_string(),
                type_: type_.to_string(),
                controller: controller.to_string(),
                public_key_jwk: self.public_jwk()?,
                private_key_jwk: if private_key {
                    self.private_jwk()?
                } else {
                    None
                },
            }));
        }

        if curve_for_linked_data_type(type_)? != self.curve {
            return Err(DocumentError::UnsupportedKeyType(format!(
                "{type_} cannot carry a {} key",
                self.curve
            )));
        }

        Ok(KeyPair::Base58(Base58KeyPair {
            id: id.to_string(),
            type_: type_.to_string(),
            controller: controller.to_string(),
            public_key_base58: encode_base58(&self.public_bytes),
            private_key_base58: if private_key {
                self.private_bytes.as_deref().map(encode_base58)
            } else {
                None
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DID: &str = "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp";
    const KID: &str = "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp#z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp";

    fn zero_seed_ed25519() -> KeyMaterial {
        KeyMaterial::from(did_key_crypto::ed25519::generate(Some(&[0u8; 32])))
    }

    #[test]
    fn fingerprint_of_zero_seed() {
        assert_eq!(
            zero_seed_ed25519().fingerprint(),
            "z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp"
        );
    }

    #[test]
    fn export_base58_form() {
        let KeyPair::Base58(kp) = zero_seed_ed25519()
            .export(KID, DID, ED25519_VERIFICATION_KEY_2018, true)
            .unwrap()
        else {
            panic!("Expected Base58 key pair");
        };

        assert_eq!(
            kp.public_key_base58,
            "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS"
        );
        assert_eq!(
            kp.private_key_base58.as_deref(),
            Some("11111111111111111111111111111111")
        );
    }

    #[test]
    fn export_jwk_form() {
        let KeyPair::Jwk(kp) = zero_seed_ed25519()
            .export(KID, DID, JSON_WEB_KEY_2020, true)
            .unwrap()
        else {
            panic!("Expected JWK key pair");
        };

        assert!(kp.public_key_jwk.private_key().is_none());
        assert_eq!(
            kp.private_key_jwk.as_ref().and_then(JWK::private_key),
            Some("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA")
        );
    }

    #[test]
    fn representations_share_key_material() {
        let key = zero_seed_ed25519();
        let jwk = key.export(KID, DID, JSON_WEB_KEY_2020, true).unwrap();
        let base58 = key
            .export(KID, DID, ED25519_VERIFICATION_KEY_2018, true)
            .unwrap();

        assert_eq!(KeyMaterial::from_key_pair(&jwk).unwrap(), key);
        assert_eq!(KeyMaterial::from_key_pair(&base58).unwrap(), key);
    }

    #[test]
    fn ed25519_expanded_private_key_is_accepted() {
        let key = zero_seed_ed25519();
        let mut expanded = vec![0u8; 32];
        expanded.extend_from_slice(key.public_bytes());

        let kp = KeyPair::Base58(Base58KeyPair {
            id: KID.to_string(),
            type_: ED25519_VERIFICATION_KEY_2018.to_string(),
            controller: DID.to_string(),
            public_key_base58: encode_base58(key.public_bytes()),
            private_key_base58: Some(encode_base58(&expanded)),
        });

        assert_eq!(KeyMaterial::from_key_pair(&kp).unwrap(), key);
    }

    #[test]
    fn secp256k1_jwk_is_compressed() {
        let generated = did_key_crypto::secp256k1::generate(Some(&[1u8; 32])).unwrap();
        let imported = KeyMaterial::from_jwk(&generated.jwk, None).unwrap();

        assert_eq!(imported.public_bytes(), generated.public_bytes.as_slice());
        assert_eq!(
            encode_base58(imported.public_bytes()),
            "vYNYVRtXSSDCi1rZtPP3ieuoh8cG5AscesGPYESa4VpJ"
        );
        assert_eq!(
            imported.fingerprint(),
            "zQ3shgVXZLaMzm5S5x7XzGUG6YFHFLtoEMiv9ao2Bqa7hGyg2"
        );
    }

    #[test]
    fn mismatched_linked_data_type_is_rejected() {
        let err = zero_seed_ed25519()
            .export(KID, DID, X25519_KEY_AGREEMENT_KEY_2019, false)
            .unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedKeyType(_)));
    }

    #[test]
    fn p256_has_no_linked_data_type() {
        let generated = did_key_crypto::p256::generate(None).unwrap();
        let key = KeyMaterial::from(generated);

        assert_eq!(linked_data_type(Curve::P256), None);
        assert!(key.export(KID, DID, JSON_WEB_KEY_2020, true).is_ok());
        assert!(key
            .export(KID, DID, ECDSA_SECP256K1_VERIFICATION_KEY_2019, true)
            .is_err());
    }

    #[test]
    fn private_export_requires_private_bytes() {
        let public_only = KeyMaterial::new(
            Curve::Ed25519,
            zero_seed_ed25519().public_bytes().to_vec(),
            None,
        )
        .unwrap();

        assert!(public_only.export(KID, DID, JSON_WEB_KEY_2020, true).is_err());
        assert!(public_only.export(KID, DID, JSON_WEB_KEY_2020, false).is_ok());
    }
}
