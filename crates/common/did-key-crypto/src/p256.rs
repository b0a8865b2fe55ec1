//! P-256 (secp256r1/prime256v1) key operations

crate::ec::sec1_curve!(p256, Curve::P256);

#[cfg(test)]
mod tests {
    use super::*;

    const MULTIKEY: &str = "zDnaerDaTF5BXEavCrfRZEk316dpbLsfPDZ3WJ5hRTPFU2169";

    #[test]
    fn public_jwk_from_compressed() {
        let bytes = did_key_encoding::decode_multikey(MULTIKEY).unwrap();
        assert_eq!(bytes.len(), 33);

        let jwk = public_jwk(&bytes).unwrap();
        let Params::EC(params) = &jwk.params else {
            panic!("Expected EC params");
        };
        assert_eq!(params.curve, "P-256");
        assert!(params.d.is_none());

        let x = BASE64_URL_SAFE_NO_PAD.decode(&params.x).unwrap();
        let y = BASE64_URL_SAFE_NO_PAD
            .decode(params.y.as_ref().unwrap())
            .unwrap();
        assert_eq!(compress(&x, &y).unwrap(), bytes);
    }

    #[test]
    fn generate_is_deterministic_for_secret() {
        let first = generate(None).unwrap();
        let second = generate(Some(&first.private_bytes)).unwrap();

        assert_eq!(first.public_bytes, second.public_bytes);
        assert_eq!(first.jwk, second.jwk);
        assert_eq!(second.public_bytes.len(), 33);
        assert_eq!(public_jwk(&second.public_bytes).unwrap(), second.jwk.to_public());
    }
}
