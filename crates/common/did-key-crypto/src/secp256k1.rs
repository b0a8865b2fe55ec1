//! secp256k1 key operations

crate::ec::sec1_curve!(k256, Curve::Secp256k1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_from_secret() {
        let keypair = generate(Some(&[1u8; 32])).unwrap();

        if let Params::EC(params) = &keypair.jwk.params {
            assert_eq!(params.curve, "secp256k1");
            assert_eq!(params.x, "G4TFVnsSZECZXT7VqroFZdceGDRgSBn_nBf16dXdB48");
            assert_eq!(
                params.y.as_deref(),
                Some("cL6vj1iLVBUH_tamQsWrQt_fgSCn9jneUSLUemmo6NE")
            );
            assert_eq!(
                params.d.as_deref(),
                Some("AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE")
            );
        } else {
            panic!("Expected EC params");
        }
        assert_eq!(keypair.public_bytes.len(), 33);
    }

    #[test]
    fn compress_matches_generated_point() {
        let keypair = generate(None).unwrap();
        let Params::EC(params) = &keypair.jwk.params else {
            panic!("Expected EC params");
        };

        let x = BASE64_URL_SAFE_NO_PAD.decode(&params.x).unwrap();
        let y = BASE64_URL_SAFE_NO_PAD
            .decode(params.y.as_ref().unwrap())
            .unwrap();

        assert_eq!(compress(&x, &y).unwrap(), keypair.public_bytes);
    }

    #[test]
    fn public_jwk_from_multikey_bytes() {
        let bytes =
            did_key_encoding::decode_multikey("zQ3shT2ynSjzY5XoTxhWHvYVZ6GiLWhBVincVekcEpZDRCBHV")
                .unwrap();

        let jwk = public_jwk(&bytes).unwrap();
        assert!(jwk.private_key().is_none());
        assert_eq!(jwk.curve().unwrap(), Curve::Secp256k1);
    }

    #[test]
    fn invalid_secret_is_rejected() {
        assert!(matches!(
            generate(Some(&[0u8; 32])),
            Err(CryptoError::KeyError(_))
        ));
    }
}
