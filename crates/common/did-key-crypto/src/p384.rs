//! P-384 (secp384r1) key operations

crate::ec::sec1_curve!(p384, Curve::P384);
