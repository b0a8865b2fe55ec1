//! P-521 (secp521r1) key operations

crate::ec::sec1_curve!(p521, Curve::P521);
