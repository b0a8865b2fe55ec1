//! Handles the configuration for the did:key client.
//!
//! Call the [DIDKeyConfigBuilder] to create a new configuration.
//!
//! Example: defaults
//! ```rust
//! use did_key_resolver::config::DIDKeyConfigBuilder;
//! let config = DIDKeyConfigBuilder::default().build();
//! ```
//!
//! Example: JSON-LD documents and strict curve classification
//! ```rust
//! use did_key_resolver::{ContentType, config::DIDKeyConfigBuilder};
//! let config = DIDKeyConfigBuilder::default()
//!     .with_default_accept(ContentType::DidLdJson)
//!     .with_max_did_size_in_bytes(2_000)
//!     .with_strict_curve_classification(true)
//!     .build();
//! ```

use did_key_document::ContentType;

/// Configuration for the did:key client.
///
/// Use the [DIDKeyConfigBuilder] to create a new configuration.
#[derive(Clone, Debug)]
pub struct DIDKeyConfig {
    pub(crate) default_accept: ContentType,
    pub(crate) max_did_size_in_bytes: usize,
    pub(crate) strict_curve_classification: bool,
}

impl DIDKeyConfig {
    pub fn default_accept(&self) -> ContentType {
        self.default_accept
    }

    pub fn max_did_size_in_bytes(&self) -> usize {
        self.max_did_size_in_bytes
    }

    pub fn strict_curve_classification(&self) -> bool {
        self.strict_curve_classification
    }
}

/// did:key Config Builder to construct options required for the client.
///
/// - default_accept: representation used when no resolution options are given (default: `application/did+json`).
/// - max_did_size_in_bytes: DIDs longer than this are rejected (default: 1_000).
/// - strict_curve_classification: reject unknown JWK curves instead of treating them as web-crypto keys (default: false).
pub struct DIDKeyConfigBuilder {
    default_accept: ContentType,
    max_did_size_in_bytes: usize,
    strict_curve_classification: bool,
}

impl Default for DIDKeyConfigBuilder {
    fn default() -> Self {
        Self {
            default_accept: ContentType::DidJson,
            max_did_size_in_bytes: 1_000,
            strict_curve_classification: false,
        }
    }
}

impl DIDKeyConfigBuilder {
    /// Set the document representation used when a call passes no options
    /// Default: `application/did+json`
    pub fn with_default_accept(mut self, accept: ContentType) -> Self {
        self.default_accept = accept;
        self
    }

    /// Set maximum size in bytes of did to be resolved
    /// Default: 1_000 bytes
    pub fn with_max_did_size_in_bytes(mut self, max_did_size_in_bytes: usize) -> Self {
        self.max_did_size_in_bytes = max_did_size_in_bytes;
        self
    }

    /// Reject unknown `(kty, crv)` pairs during conversion
    /// Default: false
    pub fn with_strict_curve_classification(mut self, strict: bool) -> Self {
        self.strict_curve_classification = strict;
        self
    }

    /// Build the [DIDKeyConfig].
    pub fn build(self) -> DIDKeyConfig {
        DIDKeyConfig {
            default_accept: self.default_accept,
            max_did_size_in_bytes: self.max_did_size_in_bytes,
            strict_curve_classification: self.strict_curve_classification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DIDKeyConfigBuilder::default().build();
        assert_eq!(config.default_accept(), ContentType::DidJson);
        assert_eq!(config.max_did_size_in_bytes(), 1_000);
        assert!(!config.strict_curve_classification());
    }

    #[test]
    fn overrides() {
        let config = DIDKeyConfigBuilder::default()
            .with_default_accept(ContentType::DidLdJson)
            .with_max_did_size_in_bytes(64)
            .with_strict_curve_classification(true)
            .build();
        assert_eq!(config.default_accept(), ContentType::DidLdJson);
        assert_eq!(config.max_did_size_in_bytes(), 64);
        assert!(config.strict_curve_classification());
    }
}
