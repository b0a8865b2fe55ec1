//! Builder pattern for DID Documents

use url::Url;

use crate::{
    Document, DocumentError,
    verification_method::{VerificationMethod, VerificationRelationship},
};

/// Builder for constructing a [`Document`] using a fluent API.
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new builder with the given DID identifier.
    ///
    /// The `id` string is parsed as a URL; returns an error if parsing fails.
    pub fn new(id: &str) -> Result<Self, DocumentError> {
        Ok(Self::from_url(Url::parse(id)?))
    }

    /// Create a new builder from a pre-parsed [`Url`].
    pub fn from_url(id: Url) -> Self {
        Self {
            document: Document {
                context: Vec::new(),
                id,
                verification_method: Vec::new(),
                authentication: Vec::new(),
                assertion_method: Vec::new(),
                capability_invocation: Vec::new(),
                capability_delegation: Vec::new(),
                key_agreement: Vec::new(),
            },
        }
    }

    /// Append a context URL string to the `@context` array, deduplicating.
    pub fn context(mut self, ctx: &str) -> Self {
        if !self.document.context.iter().any(|c| c == ctx) {
            self.document.context.push(ctx.to_string());
        }
        self
    }

    /// Add a single verification method.
    pub fn verification_method(mut self, vm: VerificationMethod) -> Self {
        self.document.verification_method.push(vm);
        self
    }

    /// Add a URL reference to `authentication`.
    pub fn authentication_reference(mut self, url: &str) -> Result<Self, DocumentError> {
        self.document
            .authentication
            .push(VerificationRelationship::Reference(Url::parse(url)?));
        Ok(self)
    }

    /// Add a URL reference to `assertion_method`.
    pub fn assertion_method_reference(mut self, url: &str) -> Result<Self, DocumentError> {
        self.document
            .assertion_method
            .push(VerificationRelationship::Reference(Url::parse(url)?));
        Ok(self)
    }

    /// Add a URL reference to `capability_invocation`.
    pub fn capability_invocation_reference(mut self, url: &str) -> Result<Self, DocumentError> {
        self.document
            .capability_invocation
            .push(VerificationRelationship::Reference(Url::parse(url)?));
        Ok(self)
    }

    /// Add a URL reference to `capability_delegation`.
    pub fn capability_delegation_reference(mut self, url: &str) -> Result<Self, DocumentError> {
        self.document
            .capability_delegation
            .push(VerificationRelationship::Reference(Url::parse(url)?));
        Ok(self)
    }

    /// Add a URL reference to `key_agreement`.
    pub fn key_agreement_reference(mut self, url: &str) -> Result<Self, DocumentError> {
        self.document
            .key_agreement
            .push(VerificationRelationship::Reference(Url::parse(url)?));
        Ok(self)
    }

    /// Reference `signing` from every signing relationship and `agreement` from `keyAgreement`
    pub fn relationships(self, signing: &str, agreement: &str) -> Result<Self, DocumentError> {
        self.authentication_reference(signing)?
            .assertion_method_reference(signing)?
            .capability_invocation_reference(signing)?
            .capability_delegation_reference(signing)?
            .key_agreement_reference(agreement)
    }

    /// Consume the builder and return the constructed [`Document`].
    pub fn build(self) -> Document {
        self.document
    }
}
