//! Resolution and generation envelopes

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Document, DocumentError, KeyPair};

/// The two document representations a did:key resolution can produce
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    /// JSON document; every verification method is a `JsonWebKey2020`
    #[default]
    #[serde(rename = "application/did+json")]
    DidJson,

    /// JSON-LD document using the Linked-Data key suites where the curve has one
    #[serde(rename = "application/did+ld+json")]
    DidLdJson,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::DidJson => "application/did+json",
            ContentType::DidLdJson => "application/did+ld+json",
        }
    }
}

impl FromStr for ContentType {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application/did+json" => Ok(ContentType::DidJson),
            "application/did+ld+json" => Ok(ContentType::DidLdJson),
            _ => Err(DocumentError::UnsupportedContentType(s.to_string())),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for resolution and generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionOptions {
    pub accept: ContentType,
}

impl ResolutionOptions {
    pub fn new(accept: ContentType) -> Self {
        ResolutionOptions { accept }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionMetadata {
    pub content_type: ContentType,
}

/// Result of resolving a DID
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidResolution {
    pub did_resolution_metadata: ResolutionMetadata,
    pub did_document: Document,
    #[serde(default)]
    pub did_document_metadata: Map<String, Value>,
}

impl DidResolution {
    pub fn new(did_document: Document, content_type: ContentType) -> Self {
        DidResolution {
            did_resolution_metadata: ResolutionMetadata { content_type },
            did_document,
            did_document_metadata: Map::new(),
        }
    }
}

/// Result of generating a DID: the document plus one key pair per verification method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidGeneration {
    pub did_document: Document,
    pub keys: Vec<KeyPair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_strings() {
        assert_eq!(
            "application/did+ld+json".parse::<ContentType>().unwrap(),
            ContentType::DidLdJson
        );
        assert_eq!(ContentType::default().to_string(), "application/did+json");
        assert!(matches!(
            "application/json".parse::<ContentType>(),
            Err(DocumentError::UnsupportedContentType(_))
        ));
    }

    #[test]
    fn options_serialize_as_accept() {
        let options = ResolutionOptions::new(ContentType::DidLdJson);
        assert_eq!(
            serde_json::to_string(&options).unwrap(),
            r#"{"accept":"application/did+ld+json"}"#
        );
    }
}
