//! Lookup helpers over a [`Document`]

use url::Url;

use crate::{
    Document,
    verification_method::{VerificationMethod, VerificationRelationship},
};

pub trait DocumentExt {
    /// Does this DID contain authentication verification_method with the given id?
    fn contains_authentication(&self, id: &str) -> bool;

    /// Does this DID contain a key agreement with the given id?
    fn contains_key_agreement(&self, id: &str) -> bool;

    /// Returns a DID Verification Method if found by ID
    fn get_verification_method(&self, id: &str) -> Option<&VerificationMethod>;
}

fn contains(relationships: &[VerificationRelationship], id: &str) -> bool {
    let Ok(id) = Url::parse(id) else {
        return false;
    };

    relationships.iter().any(|vm| vm.get_id() == id.as_str())
}

impl DocumentExt for Document {
    fn contains_authentication(&self, id: &str) -> bool {
        contains(&self.authentication, id)
    }

    fn contains_key_agreement(&self, id: &str) -> bool {
        contains(&self.key_agreement, id)
    }

    fn get_verification_method(&self, id: &str) -> Option<&VerificationMethod> {
        self.verification_method
            .iter()
            .find(|vm| vm.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentBuilder;

    #[test]
    fn lookups() {
        let did = "did:key:z6LShs9GGnqk85isEBzzshkuVWrVKsRp24GnDuHk8QWkARMW";
        let kid = format!("{did}#z6LShs9GGnqk85isEBzzshkuVWrVKsRp24GnDuHk8QWkARMW");

        let doc = DocumentBuilder::new(did)
            .unwrap()
            .key_agreement_reference(&kid)
            .unwrap()
            .build();

        assert!(doc.contains_key_agreement(&kid));
        assert!(!doc.contains_authentication(&kid));
        assert!(!doc.contains_key_agreement("not a url"));
        assert!(doc.get_verification_method(&kid).is_none());
    }
}
