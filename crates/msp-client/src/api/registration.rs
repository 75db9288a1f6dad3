//! Identity registration.

use crate::Msp;
use msp_core::{ca, Attribute, MspError, RegistrationRequest, Result};
use tracing::{debug, instrument};

impl Msp {
    /// Register an identity with the CA, returning its enrollment secret
    #[instrument(skip(self, request), fields(org = %self.organization(), identity = %request.name))]
    pub async fn register(&self, request: &RegistrationRequest) -> Result<String> {
        if request.name.trim().is_empty() {
            return Err(MspError::InvalidRequest(
                "registration name is required".to_string(),
            ));
        }

        let ca = self.ca_client()?;
        let secret = ca.register(&to_ca_request(request)).await?;
        debug!(attributes = request.attributes.len(), "registered");
        Ok(secret)
    }
}

fn to_ca_request(request: &RegistrationRequest) -> ca::RegistrationRequest {
    ca::RegistrationRequest {
        name: request.name.clone(),
        identity_type: request.kind.clone(),
        max_enrollments: request.max_enrollments,
        affiliation: request.affiliation.clone(),
        attributes: request.attributes.iter().map(to_ca_attribute).collect(),
        ca_name: request.ca_name.clone(),
        secret: request.secret.clone(),
    }
}

fn to_ca_attribute(attribute: &Attribute) -> ca::Attribute {
    ca::Attribute {
        name: attribute.name.clone(),
        key: attribute.key,
        value: attribute.value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_translated() {
        let request = RegistrationRequest::new("alice", "client")
            .max_enrollments(-1)
            .affiliation("org1.department1")
            .ca_name("ca.org1")
            .secret("s3cr3t");

        let translated = to_ca_request(&request);
        assert_eq!(translated.name, "alice");
        assert_eq!(translated.identity_type, "client");
        assert_eq!(translated.max_enrollments, -1);
        assert_eq!(translated.affiliation, "org1.department1");
        assert_eq!(translated.ca_name, "ca.org1");
        assert_eq!(translated.secret, "s3cr3t");
        assert!(translated.attributes.is_empty());
    }

    #[test]
    fn test_attributes_keep_order_and_fields() {
        let mut request = RegistrationRequest::new("alice", "client");
        for i in 0..5 {
            let attribute = Attribute::new(format!("attr{i}"), format!("v{i}")).with_key(i % 2 == 0);
            request = request.attribute(attribute);
        }

        let translated = to_ca_request(&request);
        assert_eq!(translated.attributes.len(), request.attributes.len());
        for (ours, theirs) in request.attributes.iter().zip(&translated.attributes) {
            assert_eq!(ours.name, theirs.name);
            assert_eq!(ours.key, theirs.key);
            assert_eq!(ours.value, theirs.value);
        }
    }
}
