use serde::{Deserialize, Serialize};

/// Attribute attached to a registered identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name
    pub name: String,

    /// Whether the attribute is embedded in the enrollment certificate by default
    #[serde(default)]
    pub key: bool,

    /// Attribute value
    pub value: String,
}

impl Attribute {
    /// Create an attribute that is not part of the enrollment key material
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: false,
            value: value.into(),
        }
    }

    /// Mark the attribute as part of the enrollment key material
    #[must_use]
    pub const fn with_key(mut self, key: bool) -> Self {
        self.key = key;
        self
    }
}

/// Request to register a new identity with the CA
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Unique name of the identity
    pub name: String,

    /// Identity type (e.g. "client", "peer")
    #[serde(default, rename = "type")]
    pub kind: String,

    /// Number of times the secret can be used to enroll; 0 uses the CA default, -1 is unlimited
    #[serde(default)]
    pub max_enrollments: i32,

    /// Affiliation path (e.g. "org1.department1")
    #[serde(default)]
    pub affiliation: String,

    /// Attributes to associate with the identity, in order
    #[serde(default)]
    pub attributes: Vec<Attribute>,

    /// Target CA name; empty selects the server's default CA
    #[serde(default)]
    pub ca_name: String,

    /// Enrollment secret; the CA generates one when empty
    #[serde(default)]
    pub secret: String,
}

impl RegistrationRequest {
    /// Create a request for the given identity name and type
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set the maximum enrollment count
    #[must_use]
    pub const fn max_enrollments(mut self, max: i32) -> Self {
        self.max_enrollments = max;
        self
    }

    /// Set the affiliation
    #[must_use]
    pub fn affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    /// Append an attribute
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set the target CA name
    #[must_use]
    pub fn ca_name(mut self, ca_name: impl Into<String>) -> Self {
        self.ca_name = ca_name.into();
        self
    }

    /// Set the enrollment secret
    #[must_use]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_attribute_order() {
        let request = RegistrationRequest::new("alice", "client")
            .max_enrollments(1)
            .attribute(Attribute::new("hf.Revoker", "true"))
            .attribute(Attribute::new("role", "auditor").with_key(true));

        assert_eq!(request.kind, "client");
        assert_eq!(request.max_enrollments, 1);
        assert_eq!(request.attributes[0].name, "hf.Revoker");
        assert_eq!(request.attributes[1].name, "role");
        assert!(request.attributes[1].key);
    }

    #[test]
    fn test_deserialize_minimal() {
        let request: RegistrationRequest =
            serde_json::from_str(r#"{"name": "bob", "type": "peer"}"#).unwrap();
        assert_eq!(request.name, "bob");
        assert_eq!(request.kind, "peer");
        assert!(request.attributes.is_empty());
        assert!(request.secret.is_empty());
    }
}
