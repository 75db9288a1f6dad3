use serde::{Deserialize, Serialize};

/// Opaque reference to a private key held by the crypto suite
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrivateKeyHandle {
    /// Subject key identifier
    pub ski: Vec<u8>,

    /// Algorithm label (e.g. "ECDSA-P256")
    pub algorithm: String,
}

impl PrivateKeyHandle {
    /// Create a handle for the given SKI and algorithm
    #[must_use]
    pub fn new(ski: impl Into<Vec<u8>>, algorithm: impl Into<String>) -> Self {
        Self {
            ski: ski.into(),
            algorithm: algorithm.into(),
        }
    }
}

/// Enrolled user as seen by an identity manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Enrollment ID
    pub id: String,

    /// MSP id of the organization the credential belongs to
    pub msp_id: String,

    /// Handle to the user's private key
    pub private_key: PrivateKeyHandle,

    /// PEM-encoded enrollment certificate
    pub enrollment_certificate: Vec<u8>,
}

impl User {
    /// Enrollment ID
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// MSP id
    #[must_use]
    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }

    /// Private key handle
    #[must_use]
    pub const fn private_key(&self) -> &PrivateKeyHandle {
        &self.private_key
    }

    /// Enrollment certificate bytes
    #[must_use]
    pub fn enrollment_certificate(&self) -> &[u8] {
        &self.enrollment_certificate
    }

    /// Project this user onto the fields needed to sign
    #[must_use]
    pub fn signing_identity(&self) -> SigningIdentity {
        SigningIdentity {
            msp_id: self.msp_id.clone(),
            private_key: self.private_key.clone(),
            enrollment_certificate: self.enrollment_certificate.clone(),
        }
    }
}

/// The (MSP id, private key, certificate) triple used to sign on behalf of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningIdentity {
    /// MSP id
    pub msp_id: String,

    /// Private key handle
    pub private_key: PrivateKeyHandle,

    /// PEM-encoded enrollment certificate
    pub enrollment_certificate: Vec<u8>,
}

impl From<&User> for SigningIdentity {
    fn from(user: &User) -> Self {
        user.signing_identity()
    }
}

/// User as persisted by a user store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Enrollment ID
    pub id: String,

    /// MSP id
    pub msp_id: String,

    /// PEM-encoded enrollment certificate
    pub enrollment_certificate: Vec<u8>,

    /// Subject key identifier of the user's private key
    pub ski: Vec<u8>,
}
