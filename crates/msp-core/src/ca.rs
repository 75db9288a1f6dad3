//! CA client contract and the request shapes it accepts.
//!
//! These mirror the public request types closely but belong to the
//! collaborator side; the facade translates between the two.

use crate::config::SdkConfig;
use crate::context::{CryptoSuite, IdentityManager, UserStore};
use crate::error::ProviderResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Attribute as understood by the CA client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Part of the enrollment key material
    pub key: bool,
    /// Attribute value
    pub value: String,
}

/// Registration request as understood by the CA client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationRequest {
    /// Enrollment ID of the identity being registered
    pub name: String,
    /// Identity type, e.g. `client` or `peer`
    pub identity_type: String,
    /// Number of enrollments allowed; the CA applies its own default for zero
    pub max_enrollments: i32,
    /// Affiliation the identity belongs to
    pub affiliation: String,
    /// Attributes in the order they were given
    pub attributes: Vec<Attribute>,
    /// Target CA; empty selects the server's default CA
    pub ca_name: String,
    /// Requested enrollment secret; empty lets the CA generate one
    pub secret: String,
}

/// Revocation request as understood by the CA client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevocationRequest {
    /// Enrollment ID whose certificates are revoked
    pub name: String,
    /// Serial number of a single certificate
    pub serial: String,
    /// Authority key identifier paired with `serial`
    pub aki: String,
    /// Revocation reason
    pub reason: String,
    /// Target CA; empty selects the server's default CA
    pub ca_name: String,
    /// Ask the CA to return an updated CRL
    pub gen_crl: bool,
}

/// Revoked certificate as reported by the CA client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokedCert {
    /// Serial number of the revoked certificate
    pub serial: String,
    /// Authority key identifier of the issuing CA
    pub aki: String,
}

/// Revocation result as reported by the CA client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevocationResponse {
    /// Certificates the CA revoked
    pub revoked_certs: Vec<RevokedCert>,
    /// Updated CRL, empty unless one was requested
    pub crl: Vec<u8>,
}

/// Client for a single organization's certificate authority
///
/// Implementations own key generation, CSR signing, transport, timeouts
/// and retries. Enrollment results are persisted through the user store
/// the client was built with.
#[async_trait]
pub trait CaClient: Send + Sync {
    /// Enroll a registered identity and store the issued credential
    async fn enroll(&self, enrollment_id: &str, secret: Option<&str>) -> ProviderResult<()>;

    /// Obtain a new certificate for an already enrolled identity
    async fn reenroll(&self, enrollment_id: &str) -> ProviderResult<()>;

    /// Register an identity, returning its enrollment secret
    async fn register(&self, request: &RegistrationRequest) -> ProviderResult<String>;

    /// Revoke certificates
    async fn revoke(&self, request: &RevocationRequest) -> ProviderResult<RevocationResponse>;
}

/// Everything a CA client needs from the session
#[derive(Clone)]
pub struct CaDependencies {
    /// Identity manager registered for the organization
    pub identity_manager: Arc<dyn IdentityManager>,
    /// Store that receives enrollment results
    pub user_store: Arc<dyn UserStore>,
    /// Crypto suite holding private keys
    pub crypto_suite: Arc<dyn CryptoSuite>,
    /// SDK configuration of the session
    pub config: Arc<SdkConfig>,
}

/// Builds CA clients bound to an organization
pub trait CaClientFactory: Send + Sync {
    /// Create a CA client for `organization`
    fn create_ca_client(
        &self,
        organization: &str,
        deps: CaDependencies,
    ) -> ProviderResult<Arc<dyn CaClient>>;
}
