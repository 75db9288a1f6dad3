use serde::{Deserialize, Serialize};

/// Request to revoke one or more certificates
///
/// Targets are selected either by enrollment ID (all of that identity's
/// certificates) or by a serial/AKI pair (a single certificate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationRequest {
    /// Enrollment ID of the identity whose certificates are revoked
    #[serde(default)]
    pub name: String,

    /// Hex-encoded serial number of a single certificate
    #[serde(default)]
    pub serial: String,

    /// Hex-encoded authority key identifier of a single certificate
    #[serde(default)]
    pub aki: String,

    /// Revocation reason (e.g. "keycompromise", "superseded")
    #[serde(default)]
    pub reason: String,

    /// Target CA name; empty selects the server's default CA
    #[serde(default)]
    pub ca_name: String,

    /// Ask the CA to return a fresh CRL
    #[serde(default)]
    pub gen_crl: bool,
}

impl RevocationRequest {
    /// Revoke every certificate issued to an enrollment ID
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Revoke one certificate by serial and AKI
    #[must_use]
    pub fn by_serial(serial: impl Into<String>, aki: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            aki: aki.into(),
            ..Self::default()
        }
    }

    /// Set the reason
    #[must_use]
    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Set the target CA name
    #[must_use]
    pub fn ca_name(mut self, ca_name: impl Into<String>) -> Self {
        self.ca_name = ca_name.into();
        self
    }

    /// Request a regenerated CRL in the response
    #[must_use]
    pub const fn gen_crl(mut self, gen_crl: bool) -> Self {
        self.gen_crl = gen_crl;
        self
    }
}

/// Identifier of a revoked certificate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevokedCert {
    /// Serial number
    pub serial: String,

    /// Authority key identifier
    pub aki: String,
}

/// Result of a revocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationResponse {
    /// Certificates revoked by this request
    #[serde(default)]
    pub revoked_certs: Vec<RevokedCert>,

    /// CA-signed certificate revocation list (empty unless requested)
    #[serde(default)]
    pub crl: Vec<u8>,
}

impl RevocationResponse {
    /// Returns true if nothing was revoked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revoked_certs.is_empty()
    }
}
