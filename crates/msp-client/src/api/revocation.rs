//! Certificate revocation.

use crate::Msp;
use msp_core::{ca, Result, RevocationRequest, RevocationResponse, RevokedCert};
use tracing::{debug, instrument};

impl Msp {
    /// Revoke certificates by enrollment ID or serial/AKI
    ///
    /// A request matching no certificates is not an error; the response
    /// simply lists nothing.
    #[instrument(
        skip(self, request),
        fields(org = %self.organization(), identity = %request.name, serial = %request.serial)
    )]
    pub async fn revoke(&self, request: &RevocationRequest) -> Result<RevocationResponse> {
        let ca = self.ca_client()?;
        let response = ca.revoke(&to_ca_request(request)).await?;
        debug!(revoked = response.revoked_certs.len(), "revocation complete");
        Ok(from_ca_response(response))
    }
}

fn to_ca_request(request: &RevocationRequest) -> ca::RevocationRequest {
    ca::RevocationRequest {
        name: request.name.clone(),
        serial: request.serial.clone(),
        aki: request.aki.clone(),
        reason: request.reason.clone(),
        ca_name: request.ca_name.clone(),
        gen_crl: request.gen_crl,
    }
}

fn from_ca_response(response: ca::RevocationResponse) -> RevocationResponse {
    RevocationResponse {
        revoked_certs: response
            .revoked_certs
            .into_iter()
            .map(|cert| RevokedCert {
                serial: cert.serial,
                aki: cert.aki,
            })
            .collect(),
        crl: response.crl,
    }
}
