//! Enrollment and re-enrollment.

use crate::Msp;
use msp_core::{MspError, Result};
use tracing::{debug, instrument};

/// Builder for enrolling a registered identity
///
/// A new key pair is generated by the CA client and the issued
/// certificate is stored alongside it; retrieve them afterwards with
/// [`Msp::signing_identity`].
pub struct EnrollBuilder<'a> {
    msp: &'a Msp,
    enrollment_id: String,
    secret: Option<String>,
}

impl<'a> EnrollBuilder<'a> {
    pub(crate) const fn new(msp: &'a Msp, enrollment_id: String) -> Self {
        Self {
            msp,
            enrollment_id,
            secret: None,
        }
    }

    /// Shared secret returned by registration
    #[must_use]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Enroll the identity
    #[instrument(
        skip(self),
        fields(org = %self.msp.organization(), enrollment_id = %self.enrollment_id)
    )]
    pub async fn send(self) -> Result<()> {
        require_enrollment_id(&self.enrollment_id)?;
        let ca = self.msp.ca_client()?;
        ca.enroll(&self.enrollment_id, self.secret.as_deref()).await?;
        debug!("enrolled");
        Ok(())
    }
}

impl Msp {
    /// Obtain a new certificate for an identity that is already enrolled
    #[instrument(skip(self), fields(org = %self.organization()))]
    pub async fn reenroll(&self, enrollment_id: &str) -> Result<()> {
        require_enrollment_id(enrollment_id)?;
        let ca = self.ca_client()?;
        ca.reenroll(enrollment_id).await?;
        debug!("reenrolled");
        Ok(())
    }
}

fn require_enrollment_id(enrollment_id: &str) -> Result<()> {
    if enrollment_id.trim().is_empty() {
        return Err(MspError::InvalidRequest(
            "enrollment ID is required".to_string(),
        ));
    }
    Ok(())
}
