//! User and signing identity lookups.

use crate::Msp;
use msp_core::{MspError, Result, SigningIdentity, User};
use tracing::instrument;

impl Msp {
    /// Look up an enrolled user
    ///
    /// Returns [`MspError::UserNotFound`] when the identity manager does
    /// not know the user.
    #[instrument(skip(self), fields(org = %self.organization()))]
    pub async fn user(&self, name: &str) -> Result<User> {
        let identity_manager = self.identity_manager()?;
        identity_manager.get_user(name).await.map_err(MspError::from)
    }

    /// Signing identity (MSP id, key handle, certificate) for an enrolled user
    #[instrument(skip(self), fields(org = %self.organization()))]
    pub async fn signing_identity(&self, name: &str) -> Result<SigningIdentity> {
        let user = self.user(name).await?;
        Ok(user.signing_identity())
    }
}
