//! Session-scoped collaborator contracts.

use crate::ca::CaClientFactory;
use crate::config::{ClientConfig, SdkConfig};
use crate::error::ProviderResult;
use crate::types::{PrivateKeyHandle, User, UserRecord};
use async_trait::async_trait;
use std::sync::Arc;

/// Looks up enrolled users for one organization
#[async_trait]
pub trait IdentityManager: Send + Sync {
    /// MSP id this manager serves
    fn msp_id(&self) -> &str;

    /// Fetch a user; fails with [`ProviderError::UserNotFound`](crate::ProviderError::UserNotFound) when absent
    async fn get_user(&self, name: &str) -> ProviderResult<User>;
}

/// Credential persistence
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load a user record; fails with `UserNotFound` when absent
    async fn load(&self, id: &str) -> ProviderResult<UserRecord>;

    /// Insert or replace a user record
    async fn store(&self, record: UserRecord) -> ProviderResult<()>;

    /// Remove a user record
    async fn delete(&self, id: &str) -> ProviderResult<()>;
}

/// Key registry of the cryptographic provider
#[async_trait]
pub trait CryptoSuite: Send + Sync {
    /// Resolve a key handle by subject key identifier
    async fn get_key(&self, ski: &[u8]) -> ProviderResult<PrivateKeyHandle>;
}

/// Session context handed to the facade by its provider
pub trait ClientContext: Send + Sync {
    /// SDK-wide configuration
    fn config(&self) -> Arc<SdkConfig>;

    /// Client section of the configuration
    fn client_config(&self) -> ProviderResult<ClientConfig> {
        self.config().client().cloned()
    }

    /// Identity manager registered for an organization
    fn identity_manager(&self, organization: &str) -> Option<Arc<dyn IdentityManager>>;

    /// Credential store
    fn user_store(&self) -> Arc<dyn UserStore>;

    /// Cryptographic provider
    fn crypto_suite(&self) -> Arc<dyn CryptoSuite>;

    /// Factory used to build CA clients
    fn ca_client_factory(&self) -> Arc<dyn CaClientFactory>;
}
