use async_trait::async_trait;
use msp_core::{CryptoSuite, IdentityManager, ProviderError, ProviderResult, User, UserStore};
use std::sync::Arc;
use tracing::debug;

/// Identity manager for one organization, reading from a shared user store
pub struct MemoryIdentityManager {
    msp_id: String,
    store: Arc<dyn UserStore>,
    crypto: Arc<dyn CryptoSuite>,
}

impl MemoryIdentityManager {
    /// Create a manager for `msp_id`
    #[must_use]
    pub fn new(
        msp_id: impl Into<String>,
        store: Arc<dyn UserStore>,
        crypto: Arc<dyn CryptoSuite>,
    ) -> Self {
        Self {
            msp_id: msp_id.into(),
            store,
            crypto,
        }
    }
}

#[async_trait]
impl IdentityManager for MemoryIdentityManager {
    fn msp_id(&self) -> &str {
        &self.msp_id
    }

    async fn get_user(&self, name: &str) -> ProviderResult<User> {
        let record = self.store.load(name).await?;
        if record.msp_id != self.msp_id {
            return Err(ProviderError::Identity(format!(
                "user '{name}' belongs to {}, not {}",
                record.msp_id, self.msp_id
            )));
        }

        let private_key = self.crypto.get_key(&record.ski).await?;
        debug!(user = %name, msp_id = %self.msp_id, "resolved user");

        Ok(User {
            id: record.id,
            msp_id: record.msp_id,
            private_key,
            enrollment_certificate: record.enrollment_certificate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryCryptoSuite, MemoryUserStore};
    use msp_core::{PrivateKeyHandle, UserRecord};

    async fn manager_with(
        record: Option<UserRecord>,
        key: Option<PrivateKeyHandle>,
    ) -> MemoryIdentityManager {
        let store = Arc::new(MemoryUserStore::new());
        let crypto = Arc::new(MemoryCryptoSuite::new());
        if let Some(record) = record {
            store.store(record).await.unwrap();
        }
        if let Some(key) = key {
            crypto.import_key(key).await;
        }
        MemoryIdentityManager::new("Org1MSP", store, crypto)
    }

    fn record(msp_id: &str) -> UserRecord {
        UserRecord {
            id: "alice".into(),
            msp_id: msp_id.into(),
            enrollment_certificate: b"cert".to_vec(),
            ski: vec![1, 2],
        }
    }

    #[tokio::test]
    async fn test_resolves_user_with_key() {
        let key = PrivateKeyHandle::new(vec![1, 2], "ECDSA-P256");
        let manager = manager_with(Some(record("Org1MSP")), Some(key.clone())).await;

        let user = manager.get_user("alice").await.unwrap();
        assert_eq!(user.id(), "alice");
        assert_eq!(user.msp_id(), "Org1MSP");
        assert_eq!(user.private_key(), &key);
        assert_eq!(user.enrollment_certificate(), b"cert");
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let manager = manager_with(None, None).await;
        assert_eq!(
            manager.get_user("bob").await.unwrap_err(),
            ProviderError::UserNotFound
        );
    }

    #[tokio::test]
    async fn test_foreign_msp_rejected() {
        let key = PrivateKeyHandle::new(vec![1, 2], "ECDSA-P256");
        let manager = manager_with(Some(record("Org2MSP")), Some(key)).await;
        assert!(matches!(
            manager.get_user("alice").await,
            Err(ProviderError::Identity(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let manager = manager_with(Some(record("Org1MSP")), None).await;
        assert!(matches!(
            manager.get_user("alice").await,
            Err(ProviderError::Crypto(_))
        ));
    }
}
