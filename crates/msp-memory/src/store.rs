use async_trait::async_trait;
use msp_core::{ProviderError, ProviderResult, UserRecord, UserStore};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// User store backed by a map
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Returns true if no user is stored
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn load(&self, id: &str) -> ProviderResult<UserRecord> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(ProviderError::UserNotFound)
    }

    async fn store(&self, record: UserRecord) -> ProviderResult<()> {
        debug!(user = %record.id, "storing user record");
        self.users.write().await.insert(record.id.clone(), record);
        Ok(())
    }

    async fn delete(&self, id: &str) -> ProviderResult<()> {
        self.users.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn record(id: &str) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            msp_id: "Org1MSP".into(),
            enrollment_certificate: b"cert".to_vec(),
            ski: vec![7; 4],
        }
    }

    #[tokio::test]
    async fn test_store_and_load() {
        let store = MemoryUserStore::new();
        assert_ok!(store.store(record("alice")).await);

        let loaded = assert_ok!(store.load("alice").await);
        assert_eq!(loaded, record("alice"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_user_is_sentinel() {
        let store = MemoryUserStore::new();
        let err = assert_err!(store.load("bob").await);
        assert_eq!(err, ProviderError::UserNotFound);
    }

    #[tokio::test]
    async fn test_store_replaces() {
        let store = MemoryUserStore::new();
        store.store(record("alice")).await.unwrap();
        let mut updated = record("alice");
        updated.enrollment_certificate = b"renewed".to_vec();
        store.store(updated.clone()).await.unwrap();

        assert_eq!(store.load("alice").await.unwrap(), updated);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryUserStore::new();
        store.store(record("alice")).await.unwrap();
        assert_ok!(store.delete("alice").await);
        assert_ok!(store.delete("alice").await);
        assert!(store.is_empty().await);
    }
}
