use async_trait::async_trait;
use msp_core::{CryptoSuite, PrivateKeyHandle, ProviderError, ProviderResult};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Key registry indexed by subject key identifier
#[derive(Debug, Default)]
pub struct MemoryCryptoSuite {
    keys: RwLock<HashMap<Vec<u8>, PrivateKeyHandle>>,
}

impl MemoryCryptoSuite {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key handle under its SKI
    pub async fn import_key(&self, key: PrivateKeyHandle) {
        self.keys.write().await.insert(key.ski.clone(), key);
    }
}

#[async_trait]
impl CryptoSuite for MemoryCryptoSuite {
    async fn get_key(&self, ski: &[u8]) -> ProviderResult<PrivateKeyHandle> {
        self.keys
            .read()
            .await
            .get(ski)
            .cloned()
            .ok_or_else(|| {
                ProviderError::Crypto(format!("key not found for SKI {}", hex::encode(ski)))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_import_and_get() {
        let suite = MemoryCryptoSuite::new();
        let key = PrivateKeyHandle::new(vec![0xab, 0xcd], "ECDSA-P256");
        suite.import_key(key.clone()).await;

        assert_eq!(suite.get_key(&[0xab, 0xcd]).await.unwrap(), key);
    }

    #[tokio::test]
    async fn test_missing_key_names_ski() {
        let suite = MemoryCryptoSuite::new();
        let err = suite.get_key(&[0x01, 0xff]).await.unwrap_err();
        assert_eq!(err, ProviderError::Crypto("key not found for SKI 01ff".into()));
    }
}
