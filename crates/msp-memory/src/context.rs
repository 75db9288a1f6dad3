use crate::{MemoryCryptoSuite, MemoryIdentityManager, MemoryUserStore};
use msp_core::ca::CaClientFactory;
use msp_core::{
    ClientContext, CryptoSuite, IdentityManager, ProviderResult, SdkConfig, UserStore,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Session context assembled up front from fixed parts
pub struct StaticContext {
    config: Arc<SdkConfig>,
    identity_managers: HashMap<String, Arc<dyn IdentityManager>>,
    user_store: Arc<dyn UserStore>,
    crypto_suite: Arc<dyn CryptoSuite>,
    ca_factory: Arc<dyn CaClientFactory>,
}

impl StaticContext {
    /// Create a builder
    #[must_use]
    pub fn builder(
        config: SdkConfig,
        ca_factory: Arc<dyn CaClientFactory>,
    ) -> StaticContextBuilder {
        StaticContextBuilder::new(config, ca_factory)
    }

    /// Context provider handing out this context
    pub fn provider(
        self: &Arc<Self>,
    ) -> impl FnOnce() -> ProviderResult<Arc<dyn ClientContext>> + Send + 'static {
        let ctx = Arc::clone(self);
        move || Ok(ctx as Arc<dyn ClientContext>)
    }

    /// Organizations with a registered identity manager
    #[must_use]
    pub fn organizations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.identity_managers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl ClientContext for StaticContext {
    fn config(&self) -> Arc<SdkConfig> {
        Arc::clone(&self.config)
    }

    fn identity_manager(&self, organization: &str) -> Option<Arc<dyn IdentityManager>> {
        self.identity_managers.get(organization).cloned()
    }

    fn user_store(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.user_store)
    }

    fn crypto_suite(&self) -> Arc<dyn CryptoSuite> {
        Arc::clone(&self.crypto_suite)
    }

    fn ca_client_factory(&self) -> Arc<dyn CaClientFactory> {
        Arc::clone(&self.ca_factory)
    }
}

/// Builder for a [`StaticContext`]
///
/// The user store and crypto suite default to empty in-memory instances.
pub struct StaticContextBuilder {
    config: SdkConfig,
    ca_factory: Arc<dyn CaClientFactory>,
    identity_managers: HashMap<String, Arc<dyn IdentityManager>>,
    user_store: Arc<dyn UserStore>,
    crypto_suite: Arc<dyn CryptoSuite>,
    memory_identities: bool,
}

impl StaticContextBuilder {
    fn new(config: SdkConfig, ca_factory: Arc<dyn CaClientFactory>) -> Self {
        Self {
            config,
            ca_factory,
            identity_managers: HashMap::new(),
            user_store: Arc::new(MemoryUserStore::new()),
            crypto_suite: Arc::new(MemoryCryptoSuite::new()),
            memory_identities: false,
        }
    }

    /// Use this user store
    #[must_use]
    pub fn user_store(mut self, store: Arc<dyn UserStore>) -> Self {
        self.user_store = store;
        self
    }

    /// Use this crypto suite
    #[must_use]
    pub fn crypto_suite(mut self, suite: Arc<dyn CryptoSuite>) -> Self {
        self.crypto_suite = suite;
        self
    }

    /// Register an identity manager for an organization
    #[must_use]
    pub fn identity_manager(
        mut self,
        organization: impl Into<String>,
        manager: Arc<dyn IdentityManager>,
    ) -> Self {
        self.identity_managers.insert(organization.into(), manager);
        self
    }

    /// Give every configured organization without an explicit manager a
    /// [`MemoryIdentityManager`] over the shared store and crypto suite
    #[must_use]
    pub const fn with_memory_identities(mut self) -> Self {
        self.memory_identities = true;
        self
    }

    /// Build the context
    #[must_use]
    pub fn build(mut self) -> Arc<StaticContext> {
        if self.memory_identities {
            for (name, org) in &self.config.organizations {
                self.identity_managers.entry(name.clone()).or_insert_with(|| {
                    Arc::new(MemoryIdentityManager::new(
                        org.msp_id.clone(),
                        Arc::clone(&self.user_store),
                        Arc::clone(&self.crypto_suite),
                    ))
                });
            }
        }

        Arc::new(StaticContext {
            config: Arc::new(self.config),
            identity_managers: self.identity_managers,
            user_store: self.user_store,
            crypto_suite: self.crypto_suite,
            ca_factory: self.ca_factory,
        })
    }
}
