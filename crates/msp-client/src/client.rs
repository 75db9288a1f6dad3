//! Facade construction and collaborator resolution.

use crate::api::EnrollBuilder;
use crate::config::MspOptions;
use msp_core::ca::{CaClient, CaDependencies};
use msp_core::{ClientContext, IdentityManager, MspError, ProviderResult, Result};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Identity facade bound to one organization
#[derive(Clone)]
pub struct Msp {
    inner: Arc<MspInner>,
}

struct MspInner {
    organization: String,
    ctx: Arc<dyn ClientContext>,
}

impl Msp {
    /// Create a facade for the configured default organization
    pub fn new<P>(provider: P) -> Result<Self>
    where
        P: FnOnce() -> ProviderResult<Arc<dyn ClientContext>>,
    {
        MspBuilder::new(provider).build()
    }

    /// Create a builder for custom options
    #[must_use]
    pub fn builder<P>(provider: P) -> MspBuilder<P>
    where
        P: FnOnce() -> ProviderResult<Arc<dyn ClientContext>>,
    {
        MspBuilder::new(provider)
    }

    /// Organization this facade acts for
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.inner.organization
    }

    /// Start an enrollment for a registered identity
    #[must_use]
    pub fn enroll(&self, enrollment_id: impl Into<String>) -> EnrollBuilder<'_> {
        EnrollBuilder::new(self, enrollment_id.into())
    }

    /// Identity manager registered for this organization
    pub(crate) fn identity_manager(&self) -> Result<Arc<dyn IdentityManager>> {
        self.inner
            .ctx
            .identity_manager(&self.inner.organization)
            .ok_or_else(|| {
                warn!(org = %self.inner.organization, "no identity manager for organization");
                MspError::CaClientUnavailable {
                    organization: self.inner.organization.clone(),
                }
            })
    }

    /// Build a CA client for this organization
    pub(crate) fn ca_client(&self) -> Result<Arc<dyn CaClient>> {
        let identity_manager = self.identity_manager()?;
        let ctx = &self.inner.ctx;
        let deps = CaDependencies {
            identity_manager,
            user_store: ctx.user_store(),
            crypto_suite: ctx.crypto_suite(),
            config: ctx.config(),
        };

        debug!(org = %self.inner.organization, "creating CA client");
        ctx.ca_client_factory()
            .create_ca_client(&self.inner.organization, deps)
            .map_err(MspError::ca_creation)
    }
}

impl fmt::Debug for Msp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Msp")
            .field("organization", &self.inner.organization)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring an [`Msp`]
pub struct MspBuilder<P> {
    provider: P,
    options: MspOptions,
}

impl<P> MspBuilder<P>
where
    P: FnOnce() -> ProviderResult<Arc<dyn ClientContext>>,
{
    /// Create a builder around a session context provider
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            options: MspOptions::default(),
        }
    }

    /// Act for `name` instead of the configured default organization
    #[must_use]
    pub fn organization(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.organization(name);
        self
    }

    /// Replace all options at once
    #[must_use]
    pub fn options(mut self, options: MspOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the facade
    ///
    /// The provider is called first. The client configuration is consulted
    /// only when no organization was given; a blank override counts as none.
    pub fn build(self) -> Result<Msp> {
        let ctx = (self.provider)().map_err(MspError::construction)?;

        let organization = match self.options.organization_override() {
            Some(org) => org.to_string(),
            None => {
                ctx.client_config()
                    .map_err(MspError::construction)?
                    .organization
            }
        };

        debug!(org = %organization, "MSP facade created");
        Ok(Msp {
            inner: Arc::new(MspInner { organization, ctx }),
        })
    }
}
