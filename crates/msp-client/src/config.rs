//! Construction options.

/// Options applied while building an [`Msp`](crate::Msp)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MspOptions {
    /// Organization override; the client configuration's organization is used when unset
    pub organization: Option<String>,
}

impl MspOptions {
    /// Create empty options
    #[must_use]
    pub const fn new() -> Self {
        Self { organization: None }
    }

    /// Set the organization override
    #[must_use]
    pub fn organization(mut self, name: impl Into<String>) -> Self {
        self.organization = Some(name.into());
        self
    }

    /// Organization override in effect, if any
    ///
    /// A blank name counts as unset.
    #[must_use]
    pub fn organization_override(&self) -> Option<&str> {
        self.organization
            .as_deref()
            .filter(|org| !org.trim().is_empty())
    }
}
