//! SDK configuration consumed through the session context.

use crate::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level SDK configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Settings for the local client (default organization, logging).
    #[serde(default)]
    pub client: Option<ClientConfig>,

    /// Organizations known to this client, keyed by name.
    #[serde(default)]
    pub organizations: BTreeMap<String, OrganizationConfig>,
}

/// Client section of the SDK configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Organization the client acts for when none is given explicitly.
    pub organization: String,

    /// Log level hint for embedders that install a subscriber.
    #[serde(default = "default_logging_level")]
    pub logging_level: String,
}

/// Per-organization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationConfig {
    /// MSP id of the organization.
    pub msp_id: String,

    /// Names of the CAs serving this organization.
    #[serde(default)]
    pub certificate_authorities: Vec<String>,

    /// Directory holding the organization's crypto material.
    #[serde(default)]
    pub crypto_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Client settings for the given organization.
    #[must_use]
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            logging_level: default_logging_level(),
        }
    }
}

impl SdkConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ProviderResult<Self> {
        toml::from_str(content).map_err(|e| ProviderError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ProviderResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProviderError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Client section; fails only if the section is absent.
    ///
    /// An empty organization is returned as-is.
    pub fn client(&self) -> ProviderResult<&ClientConfig> {
        self.client
            .as_ref()
            .ok_or_else(|| ProviderError::Config("client section is missing".to_string()))
    }

    /// Settings for a named organization.
    #[must_use]
    pub fn organization(&self, name: &str) -> Option<&OrganizationConfig> {
        self.organizations.get(name)
    }
}

fn default_logging_level() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        [client]
        organization = "org1"

        [organizations.org1]
        msp_id = "Org1MSP"
        certificate_authorities = ["ca.org1.example.com"]

        [organizations.org2]
        msp_id = "Org2MSP"
    "#;

    #[test]
    fn test_parse_sample() {
        let config = SdkConfig::from_toml_str(SAMPLE).unwrap();
        let client = config.client().unwrap();
        assert_eq!(client.organization, "org1");
        assert_eq!(client.logging_level, "info");
        assert_eq!(config.organization("org1").unwrap().msp_id, "Org1MSP");
        assert!(config.organization("org2").unwrap().certificate_authorities.is_empty());
        assert!(config.organization("org3").is_none());
    }

    #[test]
    fn test_missing_client_section() {
        let config = SdkConfig::from_toml_str("[organizations.org1]\nmsp_id = \"Org1MSP\"").unwrap();
        assert!(matches!(config.client(), Err(ProviderError::Config(_))));
    }

    #[test]
    fn test_empty_client_organization_is_returned() {
        let config = SdkConfig::from_toml_str("[client]\norganization = \"\"").unwrap();
        assert_eq!(config.client().unwrap().organization, "");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            SdkConfig::from_toml_str("client = ["),
            Err(ProviderError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "{SAMPLE}").unwrap();

        let config = SdkConfig::load(tmpfile.path()).unwrap();
        assert_eq!(config.organizations.len(), 2);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let path = Path::new("/tmp/nonexistent_msp_config_test.toml");
        assert!(matches!(SdkConfig::load(path), Err(ProviderError::Config(_))));
    }
}
