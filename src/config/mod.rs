#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;

/// Effective settings after layering command-line overrides on a config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogueSettings {
    pub lookup_endpoint: Option<String>,
    pub api_token: Option<String>,
    pub timeout: Option<Duration>,
    pub exclusions_path: Option<String>,
    pub exclusion_cache_ttl: Option<Duration>,
}

impl CatalogueSettings {
    pub fn from_provider(provider: &impl ConfigProvider) -> Self {
        Self {
            lookup_endpoint: provider.lookup_endpoint().map(str::to_string),
            api_token: provider.api_token().map(str::to_string),
            timeout: Some(provider.request_timeout()),
            exclusions_path: provider.exclusions_path().map(str::to_string),
            exclusion_cache_ttl: provider.exclusion_cache_ttl(),
        }
    }
}

impl ConfigProvider for CatalogueSettings {
    fn lookup_endpoint(&self) -> Option<&str> {
        self.lookup_endpoint.as_deref()
    }

    fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    fn request_timeout(&self) -> Duration {
        self.timeout.unwrap_or(crate::adapters::http::DEFAULT_TIMEOUT)
    }

    fn exclusions_path(&self) -> Option<&str> {
        self.exclusions_path.as_deref()
    }

    fn exclusion_cache_ttl(&self) -> Option<Duration> {
        self.exclusion_cache_ttl
    }
}

/// The endpoint is left to `app::build_parts_service`, so commands that never
/// reach the lookup service work without one.
impl Validate for CatalogueSettings {
    fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            validation::validate_positive_number("timeout_seconds", timeout.as_secs(), 1)?;
        }
        if let Some(path) = &self.exclusions_path {
            validation::validate_path("exclusions_path", path)?;
        }
        Ok(())
    }
}
