use crate::core::ConfigProvider;
use crate::utils::error::{CatalogueError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Only needed for compatible-parts lookups.
    pub lookup: Option<LookupConfig>,
    pub exclusions: Option<ExclusionsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    pub endpoint: Option<String>,
    pub api_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExclusionsConfig {
    /// Defaults to `Exclusions.json` next to the executable.
    pub path: Option<String>,
    /// Opt-in reuse of the exclusion list. Unset means re-read on every check.
    pub cache_ttl_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogueError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogueError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogueError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Checks everything except the endpoint URL, which is only checked when
    /// the lookup service is built.
    pub fn validate_config(&self) -> Result<()> {
        if let Some(timeout) = self.lookup.as_ref().and_then(|l| l.timeout_seconds) {
            validation::validate_positive_number("lookup.timeout_seconds", timeout, 1)?;
        }

        if let Some(path) = self.exclusions.as_ref().and_then(|e| e.path.as_deref()) {
            validation::validate_path("exclusions.path", path)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn lookup_endpoint(&self) -> Option<&str> {
        self.lookup.as_ref().and_then(|l| l.endpoint.as_deref())
    }

    fn api_token(&self) -> Option<&str> {
        self.lookup.as_ref().and_then(|l| l.api_token.as_deref())
    }

    fn request_timeout(&self) -> Duration {
        self.lookup
            .as_ref()
            .and_then(|l| l.timeout_seconds)
            .map(Duration::from_secs)
            .unwrap_or(crate::adapters::http::DEFAULT_TIMEOUT)
    }

    fn exclusions_path(&self) -> Option<&str> {
        self.exclusions.as_ref().and_then(|e| e.path.as_deref())
    }

    fn exclusion_cache_ttl(&self) -> Option<Duration> {
        self.exclusions
            .as_ref()
            .and_then(|e| e.cache_ttl_seconds)
            .map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[lookup]
endpoint = "https://parts.example.com/api"
api_token = "secret"
timeout_seconds = 3

[exclusions]
path = "./data/Exclusions.json"
cache_ttl_seconds = 30
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.lookup_endpoint(), Some("https://parts.example.com/api"));
        assert_eq!(config.api_token(), Some("secret"));
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.exclusions_path(), Some("./data/Exclusions.json"));
        assert_eq!(config.exclusion_cache_ttl(), Some(Duration::from_secs(30)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[lookup]
endpoint = "http://localhost:8080"
"#,
        )
        .unwrap();

        assert_eq!(config.request_timeout(), crate::adapters::http::DEFAULT_TIMEOUT);
        assert_eq!(config.exclusions_path(), None);
        assert_eq!(config.exclusion_cache_ttl(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PART_CATALOGUE_TEST_TOKEN", "from-env");

        let config = TomlConfig::from_toml_str(
            r#"
[lookup]
endpoint = "https://parts.example.com"
api_token = "${PART_CATALOGUE_TEST_TOKEN}"
"#,
        )
        .unwrap();
        assert_eq!(config.api_token(), Some("from-env"));

        std::env::remove_var("PART_CATALOGUE_TEST_TOKEN");
    }

    #[test]
    fn test_config_validation() {
        let bad_path = TomlConfig::from_toml_str("[exclusions]\npath = \"\"\n").unwrap();
        assert!(bad_path.validate().is_err());

        let zero_timeout = TomlConfig::from_toml_str(
            r#"
[lookup]
endpoint = "https://parts.example.com"
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_exclusions_only_config() {
        let config = TomlConfig::from_toml_str("[exclusions]\npath = \"x.json\"\n").unwrap();

        assert!(config.lookup.is_none());
        assert_eq!(config.lookup_endpoint(), None);
        assert_eq!(config.exclusions_path(), Some("x.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unresolved_endpoint_placeholder_still_validates() {
        std::env::remove_var("PART_CATALOGUE_UNSET_ENDPOINT");

        let config = TomlConfig::from_toml_str(
            r#"
[lookup]
endpoint = "${PART_CATALOGUE_UNSET_ENDPOINT}"

[exclusions]
path = "./data/Exclusions.json"
"#,
        )
        .unwrap();

        assert_eq!(config.lookup_endpoint(), Some("${PART_CATALOGUE_UNSET_ENDPOINT}"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[lookup\nendpoint = 1");
        assert!(matches!(result, Err(CatalogueError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[lookup]\nendpoint = \"https://parts.example.com\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.lookup_endpoint(), Some("https://parts.example.com"));
    }
}
