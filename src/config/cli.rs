use crate::config::{CatalogueSettings, TomlConfig};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "part-catalogue")]
#[command(about = "Validate part numbers and look up compatible parts")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Base URL of the parts lookup service")]
    pub lookup_endpoint: Option<String>,

    #[arg(long, global = true, help = "Exclusion list JSON file")]
    pub exclusions: Option<String>,

    #[arg(long, global = true, help = "Lookup request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check the format of a part number
    Validate { part_number: String },
    /// Check whether a part number is on the exclusion list
    Excluded { part_number: String },
    /// List parts compatible with a part number
    Compatible { part_number: String },
}

impl Command {
    pub fn part_number(&self) -> &str {
        match self {
            Self::Validate { part_number }
            | Self::Excluded { part_number }
            | Self::Compatible { part_number } => part_number,
        }
    }
}

impl CliConfig {
    /// Loads the config file, if any, and applies command-line overrides.
    pub fn resolve(&self) -> Result<CatalogueSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                CatalogueSettings::from_provider(&TomlConfig::from_file(path)?)
            }
            None => CatalogueSettings::default(),
        };

        if let Some(endpoint) = &self.lookup_endpoint {
            settings.lookup_endpoint = Some(endpoint.clone());
        }
        if let Some(path) = &self.exclusions {
            settings.exclusions_path = Some(path.clone());
        }
        if let Some(secs) = self.timeout_seconds {
            settings.timeout = Some(Duration::from_secs(secs));
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_subcommand_and_flags() {
        let cli = CliConfig::parse_from([
            "part-catalogue",
            "compatible",
            "1234-abcd",
            "--lookup-endpoint",
            "http://localhost:9000",
            "--verbose",
        ]);

        assert!(matches!(cli.command, Command::Compatible { .. }));
        assert_eq!(cli.command.part_number(), "1234-abcd");
        assert!(cli.verbose);
        assert!(!cli.json_logs);

        let settings = cli.resolve().unwrap();
        assert_eq!(settings.lookup_endpoint.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[lookup]\nendpoint = \"https://from-file.example.com\"\ntimeout_seconds = 4\n\n[exclusions]\npath = \"file.json\"\n",
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "part-catalogue",
            "--config",
            file.path().to_str().unwrap(),
            "--exclusions",
            "cli.json",
            "excluded",
            "1111-Invoice",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(
            settings.lookup_endpoint.as_deref(),
            Some("https://from-file.example.com")
        );
        assert_eq!(settings.exclusions_path.as_deref(), Some("cli.json"));
        assert_eq!(settings.timeout, Some(Duration::from_secs(4)));
    }

    #[test]
    fn test_exclusions_only_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[exclusions]\npath = \"data/Exclusions.json\"\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "part-catalogue",
            "--config",
            file.path().to_str().unwrap(),
            "excluded",
            "1111-Invoice",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.lookup_endpoint, None);
        assert_eq!(settings.exclusions_path.as_deref(), Some("data/Exclusions.json"));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::parse_from([
            "part-catalogue",
            "--config",
            "/nonexistent/part-catalogue.toml",
            "validate",
            "1234-abcd",
        ]);
        assert!(cli.resolve().is_err());
    }
}
