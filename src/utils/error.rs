use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Invalid part number : {part_number} provided. Please check part number and try again")]
    InvalidPart { part_number: String },

    #[error("Exclusion data unavailable from {source_name}: {reason}")]
    DataUnavailable { source_name: String, reason: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Lookup service returned {status}: {message}")]
    LookupError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Upstream,
    Configuration,
    System,
}

impl CatalogueError {
    pub fn invalid_part(part_number: impl Into<String>) -> Self {
        Self::InvalidPart {
            part_number: part_number.into(),
        }
    }

    pub fn data_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPart { .. } => ErrorCategory::Input,
            Self::DataUnavailable { .. } => ErrorCategory::Data,
            Self::ApiError(_) | Self::LookupError { .. } => ErrorCategory::Upstream,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Whether repeating the same call unchanged could succeed.
    ///
    /// The catalogue itself never retries; this only informs the host.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::ApiError(e) => e.is_timeout() || e.is_connect(),
            Self::LookupError { status, .. } => *status >= 500 || *status == 429,
            Self::DataUnavailable { .. } | Self::IoError(_) => true,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidPart { part_number } => {
                format!("'{}' is not a valid part number", part_number)
            }
            Self::DataUnavailable { .. } => {
                "The exclusion list could not be loaded, so compatibility cannot be determined"
                    .to_string()
            }
            Self::ApiError(_) | Self::LookupError { .. } => {
                "The parts lookup service could not complete the request".to_string()
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => format!("Configuration problem: {}", self),
            Self::IoError(_) | Self::SerializationError(_) => format!("System error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Use four digits, a hyphen, then at least four letters or digits (e.g. 1234-abcd)"
            }
            ErrorCategory::Data => "Check that the exclusions file exists and is a valid JSON array",
            ErrorCategory::Upstream => "Check the lookup endpoint and try again later",
            ErrorCategory::Configuration => "Review the configuration file and command-line flags",
            ErrorCategory::System => "Check file permissions and available resources",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogueError>;
