use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::utils::error::CatalogueError;

// Four ASCII digits, a hyphen, then four or more ASCII letters or digits.
static PART_NUMBER_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[0-9]{4}-[A-Za-z0-9]{4,}$").expect("part number pattern compiles")
});

/// Returns true when `candidate` is a well-formed part number.
pub fn is_valid_part_number(candidate: &str) -> bool {
    PART_NUMBER_PATTERN.is_match(candidate)
}

/// A part number that has passed format validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PartNumber(String);

impl PartNumber {
    pub fn parse(candidate: &str) -> Result<Self, CatalogueError> {
        if is_valid_part_number(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(CatalogueError::invalid_part(candidate))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PartNumber {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PartNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A part as reported by the lookup service.
///
/// Only `part_number` is interpreted here; everything else is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartSummary {
    #[serde(alias = "partNumber", alias = "part_number")]
    pub part_number: String,

    #[serde(default, alias = "description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl PartSummary {
    pub fn new(part_number: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One record of the exclusion list. Fields other than the part number are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExclusionEntry {
    #[serde(alias = "partNumber", alias = "part_number")]
    pub part_number: String,
}

impl ExclusionEntry {
    pub fn new(part_number: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
        }
    }

    pub fn matches(&self, part_number: &str) -> bool {
        self.part_number == part_number
    }
}
