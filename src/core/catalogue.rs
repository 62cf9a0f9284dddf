use crate::core::{ExclusionSource, PartNumber, PartSummary, PartsService};
use crate::domain::model::is_valid_part_number;
use crate::utils::error::Result;

/// Looks up compatible parts after format validation and exclusion filtering.
///
/// Every call runs `validate`, then the exclusion check, then the lookup, in
/// that order. Nothing is kept between calls.
pub struct PartCatalogue<P: PartsService, E: ExclusionSource> {
    parts_service: P,
    exclusions: E,
}

impl<P: PartsService, E: ExclusionSource> PartCatalogue<P, E> {
    pub fn new(parts_service: P, exclusions: E) -> Self {
        Self {
            parts_service,
            exclusions,
        }
    }

    pub fn parts_service(&self) -> &P {
        &self.parts_service
    }

    pub fn exclusion_source(&self) -> &E {
        &self.exclusions
    }

    /// Format check only. Never fails and never touches a collaborator.
    pub fn validate(&self, part_number: &str) -> bool {
        is_valid_part_number(part_number)
    }

    /// As [`validate`](Self::validate), treating absent input as invalid.
    pub fn validate_optional(&self, part_number: Option<&str>) -> bool {
        part_number.is_some_and(|p| self.validate(p))
    }

    /// Exact, case-sensitive match against a fresh read of the exclusion list.
    ///
    /// Does not check the format of `part_number`.
    pub async fn is_excluded(&self, part_number: &str) -> Result<bool> {
        // Fresh read every call; a failed read is an error, never "not excluded"
        let entries = self.exclusions.load_exclusions().await?;
        let excluded = entries.iter().any(|entry| entry.matches(part_number));

        tracing::debug!(
            "Exclusion check for {} against {} entries from {}: {}",
            part_number,
            entries.len(),
            self.exclusions.describe(),
            excluded
        );

        Ok(excluded)
    }

    pub async fn get_compatible_parts(&self, part_number: &str) -> Result<Vec<PartSummary>> {
        // Format gate: same predicate as `validate`, but fails loudly
        let part = PartNumber::parse(part_number).inspect_err(|_| {
            tracing::debug!("Rejected malformed part number: {:?}", part_number);
        })?;

        // Exclusion gate
        if self.is_excluded(part.as_str()).await? {
            tracing::debug!("{} is excluded, skipping lookup", part);
            return Ok(Vec::new());
        }

        // Delegate; the result and any error go back untouched
        let parts = self
            .parts_service
            .find_all_compatible_parts(part.as_str())
            .await?;
        tracing::debug!("Lookup returned {} parts for {}", parts.len(), part);

        Ok(parts)
    }
}
