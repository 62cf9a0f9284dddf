// Host wiring: build a catalogue from configuration.

use crate::adapters::{CachedExclusionSource, HttpPartsService, JsonFileExclusionSource};
use crate::core::catalogue::PartCatalogue;
use crate::core::{ConfigProvider, ExclusionSource, PartSummary, PartsService};
use crate::utils::error::{CatalogueError, Result};
use crate::utils::validation;
use async_trait::async_trait;

pub type HttpCatalogue = PartCatalogue<HttpPartsService, Box<dyn ExclusionSource>>;

/// Stands in for the lookup service when only validation and exclusion
/// checks are needed. Any lookup fails with `MissingConfigError`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredPartsService;

#[async_trait]
impl PartsService for UnconfiguredPartsService {
    async fn find_all_compatible_parts(&self, _part_number: &str) -> Result<Vec<PartSummary>> {
        Err(CatalogueError::MissingConfigError {
            field: "lookup_endpoint".to_string(),
        })
    }
}

pub type OfflineCatalogue = PartCatalogue<UnconfiguredPartsService, Box<dyn ExclusionSource>>;

/// The configured exclusion source, wrapped in a cache only when a TTL is set.
pub fn build_exclusion_source(config: &impl ConfigProvider) -> Result<Box<dyn ExclusionSource>> {
    let file = match config.exclusions_path() {
        Some(path) => JsonFileExclusionSource::new(path),
        None => JsonFileExclusionSource::alongside_executable()?,
    };

    match config.exclusion_cache_ttl() {
        Some(ttl) => {
            tracing::info!("Caching exclusion list from {} for {:?}", file.describe(), ttl);
            Ok(Box::new(CachedExclusionSource::new(file, ttl)))
        }
        None => Ok(Box::new(file)),
    }
}

pub fn build_parts_service(config: &impl ConfigProvider) -> Result<HttpPartsService> {
    let endpoint = config
        .lookup_endpoint()
        .ok_or_else(|| CatalogueError::MissingConfigError {
            field: "lookup_endpoint".to_string(),
        })?;
    validation::validate_url("lookup_endpoint", endpoint)?;

    let mut service = HttpPartsService::new(endpoint).with_timeout(config.request_timeout());
    if let Some(token) = config.api_token() {
        service = service.with_api_token(token);
    }
    Ok(service)
}

pub fn build_catalogue(config: &impl ConfigProvider) -> Result<HttpCatalogue> {
    let parts_service = build_parts_service(config)?;
    let exclusions = build_exclusion_source(config)?;

    tracing::debug!(
        "Catalogue wired to {} with exclusions from {}",
        parts_service.endpoint(),
        exclusions.describe()
    );

    Ok(PartCatalogue::new(parts_service, exclusions))
}

/// A catalogue that can validate and check exclusions without a lookup endpoint.
pub fn build_offline_catalogue(config: &impl ConfigProvider) -> Result<OfflineCatalogue> {
    Ok(PartCatalogue::new(
        UnconfiguredPartsService,
        build_exclusion_source(config)?,
    ))
}
