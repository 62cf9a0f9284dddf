use crate::domain::model::{ExclusionEntry, PartSummary};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// The external compatible-parts query.
#[async_trait]
pub trait PartsService: Send + Sync {
    /// Returns an empty vector, not an error, when nothing is compatible.
    async fn find_all_compatible_parts(&self, part_number: &str) -> Result<Vec<PartSummary>>;
}

/// Read-only provider of the current exclusion list.
#[async_trait]
pub trait ExclusionSource: Send + Sync {
    /// Produces the full current list, or `DataUnavailable`.
    async fn load_exclusions(&self) -> Result<Vec<ExclusionEntry>>;

    /// Human-readable origin, used in diagnostics.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn lookup_endpoint(&self) -> Option<&str>;
    fn api_token(&self) -> Option<&str>;
    fn request_timeout(&self) -> Duration;
    fn exclusions_path(&self) -> Option<&str>;
    fn exclusion_cache_ttl(&self) -> Option<Duration>;
}

#[async_trait]
impl<T: PartsService + ?Sized> PartsService for Box<T> {
    async fn find_all_compatible_parts(&self, part_number: &str) -> Result<Vec<PartSummary>> {
        (**self).find_all_compatible_parts(part_number).await
    }
}

#[async_trait]
impl<T: PartsService + ?Sized> PartsService for Arc<T> {
    async fn find_all_compatible_parts(&self, part_number: &str) -> Result<Vec<PartSummary>> {
        (**self).find_all_compatible_parts(part_number).await
    }
}

#[async_trait]
impl<T: ExclusionSource + ?Sized> ExclusionSource for Box<T> {
    async fn load_exclusions(&self) -> Result<Vec<ExclusionEntry>> {
        (**self).load_exclusions().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[async_trait]
impl<T: ExclusionSource + ?Sized> ExclusionSource for Arc<T> {
    async fn load_exclusions(&self) -> Result<Vec<ExclusionEntry>> {
        (**self).load_exclusions().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
