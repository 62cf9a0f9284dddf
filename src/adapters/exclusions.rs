use crate::core::{ExclusionEntry, ExclusionSource};
use crate::utils::error::{CatalogueError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const DEFAULT_EXCLUSIONS_FILE: &str = "Exclusions.json";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Exclusion list stored as a JSON array of `{"PartNumber": ...}` records.
///
/// The file is read and parsed again on every call.
#[derive(Debug, Clone)]
pub struct JsonFileExclusionSource {
    path: PathBuf,
}

impl JsonFileExclusionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `Exclusions.json` in the directory of the running executable.
    pub fn alongside_executable() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| CatalogueError::ConfigError {
            message: format!("Executable path has no parent directory: {}", exe.display()),
        })?;
        Ok(Self::new(dir.join(DEFAULT_EXCLUSIONS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ExclusionSource for JsonFileExclusionSource {
    async fn load_exclusions(&self) -> Result<Vec<ExclusionEntry>> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogueError::data_unavailable(self.describe(), e))?;

        // Editors on Windows often save the list with a byte-order mark
        let json = data.strip_prefix(UTF8_BOM).unwrap_or(&data);
        let entries: Vec<ExclusionEntry> = serde_json::from_slice(json)
            .map_err(|e| CatalogueError::data_unavailable(self.describe(), e))?;

        tracing::debug!("Loaded {} exclusion entries from {}", entries.len(), self.describe());
        Ok(entries)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed, in-memory exclusion list.
#[derive(Debug, Clone, Default)]
pub struct StaticExclusionSource {
    entries: Vec<ExclusionEntry>,
}

impl StaticExclusionSource {
    pub fn new(entries: Vec<ExclusionEntry>) -> Self {
        Self { entries }
    }

    pub fn from_part_numbers<I, S>(part_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(part_numbers.into_iter().map(ExclusionEntry::new).collect())
    }
}

#[async_trait]
impl ExclusionSource for StaticExclusionSource {
    async fn load_exclusions(&self) -> Result<Vec<ExclusionEntry>> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        format!("static list ({} entries)", self.entries.len())
    }
}

/// Reuses a successful read of `inner` for `ttl`.
///
/// Failed reads are returned to the caller and never cached. Entries may be
/// up to `ttl` stale, so this is only wired in when a host asks for it.
pub struct CachedExclusionSource<E: ExclusionSource> {
    inner: E,
    ttl: Duration,
    cached: Mutex<Option<(Instant, Vec<ExclusionEntry>)>>,
}

impl<E: ExclusionSource> CachedExclusionSource<E> {
    pub fn new(inner: E, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Drops the cached list so the next read goes to `inner`.
    pub async fn invalidate(&self) {
        *self.cached.lock().await = None;
    }
}

#[async_trait]
impl<E: ExclusionSource> ExclusionSource for CachedExclusionSource<E> {
    async fn load_exclusions(&self) -> Result<Vec<ExclusionEntry>> {
        let mut cached = self.cached.lock().await;

        if let Some((loaded_at, entries)) = cached.as_ref() {
            if loaded_at.elapsed() < self.ttl {
                return Ok(entries.clone());
            }
        }

        let entries = self.inner.load_exclusions().await?;
        *cached = Some((Instant::now(), entries.clone()));
        Ok(entries)
    }

    fn describe(&self) -> String {
        format!("{} (cached {:?})", self.inner.describe(), self.ttl)
    }
}
