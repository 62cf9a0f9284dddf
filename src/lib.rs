pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{
    CachedExclusionSource, HttpPartsService, JsonFileExclusionSource, StaticExclusionSource,
};
pub use config::{CatalogueSettings, TomlConfig};
pub use core::catalogue::PartCatalogue;
pub use domain::model::{is_valid_part_number, ExclusionEntry, PartNumber, PartSummary};
pub use domain::ports::{ConfigProvider, ExclusionSource, PartsService};
pub use utils::error::{CatalogueError, Result};
