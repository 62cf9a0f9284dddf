// Adapters layer: concrete exclusion sources and the HTTP lookup client.

pub mod exclusions;
pub mod http;

pub use exclusions::{CachedExclusionSource, JsonFileExclusionSource, StaticExclusionSource};
pub use http::HttpPartsService;
