pub mod catalogue;

pub use crate::domain::model::{ExclusionEntry, PartNumber, PartSummary};
pub use crate::domain::ports::{ConfigProvider, ExclusionSource, PartsService};
pub use crate::utils::error::Result;
