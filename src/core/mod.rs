pub mod engine;
pub mod repeat;

pub use crate::domain::model::{OutputFormat, RepeatJob, RepeatLimits, RepeatOutcome};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
