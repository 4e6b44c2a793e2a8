pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, StdoutStorage};
pub use config::{job_from_config, toml_config::TomlConfig};
pub use crate::core::{
    engine::RepeatEngine,
    repeat::{repeat, repeat_within, repeated_len, try_repeat},
    OutputFormat, RepeatJob, RepeatLimits, RepeatOutcome,
};
pub use utils::error::{RepeatError, Result};
