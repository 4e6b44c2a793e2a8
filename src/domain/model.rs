use serde::{Deserialize, Serialize};

/// One request to repeat `text` `count` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatJob {
    pub text: String,
    pub count: usize,
}

impl RepeatJob {
    pub fn new(text: impl Into<String>, count: usize) -> Self {
        Self {
            text: text.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatOutcome {
    pub text: String,
    pub count: usize,
    pub byte_len: usize,
    pub char_len: usize,
    pub output: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatLimits {
    /// `None` means unlimited.
    pub max_output_bytes: Option<usize>,
}
