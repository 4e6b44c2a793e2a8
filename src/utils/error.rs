use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepeatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Repeating {text_len} bytes {count} times overflows usize")]
    CapacityOverflow { text_len: usize, count: usize },

    #[error("Output of {required} bytes exceeds the limit of {limit} bytes")]
    OutputTooLarge { required: usize, limit: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Limit,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RepeatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RepeatError::IoError(_) | RepeatError::SerializationError(_) => ErrorCategory::Io,
            RepeatError::ConfigError { .. }
            | RepeatError::ConfigValidationError { .. }
            | RepeatError::InvalidConfigValueError { .. }
            | RepeatError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RepeatError::CapacityOverflow { .. } | RepeatError::OutputTooLarge { .. } => {
                ErrorCategory::Limit
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Limit => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 對應嚴重程度的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RepeatError::IoError(e) => format!("Could not write output: {}", e),
            RepeatError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            RepeatError::ConfigError { message } => format!("Configuration problem: {}", message),
            RepeatError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            RepeatError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            RepeatError::MissingConfigError { field } => {
                format!("Option '{}' is required", field)
            }
            RepeatError::CapacityOverflow { .. } => {
                "The repeated text would be larger than this platform can address".to_string()
            }
            RepeatError::OutputTooLarge { required, limit } => format!(
                "The repeated text would be {} bytes, above the {} byte limit",
                required, limit
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RepeatError::IoError(_) => "Check that the output path exists and is writable",
            RepeatError::SerializationError(_) => "Try the plain output format",
            RepeatError::ConfigError { .. } | RepeatError::ConfigValidationError { .. } => {
                "Check that the configuration file exists and is valid TOML"
            }
            RepeatError::InvalidConfigValueError { .. } => "Correct the value and run again",
            RepeatError::MissingConfigError { .. } => {
                "Pass the option on the command line or set it in the [job] section"
            }
            RepeatError::CapacityOverflow { .. } => "Use a smaller count or a shorter text",
            RepeatError::OutputTooLarge { .. } => {
                "Lower the count or raise limits.max_output_bytes / --max-output-bytes"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RepeatError>;
