pub mod toml_config;

use crate::core::{ConfigProvider, RepeatJob};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Builds the job described by a config, failing if `text` or `count` is missing.
pub fn job_from_config<C: ConfigProvider>(config: &C) -> Result<RepeatJob> {
    let text = config.text();
    let count = config.count();
    let text = validate_required_field("job.text", &text)?;
    let count = validate_required_field("job.count", &count)?;
    Ok(RepeatJob::new(*text, *count))
}

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::core::{ConfigProvider, OutputFormat, RepeatLimits};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "str-repeat")]
    #[command(about = "Repeat a string N times")]
    pub struct CliConfig {
        /// Text to repeat
        pub text: Option<String>,

        /// Number of repetitions
        #[arg(short = 'n', long)]
        pub count: Option<usize>,

        /// Path to TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        pub output: Option<String>,

        #[arg(short, long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Refuse to produce more than this many bytes
        #[arg(long)]
        pub max_output_bytes: Option<usize>,

        /// Do not append a newline after the output
        #[arg(long)]
        pub no_newline: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl CliConfig {
        /// 以檔案設定補齊命令列未指定的選項，命令列優先
        pub fn merge_file(&mut self, file: TomlConfig) {
            self.verbose |= file.verbose();
            self.json_logs |= file.json_logs();
            if !self.no_newline {
                self.no_newline = !file.trailing_newline();
            }

            self.text = self.text.take().or(file.job.text);
            self.count = self.count.or(file.job.count);
            self.output = self.output.take().or(file.output.path);
            self.format = self.format.or(file.output.format);
            self.max_output_bytes = self.max_output_bytes.or(file.limits.max_output_bytes);
        }
    }

    impl ConfigProvider for CliConfig {
        fn text(&self) -> Option<&str> {
            self.text.as_deref()
        }

        fn count(&self) -> Option<usize> {
            self.count
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }

        fn format(&self) -> OutputFormat {
            self.format.unwrap_or_default()
        }

        fn limits(&self) -> RepeatLimits {
            RepeatLimits {
                max_output_bytes: self.max_output_bytes,
            }
        }

        fn trailing_newline(&self) -> bool {
            !self.no_newline
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(path) = &self.output {
                validate_path("output", path)?;
            }
            Ok(())
        }
    }

}
