use crate::core::repeat::repeat_within;
use crate::core::{OutputFormat, RepeatJob, RepeatLimits, RepeatOutcome, Storage};
use crate::utils::error::Result;

pub struct RepeatEngine<S: Storage> {
    storage: S,
    limits: RepeatLimits,
    format: OutputFormat,
    trailing_newline: bool,
}

impl<S: Storage> RepeatEngine<S> {
    pub fn new(storage: S, limits: RepeatLimits, format: OutputFormat) -> Self {
        Self {
            storage,
            limits,
            format,
            trailing_newline: true,
        }
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    pub fn execute(&self, job: &RepeatJob) -> Result<RepeatOutcome> {
        tracing::debug!(
            "Repeating {} bytes {} times (limit: {:?})",
            job.text.len(),
            job.count,
            self.limits.max_output_bytes
        );

        let output = repeat_within(&job.text, job.count, &self.limits)?;
        let outcome = RepeatOutcome {
            text: job.text.clone(),
            count: job.count,
            byte_len: output.len(),
            char_len: output.chars().count(),
            output,
        };

        tracing::debug!(
            "Produced {} bytes / {} chars",
            outcome.byte_len,
            outcome.char_len
        );
        Ok(outcome)
    }

    pub fn render(&self, outcome: &RepeatOutcome) -> Result<Vec<u8>> {
        let mut rendered = match self.format {
            OutputFormat::Plain => outcome.output.clone().into_bytes(),
            OutputFormat::Json => serde_json::to_vec(outcome)?,
        };
        if self.trailing_newline {
            rendered.push(b'\n');
        }
        Ok(rendered)
    }

    pub async fn run(&self, job: &RepeatJob) -> Result<String> {
        let outcome = self.execute(job)?;
        let rendered = self.render(&outcome)?;
        let destination = self.storage.write(&rendered).await?;
        tracing::info!(
            "Wrote {} repetitions ({} bytes) to {}",
            outcome.count,
            outcome.byte_len,
            destination
        );
        Ok(destination)
    }
}
