use crate::domain::model::{OutputFormat, RepeatLimits};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    /// Writes the rendered output and returns a description of where it went.
    fn write(&self, data: &[u8]) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn text(&self) -> Option<&str>;
    fn count(&self) -> Option<usize>;
    fn output_path(&self) -> Option<&str>;
    fn format(&self) -> OutputFormat;
    fn limits(&self) -> RepeatLimits;
    fn trailing_newline(&self) -> bool;
}
