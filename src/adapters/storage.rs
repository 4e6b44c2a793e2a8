use crate::core::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for LocalStorage {
    async fn write(&self, data: &[u8]) -> Result<String> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, data).await?;
        Ok(self.path.display().to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutStorage;

impl Storage for StdoutStorage {
    async fn write(&self, data: &[u8]) -> Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(data).await?;
        stdout.flush().await?;
        Ok("stdout".to_string())
    }
}
