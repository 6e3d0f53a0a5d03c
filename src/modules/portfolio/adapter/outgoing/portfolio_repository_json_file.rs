use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::PortfolioData;

/// File backend: the portfolio is one pretty-printed JSON document on disk.
///
/// Writes go to a sibling temp file and are renamed over the target, so a
/// reader never observes a half-written document.
#[derive(Clone)]
pub struct PortfolioRepositoryJsonFile {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl PortfolioRepositoryJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_err(action: &str, e: impl std::fmt::Display) -> PortfolioRepositoryError {
        tracing::error!("Portfolio file {} failed: {}", action, e);
        PortfolioRepositoryError::StorageError(format!("{} failed: {}", action, e))
    }

    async fn read(&self) -> Result<Option<PortfolioData>, PortfolioRepositoryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::storage_err("read", e)),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| Self::storage_err("parse", e))
    }

    async fn write(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        let bytes = serde_json::to_vec_pretty(data).map_err(|e| Self::storage_err("encode", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::storage_err("create dir", e))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &bytes)
            .await
            .map_err(|e| Self::storage_err("write", e))?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Self::storage_err("rename", e))
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryJsonFile {
    async fn find(&self) -> Result<Option<PortfolioData>, PortfolioRepositoryError> {
        self.read().await
    }

    async fn seed(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        let _guard = self.write_lock.lock().await;

        if self.read().await?.is_some() {
            return Ok(());
        }
        self.write(data).await
    }

    async fn replace(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        let _guard = self.write_lock.lock().await;
        self.write(data).await
    }
}
