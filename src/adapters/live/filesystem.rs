//! Live filesystem adapter using `tokio::fs`.

use std::path::Path;

use async_trait::async_trait;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
///
/// Writes create missing parent directories, so a fresh data root needs no
/// setup step before the first record lands.
pub struct LiveFileSystem;

#[async_trait]
impl FileSystem for LiveFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(tokio::fs::read_to_string(path).await?)
    }

    async fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(tokio::fs::write(path, contents).await?)
    }

    async fn remove_file(
        &self,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(tokio::fs::remove_file(path).await?)
    }

    async fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let mut entries = Vec::new();
        let mut dir = tokio::fs::read_dir(path).await?;
        while let Some(entry) = dir.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                entries.push(name.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }
}
