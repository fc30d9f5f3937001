//! In-memory filesystem adapter backed by a hash map.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::ports::filesystem::FileSystem;

/// In-memory filesystem keyed by full path.
///
/// A path counts as an existing directory when any stored file lives under
/// it, so exists-then-list call sequences behave the same as on disk.
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self { files: Mutex::new(HashMap::new()) }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        let files = self.lock();
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path) && k != path)
    }

    async fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.lock()
            .get(path)
            .cloned()
            .ok_or_else(|| format!("file not found: {}", path.display()).into())
    }

    async fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.lock().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    async fn remove_file(
        &self,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        match self.lock().remove(path) {
            Some(_) => Ok(()),
            None => Err(format!("file not found: {}", path.display()).into()),
        }
    }

    async fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.lock();
        let mut names: Vec<String> = files
            .keys()
            .filter_map(|k| {
                if k.parent() == Some(path) {
                    k.file_name().map(|n| n.to_string_lossy().into_owned())
                } else {
                    None
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_back_what_was_written() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("/data/products/p1.json");

        fs.write(path, r#"{"id":"p1"}"#).await.unwrap();

        assert!(fs.exists(path).await);
        assert_eq!(fs.read_to_string(path).await.unwrap(), r#"{"id":"p1"}"#);
    }

    #[tokio::test]
    async fn directory_exists_when_a_file_lives_under_it() {
        let fs = MemoryFileSystem::new();
        fs.write(Path::new("/data/carts/c1.json"), "{}").await.unwrap();

        assert!(fs.exists(Path::new("/data/carts")).await);
        assert!(!fs.exists(Path::new("/data/products")).await);
    }

    #[tokio::test]
    async fn list_dir_only_returns_direct_children() {
        let fs = MemoryFileSystem::new();
        fs.write(Path::new("/data/products/b.json"), "{}").await.unwrap();
        fs.write(Path::new("/data/products/a.json"), "{}").await.unwrap();
        fs.write(Path::new("/data/carts/c.json"), "{}").await.unwrap();

        let names = fs.list_dir(Path::new("/data/products")).await.unwrap();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[tokio::test]
    async fn remove_missing_file_errors() {
        let fs = MemoryFileSystem::new();
        assert!(fs.remove_file(Path::new("/nope.json")).await.is_err());
    }
}
