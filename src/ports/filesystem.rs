//! Filesystem port for whole-file I/O operations.

use std::path::Path;

use async_trait::async_trait;

/// Provides filesystem access for reading, writing, and deleting record
/// files.
///
/// Abstracting the filesystem keeps the store and service testable without
/// touching the real disk. Every operation works on a whole file; partial
/// reads and writes do not exist at this boundary.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists on the filesystem.
    async fn exists(&self, path: &Path) -> bool;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    async fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    async fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be removed.
    async fn remove_file(
        &self,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Lists the entries in a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    async fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;
}
