use async_trait::async_trait;
use std::collections::HashSet;
use std::error::Error;
use std::sync::Mutex;
use std::time::Duration;

/// Default upper bound for a single removal before it is reported as stuck
pub const DEFAULT_REMOVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Abstraction for file removal to enable testing without touching the disk
#[async_trait]
pub trait FileRemover {
    /// Delete the file at `path` if it exists; a missing file is a no-op.
    /// Underlying OS errors (permissions, races) are passed through as-is.
    async fn remove(&self, path: &str) -> Result<(), Box<dyn Error>>;

    fn exists(&self, path: &str) -> bool;
}

/// Real file remover using tokio::fs
pub struct RealFileRemover;

#[async_trait]
impl FileRemover for RealFileRemover {
    async fn remove(&self, path: &str) -> Result<(), Box<dyn Error>> {
        if std::path::Path::new(path).is_file() {
            tokio::fs::remove_file(path).await?;
        }
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        std::path::Path::new(path).exists()
    }
}

/// Demo file remover that retires entries from an in-memory set
pub struct DemoFileRemover {
    files: Mutex<HashSet<String>>,
}

impl DemoFileRemover {
    pub fn new() -> Self {
        let files = ["uploads/report.csv", "uploads/archive.tar.gz"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            files: Mutex::new(files),
        }
    }

    /// Demo remover seeded with specific pretend files
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            files: Mutex::new(files.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl Default for DemoFileRemover {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileRemover for DemoFileRemover {
    async fn remove(&self, path: &str) -> Result<(), Box<dyn Error>> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains(path)
    }
}
