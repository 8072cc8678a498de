use std::fmt;

/// Errors that can occur during upload cleanup
#[derive(Debug)]
pub enum CleanupError {
    /// File system operation failed
    FilesystemError {
        path: String,
        operation: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Timeout occurred during operation
    TimeoutError {
        operation: String,
        timeout: std::time::Duration,
    },
}

impl fmt::Display for CleanupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupError::FilesystemError {
                path, operation, ..
            } => {
                write!(f, "Filesystem {} failed for path: {}", operation, path)
            }
            CleanupError::TimeoutError { operation, timeout } => {
                write!(f, "{} timed out after {:?}", operation, timeout)
            }
        }
    }
}

impl std::error::Error for CleanupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CleanupError::FilesystemError { source, .. } => Some(source.as_ref()),
            CleanupError::TimeoutError { .. } => None,
        }
    }
}

impl CleanupError {
    /// Create a filesystem error
    pub fn filesystem_error(path: &str, operation: &str, message: &str) -> Self {
        CleanupError::FilesystemError {
            path: path.to_string(),
            operation: operation.to_string(),
            source: Box::new(std::io::Error::other(message.to_string())),
        }
    }

    /// Create a timeout error
    pub fn timeout_error(operation: &str, timeout: std::time::Duration) -> Self {
        CleanupError::TimeoutError {
            operation: operation.to_string(),
            timeout,
        }
    }
}

/// Result type alias for cleanup operations
pub type CleanupResult<T> = Result<T, CleanupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_filesystem_error_display_and_source() {
        let err = CleanupError::filesystem_error("uploads/a.txt", "remove", "permission denied");
        assert_eq!(
            err.to_string(),
            "Filesystem remove failed for path: uploads/a.txt"
        );
        assert_eq!(err.source().unwrap().to_string(), "permission denied");
    }

    #[test]
    fn test_timeout_error_display() {
        let err = CleanupError::timeout_error("remove", std::time::Duration::from_secs(5));
        assert!(err.to_string().contains("remove timed out"));
        assert!(err.source().is_none());
    }
}
