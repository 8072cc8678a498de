//! Upload completion handling and cleanup errors

pub mod error;
pub mod notifier;

#[cfg(test)]
mod integration_tests;

// Re-export commonly used items
pub use error::{CleanupError, CleanupResult};
pub use notifier::UploadNotifier;
