use crate::system::FileRemover;
use std::error::Error;

/// Reacts to upload completion by handing cleanup to the injected remover
pub struct UploadNotifier<R: FileRemover> {
    remover: R,
}

impl<R: FileRemover> UploadNotifier<R> {
    pub fn new(remover: R) -> Self {
        Self { remover }
    }

    /// Delegate cleanup of the uploaded source file to the remover
    pub async fn on_upload_complete(&self, path: &str) -> Result<(), Box<dyn Error>> {
        self.remover.remove(path).await
    }

    pub fn remover(&self) -> &R {
        &self.remover
    }
}
