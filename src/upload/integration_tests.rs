//! Integration tests for the complete upload cleanup pipeline

use crate::system::filesystem::{DemoFileRemover, FileRemover, RealFileRemover};
use crate::upload::UploadNotifier;
use std::io::Write;

#[tokio::test]
async fn test_demo_pipeline_removes_pretend_files() {
    let notifier = UploadNotifier::new(DemoFileRemover::with_files(&[
        "uploads/report.csv",
        "uploads/archive.tar.gz",
    ]));

    assert!(notifier.remover().exists("uploads/report.csv"));
    notifier.on_upload_complete("uploads/report.csv").await.unwrap();
    assert!(!notifier.remover().exists("uploads/report.csv"));

    // The other pretend file is untouched
    assert!(notifier.remover().exists("uploads/archive.tar.gz"));
}

#[tokio::test]
async fn test_demo_pipeline_tolerates_unknown_paths() {
    let notifier = UploadNotifier::new(DemoFileRemover::new());

    // Completing an upload with no source file on disk must not fail
    let result = notifier.on_upload_complete("uploads/never-staged.bin").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_real_pipeline_deletes_the_staged_file() {
    let mut path = std::env::temp_dir();
    path.push(format!("upload-cleaner-it-{}.txt", std::process::id()));
    let path = path.to_string_lossy().into_owned();

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "staged upload").unwrap();

    let notifier = UploadNotifier::new(RealFileRemover);
    assert!(notifier.remover().exists(&path));

    notifier.on_upload_complete(&path).await.unwrap();
    assert!(!notifier.remover().exists(&path));

    // A second completion for the same path is a harmless no-op
    notifier.on_upload_complete(&path).await.unwrap();
}
