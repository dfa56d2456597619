// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use smokrs::evidence::EvidenceCollector;
use tempfile::TempDir;

#[tokio::test]
async fn test_directory_created_on_first_write() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = tmp.path().join("screenshots");
    assert!(!dir.exists());

    let collector = EvidenceCollector::new(&dir);
    let path = collector
        .write_png("login_form", b"png-bytes")
        .await
        .expect("write should create the directory on demand");

    assert!(dir.exists());
    assert!(path.exists());
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("login_form.png"));
}

#[tokio::test]
async fn test_rerun_overwrites_previous_capture() {
    let tmp = TempDir::new().expect("tempdir");
    let collector = EvidenceCollector::new(tmp.path());

    collector
        .write_png("page_title", b"first run")
        .await
        .expect("first write");
    let path = collector
        .write_png("page_title", b"second run")
        .await
        .expect("second write");

    let content = tokio::fs::read(&path).await.expect("read back");
    assert_eq!(content, b"second run");

    let files: Vec<_> = std::fs::read_dir(tmp.path())
        .expect("read dir")
        .collect();
    assert_eq!(files.len(), 1, "rerun must not accumulate files");
}
