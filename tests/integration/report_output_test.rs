// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use smokrs::checks::outcome::Outcome;
use smokrs::config::settings::ReportSettings;
use smokrs::report::{self, html, ReportEntry, RunReport};
use tempfile::TempDir;

#[tokio::test]
async fn test_report_files_written() {
    let tmp = TempDir::new().expect("tempdir");
    let settings = ReportSettings {
        html_file: tmp
            .path()
            .join("report.html")
            .to_string_lossy()
            .into_owned(),
        json_file: tmp
            .path()
            .join("report.json")
            .to_string_lossy()
            .into_owned(),
        open: false,
    };

    let mut run = RunReport::new("http://localhost:8080");
    run.extend(vec![ReportEntry {
        suite: "strict".to_string(),
        check: "page_title".to_string(),
        outcome: Outcome::Pass,
        duration_ms: 10,
        evidence: None,
    }]);
    run.finish();

    report::write(&run, &settings).await.expect("write report");

    let page = tokio::fs::read_to_string(&settings.html_file)
        .await
        .expect("html written");
    assert!(page.contains("Smoke run"));
    assert!(page.contains("page_title"));

    let json = tokio::fs::read_to_string(&settings.json_file)
        .await
        .expect("json written");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json parses");
    assert_eq!(value["entries"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(value["target"], "http://localhost:8080");
}

#[tokio::test]
async fn test_failure_screenshot_embedded_into_html() {
    let tmp = TempDir::new().expect("tempdir");
    let shot = tmp.path().join("login_form.png");
    tokio::fs::write(&shot, b"fake-png").await.expect("evidence file");

    let mut run = RunReport::new("http://localhost:8080");
    run.extend(vec![ReportEntry {
        suite: "lenient".to_string(),
        check: "login_form".to_string(),
        outcome: Outcome::Fail("submit button missing".to_string()),
        duration_ms: 1200,
        evidence: Some(shot),
    }]);
    run.finish();

    let page = html::render(&run).await;
    assert!(page.contains(&BASE64.encode(b"fake-png")));
    assert!(page.contains("data:image/png;base64"));
}
