// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use smokrs::config::settings::Settings;
use smokrs::report::{self, RunReport};
use smokrs::runner;
use smokrs::suites::{lenient, strict};
use smokrs::utils::{preflight, telemetry};
use std::path::Path;
use tracing::info;

/// 主函数
///
/// 应用程序入口点：预检目标站点，依次执行两个套件分组，
/// 写出报告并按失败情况设置退出码
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting smokrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded, target: {}", settings.target.url);

    // 3. Make sure the front end answers before any browser is launched
    preflight::wait_for_target(
        &settings.target.url,
        settings.target.preflight_timeout(),
        settings.wait.poll_interval(),
    )
    .await?;

    // 4. Run both suite groups, each with its own browser session
    let mut report = RunReport::new(&settings.target.url);
    for suite in [strict::suite(), lenient::suite()] {
        let entries = runner::run_suite(&suite, &settings).await?;
        report.extend(entries);
    }
    report.finish();

    // 5. Write the report files
    report::write(&report, &settings.report).await?;
    info!(
        "Smoke run finished: {} passed, {} failed, {} skipped",
        report.passed(),
        report.failed(),
        report.skipped()
    );

    // 6. Hand the report to the default viewer when configured
    if settings.report.open {
        report::opener::open_report(Path::new(&settings.report.html_file));
    }

    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
