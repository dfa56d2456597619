// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::checks::outcome::{classify, Outcome};
use crate::checks::probe::PageProbe;
use crate::config::settings::Settings;
use crate::evidence::EvidenceCollector;
use crate::report::ReportEntry;
use crate::session::{BrowserSession, SessionError};
use crate::suites::SuiteSpec;
use std::time::Instant;
use thiserror::Error;
use url::Url;

/// 运行器错误类型
#[derive(Error, Debug)]
pub enum RunnerError {
    /// 目标地址无效
    #[error("Invalid target URL: {0}")]
    InvalidTarget(#[from] url::ParseError),
    /// 会话获取失败，整组检查中止
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// 执行一个套件分组
///
/// 为该分组获取一个浏览器会话，按声明顺序串行执行检查：每项检查先
/// 导航到目标地址，再运行检查体，结果按要求级别分类。单项失败不影响
/// 后续检查；留证套件的失败条目先落截图再记录。会话在所有检查之后
/// 恰好释放一次，循环内没有提前返回的路径。
///
/// # 返回值
///
/// * `Ok(Vec<ReportEntry>)` - 每项检查一个条目，顺序与声明一致
/// * `Err(RunnerError)` - 会话获取失败或目标地址无效
pub async fn run_suite(
    spec: &SuiteSpec,
    settings: &Settings,
) -> Result<Vec<ReportEntry>, RunnerError> {
    let target = Url::parse(&settings.target.url)?;

    tracing::info!(suite = spec.name, "Acquiring browser session");
    let session = BrowserSession::launch(&settings.browser, &settings.wait).await?;
    let probe = PageProbe::new(session.page().clone(), target, &settings.wait);
    let evidence = EvidenceCollector::new(&settings.evidence.screenshot_dir);

    let mut entries = Vec::with_capacity(spec.checks.len());

    for item in &spec.checks {
        let name = item.check.name();
        tracing::info!(suite = spec.name, check = name, "Running check");
        let started = Instant::now();

        let result = async {
            probe.goto_target().await?;
            item.check.run(&probe).await
        }
        .await;

        let outcome = classify(result, item.requirement);
        let duration_ms = started.elapsed().as_millis() as u64;

        let mut evidence_path = None;
        if spec.capture_evidence && outcome.is_fail() {
            match evidence.capture(&probe, name).await {
                Ok(path) => evidence_path = Some(path),
                // Evidence must never mask the original failure
                Err(e) => tracing::warn!(check = name, "Evidence capture failed: {}", e),
            }
        }

        match &outcome {
            Outcome::Pass => tracing::info!(suite = spec.name, check = name, "PASS"),
            Outcome::Fail(detail) => {
                tracing::error!(suite = spec.name, check = name, "FAIL: {}", detail)
            }
            Outcome::Skip(detail) => {
                tracing::warn!(suite = spec.name, check = name, "SKIP: {}", detail)
            }
        }

        entries.push(ReportEntry {
            suite: spec.name.to_string(),
            check: name.to_string(),
            outcome,
            duration_ms,
            evidence: evidence_path,
        });
    }

    // The one release point for this group's session
    session.close().await;

    Ok(entries)
}
