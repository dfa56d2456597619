// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 报告模块
///
/// 汇总检查结果，渲染 HTML/JSON 报告并支持在默认查看器中打开
pub mod html;
pub mod opener;

use crate::checks::outcome::Outcome;
use crate::config::settings::ReportSettings;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

/// 报告错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    /// 文件系统错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 单项检查的报告条目
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// 所属套件
    pub suite: String,
    /// 检查名称
    pub check: String,
    /// 检查结果
    pub outcome: Outcome,
    /// 耗时（毫秒）
    pub duration_ms: u64,
    /// 失败截图路径（仅留证套件的失败条目）
    pub evidence: Option<PathBuf>,
}

/// 一次冒烟运行的报告
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// 运行标识
    pub run_id: Uuid,
    /// 被测站点地址
    pub target: String,
    /// 开始时间 (UTC)
    pub started_at: DateTime<Utc>,
    /// 结束时间 (UTC)
    pub finished_at: Option<DateTime<Utc>>,
    /// 全部检查条目
    pub entries: Vec<ReportEntry>,
}

impl RunReport {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            target: target.into(),
            started_at: Utc::now(),
            finished_at: None,
            entries: Vec::new(),
        }
    }

    pub fn extend(&mut self, entries: Vec<ReportEntry>) {
        self.entries.extend(entries);
    }

    /// 记录运行结束时间
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn passed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == Outcome::Pass)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_fail()).count()
    }

    pub fn skipped(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_skip()).count()
    }

    /// 是否存在失败条目
    ///
    /// 跳过不算失败，进程退出码只看这里
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// 写出报告文件
///
/// 渲染 HTML 并序列化 JSON，分别写入配置的路径
pub async fn write(report: &RunReport, settings: &ReportSettings) -> Result<(), ReportError> {
    let page = html::render(report).await;
    fs::write(&settings.html_file, page).await?;
    tracing::info!("HTML report written: {}", settings.html_file);

    let json = serde_json::to_string_pretty(report)?;
    fs::write(&settings.json_file, json).await?;
    tracing::info!("JSON report written: {}", settings.json_file);

    Ok(())
}
