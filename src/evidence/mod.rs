// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::checks::probe::PageProbe;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// 证据错误类型
#[derive(Error, Debug)]
pub enum EvidenceError {
    /// 文件系统错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 截图采集失败
    #[error("Screenshot capture failed: {0}")]
    Capture(String),
}

/// 失败证据收集器
///
/// 按检查名落盘整页截图。目录按需创建一次；同名文件在重跑时覆盖，
/// 不做保留策略。
pub struct EvidenceCollector {
    dir: PathBuf,
}

impl EvidenceCollector {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 截取当前页面并保存
    ///
    /// # 参数
    ///
    /// * `probe` - 页面探针
    /// * `check_name` - 失败检查的名称，作为文件名
    ///
    /// # 返回值
    ///
    /// * `Ok(PathBuf)` - 截图文件路径
    /// * `Err(EvidenceError)` - 采集或写入失败
    pub async fn capture(
        &self,
        probe: &PageProbe,
        check_name: &str,
    ) -> Result<PathBuf, EvidenceError> {
        let bytes = probe
            .screenshot_png()
            .await
            .map_err(|e| EvidenceError::Capture(e.to_string()))?;
        self.write_png(check_name, &bytes).await
    }

    /// 写入一张 PNG 证据文件
    pub async fn write_png(&self, name: &str, data: &[u8]) -> Result<PathBuf, EvidenceError> {
        // 确保目录存在
        fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(format!("{}.png", name));
        let mut file = fs::File::create(&path).await?;
        file.write_all(data).await?;
        file.flush().await?;

        tracing::info!("Screenshot saved: {}", path.display());
        Ok(path)
    }
}
