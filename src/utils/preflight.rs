// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::{Duration, Instant};
use thiserror::Error;

/// 预检错误类型
#[derive(Error, Debug)]
pub enum PreflightError {
    /// 目标站点在时限内没有应答
    #[error("Target {url} did not answer within {timeout:?}")]
    Unreachable { url: String, timeout: Duration },
}

/// 等待目标站点可达
///
/// 启动浏览器之前先用普通 HTTP 轮询目标地址，任何应答（不论状态码）
/// 都视为可达，前端没起直接快速失败而不是等浏览器超时。
///
/// # 参数
///
/// * `url` - 目标地址
/// * `timeout` - 等待上限
/// * `interval` - 轮询间隔
pub async fn wait_for_target(
    url: &str,
    timeout: Duration,
    interval: Duration,
) -> Result<(), PreflightError> {
    let client = reqwest::Client::new();
    let deadline = Instant::now() + timeout;

    loop {
        match client.get(url).timeout(interval.max(Duration::from_secs(1))).send().await {
            Ok(response) => {
                tracing::info!("Target {} answered with {}", url, response.status());
                return Ok(());
            }
            Err(e) if Instant::now() < deadline => {
                tracing::debug!("Target {} not ready yet: {}", url, e);
                tokio::time::sleep(interval).await;
            }
            Err(_) => {
                return Err(PreflightError::Unreachable {
                    url: url.to_string(),
                    timeout,
                });
            }
        }
    }
}
