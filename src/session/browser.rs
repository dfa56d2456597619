// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{BrowserSettings, WaitSettings};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

/// 会话错误类型
#[derive(Error, Debug)]
pub enum SessionError {
    /// 浏览器配置无效
    #[error("Invalid browser configuration: {0}")]
    Config(String),
    /// 浏览器启动失败
    #[error("Failed to launch browser: {0}")]
    Launch(String),
    /// 连接远程浏览器失败
    #[error("Failed to connect to remote browser: {0}")]
    Connect(String),
    /// 页面打开失败
    #[error("Failed to open page: {0}")]
    Page(String),
}

/// 浏览器会话
///
/// 一个套件分组共享一个会话：启动（或连接）一次，所有检查复用同一个
/// 页面句柄，分组结束后释放一次。释放通过消费 `close()` 完成，运行器
/// 持有所有权并保证在所有退出路径上调用。
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
    // connect() attaches to a browser we do not own, so there is no child
    // process to reap on close.
    spawned: bool,
}

impl BrowserSession {
    /// 获取浏览器会话
    ///
    /// 配置了远程调试地址（配置项或 `CHROMIUM_REMOTE_DEBUGGING_URL`）时
    /// 连接已有实例，否则按配置的窗口尺寸和浏览器标志启动新实例。
    ///
    /// # 参数
    ///
    /// * `settings` - 浏览器配置
    /// * `wait` - 等待策略，作为会话级的查找超时下发给 CDP 请求
    ///
    /// # 返回值
    ///
    /// * `Ok(BrowserSession)` - 就绪的会话
    /// * `Err(SessionError)` - 获取失败，整组检查无法执行
    pub async fn launch(
        settings: &BrowserSettings,
        wait: &WaitSettings,
    ) -> Result<Self, SessionError> {
        let remote_debugging_url = settings
            .remote_debugging_url
            .clone()
            .or_else(|| std::env::var("CHROMIUM_REMOTE_DEBUGGING_URL").ok());

        let (browser, mut handler, spawned) = if let Some(ref url) = remote_debugging_url {
            tracing::info!("Connecting to remote Chrome instance at: {}", url);
            let (browser, handler) = Browser::connect(url.as_str())
                .await
                .map_err(|e| SessionError::Connect(e.to_string()))?;
            (browser, handler, false)
        } else {
            let mut builder = BrowserConfig::builder()
                .no_sandbox()
                .window_size(settings.window_width, settings.window_height)
                // Session-wide lookup bound, applied to every CDP request
                .request_timeout(wait.timeout());

            builder = builder
                .arg("--start-maximized")
                .arg("--disable-extensions")
                .arg("--disable-infobars")
                .arg("--disable-gpu")
                .arg("--disable-dev-shm-usage");

            if !settings.headless {
                builder = builder.with_head();
            }

            let config = builder.build().map_err(SessionError::Config)?;
            let (browser, handler) = Browser::launch(config)
                .await
                .map_err(|e| SessionError::Launch(e.to_string()))?;
            (browser, handler, true)
        };

        // Spawn a handler to process browser events for the session lifetime
        let handler_task = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| SessionError::Page(e.to_string()))?;

        tracing::info!("Browser session ready");

        Ok(Self {
            browser,
            handler_task,
            page,
            spawned,
        })
    }

    /// 会话共享的页面句柄
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 释放会话
    ///
    /// 消费自身，保证整组检查之后恰好释放一次。关闭过程中的错误只记录
    /// 日志，不向上传播，检查结果不受释放失败影响。
    pub async fn close(mut self) {
        tracing::info!("Closing browser session...");

        if let Err(e) = self.browser.close().await {
            tracing::warn!("Browser close failed: {}", e);
        }

        if self.spawned {
            // Reap the child process; bounded so a wedged browser cannot
            // hang the run.
            if tokio::time::timeout(Duration::from_secs(5), self.browser.wait())
                .await
                .is_err()
            {
                tracing::warn!("Timed out waiting for browser process to exit");
            }
        }

        // The handler loop ends once the connection drops.
        self.handler_task.abort();
        let _ = self.handler_task.await;

        tracing::info!("Browser session closed");
    }
}
