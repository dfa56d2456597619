// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含目标站点、浏览器、等待策略、证据目录和报告等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 目标站点配置
    pub target: TargetSettings,
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// 等待策略配置
    pub wait: WaitSettings,
    /// 证据配置
    pub evidence: EvidenceSettings,
    /// 报告配置
    pub report: ReportSettings,
}

/// 目标站点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSettings {
    /// 被测前端的地址
    pub url: String,
    /// 预检等待上限（秒）
    pub preflight_timeout_secs: u64,
}

/// 浏览器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserSettings {
    /// 是否无头模式运行
    pub headless: bool,
    /// 窗口宽度（像素）
    pub window_width: u32,
    /// 窗口高度（像素）
    pub window_height: u32,
    /// 远程调试地址 (可选，设置后连接已有浏览器而不是启动新实例)
    pub remote_debugging_url: Option<String>,
}

/// 等待策略配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct WaitSettings {
    /// 显式等待上限（秒）
    pub timeout_secs: u64,
    /// 轮询间隔（毫秒）
    pub poll_interval_ms: u64,
}

/// 证据配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct EvidenceSettings {
    /// 失败截图输出目录
    pub screenshot_dir: String,
}

/// 报告配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// HTML 报告文件路径
    pub html_file: String,
    /// JSON 报告文件路径
    pub json_file: String,
    /// 运行结束后是否在默认查看器中打开报告
    pub open: bool,
}

impl TargetSettings {
    pub fn preflight_timeout(&self) -> Duration {
        Duration::from_secs(self.preflight_timeout_secs)
    }
}

impl WaitSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从默认值、配置文件和环境变量加载配置
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("target.url", "http://localhost:8080")?
            .set_default("target.preflight_timeout_secs", 15)?
            // Default browser settings
            .set_default("browser.headless", true)?
            .set_default("browser.window_width", 1920)?
            .set_default("browser.window_height", 1080)?
            // Default wait settings
            .set_default("wait.timeout_secs", 10)?
            .set_default("wait.poll_interval_ms", 250)?
            // Default evidence settings
            .set_default("evidence.screenshot_dir", "screenshots")?
            // Default report settings
            .set_default("report.html_file", "report.html")?
            .set_default("report.json_file", "report.json")?
            .set_default("report.open", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SMOKRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
