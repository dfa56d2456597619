// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 检查模块
///
/// 定义元素定位器、检查结果分类和页面探针
pub mod locator;
pub mod outcome;
pub mod probe;

use async_trait::async_trait;
use probe::PageProbe;
use thiserror::Error;

/// 检查错误类型
#[derive(Error, Debug)]
pub enum CheckError {
    /// 等待超时，目标元素在时限内未出现
    #[error("Timed out after {timeout:?} waiting for {locator}")]
    Timeout {
        locator: locator::Locator,
        timeout: std::time::Duration,
    },
    /// 断言失败，观测值与预期不符
    #[error("Assertion failed: {0}")]
    Assertion(String),
    /// 导航失败
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// 自动化层错误
    #[error("Driver error: {0}")]
    Driver(String),
}

/// 冒烟检查特质
///
/// 每个检查驱动共享的页面探针完成一次"等待 → 断言 →（可选）交互"流程。
/// 检查之间互不调用，执行顺序由套件定义。
#[async_trait]
pub trait SmokeCheck: Send + Sync {
    /// 检查名称，用于日志、报告和失败截图命名
    fn name(&self) -> &'static str;

    /// 执行检查
    async fn run(&self, probe: &PageProbe) -> Result<(), CheckError>;
}
