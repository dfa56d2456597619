// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::checks::locator::{Locator, Selector};
use crate::checks::CheckError;
use crate::config::settings::WaitSettings;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::element::Element;
use chromiumoxide::page::{Page, ScreenshotParams};
use std::time::{Duration, Instant};
use url::Url;

/// 页面探针
///
/// 检查驱动页面的唯一入口：导航、带上限的元素等待、可见性判断、
/// 输入与点击。所有查找都受同一个显式等待上限约束。
pub struct PageProbe {
    page: Page,
    target: Url,
    timeout: Duration,
    poll_interval: Duration,
}

impl PageProbe {
    pub fn new(page: Page, target: Url, wait: &WaitSettings) -> Self {
        Self {
            page,
            target,
            timeout: wait.timeout(),
            poll_interval: wait.poll_interval(),
        }
    }

    /// 导航到目标地址
    ///
    /// goto 默认等待 load 事件
    pub async fn goto_target(&self) -> Result<(), CheckError> {
        self.page
            .goto(self.target.as_str())
            .await
            .map_err(|e| CheckError::Navigation(e.to_string()))?;
        Ok(())
    }

    /// 当前页面标题，缺失时为空字符串
    pub async fn title(&self) -> Result<String, CheckError> {
        let title = self
            .page
            .get_title()
            .await
            .map_err(|e| CheckError::Driver(e.to_string()))?;
        Ok(title.unwrap_or_default())
    }

    /// 等待元素出现
    ///
    /// 以配置的间隔轮询查找，超出上限返回 `CheckError::Timeout`
    pub async fn wait_present(&self, locator: &Locator) -> Result<(), CheckError> {
        self.wait_element(locator).await.map(|_| ())
    }

    /// 等待元素出现并返回其文本（去除首尾空白）
    pub async fn wait_text(&self, locator: &Locator) -> Result<String, CheckError> {
        let element = self.wait_element(locator).await?;
        let text = element
            .inner_text()
            .await
            .map_err(|e| CheckError::Driver(e.to_string()))?
            .unwrap_or_default();
        Ok(text.trim().to_string())
    }

    /// 元素是否渲染可见
    ///
    /// 在页面内求值：元素存在、未被 display/visibility 隐藏且盒模型非空
    pub async fn is_displayed(&self, locator: &Locator) -> Result<bool, CheckError> {
        let lookup = match locator.selector() {
            Selector::Css(css) => {
                let quoted = serde_json::to_string(&css)
                    .map_err(|e| CheckError::Driver(e.to_string()))?;
                format!("document.querySelector({})", quoted)
            }
            Selector::XPath(expr) => {
                let quoted = serde_json::to_string(&expr)
                    .map_err(|e| CheckError::Driver(e.to_string()))?;
                format!(
                    "document.evaluate({}, document, null, \
                     XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue",
                    quoted
                )
            }
        };

        let script = format!(
            "(() => {{ \
               const el = {}; \
               if (!el) return false; \
               const style = window.getComputedStyle(el); \
               if (style.display === 'none' || style.visibility === 'hidden') return false; \
               const rect = el.getBoundingClientRect(); \
               return rect.width > 0 && rect.height > 0; \
             }})()",
            lookup
        );

        let result = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| CheckError::Driver(e.to_string()))?;

        Ok(result.into_value::<bool>().unwrap_or(false))
    }

    /// 等待元素出现后输入文本
    pub async fn type_into(&self, locator: &Locator, text: &str) -> Result<(), CheckError> {
        let element = self.wait_element(locator).await?;
        element
            .type_str(text)
            .await
            .map_err(|e| CheckError::Driver(format!("Input failed: {}", e)))?;
        Ok(())
    }

    /// 等待元素出现后点击
    pub async fn click(&self, locator: &Locator) -> Result<(), CheckError> {
        let element = self.wait_element(locator).await?;
        element
            .click()
            .await
            .map_err(|e| CheckError::Driver(format!("Click failed: {}", e)))?;
        Ok(())
    }

    /// 交互后的短暂停顿，给页面一个响应的机会
    pub async fn settle(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// 整页 PNG 截图
    pub async fn screenshot_png(&self) -> Result<Vec<u8>, CheckError> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();

        self.page
            .screenshot(params)
            .await
            .map_err(|e| CheckError::Driver(format!("Screenshot failed: {}", e)))
    }

    async fn wait_element(&self, locator: &Locator) -> Result<Element, CheckError> {
        let deadline = Instant::now() + self.timeout;

        loop {
            match self.find(locator).await {
                Ok(element) => return Ok(element),
                Err(_) if Instant::now() < deadline => {
                    tokio::time::sleep(self.poll_interval).await;
                }
                Err(_) => {
                    return Err(CheckError::Timeout {
                        locator: locator.clone(),
                        timeout: self.timeout,
                    });
                }
            }
        }
    }

    async fn find(&self, locator: &Locator) -> Result<Element, CheckError> {
        match locator.selector() {
            Selector::Css(css) => self
                .page
                .find_element(css)
                .await
                .map_err(|e| CheckError::Driver(e.to_string())),
            Selector::XPath(expr) => self
                .page
                .find_xpath(expr)
                .await
                .map_err(|e| CheckError::Driver(e.to_string())),
        }
    }
}
