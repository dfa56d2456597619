// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::checks::locator::Locator;
use crate::checks::probe::PageProbe;
use crate::checks::{CheckError, SmokeCheck};
use async_trait::async_trait;
use std::time::Duration;

// Pause after an interaction before the page is inspected again
const SETTLE: Duration = Duration::from_secs(1);

/// 页面标题检查
///
/// 标题非空即通过
pub struct PageTitle;

#[async_trait]
impl SmokeCheck for PageTitle {
    fn name(&self) -> &'static str {
        "page_title"
    }

    async fn run(&self, probe: &PageProbe) -> Result<(), CheckError> {
        let title = probe.title().await?;
        if title.trim().is_empty() {
            return Err(CheckError::Assertion(
                "Page title should not be empty".to_string(),
            ));
        }
        tracing::info!("Title: {}", title);
        Ok(())
    }
}

/// 主标题检查
///
/// 等待 `<h1>` 出现且文本非空
pub struct HeadingExists;

#[async_trait]
impl SmokeCheck for HeadingExists {
    fn name(&self) -> &'static str {
        "heading_exists"
    }

    async fn run(&self, probe: &PageProbe) -> Result<(), CheckError> {
        let text = probe.wait_text(&Locator::tag("h1")).await?;
        if text.is_empty() {
            return Err(CheckError::Assertion(
                "Heading <h1> has no text".to_string(),
            ));
        }
        tracing::info!("Heading found: {}", text);
        Ok(())
    }
}

/// 导航栏检查
///
/// `<nav>` 存在且渲染可见
pub struct NavigationBar;

#[async_trait]
impl SmokeCheck for NavigationBar {
    fn name(&self) -> &'static str {
        "navigation_bar"
    }

    async fn run(&self, probe: &PageProbe) -> Result<(), CheckError> {
        let nav = Locator::tag("nav");
        probe.wait_present(&nav).await?;
        if !probe.is_displayed(&nav).await? {
            return Err(CheckError::Assertion(
                "Navigation bar is not visible".to_string(),
            ));
        }
        Ok(())
    }
}

/// 按钮点击检查
///
/// 第一个按钮可见并可点击
pub struct ButtonClick;

#[async_trait]
impl SmokeCheck for ButtonClick {
    fn name(&self) -> &'static str {
        "button_click"
    }

    async fn run(&self, probe: &PageProbe) -> Result<(), CheckError> {
        let button = Locator::tag("button");
        probe.wait_present(&button).await?;
        if !probe.is_displayed(&button).await? {
            return Err(CheckError::Assertion("Button is not visible".to_string()));
        }
        probe.click(&button).await?;
        probe.settle(SETTLE).await;
        tracing::info!("Button clicked successfully");
        Ok(())
    }
}

/// 留言表单检查
///
/// 填写姓名和邮箱提交后出现包含 "Thank you" 的成功提示
pub struct ContactForm;

#[async_trait]
impl SmokeCheck for ContactForm {
    fn name(&self) -> &'static str {
        "form_submission"
    }

    async fn run(&self, probe: &PageProbe) -> Result<(), CheckError> {
        probe.type_into(&Locator::name("name"), "Test User").await?;
        probe
            .type_into(&Locator::name("email"), "test@example.com")
            .await?;
        probe.click(&Locator::xpath("//form//button")).await?;

        let feedback = probe.wait_text(&Locator::class_name("success")).await?;
        if !feedback.contains("Thank you") {
            return Err(CheckError::Assertion(format!(
                "Unexpected submission feedback: {:?}",
                feedback
            )));
        }
        Ok(())
    }
}

/// 登录流程检查
///
/// 用用户名和密码登录后 `#dashboard` 容器可见
pub struct LoginFlow;

#[async_trait]
impl SmokeCheck for LoginFlow {
    fn name(&self) -> &'static str {
        "login_flow"
    }

    async fn run(&self, probe: &PageProbe) -> Result<(), CheckError> {
        probe.type_into(&Locator::name("username"), "admin").await?;
        probe
            .type_into(&Locator::name("password"), "password123")
            .await?;
        probe
            .click(&Locator::xpath("//button[contains(text(),'Login')]"))
            .await?;

        let dashboard = Locator::id("dashboard");
        probe.wait_present(&dashboard).await?;
        if !probe.is_displayed(&dashboard).await? {
            return Err(CheckError::Assertion(
                "Login dashboard not shown".to_string(),
            ));
        }
        Ok(())
    }
}

/// 登录表单检查
///
/// 邮箱与密码输入框及提交按钮均可见，填入演示数据后提交
pub struct LoginForm;

#[async_trait]
impl SmokeCheck for LoginForm {
    fn name(&self) -> &'static str {
        "login_form"
    }

    async fn run(&self, probe: &PageProbe) -> Result<(), CheckError> {
        let email = Locator::name("email");
        let password = Locator::name("password");
        let submit = Locator::xpath("//button[@type='submit']");

        probe.wait_present(&email).await?;
        probe.wait_present(&password).await?;
        probe.wait_present(&submit).await?;

        for (locator, label) in [
            (&email, "Email field"),
            (&password, "Password field"),
            (&submit, "Submit button"),
        ] {
            if !probe.is_displayed(locator).await? {
                return Err(CheckError::Assertion(format!("{} not visible", label)));
            }
        }

        probe.type_into(&email, "test@example.com").await?;
        probe.type_into(&password, "password123").await?;
        probe.click(&submit).await?;
        probe.settle(SETTLE).await;
        Ok(())
    }
}

/// 图表组件检查
///
/// 图表容器渲染可见
pub struct ChartWidget;

#[async_trait]
impl SmokeCheck for ChartWidget {
    fn name(&self) -> &'static str {
        "chart_widget"
    }

    async fn run(&self, probe: &PageProbe) -> Result<(), CheckError> {
        let chart = Locator::class_name("recharts-wrapper");
        probe.wait_present(&chart).await?;
        if !probe.is_displayed(&chart).await? {
            return Err(CheckError::Assertion(
                "Chart component is not visible".to_string(),
            ));
        }
        tracing::info!("Chart component is visible");
        Ok(())
    }
}
