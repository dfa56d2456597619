// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::suites::ui_checks::{
    ButtonClick, ChartWidget, HeadingExists, LoginForm, NavigationBar, PageTitle,
};
use crate::suites::{SuiteCheck, SuiteSpec};

/// 宽容套件
///
/// 标题、主标题和导航栏必需；按钮、登录表单和图表属于可选功能，
/// 缺席记为跳过。失败时保存整页截图作为排查证据。
pub fn suite() -> SuiteSpec {
    SuiteSpec {
        name: "lenient",
        capture_evidence: true,
        checks: vec![
            SuiteCheck::required(PageTitle),
            SuiteCheck::required(HeadingExists),
            SuiteCheck::required(NavigationBar),
            SuiteCheck::optional(ButtonClick),
            SuiteCheck::optional(LoginForm),
            SuiteCheck::optional(ChartWidget),
        ],
    }
}
