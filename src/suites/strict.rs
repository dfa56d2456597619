// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::suites::ui_checks::{
    ButtonClick, ChartWidget, ContactForm, HeadingExists, LoginFlow, NavigationBar, PageTitle,
};
use crate::suites::{SuiteCheck, SuiteSpec};

/// 严格套件
///
/// 全量检查，任何元素缺失都计为失败，不保存截图证据
pub fn suite() -> SuiteSpec {
    SuiteSpec {
        name: "strict",
        capture_evidence: false,
        checks: vec![
            SuiteCheck::required(PageTitle),
            SuiteCheck::required(HeadingExists),
            SuiteCheck::required(NavigationBar),
            SuiteCheck::required(ButtonClick),
            SuiteCheck::required(ContactForm),
            SuiteCheck::required(LoginFlow),
            SuiteCheck::required(ChartWidget),
        ],
    }
}
