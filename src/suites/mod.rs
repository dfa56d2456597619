// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 套件模块
///
/// 两套针对同一前端的冒烟检查，共享检查实现，只在策略上不同：
/// strict 套件所有元素必需；lenient 套件允许可选元素缺席并在失败时留证
pub mod lenient;
pub mod strict;
pub mod ui_checks;

use crate::checks::outcome::Requirement;
use crate::checks::SmokeCheck;

/// 套件中的一项检查
///
/// 要求级别随检查一起声明，跳过与失败的策略在这里一目了然
pub struct SuiteCheck {
    /// 要求级别
    pub requirement: Requirement,
    /// 检查实现
    pub check: Box<dyn SmokeCheck>,
}

impl SuiteCheck {
    pub fn required(check: impl SmokeCheck + 'static) -> Self {
        Self {
            requirement: Requirement::Required,
            check: Box::new(check),
        }
    }

    pub fn optional(check: impl SmokeCheck + 'static) -> Self {
        Self {
            requirement: Requirement::Optional,
            check: Box::new(check),
        }
    }
}

/// 冒烟检查套件
///
/// 一个套件分组独占一个浏览器会话，检查按声明顺序串行执行
pub struct SuiteSpec {
    /// 套件名称
    pub name: &'static str,
    /// 失败时是否保存截图证据
    pub capture_evidence: bool,
    /// 检查列表
    pub checks: Vec<SuiteCheck>,
}
