// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 元素定位器
///
/// 冒烟检查使用的全部查找策略：标签名、name 属性、class、id 和 XPath。
/// 前四种翻译为 CSS 选择器，XPath 走独立的查找通道。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// 按标签名查找
    Tag(String),
    /// 按 name 属性查找
    Name(String),
    /// 按 class 查找
    ClassName(String),
    /// 按元素 id 查找
    Id(String),
    /// 按 XPath 表达式查找
    XPath(String),
}

/// 定位器翻译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// CSS 选择器
    Css(String),
    /// XPath 表达式
    XPath(String),
}

impl Locator {
    pub fn tag(name: impl Into<String>) -> Self {
        Locator::Tag(name.into())
    }

    pub fn name(value: impl Into<String>) -> Self {
        Locator::Name(value.into())
    }

    pub fn class_name(value: impl Into<String>) -> Self {
        Locator::ClassName(value.into())
    }

    pub fn id(value: impl Into<String>) -> Self {
        Locator::Id(value.into())
    }

    pub fn xpath(expr: impl Into<String>) -> Self {
        Locator::XPath(expr.into())
    }

    /// 翻译为自动化层可执行的选择器
    pub fn selector(&self) -> Selector {
        match self {
            Locator::Tag(name) => Selector::Css(name.clone()),
            Locator::Name(value) => Selector::Css(format!("[name=\"{}\"]", value)),
            Locator::ClassName(value) => Selector::Css(format!(".{}", value)),
            Locator::Id(value) => Selector::Css(format!("#{}", value)),
            Locator::XPath(expr) => Selector::XPath(expr.clone()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Tag(name) => write!(f, "tag <{}>", name),
            Locator::Name(value) => write!(f, "name \"{}\"", value),
            Locator::ClassName(value) => write!(f, "class \"{}\"", value),
            Locator::Id(value) => write!(f, "id \"{}\"", value),
            Locator::XPath(expr) => write!(f, "xpath \"{}\"", expr),
        }
    }
}
