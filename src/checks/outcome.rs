// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::checks::CheckError;
use serde::Serialize;

/// 检查要求级别
///
/// 套件中的每个检查显式携带该标记，缺失可选元素产生跳过而不是失败
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// 必需元素，缺失即失败
    Required,
    /// 可选元素，缺失记为跳过
    Optional,
}

/// 检查结果
///
/// 带标记的三态结果，跳过与失败的区分是数据而不是异常类型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum Outcome {
    /// 通过
    Pass,
    /// 失败，附失败原因
    Fail(String),
    /// 跳过，附跳过原因
    Skip(String),
}

impl Outcome {
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skip(_))
    }
}

/// 结果分类
///
/// (检查结果, 要求级别) 到三态结果的纯函数映射：
/// 只有"等待超时（元素未出现）"对可选检查映射为跳过；已找到元素之后的
/// 可见性或交互失败说明功能有缺陷，无论要求级别都是失败。
pub fn classify(result: Result<(), CheckError>, requirement: Requirement) -> Outcome {
    match result {
        Ok(()) => Outcome::Pass,
        Err(e @ CheckError::Timeout { .. }) => match requirement {
            Requirement::Optional => Outcome::Skip(e.to_string()),
            Requirement::Required => Outcome::Fail(e.to_string()),
        },
        Err(e) => Outcome::Fail(e.to_string()),
    }
}
