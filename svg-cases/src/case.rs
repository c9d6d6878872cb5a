//! # Case 模块
//!
//! 定义组件演示用例：一组对模板元素的属性覆盖。
//!
//! ## 设计原则
//!
//! - 用例只是**参数数据**，不解释任何渲染语义
//! - `kind` 标签对目录层不透明，由 harness 层解释（见 [`crate::harness`]）
//! - 坏数据在构造时报 [`CaseError`]，不推迟到渲染层

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::element::AttrMap;
use crate::error::CaseError;

/// 用例类型标签
///
/// 对应原始数据中的 `type` 字段。目录层只存储，不解释；
/// harness 层按此标签决定一个用例展开成多少个渲染变体。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseKind {
    /// 多组键值：values 中的每组取值各产生一个变体（逐组轮换）
    #[serde(rename = "mulKey")]
    MulKey,
    /// 单组键值：只取 values 的首组
    #[serde(rename = "single")]
    Single,
}

impl CaseKind {
    /// 标签的字符串形式（与序列化格式一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MulKey => "mulKey",
            Self::Single => "single",
        }
    }
}

impl FromStr for CaseKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mulKey" => Ok(Self::MulKey),
            "single" => Ok(Self::Single),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 演示用例参数
///
/// 一个用例描述模板元素的一组属性覆盖：
/// `values` 中的每个 [`AttrMap`] 是一个阶段的覆盖值。
///
/// # 不变量
///
/// - `id` 非空，目录内唯一
/// - `values` 非空
/// - `values` 中每组取值的键集合一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseParams {
    /// 用例类型标签
    #[serde(rename = "type")]
    pub kind: CaseKind,
    /// 用例标识（目录内唯一）
    pub id: String,
    /// 有序的属性覆盖序列（每个元素是一个阶段）
    pub values: Vec<AttrMap>,
}

impl CaseParams {
    /// 创建用例
    pub fn new(
        kind: CaseKind,
        id: impl Into<String>,
        values: impl IntoIterator<Item = AttrMap>,
    ) -> Self {
        Self {
            kind,
            id: id.into(),
            values: values.into_iter().collect(),
        }
    }

    /// 校验用例自身的不变量
    ///
    /// 检查：
    /// - `id` 非空
    /// - `values` 非空
    /// - 每组取值的键集合与首组一致
    pub fn validate(&self) -> Result<(), CaseError> {
        if self.id.trim().is_empty() {
            return Err(CaseError::EmptyCaseId);
        }
        let Some(first) = self.values.first() else {
            return Err(CaseError::EmptyValues {
                id: self.id.clone(),
            });
        };
        let expected = first.sorted_keys();
        for (index, value) in self.values.iter().enumerate().skip(1) {
            let found = value.sorted_keys();
            if found != expected {
                return Err(CaseError::InconsistentKeys {
                    id: self.id.clone(),
                    index,
                    expected: expected.join(", "),
                    found: found.join(", "),
                });
            }
        }
        Ok(())
    }

    /// 用例覆盖的键集合（取首组，已按字典序排序）
    ///
    /// 仅对通过 [`validate`](Self::validate) 的用例有意义。
    pub fn key_set(&self) -> Vec<&str> {
        self.values
            .first()
            .map(|v| v.sorted_keys())
            .unwrap_or_default()
    }

    /// 阶段数（values 的组数）
    pub fn stage_count(&self) -> usize {
        self.values.len()
    }
}
