//! # Error 模块
//!
//! 定义 svg-cases 中使用的错误类型。

use thiserror::Error;

/// 解析错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// 无效的长度值
    #[error("无效的长度值 '{value}'")]
    InvalidDimension { value: String },

    /// 无效的渐变 stop
    #[error("第 {index} 个 stop 无效 - {message}")]
    InvalidStop { index: usize, message: String },

    /// 不支持的渐变元素标签
    #[error("不支持的渐变元素标签 '{tag}'")]
    UnsupportedGradientTag { tag: String },

    /// 无效的 stop 数值对列表
    #[error("stop 数值对列表长度 {len} 不是偶数")]
    OddStopPairList { len: usize },
}

/// 用例定义错误
///
/// 用例目录在**构造时**校验，不把坏数据推迟到渲染层。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaseError {
    /// 用例 id 为空
    #[error("用例 id 不能为空")]
    EmptyCaseId,

    /// 用例 id 重复
    #[error("用例 id '{id}' 重复")]
    DuplicateCaseId { id: String },

    /// 用例没有任何取值
    #[error("用例 '{id}' 的 values 为空")]
    EmptyValues { id: String },

    /// 用例取值的键集合不一致
    #[error("用例 '{id}' 第 {index} 组取值的键集合 [{found}] 与首组 [{expected}] 不一致")]
    InconsistentKeys {
        id: String,
        index: usize,
        expected: String,
        found: String,
    },
}

/// svg-cases 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvgCaseError {
    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),

    /// 用例定义错误
    #[error("用例定义错误: {0}")]
    Case(#[from] CaseError),
}

/// Result 类型别名
pub type CaseResult<T> = Result<T, SvgCaseError>;
