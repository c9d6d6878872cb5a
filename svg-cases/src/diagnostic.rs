//! # 诊断模块
//!
//! 对演示定义做静态检查，不依赖 IO 或渲染引擎。
//!
//! ## 设计原则
//!
//! - 纯函数 API，可在无 IO 环境下运行
//! - 诊断分级：Error（必须修复）、Warn（建议修复）、Info（信息提示）
//! - 目录构造已保证的不变量（id 唯一、values 非空等）不重复检查，
//!   这里只查渲染层才会暴露的问题：悬空引用、无效键、坏色标

use std::collections::HashSet;

use crate::def::DemoDef;
use crate::element::url_reference;
use crate::gradient::{Dimension, GradientCoords};

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    /// 信息提示
    Info,
    /// 警告（建议修复）
    Warn,
    /// 错误（必须修复）
    Error,
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// 诊断条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 所属演示组名
    pub def_name: String,
    /// 所属用例 id（如果可定位）
    pub case_id: Option<String>,
    /// 诊断消息
    pub message: String,
    /// 诊断详情（可选）
    pub detail: Option<String>,
}

impl Diagnostic {
    /// 创建错误诊断
    pub fn error(def_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            def_name: def_name.into(),
            case_id: None,
            message: message.into(),
            detail: None,
        }
    }

    /// 创建警告诊断
    pub fn warn(def_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warn,
            def_name: def_name.into(),
            case_id: None,
            message: message.into(),
            detail: None,
        }
    }

    /// 创建信息诊断
    pub fn info(def_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            def_name: def_name.into(),
            case_id: None,
            message: message.into(),
            detail: None,
        }
    }

    /// 设置用例 id
    pub fn with_case(mut self, case_id: impl Into<String>) -> Self {
        self.case_id = Some(case_id.into());
        self
    }

    /// 设置详情
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.def_name)?;
        if let Some(case_id) = &self.case_id {
            write!(f, "/{}", case_id)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n  | {}", detail)?;
        }
        Ok(())
    }
}

/// 诊断结果
#[derive(Debug, Clone, Default)]
pub struct DiagnosticResult {
    /// 诊断条目列表
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticResult {
    /// 创建空结果
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加诊断
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// 合并另一个结果
    pub fn merge(&mut self, other: DiagnosticResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// 获取错误数量
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Error)
            .count()
    }

    /// 获取警告数量
    pub fn warn_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == DiagnosticLevel::Warn)
            .count()
    }

    /// 是否有错误
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// 按级别过滤
    pub fn filter_by_level(&self, min_level: DiagnosticLevel) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level >= min_level)
            .collect()
    }
}

//=============================================================================
// 演示定义分析 API
//=============================================================================

/// 分析演示定义，返回诊断结果
///
/// 执行以下检查：
/// - 效果元素中的 `url(#id)` 引用没有对应的定义 id（Error）
/// - 定义 id 从未被效果元素引用（Warn）
/// - 用例覆盖键不属于定义元素认识的属性（Warn）
/// - 色标 offset 无法解析（Error）或超出 0-100%（Warn）
pub fn analyze_def(def: &DemoDef) -> DiagnosticResult {
    let mut result = DiagnosticResult::new();

    check_references(def, &mut result);
    check_case_keys(def, &mut result);
    check_stops(def, &mut result);

    result
}

/// 提取效果元素子树中的所有 `url(#id)` 引用（按出现顺序）
pub fn extract_def_references(def: &DemoDef) -> Vec<String> {
    def.effect
        .collect_url_references()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// 引用完整性：效果元素的 url 引用 ↔ 定义 id
fn check_references(def: &DemoDef, result: &mut DiagnosticResult) {
    let mut defined: Vec<&str> = Vec::new();
    if let Some(id) = def.def_id() {
        defined.push(id);
    }
    for child in &def.children {
        if let Some(id) = child.id() {
            defined.push(id);
        }
    }

    let references = def.effect.collect_url_references();

    // 按出现顺序报告，重复引用只报一次
    let mut seen: HashSet<&str> = HashSet::new();
    for &reference in &references {
        if !seen.insert(reference) {
            continue;
        }
        if !defined.contains(&reference) {
            result.push(
                Diagnostic::error(
                    &def.def_name,
                    format!("未定义的引用目标: url(#{reference})"),
                )
                .with_detail(format!("效果元素引用了不存在的定义 id '{reference}'")),
            );
        }
    }
    for id in defined {
        if !references.contains(&id) {
            result.push(
                Diagnostic::warn(&def.def_name, format!("定义 id '{id}' 未被效果元素引用")),
            );
        }
    }
}

/// 用例覆盖键必须是渐变定义认识的坐标属性
///
/// 只有定义元素是渐变标签时才能判定键集合；其他标签跳过检查。
/// 两类渐变的坐标键都接受。
fn check_case_keys(def: &DemoDef, result: &mut DiagnosticResult) {
    if !matches!(
        def.component_tag.as_str(),
        "linearGradient" | "radialGradient"
    ) {
        return;
    }
    let known = GradientCoords::ALL_COORD_KEYS;

    for case in def.cases.iter() {
        for key in case.key_set() {
            if key != "id" && !known.contains(&key) {
                result.push(
                    Diagnostic::warn(
                        &def.def_name,
                        format!("覆盖键 '{key}' 不是渐变定义的已知属性"),
                    )
                    .with_case(&case.id)
                    .with_detail(format!("已知属性: {}", known.join(", "))),
                );
            }
        }
    }
}

/// 色标 offset 合法性
fn check_stops(def: &DemoDef, result: &mut DiagnosticResult) {
    for (index, child) in def.children.iter().enumerate() {
        if child.tag != "stop" {
            continue;
        }
        let Some(raw) = child.get_attr("offset") else {
            result.push(Diagnostic::error(
                &def.def_name,
                format!("第 {index} 个色标缺少 offset 属性"),
            ));
            continue;
        };
        match raw.parse::<Dimension>() {
            Ok(Dimension::Percent(p)) if !(0.0..=100.0).contains(&p) => {
                result.push(Diagnostic::warn(
                    &def.def_name,
                    format!("第 {index} 个色标 offset {p}% 超出 0-100% 范围"),
                ));
            }
            Ok(_) => {}
            Err(_) => {
                result.push(
                    Diagnostic::error(
                        &def.def_name,
                        format!("第 {index} 个色标 offset 无法解析"),
                    )
                    .with_detail(format!("offset = '{raw}'")),
                );
            }
        }
    }
}
