//! # SVG Cases
//!
//! SVG 组件演示用例目录与展开契约的核心库。
//!
//! ## 架构概述
//!
//! `svg-cases` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 它把演示数据建模为**纯数据**，通过展开契约与外部渲染层通信：
//!
//! ```text
//! 演示定义                         渲染层（外部）
//!   │                                │
//!   │── DemoDef ──► expand_def() ──► Vec<RenderedVariant> ──►│
//!   │                                │ 逐变体渲染
//! ```
//!
//! ## 核心类型
//!
//! - [`Element`] / [`AttrMap`]：标记片段的数据表示
//! - [`CaseParams`] / [`CaseCatalog`]：演示用例与有序目录
//! - [`DemoDef`]：harness 的五个输入装配成的演示定义
//! - [`RenderedVariant`]：每用例、每阶段一个的渲染变体
//!
//! ## 使用示例
//!
//! ```ignore
//! use svg_cases::{demos, expand_def};
//!
//! for def in demos::all_demos()? {
//!     for variant in expand_def(&def) {
//!         println!("{}: {}", variant.slug(), variant.root.to_markup());
//!     }
//! }
//! ```
//!
//! ## 模块结构
//!
//! - [`element`]：元素描述符与属性表
//! - [`case`]：用例参数与类型标签
//! - [`catalog`]：用例目录（构造时校验）
//! - [`def`]：演示定义与工厂装配
//! - [`demos`]：内置演示目录
//! - [`harness`]：用例 → 渲染变体的展开契约
//! - [`gradient`]：渐变属性的类型化模型
//! - [`diagnostic`]：演示定义静态检查
//! - [`error`]：错误类型定义

pub mod case;
pub mod catalog;
pub mod def;
pub mod demos;
pub mod diagnostic;
pub mod element;
pub mod error;
pub mod gradient;
pub mod harness;

// 重导出核心类型
pub use case::{CaseKind, CaseParams};
pub use catalog::CaseCatalog;
pub use def::{DemoDef, component_tag_from};
pub use diagnostic::{
    Diagnostic, DiagnosticLevel, DiagnosticResult, analyze_def, extract_def_references,
};
pub use element::{AttrMap, Element, url_reference};
pub use error::{CaseError, CaseResult, ParseError, SvgCaseError};
pub use gradient::{Dimension, Gradient, GradientCoords, GradientKind, GradientStop};
pub use harness::{DEMO_VIEWPORT, RenderedVariant, expand_def};
