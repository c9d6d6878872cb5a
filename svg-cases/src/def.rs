//! # Def 模块
//!
//! 演示定义：把用例目录和模板片段装配成 harness 需要的形状。
//!
//! ## 设计原则
//!
//! - 工厂函数是**纯函数**：不缓存、无副作用，两次调用产出结构相等
//! - [`DemoDef`] 恰好携带 harness 的五个输入，不做任何计算

use serde::{Deserialize, Serialize};

use crate::catalog::CaseCatalog;
use crate::element::{AttrMap, Element};

/// 演示定义
///
/// harness 的五个输入：用例目录、公共默认属性、默认子元素、
/// 效果元素、演示组名；外加从组名派生的定义元素标签。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoDef {
    /// 演示组显示名（如 `LinearGradient`）
    pub def_name: String,
    /// 定义元素的标签名（如 `linearGradient`），默认从 `def_name` 派生
    pub component_tag: String,
    /// 所有用例共享的默认属性覆盖
    pub basic_props: AttrMap,
    /// 用例目录（有序）
    pub cases: CaseCatalog,
    /// 定义元素的默认子元素（如渐变色标）
    pub children: Vec<Element>,
    /// 效果元素：引用定义的被演示元素
    pub effect: Element,
}

impl DemoDef {
    /// 装配演示定义
    ///
    /// `component_tag` 按 [`component_tag_from`] 从 `def_name` 派生，
    /// 需要偏离默认派生时用 [`with_component_tag`](Self::with_component_tag)。
    pub fn new(
        def_name: impl Into<String>,
        basic_props: AttrMap,
        cases: CaseCatalog,
        children: impl IntoIterator<Item = Element>,
        effect: Element,
    ) -> Self {
        let def_name = def_name.into();
        let component_tag = component_tag_from(&def_name);
        Self {
            def_name,
            component_tag,
            basic_props,
            cases,
            children: children.into_iter().collect(),
            effect,
        }
    }

    /// 覆盖派生的定义元素标签
    pub fn with_component_tag(mut self, tag: impl Into<String>) -> Self {
        self.component_tag = tag.into();
        self
    }

    /// 定义的 id（取 `basic_props` 中的 `id`，如果有）
    pub fn def_id(&self) -> Option<&str> {
        self.basic_props.get("id")
    }
}

/// 从演示组名派生定义元素标签：首字母小写
///
/// `LinearGradient` → `linearGradient`，`RadialGradient` → `radialGradient`。
pub fn component_tag_from(def_name: &str) -> String {
    let mut chars = def_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
