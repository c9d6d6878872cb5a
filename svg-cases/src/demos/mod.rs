//! # 内置演示目录
//!
//! 所有内置演示定义的**唯一来源**：按目录顺序列出各演示的工厂函数。
//!
//! 工厂函数是纯函数，每次调用重新装配一份结构相等的 [`DemoDef`]。

use crate::def::DemoDef;
use crate::error::CaseResult;

pub mod linear_gradient;
pub mod radial_gradient;

/// 按目录顺序装配所有内置演示定义
pub fn all_demos() -> CaseResult<Vec<DemoDef>> {
    Ok(vec![linear_gradient::def()?, radial_gradient::def()?])
}

/// 按目录顺序列出所有内置演示组名
pub fn demo_names() -> Vec<&'static str> {
    vec![linear_gradient::DEF_NAME, radial_gradient::DEF_NAME]
}

/// 按组名查找并装配内置演示定义
pub fn demo_by_name(name: &str) -> CaseResult<Option<DemoDef>> {
    for def in all_demos()? {
        if def.def_name == name {
            return Ok(Some(def));
        }
    }
    Ok(None)
}
