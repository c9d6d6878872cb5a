//! 线性渐变演示：渐变圆心在三个阶段间轮换。

use crate::case::{CaseKind, CaseParams};
use crate::catalog::CaseCatalog;
use crate::def::DemoDef;
use crate::element::{AttrMap, Element};
use crate::error::CaseResult;

/// 演示组名
pub const DEF_NAME: &str = "LinearGradient";

/// 基础用例组
fn basic_cases() -> Vec<CaseParams> {
    vec![CaseParams::new(
        CaseKind::MulKey,
        "pattern1",
        vec![
            AttrMap::new().with("cx", "50%").with("cy", "50%"),
            AttrMap::new().with("cx", "40%").with("cy", "40%"),
            AttrMap::new().with("cx", "80%").with("cy", "80%"),
        ],
    )]
}

/// 默认子元素：两个渐变色标
fn default_children() -> Vec<Element> {
    vec![
        Element::new("stop")
            .attr("offset", "30%")
            .attr("stop-color", "yellow"),
        Element::new("stop")
            .attr("offset", "95%")
            .attr("stop-color", "red"),
    ]
}

/// 效果元素：引用渐变填充的圆
fn effect() -> Element {
    Element::new("circle")
        .attr("cx", "50")
        .attr("cy", "50")
        .attr("r", "40")
        .attr("fill", "url(#myGradient)")
}

/// 装配线性渐变演示定义
pub fn def() -> CaseResult<DemoDef> {
    let cases = CaseCatalog::from_groups(vec![basic_cases()])?;
    Ok(DemoDef::new(
        DEF_NAME,
        AttrMap::new().with("id", "myGradient"),
        cases,
        default_children(),
        effect(),
    ))
}
