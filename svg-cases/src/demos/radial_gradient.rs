//! 径向渐变演示：焦点位置在各阶段间轮换。

use crate::case::{CaseKind, CaseParams};
use crate::catalog::CaseCatalog;
use crate::def::DemoDef;
use crate::element::{AttrMap, Element};
use crate::error::CaseResult;

/// 演示组名
pub const DEF_NAME: &str = "RadialGradient";

/// 基础用例组：焦点从圆心移到边缘
fn basic_cases() -> Vec<CaseParams> {
    vec![
        CaseParams::new(
            CaseKind::MulKey,
            "focal1",
            vec![
                AttrMap::new().with("fx", "50%").with("fy", "50%"),
                AttrMap::new().with("fx", "30%").with("fy", "30%"),
                AttrMap::new().with("fx", "70%").with("fy", "70%"),
            ],
        ),
        CaseParams::new(
            CaseKind::Single,
            "center1",
            vec![AttrMap::new().with("cx", "50%").with("cy", "50%")],
        ),
    ]
}

/// 默认子元素：两个渐变色标
fn default_children() -> Vec<Element> {
    vec![
        Element::new("stop")
            .attr("offset", "10%")
            .attr("stop-color", "gold"),
        Element::new("stop")
            .attr("offset", "95%")
            .attr("stop-color", "blue"),
    ]
}

/// 效果元素：引用渐变填充的圆
fn effect() -> Element {
    Element::new("circle")
        .attr("cx", "50")
        .attr("cy", "50")
        .attr("r", "40")
        .attr("fill", "url(#myRadial)")
}

/// 装配径向渐变演示定义
pub fn def() -> CaseResult<DemoDef> {
    let cases = CaseCatalog::from_groups(vec![basic_cases()])?;
    Ok(DemoDef::new(
        DEF_NAME,
        AttrMap::new().with("id", "myRadial"),
        cases,
        default_children(),
        effect(),
    ))
}
