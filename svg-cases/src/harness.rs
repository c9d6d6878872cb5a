//! # Harness 模块
//!
//! 用例目录 → 渲染变体的展开契约。
//!
//! ## 展开规则
//!
//! ```text
//! DemoDef                        RenderedVariant（每用例、每阶段一个）
//!   │                               │
//!   │  用例 p1 (mulKey, 3 组取值)   │  p1/0, p1/1, p1/2
//!   │  用例 p2 (single, 2 组取值)   │  p2/0（只取首组）
//! ```
//!
//! 每个变体是一棵独立的元素树：
//!
//! ```text
//! <svg width=100 height=100>
//!   <defs>
//!     <component_tag {basic_props + 阶段覆盖}> {children} </component_tag>
//!   </defs>
//!   {effect}
//! </svg>
//! ```
//!
//! 展开是纯函数：目录在构造时已校验，这里不再做任何检查。

use serde::{Deserialize, Serialize};

use crate::case::{CaseKind, CaseParams};
use crate::def::DemoDef;
use crate::element::Element;

/// 演示画布边长（效果元素按 100×100 画布设计）
pub const DEMO_VIEWPORT: u32 = 100;

/// 一个渲染变体
///
/// `stage` 是该用例 values 中的组下标（从 0 开始）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedVariant {
    /// 所属演示组名
    pub def_name: String,
    /// 所属用例 id
    pub case_id: String,
    /// 阶段下标
    pub stage: usize,
    /// 变体的元素树根（`svg` 元素）
    pub root: Element,
}

impl RenderedVariant {
    /// 变体的稳定标识：`<def_name>__<case_id>__<stage>`
    pub fn slug(&self) -> String {
        format!("{}__{}__{}", self.def_name, self.case_id, self.stage)
    }
}

/// 展开一个演示定义的全部渲染变体
///
/// 按目录顺序逐用例、逐阶段产出；`mulKey` 用例每组取值一个变体，
/// `single` 用例只取首组。
pub fn expand_def(def: &DemoDef) -> Vec<RenderedVariant> {
    let mut variants = Vec::new();
    for case in def.cases.iter() {
        for stage in case_stages(case) {
            variants.push(build_variant(def, case, stage));
        }
    }
    variants
}

/// 用例展开的阶段下标
fn case_stages(case: &CaseParams) -> std::ops::Range<usize> {
    match case.kind {
        CaseKind::MulKey => 0..case.values.len(),
        // 目录校验保证 values 非空
        CaseKind::Single => 0..1,
    }
}

/// 构造单个变体的元素树
fn build_variant(def: &DemoDef, case: &CaseParams, stage: usize) -> RenderedVariant {
    let overrides = &case.values[stage];
    let mut component = Element::new(&def.component_tag)
        .with_children(def.children.iter().cloned());
    component.attrs = def.basic_props.merged(overrides);

    let root = Element::new("svg")
        .attr("width", DEMO_VIEWPORT.to_string())
        .attr("height", DEMO_VIEWPORT.to_string())
        .child(Element::new("defs").child(component))
        .child(def.effect.clone());

    RenderedVariant {
        def_name: def.def_name.clone(),
        case_id: case.id.clone(),
        stage,
        root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CaseCatalog;
    use crate::element::AttrMap;

    fn stage(pairs: &[(&str, &str)]) -> AttrMap {
        pairs.iter().copied().collect()
    }

    fn sample_def() -> DemoDef {
        let cases = CaseCatalog::new(vec![
            CaseParams::new(
                CaseKind::MulKey,
                "pattern1",
                vec![
                    stage(&[("cx", "50%"), ("cy", "50%")]),
                    stage(&[("cx", "40%"), ("cy", "40%")]),
                    stage(&[("cx", "80%"), ("cy", "80%")]),
                ],
            ),
            CaseParams::new(
                CaseKind::Single,
                "static1",
                vec![stage(&[("cx", "10%"), ("cy", "10%")]), stage(&[("cx", "90%"), ("cy", "90%")])],
            ),
        ])
        .unwrap();

        DemoDef::new(
            "LinearGradient",
            AttrMap::new().with("id", "myGradient"),
            cases,
            vec![
                Element::new("stop")
                    .attr("offset", "30%")
                    .attr("stop-color", "yellow"),
                Element::new("stop")
                    .attr("offset", "95%")
                    .attr("stop-color", "red"),
            ],
            Element::new("circle")
                .attr("cx", "50")
                .attr("cy", "50")
                .attr("r", "40")
                .attr("fill", "url(#myGradient)"),
        )
    }

    #[test]
    fn test_expand_counts_and_order() {
        let def = sample_def();
        let variants = expand_def(&def);

        // mulKey 3 个阶段 + single 1 个
        assert_eq!(variants.len(), 4);
        let slugs: Vec<String> = variants.iter().map(|v| v.slug()).collect();
        assert_eq!(
            slugs,
            vec![
                "LinearGradient__pattern1__0",
                "LinearGradient__pattern1__1",
                "LinearGradient__pattern1__2",
                "LinearGradient__static1__0",
            ]
        );
    }

    #[test]
    fn test_variant_merges_basic_props_with_stage() {
        let def = sample_def();
        let variants = expand_def(&def);

        let defs = &variants[1].root.children[0];
        assert_eq!(defs.tag, "defs");
        let component = &defs.children[0];
        assert_eq!(component.tag, "linearGradient");
        // basic_props 在前，阶段覆盖追加在后
        assert_eq!(component.get_attr("id"), Some("myGradient"));
        assert_eq!(component.get_attr("cx"), Some("40%"));
        assert_eq!(component.get_attr("cy"), Some("40%"));
        // 默认子元素原样带入
        assert_eq!(component.children.len(), 2);
        assert_eq!(component.children[0].get_attr("stop-color"), Some("yellow"));
    }

    #[test]
    fn test_variant_root_shape() {
        let def = sample_def();
        let first = &expand_def(&def)[0];

        assert_eq!(first.root.tag, "svg");
        assert_eq!(first.root.get_attr("width"), Some("100"));
        assert_eq!(first.root.children.len(), 2);
        // defs 在前，效果元素在后
        assert_eq!(first.root.children[0].tag, "defs");
        assert_eq!(first.root.children[1].tag, "circle");
        assert_eq!(
            first.root.children[1].get_attr("fill"),
            Some("url(#myGradient)")
        );
    }

    #[test]
    fn test_single_case_takes_first_stage_only() {
        let def = sample_def();
        let variants = expand_def(&def);
        let single: Vec<_> = variants.iter().filter(|v| v.case_id == "static1").collect();

        assert_eq!(single.len(), 1);
        let component = &single[0].root.children[0].children[0];
        assert_eq!(component.get_attr("cx"), Some("10%"));
    }

    #[test]
    fn test_expand_is_pure() {
        let def = sample_def();
        assert_eq!(expand_def(&def), expand_def(&def));
    }

    #[test]
    fn test_variant_markup() {
        let def = sample_def();
        let first = &expand_def(&def)[0];
        let markup = first.root.to_markup();

        assert!(markup.starts_with(r#"<svg width="100" height="100">"#));
        assert!(markup.contains(r#"<linearGradient id="myGradient" cx="50%" cy="50%">"#));
        assert!(markup.contains(r#"<stop offset="30%" stop-color="yellow" />"#));
        assert!(markup.ends_with(r#"<circle cx="50" cy="50" r="40" fill="url(#myGradient)" /></svg>"#));
    }
}
