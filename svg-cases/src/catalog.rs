//! # Catalog 模块
//!
//! 用例目录：有序的用例列表，构造时整体校验。
//!
//! ## 设计原则
//!
//! - **顺序即语义**：harness 按目录顺序渲染用例
//! - 目录一旦构造成功即保证不变量成立，后续消费方无需再校验

use serde::{Deserialize, Serialize};

use crate::case::CaseParams;
use crate::error::CaseError;

/// 用例目录
///
/// 构造入口（[`new`](Self::new) / [`from_groups`](Self::from_groups)）
/// 校验每个用例并拒绝重复 id；通过后目录不可变。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CaseCatalog {
    cases: Vec<CaseParams>,
}

impl CaseCatalog {
    /// 从用例列表构造目录
    ///
    /// 逐个校验用例不变量，并检查 id 在目录内唯一。
    pub fn new(cases: impl IntoIterator<Item = CaseParams>) -> Result<Self, CaseError> {
        let cases: Vec<CaseParams> = cases.into_iter().collect();
        for case in &cases {
            case.validate()?;
        }
        let mut seen: Vec<&str> = Vec::with_capacity(cases.len());
        for case in &cases {
            if seen.contains(&case.id.as_str()) {
                return Err(CaseError::DuplicateCaseId {
                    id: case.id.clone(),
                });
            }
            seen.push(&case.id);
        }
        Ok(Self { cases })
    }

    /// 从命名子列表按顺序拼接构造目录
    ///
    /// 对应原始数据中 `allCases = [...basicCases, ...]` 的拼接方式。
    pub fn from_groups(
        groups: impl IntoIterator<Item = Vec<CaseParams>>,
    ) -> Result<Self, CaseError> {
        Self::new(groups.into_iter().flatten())
    }

    /// 按目录顺序迭代用例
    pub fn iter(&self) -> impl Iterator<Item = &CaseParams> {
        self.cases.iter()
    }

    /// 按 id 查找用例
    pub fn get(&self, id: &str) -> Option<&CaseParams> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// 用例个数
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// 是否为空目录
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// 按目录顺序列出所有用例 id
    pub fn case_ids(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.id.as_str()).collect()
    }
}

// 反序列化走 TryFrom，保证反序列化出的目录同样经过校验
impl<'de> Deserialize<'de> for CaseCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let cases = Vec::<CaseParams>::deserialize(deserializer)?;
        CaseCatalog::new(cases).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a CaseCatalog {
    type Item = &'a CaseParams;
    type IntoIter = std::slice::Iter<'a, CaseParams>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::CaseKind;
    use crate::element::AttrMap;

    fn case(id: &str, pairs: &[(&str, &str)]) -> CaseParams {
        let stage: AttrMap = pairs.iter().copied().collect();
        CaseParams::new(CaseKind::MulKey, id, vec![stage])
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = CaseCatalog::new(vec![
            case("b", &[("cx", "1")]),
            case("a", &[("cx", "2")]),
            case("c", &[("cx", "3")]),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.case_ids(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let err = CaseCatalog::new(vec![case("p1", &[("cx", "1")]), case("p1", &[("cx", "2")])])
            .unwrap_err();
        assert_eq!(err, CaseError::DuplicateCaseId { id: "p1".into() });
    }

    #[test]
    fn test_catalog_rejects_invalid_case() {
        let bad = CaseParams::new(CaseKind::MulKey, "p", vec![]);
        let err = CaseCatalog::new(vec![bad]).unwrap_err();
        assert_eq!(err, CaseError::EmptyValues { id: "p".into() });
    }

    #[test]
    fn test_from_groups_concatenates_in_order() {
        let basic = vec![case("pattern1", &[("cx", "50%")])];
        let extra = vec![case("pattern2", &[("cx", "10%")])];

        let catalog = CaseCatalog::from_groups(vec![basic, extra]).unwrap();
        assert_eq!(catalog.case_ids(), vec!["pattern1", "pattern2"]);
        assert!(catalog.get("pattern2").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_catalog_deserialize_validates() {
        // 重复 id 的 JSON 必须在反序列化时被拒绝
        let json = r#"[
            {"type": "mulKey", "id": "p", "values": [[["cx", "1"]]]},
            {"type": "mulKey", "id": "p", "values": [[["cx", "2"]]]}
        ]"#;
        let result: Result<CaseCatalog, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_serde_round_trip() {
        let catalog = CaseCatalog::new(vec![case("p1", &[("cx", "50%"), ("cy", "50%")])]).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: CaseCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
