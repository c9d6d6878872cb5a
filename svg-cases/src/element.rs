//! # Element 模块
//!
//! 把标记片段表示为**纯数据**：标签名 + 属性表 + 子元素列表。
//!
//! ## 设计原则
//!
//! - **声明式**：Element 描述"是什么"，不执行任何渲染
//! - **顺序敏感**：属性与子元素都保持插入顺序，输出可确定
//! - **引擎无关**：不包含任何绘制 API 的类型

use serde::{Deserialize, Serialize};

/// 有序属性表
///
/// 按插入顺序保存 `(键, 值)` 对，`set` 对已存在的键就地覆盖。
/// 用例的 values、元素属性、basicProps 共用此类型。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrMap(Vec<(String, String)>);

impl AttrMap {
    /// 创建空属性表
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置属性：键已存在则覆盖值，否则追加到末尾
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    /// 链式设置属性（便于构造常量数据）
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// 按键取值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 是否包含键
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// 按插入顺序迭代键
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// 排序后的键集合（用于键集合一致性比较）
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }

    /// 按插入顺序迭代 `(键, 值)` 对
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 属性个数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 合并另一张属性表：other 中的键覆盖/追加到 self 的副本
    pub fn merged(&self, other: &AttrMap) -> AttrMap {
        let mut out = self.clone();
        for (k, v) in other.iter() {
            out.set(k, v);
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = AttrMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// 元素描述符
///
/// 对应一段标记：`<tag attr="value">children</tag>`。
/// 只描述结构，具体语义由外部渲染层解释。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// 标签名（如 `circle`、`stop`、`linearGradient`）
    pub tag: String,
    /// 属性表（插入顺序即输出顺序）
    pub attrs: AttrMap,
    /// 子元素列表
    pub children: Vec<Element>,
}

impl Element {
    /// 创建无属性、无子元素的元素
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: AttrMap::new(),
            children: Vec::new(),
        }
    }

    /// 链式添加属性
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// 链式添加单个子元素
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// 链式添加一组子元素
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// 按键取属性值
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    /// 元素的 `id` 属性
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// 在自身及后代中按 `id` 属性查找元素（先序遍历，取首个命中）
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_id(id))
    }

    /// 收集自身及后代属性值中的所有 `url(#id)` 引用（按出现顺序）
    pub fn collect_url_references(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        self.collect_url_refs_into(&mut refs);
        refs
    }

    fn collect_url_refs_into<'a>(&'a self, refs: &mut Vec<&'a str>) {
        for (_, value) in self.attrs.iter() {
            if let Some(id) = url_reference(value) {
                refs.push(id);
            }
        }
        for child in &self.children {
            child.collect_url_refs_into(refs);
        }
    }

    /// 输出确定性的标记文本
    ///
    /// 无子元素时自闭合；属性按插入顺序输出；值做最小转义。
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in self.attrs.iter() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_markup())
    }
}

/// 从属性值中提取 `url(#id)` 形式的引用目标
///
/// 非引用值返回 None；`url(#)`（空 id）同样返回 None。
pub fn url_reference(value: &str) -> Option<&str> {
    let inner = value
        .trim()
        .strip_prefix("url(#")?
        .strip_suffix(')')?
        .trim();
    if inner.is_empty() { None } else { Some(inner) }
}

/// 属性值最小转义：`& < > "`
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
