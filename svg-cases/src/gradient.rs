//! # Gradient 模块
//!
//! 渐变定义元素的类型化属性模型。
//!
//! ## 设计说明
//!
//! 演示数据中的渐变属性全部是字符串（`"50%"`、`"40"`）。
//! 此模块把字符串属性解析为类型化模型，供诊断层检查；
//! 真正的着色计算属于外部渲染层，不在此 crate 范围内。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::element::Element;
use crate::error::ParseError;

/// 长度值
///
/// 支持百分比（`"50%"`）、像素（`"12px"`）与裸数字（按像素处理）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Dimension {
    /// 百分比，存储 0-100 区间的数值（`"50%"` → `Percent(50.0)`）
    Percent(f64),
    /// 像素
    Px(f64),
}

impl Dimension {
    /// 相对基准长度求值：百分比映射到基准长度，像素原样返回
    pub fn resolve(&self, base: f64) -> f64 {
        match self {
            Self::Percent(p) => p / 100.0 * base,
            Self::Px(v) => *v,
        }
    }

    /// 数值部分
    pub fn value(&self) -> f64 {
        match self {
            Self::Percent(p) => *p,
            Self::Px(v) => *v,
        }
    }

    /// 是否为百分比
    pub fn is_percent(&self) -> bool {
        matches!(self, Self::Percent(_))
    }
}

impl FromStr for Dimension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParseError::InvalidDimension {
            value: s.to_string(),
        };

        if let Some(num) = trimmed.strip_suffix('%') {
            let v: f64 = num.trim().parse().map_err(|_| invalid())?;
            return Ok(Self::Percent(v));
        }
        let num = trimmed.strip_suffix("px").unwrap_or(trimmed);
        let v: f64 = num.trim().parse().map_err(|_| invalid())?;
        if v.is_finite() {
            Ok(Self::Px(v))
        } else {
            Err(invalid())
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Px(v) => write!(f, "{v}"),
        }
    }
}

/// 渐变类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientKind {
    /// 线性渐变
    Linear,
    /// 径向渐变
    Radial,
}

/// 渐变坐标属性
///
/// 未出现的属性保持 `None`，与原始 setter 逐属性赋值的行为一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GradientCoords {
    /// 线性渐变坐标：起点 `(x1, y1)`、终点 `(x2, y2)`
    Linear {
        x1: Option<Dimension>,
        y1: Option<Dimension>,
        x2: Option<Dimension>,
        y2: Option<Dimension>,
    },
    /// 径向渐变坐标：圆心 `(cx, cy)`、半径 `(rx, ry)`、焦点 `(fx, fy)`
    Radial {
        cx: Option<Dimension>,
        cy: Option<Dimension>,
        rx: Option<Dimension>,
        ry: Option<Dimension>,
        fx: Option<Dimension>,
        fy: Option<Dimension>,
    },
}

impl GradientCoords {
    /// 创建空的线性坐标
    pub fn linear() -> Self {
        Self::Linear {
            x1: None,
            y1: None,
            x2: None,
            y2: None,
        }
    }

    /// 创建空的径向坐标
    pub fn radial() -> Self {
        Self::Radial {
            cx: None,
            cy: None,
            rx: None,
            ry: None,
            fx: None,
            fy: None,
        }
    }

    /// 该坐标类型认识的属性键
    pub fn known_keys(kind: GradientKind) -> &'static [&'static str] {
        match kind {
            GradientKind::Linear => &["x1", "y1", "x2", "y2"],
            GradientKind::Radial => &["cx", "cy", "rx", "ry", "fx", "fy"],
        }
    }

    /// 两类渐变的全部坐标键
    ///
    /// 诊断层只把不属于任何一类的键视为未知，不按渐变类型拒绝。
    pub const ALL_COORD_KEYS: &'static [&'static str] =
        &["x1", "y1", "x2", "y2", "cx", "cy", "rx", "ry", "fx", "fy"];
}

/// 渐变色标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// 色标位置
    pub offset: Dimension,
    /// 颜色（原始字符串，颜色语义由渲染层解释）
    pub color: String,
    /// 不透明度（0.0 - 1.0）
    pub opacity: f64,
}

impl GradientStop {
    /// 创建不透明色标
    pub fn new(offset: Dimension, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
            opacity: 1.0,
        }
    }
}

/// 渐变定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// 坐标属性
    pub coords: GradientCoords,
    /// 色标列表（按定义顺序）
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// 创建指定类型的空渐变
    pub fn new(kind: GradientKind) -> Self {
        let coords = match kind {
            GradientKind::Linear => GradientCoords::linear(),
            GradientKind::Radial => GradientCoords::radial(),
        };
        Self {
            coords,
            stops: Vec::new(),
        }
    }

    /// 渐变类型
    pub fn kind(&self) -> GradientKind {
        match self.coords {
            GradientCoords::Linear { .. } => GradientKind::Linear,
            GradientCoords::Radial { .. } => GradientKind::Radial,
        }
    }

    /// 按字符串键应用一个坐标属性
    ///
    /// 返回 `Ok(true)` 表示键被识别并应用，`Ok(false)` 表示
    /// 该键不属于当前渐变类型（调用方自行决定是否告警）。
    pub fn apply_attr(&mut self, key: &str, value: &str) -> Result<bool, ParseError> {
        let slot = match &mut self.coords {
            GradientCoords::Linear { x1, y1, x2, y2 } => match key {
                "x1" => x1,
                "y1" => y1,
                "x2" => x2,
                "y2" => y2,
                _ => return Ok(false),
            },
            GradientCoords::Radial {
                cx,
                cy,
                rx,
                ry,
                fx,
                fy,
            } => match key {
                "cx" => cx,
                "cy" => cy,
                "rx" => rx,
                "ry" => ry,
                "fx" => fx,
                "fy" => fy,
                _ => return Ok(false),
            },
        };
        *slot = Some(value.parse()?);
        Ok(true)
    }

    /// 从扁平的 `[offset, offset, ...]` 数值对列表追加色标
    ///
    /// 每两个数为一组：`(位置, 颜色数值)`。位置按 0.0-1.0 比例
    /// 解释为百分比，颜色数值按 32 位 ARGB 格式化为 `#RRGGBB` 形式。
    pub fn push_stop_pairs(&mut self, pairs: &[f64]) -> Result<(), ParseError> {
        if pairs.len() % 2 != 0 {
            return Err(ParseError::OddStopPairList { len: pairs.len() });
        }
        for chunk in pairs.chunks_exact(2) {
            let offset = Dimension::Percent(chunk[0] * 100.0);
            let color = format!("#{:06X}", (chunk[1] as u32) & 0x00FF_FFFF);
            self.stops.push(GradientStop::new(offset, color));
        }
        Ok(())
    }

    /// 渐变是否可用：至少有一个色标
    pub fn is_valid(&self) -> bool {
        !self.stops.is_empty()
    }

    /// 从元素描述符解析渐变
    ///
    /// 接受 `linearGradient` / `radialGradient` 元素，读取已识别的
    /// 坐标属性与 `stop` 子元素。未识别的坐标键被忽略（目录层
    /// 的诊断会单独告警），非 `stop` 子元素同样忽略。
    pub fn from_element(element: &Element) -> Result<Self, ParseError> {
        let kind = match element.tag.as_str() {
            "linearGradient" => GradientKind::Linear,
            "radialGradient" => GradientKind::Radial,
            other => {
                return Err(ParseError::UnsupportedGradientTag {
                    tag: other.to_string(),
                });
            }
        };

        let mut gradient = Gradient::new(kind);
        for (key, value) in element.attrs.iter() {
            if GradientCoords::known_keys(kind).contains(&key) {
                gradient.apply_attr(key, value)?;
            }
        }
        for (index, child) in element.children.iter().enumerate() {
            if child.tag != "stop" {
                continue;
            }
            gradient.stops.push(parse_stop(index, child)?);
        }
        Ok(gradient)
    }
}

/// 解析单个 `stop` 元素
fn parse_stop(index: usize, element: &Element) -> Result<GradientStop, ParseError> {
    let offset_raw = element
        .get_attr("offset")
        .ok_or_else(|| ParseError::InvalidStop {
            index,
            message: "缺少 offset 属性".to_string(),
        })?;
    let offset: Dimension = offset_raw.parse().map_err(|_| ParseError::InvalidStop {
        index,
        message: format!("offset '{offset_raw}' 无法解析"),
    })?;

    // 两种属性拼写都接受：stop-color（SVG）与 stopColor（RN 风格）
    let color = element
        .get_attr("stop-color")
        .or_else(|| element.get_attr("stopColor"))
        .ok_or_else(|| ParseError::InvalidStop {
            index,
            message: "缺少 stop-color 属性".to_string(),
        })?;

    let opacity = match element
        .get_attr("stop-opacity")
        .or_else(|| element.get_attr("stopOpacity"))
    {
        Some(raw) => raw.trim().parse().map_err(|_| ParseError::InvalidStop {
            index,
            message: format!("stop-opacity '{raw}' 无法解析"),
        })?,
        None => 1.0,
    };

    Ok(GradientStop {
        offset,
        color: color.to_string(),
        opacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_parse() {
        assert_eq!("50%".parse::<Dimension>(), Ok(Dimension::Percent(50.0)));
        assert_eq!(" 30% ".parse::<Dimension>(), Ok(Dimension::Percent(30.0)));
        assert_eq!("12px".parse::<Dimension>(), Ok(Dimension::Px(12.0)));
        assert_eq!("40".parse::<Dimension>(), Ok(Dimension::Px(40.0)));
        assert!("abc".parse::<Dimension>().is_err());
        assert!("%".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_dimension_resolve() {
        assert_eq!(Dimension::Percent(50.0).resolve(200.0), 100.0);
        assert_eq!(Dimension::Px(40.0).resolve(200.0), 40.0);
    }

    #[test]
    fn test_dimension_display_round_trip() {
        for raw in ["50%", "40"] {
            let dim: Dimension = raw.parse().unwrap();
            assert_eq!(dim.to_string(), raw);
        }
    }

    #[test]
    fn test_apply_attr_routes_by_kind() {
        let mut linear = Gradient::new(GradientKind::Linear);
        assert_eq!(linear.apply_attr("x1", "0%"), Ok(true));
        assert_eq!(linear.apply_attr("cx", "50%"), Ok(false));

        let mut radial = Gradient::new(GradientKind::Radial);
        assert_eq!(radial.apply_attr("cx", "50%"), Ok(true));
        assert_eq!(radial.apply_attr("fx", "40%"), Ok(true));
        assert_eq!(radial.apply_attr("x1", "0%"), Ok(false));

        match radial.coords {
            GradientCoords::Radial { cx, fx, rx, .. } => {
                assert_eq!(cx, Some(Dimension::Percent(50.0)));
                assert_eq!(fx, Some(Dimension::Percent(40.0)));
                assert_eq!(rx, None);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_apply_attr_bad_value() {
        let mut g = Gradient::new(GradientKind::Linear);
        assert!(g.apply_attr("x1", "not-a-number").is_err());
    }

    #[test]
    fn test_push_stop_pairs() {
        let mut g = Gradient::new(GradientKind::Linear);
        g.push_stop_pairs(&[0.3, 0xFFFF00 as f64, 0.95, 0xFF0000 as f64])
            .unwrap();

        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].offset, Dimension::Percent(30.0));
        assert_eq!(g.stops[0].color, "#FFFF00");
        assert_eq!(g.stops[1].offset, Dimension::Percent(95.0));
        assert_eq!(g.stops[1].color, "#FF0000");
        assert!(g.is_valid());
    }

    #[test]
    fn test_push_stop_pairs_odd_length() {
        let mut g = Gradient::new(GradientKind::Linear);
        assert_eq!(
            g.push_stop_pairs(&[0.3]),
            Err(ParseError::OddStopPairList { len: 1 })
        );
    }

    #[test]
    fn test_from_element_radial() {
        let el = Element::new("radialGradient")
            .attr("id", "myGradient")
            .attr("cx", "50%")
            .attr("cy", "50%")
            .child(
                Element::new("stop")
                    .attr("offset", "30%")
                    .attr("stop-color", "yellow"),
            )
            .child(
                Element::new("stop")
                    .attr("offset", "95%")
                    .attr("stop-color", "red"),
            );

        let g = Gradient::from_element(&el).unwrap();
        assert_eq!(g.kind(), GradientKind::Radial);
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].color, "yellow");
        assert_eq!(g.stops[0].opacity, 1.0);
        assert_eq!(g.stops[1].offset, Dimension::Percent(95.0));
        assert!(g.is_valid());
    }

    #[test]
    fn test_from_element_rejects_other_tags() {
        let el = Element::new("circle");
        assert_eq!(
            Gradient::from_element(&el),
            Err(ParseError::UnsupportedGradientTag {
                tag: "circle".into()
            })
        );
    }

    #[test]
    fn test_from_element_stop_camel_case_attrs() {
        // RN 风格拼写
        let el = Element::new("linearGradient").child(
            Element::new("stop")
                .attr("offset", "30%")
                .attr("stopColor", "yellow")
                .attr("stopOpacity", "0.5"),
        );
        let g = Gradient::from_element(&el).unwrap();
        assert_eq!(g.stops[0].color, "yellow");
        assert_eq!(g.stops[0].opacity, 0.5);
    }

    #[test]
    fn test_from_element_missing_offset() {
        let el = Element::new("linearGradient")
            .child(Element::new("stop").attr("stop-color", "yellow"));
        let err = Gradient::from_element(&el).unwrap_err();
        assert!(matches!(err, ParseError::InvalidStop { index: 0, .. }));
    }

    #[test]
    fn test_gradient_without_stops_is_invalid() {
        let g = Gradient::new(GradientKind::Linear);
        assert!(!g.is_valid());
    }
}
