//! # 物种数据模型
//!
//! 定义从 THERM.DAT 解析出的物种记录及整个目录的表示。
//! 所有实体构建后不再修改。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 分子式中的一个元素贡献
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaPart {
    /// 元素符号（1-2 个字母，保留原始大小写）
    pub atom: String,

    /// 原子数量，允许小数（如 1.5），允许为 0
    pub quantity: f64,
}

impl FormulaPart {
    pub fn new(atom: impl Into<String>, quantity: f64) -> Self {
        FormulaPart {
            atom: atom.into(),
            quantity,
        }
    }
}

/// 一条解析完成的热力学物种记录
///
/// 两组 NASA 7 系数多项式分别覆盖低温区间
/// `[low_temperature, common_temperature]` 和高温区间
/// `[common_temperature, high_temperature]`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// 物种名称（去除首尾空白，最多 18 字符，不要求唯一）
    pub name: String,

    /// 6 字符的来源/日期代码（如 "T08/12"，不做校验）
    pub date: String,

    /// 元素贡献列表，按发现顺序（基础字段在前，扩展字段在后）
    pub atoms: Vec<FormulaPart>,

    /// 相态字符（名义上 S/L/G，按原文接受任意字符）
    pub phase: char,

    /// 低温边界 (K)
    pub low_temperature: f64,

    /// 公共温度边界 (K)，低温/高温系数组的分界点
    pub common_temperature: f64,

    /// 高温边界 (K)
    pub high_temperature: f64,

    /// 低温区间系数 a1..a7
    pub low_interval: [f64; 7],

    /// 高温区间系数 a1..a7
    pub high_interval: [f64; 7],
}

impl Species {
    /// 生成可读的化学式字符串（如 "C8H18"）
    ///
    /// 仅用于显示：数量为 0 的占位条目被省略，数量 1 不显示数字，
    /// 整数数量不带小数点。解析结果本身保留全部条目。
    pub fn formula(&self) -> String {
        self.atoms
            .iter()
            .filter(|p| p.quantity != 0.0)
            .map(|p| {
                if (p.quantity - 1.0).abs() < 1e-12 {
                    p.atom.clone()
                } else if p.quantity.fract() == 0.0 {
                    format!("{}{}", p.atom, p.quantity as i64)
                } else {
                    format!("{}{}", p.atom, p.quantity)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// 是否含有指定元素（数量大于 0，符号不区分大小写）
    pub fn contains_element(&self, element: &str) -> bool {
        self.atoms
            .iter()
            .any(|p| p.quantity > 0.0 && p.atom.eq_ignore_ascii_case(element))
    }
}

/// 文件级温度默认值
///
/// 在头部扫描阶段写入一次，之后只读；作为记录自身温度列为空时的回退值。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureDefaults {
    pub low: Option<f64>,
    pub common: Option<f64>,
    pub high: Option<f64>,
}

impl TemperatureDefaults {
    /// 无任何默认值（文件头为普通 "THERMO" 时）
    pub fn none() -> Self {
        TemperatureDefaults::default()
    }
}

/// 被跳过记录的诊断信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// 记录首行的物种名称
    pub name: String,

    /// 跳过原因（解析错误的描述文本）
    pub reason: String,
}

/// 一次解析得到的物种目录
///
/// `species` 按文件顺序排列；`skipped` 收集被丢弃记录的诊断信息。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermCatalog {
    pub species: Vec<Species>,
    pub skipped: Vec<SkippedRecord>,
}

impl ThermCatalog {
    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// 按名称精确查找（返回文件顺序中的第一个匹配）
    pub fn find(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octane() -> Species {
        Species {
            name: "C8H18,n-octane".to_string(),
            date: "P10/85".to_string(),
            atoms: vec![FormulaPart::new("C", 8.0), FormulaPart::new("H", 18.0)],
            phase: 'G',
            low_temperature: 200.0,
            common_temperature: 1000.0,
            high_temperature: 6000.0,
            low_interval: [0.0; 7],
            high_interval: [0.0; 7],
        }
    }

    #[test]
    fn test_formula_string() {
        assert_eq!(octane().formula(), "C8H18");
    }

    #[test]
    fn test_formula_skips_zero_quantity() {
        let mut sp = octane();
        sp.atoms.push(FormulaPart::new("E", 0.0));
        assert_eq!(sp.formula(), "C8H18");
        // 解析结果本身仍保留零数量条目
        assert_eq!(sp.atoms.len(), 3);
    }

    #[test]
    fn test_formula_unit_and_fractional_quantity() {
        let sp = Species {
            atoms: vec![FormulaPart::new("AG", 1.0), FormulaPart::new("O", 1.5)],
            ..octane()
        };
        assert_eq!(sp.formula(), "AGO1.5");
    }

    #[test]
    fn test_contains_element() {
        let sp = octane();
        assert!(sp.contains_element("c"));
        assert!(sp.contains_element("H"));
        assert!(!sp.contains_element("O"));
    }

    #[test]
    fn test_catalog_find_first_match() {
        let mut second = octane();
        second.phase = 'L';
        let catalog = ThermCatalog {
            species: vec![octane(), second],
            skipped: vec![],
        };

        let found = catalog.find("C8H18,n-octane").unwrap();
        assert_eq!(found.phase, 'G');
        assert!(catalog.find("missing").is_none());
    }
}
