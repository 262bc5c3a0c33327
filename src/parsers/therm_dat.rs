//! # CHEMKIN THERM.DAT 格式解析器
//!
//! 解析固定列格式的热力学数据库文件。文件由头部和若干 4 行物种记录组成：
//!
//! ```text
//! THERMO ALL
//!    200.000  1000.000  6000.000
//! C2H5OH+ Ethanol+  T08/12C  2.H  6.O  1.E -1.G   298.150  6000.000 1000.        1
//!  7.92588096E+00 1.35959671E-02-4.72181213E-06 7.44887370E-10-4.38727921E-14    2
//!  9.07982576E+04-1.61681179E+01-1.62663530E-01 3.57026999E-02-2.34581471E-05    3
//!  3.16839831E-09 2.25076300E-12 9.30140758E+04 2.55855068E+01 9.43525235E+04    4
//! ```
//!
//! 记录首行为固定列布局（名称 1-18 列、日期 19-24 列、分子式 25-44 列、
//! 相态 45 列、温度 46-73 列、扩展分子式 74-78 列，行尾序号 1）；
//! 三个续行各含 5 个科学计数法系数，行尾序号 2/3/4。
//! 真实文件普遍存在列偏移，因此系数按整行宽松扫描而非按列切片。
//!
//! 记录级错误（温度无法解析、系数不足）只丢弃该条记录并记入诊断列表；
//! 输入在记录中途结束则中止整个解析。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/species.rs`

use crate::error::{Result, ThermError};
use crate::models::{FormulaPart, SkippedRecord, Species, TemperatureDefaults, ThermCatalog};
use regex::Regex;
use std::fs;
use std::path::Path;

// ─────────────────────────────────────────────────────────────
// 固定列范围（历史格式按 1 起始列定义，这里换算为 0 起始半开区间）
// ─────────────────────────────────────────────────────────────

/// 物种名称，1-18 列
const NAME_COLS: (usize, usize) = (0, 18);
/// 来源/日期代码，19-24 列
const DATE_COLS: (usize, usize) = (18, 24);
/// 分子式基础字段，25-44 列，4(2A1,I3)
const FORMULA_COLS: (usize, usize) = (24, 44);
/// 相态字符，45 列
const PHASE_COL: (usize, usize) = (44, 45);
/// 低温边界，46-55 列
const LOW_TEMP_COLS: (usize, usize) = (45, 55);
/// 高温边界，56-65 列
const HIGH_TEMP_COLS: (usize, usize) = (55, 65);
/// 公共温度边界，66-73 列（空白时使用文件默认值）
const COMMON_TEMP_COLS: (usize, usize) = (65, 73);
/// 分子式扩展字段，74-78 列（空白表示无）
const FORMULA_EXT_COLS: (usize, usize) = (73, 78);

/// "THERMO ALL" 后默认温度行的三个字段，1-10 / 12-20 / 22-30 列
const DEFAULT_LOW_COLS: (usize, usize) = (0, 10);
const DEFAULT_COMMON_COLS: (usize, usize) = (11, 20);
const DEFAULT_HIGH_COLS: (usize, usize) = (21, 30);

/// 分子式条目：1-2 个字母的元素符号 + 最多 3 位数量（可带 1 位小数）
const FORMULA_TOKEN: &str = r"([A-Za-z]{1,2})\s*(\d{1,3}(?:\.\d?)?)";

/// 系数条目：科学计数法，1 位整数、8 位小数、带符号 2 位指数
const COEFFICIENT_TOKEN: &str = r"[+-]?\d\.\d{8}E[+-]\d{2}";

/// 每次解析编译一次的扫描器
struct TokenScanners {
    formula: Regex,
    coefficient: Regex,
}

impl TokenScanners {
    fn new() -> Self {
        TokenScanners {
            formula: Regex::new(FORMULA_TOKEN).unwrap(),
            coefficient: Regex::new(COEFFICIENT_TOKEN).unwrap(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 公共入口
// ─────────────────────────────────────────────────────────────

/// 解析 THERM.DAT 文件
pub fn parse_therm_file(path: &Path) -> Result<ThermCatalog> {
    let content = fs::read_to_string(path).map_err(|e| ThermError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_therm_content(&content)
}

/// 从字符串内容解析 THERM.DAT 格式
pub fn parse_therm_content(content: &str) -> Result<ThermCatalog> {
    let scanners = TokenScanners::new();
    let mut lines = content.lines();

    // 头部扫描：消耗到 THERMO 标记行为止，可能带一行全局默认温度。
    // 标记始终缺失时迭代器被耗尽，下面的记录循环不会执行（空目录）。
    let defaults = scan_header(&mut lines)?;

    let mut species = Vec::new();
    let mut skipped = Vec::new();

    while let Some(line) = lines.next() {
        // 只有行尾序号为 1 的行才开始一条记录，其余行（空行、杂项）跳过
        if !line.ends_with('1') {
            continue;
        }

        // 名称先于其余字段提取，保证诊断信息总能命名出错的物种
        let name = slice_columns(line, NAME_COLS).trim().to_string();

        let line1 = line;
        let line2 = next_record_line(&mut lines, &name)?;
        let line3 = next_record_line(&mut lines, &name)?;
        let line4 = next_record_line(&mut lines, &name)?;

        // 记录级失败只丢弃该条记录，目录继续累积后续有效记录
        match assemble_record(&scanners, line1, line2, line3, line4, &defaults) {
            Ok(sp) => species.push(sp),
            Err(e) => skipped.push(SkippedRecord {
                name,
                reason: e.to_string(),
            }),
        }
    }

    Ok(ThermCatalog { species, skipped })
}

// ─────────────────────────────────────────────────────────────
// 头部扫描
// ─────────────────────────────────────────────────────────────

/// 扫描文件头部，返回全局温度默认值
///
/// "THERMO ALL" 表示默认值适用于所有后续记录，此时再读一行解析出
/// (low, common, high)；普通 "THERMO" 则没有默认值。
fn scan_header<'a, I>(lines: &mut I) -> Result<TemperatureDefaults>
where
    I: Iterator<Item = &'a str>,
{
    while let Some(line) = lines.next() {
        let trimmed = line.trim();
        if trimmed.starts_with("THERMO") {
            if trimmed.starts_with("THERMO ALL") {
                let defaults_line = lines.next().ok_or_else(|| ThermError::InvalidDefaults {
                    text: String::new(),
                })?;
                return parse_global_defaults(defaults_line);
            }
            return Ok(TemperatureDefaults::none());
        }
    }

    Ok(TemperatureDefaults::none())
}

/// 解析 "THERMO ALL" 之后的默认温度行（3F10.0）
fn parse_global_defaults(line: &str) -> Result<TemperatureDefaults> {
    let parse_field = |cols: (usize, usize)| -> Result<f64> {
        slice_columns(line, cols)
            .trim()
            .parse::<f64>()
            .map_err(|_| ThermError::InvalidDefaults {
                text: line.to_string(),
            })
    };

    Ok(TemperatureDefaults {
        low: Some(parse_field(DEFAULT_LOW_COLS)?),
        common: Some(parse_field(DEFAULT_COMMON_COLS)?),
        high: Some(parse_field(DEFAULT_HIGH_COLS)?),
    })
}

// ─────────────────────────────────────────────────────────────
// 记录组装
// ─────────────────────────────────────────────────────────────

/// 读取记录的下一行；输入中途结束是致命错误
fn next_record_line<'a, I>(lines: &mut I, name: &str) -> Result<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    lines.next().ok_or_else(|| ThermError::TruncatedRecord {
        name: name.to_string(),
    })
}

/// 将一条 4 行记录组装为 Species
///
/// 任何字段级失败都使整条记录失败；调用方负责丢弃并继续。
fn assemble_record(
    scanners: &TokenScanners,
    line1: &str,
    line2: &str,
    line3: &str,
    line4: &str,
    defaults: &TemperatureDefaults,
) -> Result<Species> {
    let name = slice_columns(line1, NAME_COLS).trim().to_string();
    let date = slice_columns(line1, DATE_COLS).to_string();
    let atoms = parse_formula(&scanners.formula, line1);
    let phase = slice_columns(line1, PHASE_COL).chars().next().unwrap_or(' ');

    // 自身温度列优先，空白时回退到文件默认值；两者都缺失则记录无效
    let low = parse_temperature(line1, LOW_TEMP_COLS, "Low")?
        .or(defaults.low)
        .ok_or(ThermError::UnresolvedTemperature { which: "Low" })?;
    let high = parse_temperature(line1, HIGH_TEMP_COLS, "High")?
        .or(defaults.high)
        .ok_or(ThermError::UnresolvedTemperature { which: "High" })?;
    let common = parse_temperature(line1, COMMON_TEMP_COLS, "Common")?
        .or(defaults.common)
        .ok_or(ThermError::UnresolvedTemperature { which: "Common" })?;

    // 续行 2: 高温区间 a1-a5
    // 续行 3: 高温区间 a6-a7 + 低温区间 a1-a3
    // 续行 4: 低温区间 a4-a7
    let upper_head = parse_coefficients(&scanners.coefficient, line2, 2, 5)?;
    let crossover = parse_coefficients(&scanners.coefficient, line3, 3, 5)?;
    let lower_tail = parse_coefficients(&scanners.coefficient, line4, 4, 4)?;

    let low_interval = [
        crossover[2],
        crossover[3],
        crossover[4],
        lower_tail[0],
        lower_tail[1],
        lower_tail[2],
        lower_tail[3],
    ];
    let high_interval = [
        upper_head[0],
        upper_head[1],
        upper_head[2],
        upper_head[3],
        upper_head[4],
        crossover[0],
        crossover[1],
    ];

    Ok(Species {
        name,
        date,
        atoms,
        phase,
        low_temperature: low,
        common_temperature: common,
        high_temperature: high,
        low_interval,
        high_interval,
    })
}

// ─────────────────────────────────────────────────────────────
// 字段提取
// ─────────────────────────────────────────────────────────────

/// 截取固定列范围；行比范围短时返回空白部分（缺失字段按空白处理）
fn slice_columns(line: &str, (start, end): (usize, usize)) -> &str {
    let len = line.len();
    line.get(start.min(len)..end.min(len)).unwrap_or("")
}

/// 解析一个温度列
///
/// 空白列返回 `None`（触发默认值回退）；非空白但无法解析的列是该条
/// 记录的硬失败，错误信息指明是哪个温度及其原文。
fn parse_temperature(
    line1: &str,
    cols: (usize, usize),
    which: &'static str,
) -> Result<Option<f64>> {
    let text = slice_columns(line1, cols).trim();
    if text.is_empty() {
        return Ok(None);
    }

    text.parse::<f64>()
        .map(Some)
        .map_err(|_| ThermError::UnparsableTemperature {
            which,
            text: text.to_string(),
        })
}

/// 解析分子式字段
///
/// 基础字段可产生 0 到多个条目；扩展字段最多 1 个，追加在末尾。
/// 零数量条目（如 "E  0."）按原文保留，不做过滤；纯 "0." 占位符
/// 没有元素字母，本身就不匹配条目形状。
fn parse_formula(formula_re: &Regex, line1: &str) -> Vec<FormulaPart> {
    let mut parts = Vec::new();

    for caps in formula_re.captures_iter(slice_columns(line1, FORMULA_COLS)) {
        parts.push(FormulaPart::new(&caps[1], caps[2].parse().unwrap_or(0.0)));
    }

    if let Some(caps) = formula_re.captures(slice_columns(line1, FORMULA_EXT_COLS)) {
        parts.push(FormulaPart::new(&caps[1], caps[2].parse().unwrap_or(0.0)));
    }

    parts
}

/// 从一个续行提取科学计数法系数
///
/// 整行从左到右扫描（真实文件存在列偏移，不能按固定列切片）。
/// 匹配数少于 `required` 是该条记录的硬失败。
fn parse_coefficients(
    coefficient_re: &Regex,
    line: &str,
    line_number: usize,
    required: usize,
) -> Result<Vec<f64>> {
    let values: Vec<f64> = coefficient_re
        .find_iter(line)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();

    if values.len() < required {
        return Err(ThermError::InsufficientCoefficients {
            line_number,
            text: line.to_string(),
        });
    }

    Ok(values)
}
