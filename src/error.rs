//! # 统一错误处理模块
//!
//! 定义 Thermdb 的所有错误类型，使用 `thiserror` 派生。
//!
//! 记录级错误（温度无法解析、系数不足）在解析器中被捕获并降级为
//! 跳过记录的诊断信息；结构性截断则作为致命错误传播。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Thermdb 统一错误类型
#[derive(Error, Debug)]
pub enum ThermError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 记录级解析错误（在记录边界被捕获，跳过该记录）
    // ─────────────────────────────────────────────────────────────
    #[error("Could not parse {which} temperature: '{text}'")]
    UnparsableTemperature { which: &'static str, text: String },

    #[error("{which} temperature cannot be resolved")]
    UnresolvedTemperature { which: &'static str },

    #[error("Could not parse coefficients in line {line_number}: '{text}'")]
    InsufficientCoefficients { line_number: usize, text: String },

    // ─────────────────────────────────────────────────────────────
    // 致命解析错误（中止整个解析）
    // ─────────────────────────────────────────────────────────────
    #[error("Input ended before all 4 lines of record '{name}' were read")]
    TruncatedRecord { name: String },

    #[error("Invalid global temperature defaults line: '{text}'")]
    InvalidDefaults { text: String },

    // ─────────────────────────────────────────────────────────────
    // 查询错误
    // ─────────────────────────────────────────────────────────────
    #[error("Species not found in catalog: {name}")]
    SpeciesNotFound { name: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ThermError>;
