//! # 数据模型模块
//!
//! 定义物种目录的统一数据表示。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 无外部模块依赖

pub mod species;

pub use species::{FormulaPart, SkippedRecord, Species, TemperatureDefaults, ThermCatalog};
