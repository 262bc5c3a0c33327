//! # 解析器模块
//!
//! 提供 CHEMKIN THERM.DAT 热力学数据库的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: therm_dat

pub mod therm_dat;

pub use therm_dat::{parse_therm_content, parse_therm_file};
