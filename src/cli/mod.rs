//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `inspect`: 按名称查找并打印单个物种记录
//! - `list`: 列出目录中的物种
//! - `check`: 解析整个文件并报告诊断信息
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: inspect, list, check

pub mod check;
pub mod inspect;
pub mod list;

use clap::{Parser, Subcommand};

/// Thermdb - CHEMKIN 热力学数据库工具箱
#[derive(Parser)]
#[command(name = "thermdb")]
#[command(version)]
#[command(about = "A CHEMKIN thermodynamic database toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Look up a single species by name and print its full record
    Inspect(inspect::InspectArgs),

    /// List species in the catalog, with optional filters
    List(list::ListArgs),

    /// Parse the whole database and report skipped records
    Check(check::CheckArgs),
}
