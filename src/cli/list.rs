//! # list 子命令 CLI 定义
//!
//! 列出目录中的物种，支持按元素、相态、名称子串过滤。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use clap::Args;
use std::path::PathBuf;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the THERM.DAT database file
    #[arg(short, long, default_value = "THERM.DAT")]
    pub file: PathBuf,

    /// Only show species containing this element (e.g. "C")
    #[arg(short, long)]
    pub element: Option<String>,

    /// Only show species with this phase character (e.g. "G")
    #[arg(short, long)]
    pub phase: Option<char>,

    /// Only show species whose name contains this text
    #[arg(short, long)]
    pub contains: Option<String>,

    /// Maximum number of rows to print (0 = all)
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}
