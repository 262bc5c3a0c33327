//! # inspect 子命令 CLI 定义
//!
//! 按名称查找单个物种并打印完整记录。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;
use std::path::PathBuf;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Exact species name as written in the database (e.g. "C8H18,n-octane")
    pub name: String,

    /// Path to the THERM.DAT database file
    #[arg(short, long, default_value = "THERM.DAT")]
    pub file: PathBuf,
}
