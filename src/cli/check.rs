//! # check 子命令 CLI 定义
//!
//! 解析整个数据库并报告被跳过的记录。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use clap::Args;
use std::path::PathBuf;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the THERM.DAT database file
    #[arg(short, long, default_value = "THERM.DAT")]
    pub file: PathBuf,
}
