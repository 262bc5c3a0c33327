//! # Thermdb - CHEMKIN 热力学数据库工具箱
//!
//! 读取固定列格式的 CHEMKIN THERM.DAT 热力学数据库，
//! 构建物种目录（NASA 7 系数多项式），并提供查询功能。
//!
//! ## 子命令
//! - `inspect` - 按名称查找单个物种并打印完整记录
//! - `list`    - 列出目录中的物种（可按元素/相态/名称过滤）
//! - `check`   - 解析整个文件并报告被跳过的记录
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (THERM.DAT 解析器)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
