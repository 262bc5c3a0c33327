//! # check 命令实现
//!
//! 解析整个数据库，报告解析结果和被跳过记录的诊断信息。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `parsers/therm_dat.rs`
//! - 使用 `utils/output.rs`

use crate::cli::check::CheckArgs;
use crate::error::Result;
use crate::parsers;
use crate::utils::output;

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header(&format!("Checking '{}'", args.file.display()));

    let catalog = parsers::parse_therm_file(&args.file)?;

    output::print_info(&format!("Parsed {} species", catalog.len()));

    for record in &catalog.skipped {
        output::print_skip(&format!("{}: {}", record.name, record.reason));
    }

    if catalog.skipped.is_empty() {
        output::print_success("No malformed records found.");
    } else {
        output::print_warning(&format!("{} record(s) skipped", catalog.skipped.len()));
    }

    output::print_done(&format!(
        "{} of {} record(s) usable",
        catalog.len(),
        catalog.len() + catalog.skipped.len()
    ));

    Ok(())
}
