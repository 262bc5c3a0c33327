//! # inspect 命令实现
//!
//! 解析数据库，按名称精确查找一个物种并打印完整记录。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `parsers/therm_dat.rs`, `models/species.rs`
//! - 使用 `utils/output.rs`

use crate::cli::inspect::InspectArgs;
use crate::error::{Result, ThermError};
use crate::models::Species;
use crate::parsers;
use crate::utils::output;

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<()> {
    let catalog = parsers::parse_therm_file(&args.file)?;

    if !catalog.skipped.is_empty() {
        output::print_warning(&format!(
            "{} record(s) skipped while parsing '{}' (run 'check' for details)",
            catalog.skipped.len(),
            args.file.display()
        ));
    }

    let species = catalog
        .find(&args.name)
        .ok_or_else(|| ThermError::SpeciesNotFound {
            name: args.name.clone(),
        })?;

    print_species(species);
    Ok(())
}

/// 打印单个物种的完整记录
fn print_species(sp: &Species) {
    output::print_header(&sp.name);

    println!("  Formula     : {}", sp.formula());
    println!("  Date code   : {}", sp.date);
    println!("  Phase       : {}", sp.phase);
    println!(
        "  Temperatures: low {} K, common {} K, high {} K",
        sp.low_temperature, sp.common_temperature, sp.high_temperature
    );

    println!("\n  Composition:");
    for part in &sp.atoms {
        println!("    {:2}  x {}", part.atom, part.quantity);
    }

    println!(
        "\n  Low interval  [{} - {} K]:",
        sp.low_temperature, sp.common_temperature
    );
    print_coefficients(&sp.low_interval);

    println!(
        "\n  High interval [{} - {} K]:",
        sp.common_temperature, sp.high_temperature
    );
    print_coefficients(&sp.high_interval);
}

/// 按 a1..a7 打印一组 NASA 多项式系数
fn print_coefficients(coefficients: &[f64; 7]) {
    for (i, c) in coefficients.iter().enumerate() {
        println!("    a{} = {:>15.8E}", i + 1, c);
    }
}
