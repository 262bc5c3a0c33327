//! # list 命令实现
//!
//! 以表格形式列出目录中的物种，支持过滤。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `parsers/therm_dat.rs`, `models/species.rs`
//! - 使用 `utils/output.rs`

use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::models::Species;
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 物种列表行
#[derive(Debug, Clone, Tabled)]
struct SpeciesRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Phase")]
    phase: char,
    #[tabled(rename = "T_low (K)")]
    low: f64,
    #[tabled(rename = "T_common (K)")]
    common: f64,
    #[tabled(rename = "T_high (K)")]
    high: f64,
}

impl SpeciesRow {
    fn from_species(sp: &Species) -> Self {
        SpeciesRow {
            name: sp.name.clone(),
            formula: sp.formula(),
            phase: sp.phase,
            low: sp.low_temperature,
            common: sp.common_temperature,
            high: sp.high_temperature,
        }
    }
}

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    output::print_header(&format!("Species in '{}'", args.file.display()));

    let catalog = parsers::parse_therm_file(&args.file)?;

    if !catalog.skipped.is_empty() {
        output::print_warning(&format!(
            "{} record(s) skipped while parsing (run 'check' for details)",
            catalog.skipped.len()
        ));
    }

    let matching: Vec<&Species> = catalog
        .species
        .iter()
        .filter(|sp| matches_filters(sp, &args))
        .collect();

    if matching.is_empty() {
        output::print_warning("No species matched the given filters.");
        return Ok(());
    }

    let shown = if args.limit == 0 {
        matching.len()
    } else {
        args.limit.min(matching.len())
    };

    let rows: Vec<SpeciesRow> = matching[..shown]
        .iter()
        .map(|sp| SpeciesRow::from_species(sp))
        .collect();

    println!("{}", Table::new(rows));

    output::print_done(&format!(
        "Showing {} of {} matching species ({} total in catalog)",
        shown,
        matching.len(),
        catalog.len()
    ));

    Ok(())
}

/// 检查物种是否满足全部过滤条件
fn matches_filters(sp: &Species, args: &ListArgs) -> bool {
    if let Some(ref element) = args.element {
        if !sp.contains_element(element) {
            return false;
        }
    }

    if let Some(phase) = args.phase {
        if !sp.phase.eq_ignore_ascii_case(&phase) {
            return false;
        }
    }

    if let Some(ref text) = args.contains {
        if !sp.name.contains(text.as_str()) {
            return false;
        }
    }

    true
}
