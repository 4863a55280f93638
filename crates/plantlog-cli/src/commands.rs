use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use plantlog_core::ParseEngine;
use plantlog_ingest::read_grid_from_path;
use plantlog_model::ParseReport;
use plantlog_registry::Registry;

use crate::cli::{CatalogArg, ParseArgs, RegistryArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_parse(args: &ParseArgs) -> Result<ParseReport> {
    let sheet_name = args.sheet_name.clone().unwrap_or_else(|| {
        args.input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("sheet")
            .to_string()
    });

    let start = Instant::now();
    let grid = read_grid_from_path(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let registry = Registry::builtin();
    let engine = ParseEngine::new(&registry);
    let report = engine.parse_grid(&grid, &sheet_name);
    info!(
        sheet_name = %sheet_name,
        rows = report.metadata.total_rows,
        mapped_columns = report.metadata.mapped_columns,
        duration_ms = start.elapsed().as_millis(),
        "parse complete"
    );

    let json = serde_json::to_string_pretty(&report).context("serialize report")?;
    if let Some(path) = &args.output {
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    } else {
        println!("{json}");
    }
    Ok(report)
}

pub fn run_registry(args: &RegistryArgs) -> Result<()> {
    let registry = Registry::builtin();
    let mut table = Table::new();
    match args.catalog {
        CatalogArg::Parameters => {
            table.set_header(vec![
                header_cell("Parameter"),
                header_cell("Display Name"),
                header_cell("Unit"),
                header_cell("Category"),
                header_cell("Section"),
                header_cell("Assets"),
            ]);
            apply_table_style(&mut table);
            for param in registry.parameters() {
                table.add_row(vec![
                    param.name.clone(),
                    param.display_name.clone(),
                    param.unit.clone(),
                    param.category.to_string(),
                    param.section.clone(),
                    param.applicable_assets.join(", "),
                ]);
            }
        }
        CatalogArg::Assets => {
            table.set_header(vec![
                header_cell("Asset"),
                header_cell("Display Name"),
                header_cell("Type"),
                header_cell("Aliases"),
            ]);
            apply_table_style(&mut table);
            for asset in registry.assets() {
                table.add_row(vec![
                    asset.name.clone(),
                    asset.display_name.clone(),
                    asset.asset_type.to_string(),
                    asset.aliases.join(", "),
                ]);
            }
        }
    }
    println!("{table}");
    Ok(())
}
