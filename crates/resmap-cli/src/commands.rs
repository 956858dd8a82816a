use anyhow::Result;
use comfy_table::Table;

use resmap_cli::pipeline::{MigrateOutcome, MigrateRequest, run_migration};
use resmap_model::Category;
use resmap_normalize::rules::legacy_sources;

use crate::cli::MigrateArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_migrate(args: &MigrateArgs) -> Result<MigrateOutcome> {
    let request = MigrateRequest {
        input: args.input.clone(),
        output: args.output.clone(),
        report_json: args.report_json.clone(),
        dry_run: args.dry_run,
    };
    run_migration(&request)
}

pub fn run_categories() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Migrates from")]);
    apply_table_style(&mut table);
    for category in Category::ALL {
        let sources = legacy_sources(category);
        let legacy = if sources.is_empty() {
            "-".to_string()
        } else {
            sources.join(", ")
        };
        table.add_row(vec![category.to_string(), legacy]);
    }
    println!("{table}");
}
