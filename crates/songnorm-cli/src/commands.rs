use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use songnorm_cli::pipeline::{RunConfig, run};
use songnorm_cli::types::RunResult;
use songnorm_model::TableKind;

use crate::cli::NormalizeArgs;
use crate::summary::apply_table_style;

pub fn run_tables() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Table", "File", "Description", "Columns"]);
    apply_table_style(&mut table);
    for kind in TableKind::ALL {
        table.add_row(vec![
            kind.name().to_string(),
            kind.file_name(),
            kind.description().to_string(),
            kind.columns().join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<RunResult> {
    let _span = info_span!("normalize_command", input = %args.input.display()).entered();
    let config = RunConfig::new(&args.input, &args.output_dir).with_dry_run(args.dry_run);
    run(&config)
}
