use std::path::PathBuf;

use songnorm_model::TableKind;

/// Outcome of one `normalize` run.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub source_rows: usize,
    pub dry_run: bool,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub kind: TableKind,
    pub rows: usize,
    /// Written file; `None` on a dry run.
    pub path: Option<PathBuf>,
}

impl RunResult {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|table| table.rows).sum()
    }
}
