//! CSV output of the normalized tables.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::{debug, info};

use songnorm_model::{NormalizedTables, TableKind};

use crate::frames::{TableFrame, to_frames};

/// A table file written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub kind: TableKind,
    pub path: PathBuf,
    pub rows: usize,
}

/// Creates `dir` (and parents) when it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))
}

/// Writes one frame to `dir`, replacing any file of the same name.
pub fn write_table_csv(dir: &Path, frame: &mut TableFrame) -> Result<WrittenTable> {
    let path = dir.join(frame.file_name());
    let mut file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame.data)
        .with_context(|| format!("failed to write CSV file: {}", path.display()))?;
    debug!(table = %frame.kind, path = %path.display(), "wrote table");
    Ok(WrittenTable {
        kind: frame.kind,
        path,
        rows: frame.data.height(),
    })
}

/// Writes all five tables into `dir`, in [`TableKind::ALL`] order.
///
/// Files are written one after another; a failure part way through
/// leaves the earlier files in place.
pub fn write_tables(dir: &Path, tables: &NormalizedTables) -> Result<Vec<WrittenTable>> {
    ensure_output_dir(dir)?;
    let mut written = Vec::with_capacity(TableKind::ALL.len());
    for mut frame in to_frames(tables)? {
        written.push(write_table_csv(dir, &mut frame)?);
    }
    info!(
        dir = %dir.display(),
        files = written.len(),
        "wrote normalized tables"
    );
    Ok(written)
}
