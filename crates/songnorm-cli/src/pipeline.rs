//! Pipeline stages driven by the `normalize` command.
//!
//! Each stage is a plain function so tests can run the whole flow
//! against a temporary directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use songnorm_ingest::load_source;
use songnorm_model::{NormalizeOptions, NormalizedTables, SourceRecord, TableKind};
use songnorm_normalize::normalize;
use songnorm_output::write_tables;

use crate::types::{RunResult, TableSummary};

/// Source file read when no input is given.
pub const DEFAULT_INPUT: &str = "Spotify Most Streamed Songs.csv";

/// Directory written when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "Databases Tables";

/// Inputs of one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub options: NormalizeOptions,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            dry_run: false,
            options: NormalizeOptions::default(),
        }
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

pub fn ingest(path: &Path) -> Result<Vec<SourceRecord>> {
    let _span = info_span!("ingest", path = %path.display()).entered();
    load_source(path).with_context(|| format!("load {}", path.display()))
}

pub fn transform(
    records: Vec<SourceRecord>,
    options: &NormalizeOptions,
) -> Result<NormalizedTables> {
    let _span = info_span!("normalize").entered();
    normalize(records, options).context("normalize source records")
}

/// Writes the tables, or only reports them on a dry run.
pub fn output(
    output_dir: &Path,
    tables: &NormalizedTables,
    dry_run: bool,
) -> Result<Vec<TableSummary>> {
    let _span = info_span!("output", dir = %output_dir.display(), dry_run).entered();
    if dry_run {
        info!("dry run; no files written");
        return Ok(TableKind::ALL
            .into_iter()
            .map(|kind| TableSummary {
                kind,
                rows: tables.row_count(kind),
                path: None,
            })
            .collect());
    }
    let written = write_tables(output_dir, tables)?;
    Ok(written
        .into_iter()
        .map(|table| TableSummary {
            kind: table.kind,
            rows: table.rows,
            path: Some(table.path),
        })
        .collect())
}

/// Runs ingest, normalization and output in order.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let start = Instant::now();
    let records = ingest(&config.input)?;
    let source_rows = records.len();
    let tables = transform(records, &config.options)?;
    let summaries = output(&config.output_dir, &tables, config.dry_run)?;
    info!(
        source_rows,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        input: config.input.clone(),
        output_dir: config.output_dir.clone(),
        source_rows,
        dry_run: config.dry_run,
        tables: summaries,
    })
}
