//! Source data ingestion for the song catalog normalizer.
//!
//! This crate loads the flat song dataset into a Polars DataFrame and
//! decodes it into [`SourceRecord`]s for the normalization stage.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use songnorm_ingest::load_source;
//!
//! let records = load_source(Path::new("Spotify Most Streamed Songs.csv"))?;
//! ```

mod csv;
mod decode;
mod error;

use std::path::Path;
use std::time::Instant;

use songnorm_model::SourceRecord;
use tracing::info;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_source_csv,
    validate_encoding,
};

// === Decoding ===
pub use decode::{decode_records, find_column, validate_source_columns};

/// Loads and decodes the source file.
///
/// Runs the size and encoding checks, reads every column as text, checks
/// the required columns and decodes each row.
pub fn load_source(path: &Path) -> Result<Vec<SourceRecord>> {
    let start = Instant::now();
    check_file_size(path)?;
    validate_encoding(path)?;
    let df = read_source_csv(path)?;
    validate_source_columns(&df, path)?;
    let records = decode_records(&df);
    info!(
        path = %path.display(),
        rows = records.len(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "source loaded"
    );
    Ok(records)
}
