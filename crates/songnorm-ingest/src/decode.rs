//! DataFrame to [`SourceRecord`] decoding.

use std::path::Path;

use polars::prelude::{AnyValue, Column, DataFrame};

use songnorm_common::any_to_string;
use songnorm_model::{SourceColumn, SourceRecord};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> &str {
    raw.trim().trim_start_matches('\u{feff}').trim()
}

/// Finds the frame column holding `column`, ignoring surrounding
/// whitespace and a leading byte-order mark in the header.
pub fn find_column(df: &DataFrame, column: SourceColumn) -> Option<&Column> {
    df.get_columns()
        .iter()
        .find(|c| normalize_header(c.name().as_str()) == column.header())
}

/// Checks that the header carries every required column.
///
/// Optional columns that are absent are logged and decode as missing.
pub fn validate_source_columns(df: &DataFrame, path: &Path) -> Result<()> {
    for column in SourceColumn::ALL {
        if find_column(df, column).is_some() {
            continue;
        }
        if column.is_required() {
            return Err(IngestError::MissingColumn {
                column: column.header().to_string(),
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(column = %column, "optional source column absent");
    }
    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Decodes every frame row into a [`SourceRecord`].
///
/// Every column found in the frame gets an entry; null cells decode as
/// empty text so an absent column stays distinguishable from a blank cell.
pub fn decode_records(df: &DataFrame) -> Vec<SourceRecord> {
    let resolved: Vec<(SourceColumn, &Column)> = SourceColumn::ALL
        .into_iter()
        .filter_map(|column| find_column(df, column).map(|series| (column, series)))
        .collect();

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut record = SourceRecord::new();
        for (column, series) in &resolved {
            let value = series.get(idx).unwrap_or(AnyValue::Null);
            record.set(*column, any_to_string(value));
        }
        records.push(record);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn null_cells_are_empty_and_absent_columns_missing() {
        let df = test_df(vec![
            ("track_name", vec![Some("Flowers"), Some("Kill Bill")]),
            ("artist(s)_name", vec![Some("Miley Cyrus"), Some("SZA")]),
            ("streams", vec![Some("1000"), None]),
        ]);
        let records = decode_records(&df);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(SourceColumn::Streams), Some("1000"));
        assert_eq!(records[1].get(SourceColumn::Streams), Some(""));
        assert_eq!(records[1].get(SourceColumn::CoverUrl), None);
    }

    #[test]
    fn header_lookup_ignores_bom_and_padding() {
        let df = test_df(vec![
            ("\u{feff}track_name", vec![Some("A")]),
            (" streams ", vec![Some("1")]),
        ]);
        assert!(find_column(&df, SourceColumn::TrackName).is_some());
        assert!(find_column(&df, SourceColumn::Streams).is_some());
        assert!(find_column(&df, SourceColumn::Bpm).is_none());
    }

    #[test]
    fn missing_required_column_is_reported() {
        let df = test_df(vec![
            ("track_name", vec![Some("A")]),
            ("streams", vec![Some("1")]),
        ]);
        let err = validate_source_columns(&df, Path::new("songs.csv")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn { ref column, .. } if column == "artist(s)_name"
        ));
    }
}
