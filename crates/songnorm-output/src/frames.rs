//! Conversion of normalized tables into polars frames.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use songnorm_model::{
    Artist, ArtistTrack, Metric, Mode, NormalizedTables, PlatformEntry, SurrogateId, TableKind,
    Track,
};

/// One table rendered as a frame, with headers from [`TableKind::columns`].
#[derive(Debug, Clone)]
pub struct TableFrame {
    pub kind: TableKind,
    pub data: DataFrame,
}

impl TableFrame {
    pub fn new(kind: TableKind, data: DataFrame) -> Self {
        Self { kind, data }
    }

    pub fn file_name(&self) -> String {
        self.kind.file_name()
    }
}

/// Builds a string column from an id accessor.
fn id_column<'a, T, R>(name: &str, rows: &'a [R], id: impl Fn(&'a R) -> &'a T) -> Column
where
    T: SurrogateId + 'a,
{
    let values: Vec<&str> = rows.iter().map(|row| id(row).as_str()).collect();
    Series::new(name.into(), values).into_column()
}

fn finish(kind: TableKind, columns: Vec<Column>) -> Result<TableFrame> {
    let data = DataFrame::new(columns)
        .with_context(|| format!("failed to assemble {kind} frame"))?;
    Ok(TableFrame::new(kind, data))
}

pub fn artist_frame(rows: &[Artist]) -> Result<TableFrame> {
    let [id, name] = header::<2>(TableKind::Artist);
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    finish(
        TableKind::Artist,
        vec![
            id_column(id, rows, |row| &row.id),
            Series::new(name.into(), names).into_column(),
        ],
    )
}

pub fn track_frame(rows: &[Track]) -> Result<TableFrame> {
    let [id, name, streams, day, month, year, cover] = header::<7>(TableKind::Track);
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    let stream_counts: Vec<i64> = rows.iter().map(|row| row.streams).collect();
    let days: Vec<Option<&str>> = rows.iter().map(|row| row.released.day.as_deref()).collect();
    let months: Vec<Option<&str>> = rows
        .iter()
        .map(|row| row.released.month.as_deref())
        .collect();
    let years: Vec<Option<&str>> = rows.iter().map(|row| row.released.year.as_deref()).collect();
    let covers: Vec<&str> = rows.iter().map(|row| row.cover_url.as_str()).collect();
    finish(
        TableKind::Track,
        vec![
            id_column(id, rows, |row| &row.id),
            Series::new(name.into(), names).into_column(),
            Series::new(streams.into(), stream_counts).into_column(),
            Series::new(day.into(), days).into_column(),
            Series::new(month.into(), months).into_column(),
            Series::new(year.into(), years).into_column(),
            Series::new(cover.into(), covers).into_column(),
        ],
    )
}

pub fn artist_track_frame(rows: &[ArtistTrack]) -> Result<TableFrame> {
    let [artist, track] = header::<2>(TableKind::ArtistTrack);
    finish(
        TableKind::ArtistTrack,
        vec![
            id_column(artist, rows, |row| &row.artist_id),
            id_column(track, rows, |row| &row.track_id),
        ],
    )
}

pub fn metric_frame(rows: &[Metric]) -> Result<TableFrame> {
    let headers = header::<11>(TableKind::Metric);
    let feature = |pick: fn(&Metric) -> Option<&str>, name: &str| {
        let values: Vec<Option<&str>> = rows.iter().map(pick).collect();
        Series::new(name.into(), values).into_column()
    };
    let modes: Vec<Option<&str>> = rows
        .iter()
        .map(|row| row.features.mode.as_ref().map(Mode::as_str))
        .collect();
    finish(
        TableKind::Metric,
        vec![
            id_column(headers[0], rows, |row| &row.id),
            id_column(headers[1], rows, |row| &row.track_id),
            feature(|m| m.features.danceability.as_deref(), headers[2]),
            feature(|m| m.features.valence.as_deref(), headers[3]),
            feature(|m| m.features.energy.as_deref(), headers[4]),
            feature(|m| m.features.acousticness.as_deref(), headers[5]),
            feature(|m| m.features.instrumentalness.as_deref(), headers[6]),
            feature(|m| m.features.liveness.as_deref(), headers[7]),
            feature(|m| m.features.speechiness.as_deref(), headers[8]),
            feature(|m| m.features.bpm.as_deref(), headers[9]),
            Series::new(headers[10].into(), modes).into_column(),
        ],
    )
}

pub fn platform_frame(rows: &[PlatformEntry]) -> Result<TableFrame> {
    let [id, track, name, playlists, charts] = header::<5>(TableKind::Platform);
    let names: Vec<&str> = rows.iter().map(|row| row.platform.name()).collect();
    let in_playlists: Vec<Option<&str>> =
        rows.iter().map(|row| row.in_playlists.as_deref()).collect();
    let in_charts: Vec<Option<&str>> = rows.iter().map(|row| row.in_charts.as_deref()).collect();
    finish(
        TableKind::Platform,
        vec![
            id_column(id, rows, |row| &row.id),
            id_column(track, rows, |row| &row.track_id),
            Series::new(name.into(), names).into_column(),
            Series::new(playlists.into(), in_playlists).into_column(),
            Series::new(charts.into(), in_charts).into_column(),
        ],
    )
}

/// Headers of `kind` as a fixed-size array.
///
/// Panics when `N` disagrees with the table definition, which only a
/// change to [`TableKind::columns`] can cause.
fn header<const N: usize>(kind: TableKind) -> [&'static str; N] {
    let columns = kind.columns();
    std::array::from_fn(|i| columns[i])
}

/// All five tables as frames, in [`TableKind::ALL`] order.
pub fn to_frames(tables: &NormalizedTables) -> Result<Vec<TableFrame>> {
    TableKind::ALL
        .into_iter()
        .map(|kind| match kind {
            TableKind::Artist => artist_frame(tables.artists()),
            TableKind::Track => track_frame(tables.tracks()),
            TableKind::ArtistTrack => artist_track_frame(tables.artist_tracks()),
            TableKind::Metric => metric_frame(tables.metrics()),
            TableKind::Platform => platform_frame(tables.platforms()),
        })
        .collect()
}
