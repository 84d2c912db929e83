//! The full normalization pass.
//!
//! Stages run in a fixed order, each inside its own span:
//!
//! 1. clean (dedupe by track name, ASCII-fold names, coerce counts)
//! 2. explode artists
//! 3. artist and track dimension tables
//! 4. artist-track join table
//! 5. metric table
//! 6. platform table
//! 7. referential checks

use std::time::Instant;

use tracing::{info, info_span, warn};

use songnorm_model::{NormalizeOptions, NormalizedTables, SourceRecord, TableKind};

use crate::clean::clean_records;
use crate::dimensions::{build_artist_table, build_track_table};
use crate::error::Result;
use crate::explode::explode_artists;
use crate::integrity::verify_references;
use crate::join::build_artist_track_table;
use crate::lookup::{ArtistIndex, TrackIndex};
use crate::metrics::build_metric_table;
use crate::platforms::build_platform_table;

/// Normalizes source records into the five relational tables.
///
/// The same input in the same order always yields the same tables.
/// Identifiers depend on row order, not on content.
pub fn normalize(
    records: Vec<SourceRecord>,
    options: &NormalizeOptions,
) -> Result<NormalizedTables> {
    let start = Instant::now();
    let source_rows = records.len();

    let songs = info_span!("clean").in_scope(|| clean_records(records, options));
    info!(
        source_rows,
        kept_rows = songs.len(),
        "cleaned source records"
    );

    let credits = info_span!("explode").in_scope(|| explode_artists(&songs, options))?;
    info!(credits = credits.len(), "exploded artist credits");

    let (artists, tracks) = info_span!("dimensions").in_scope(|| {
        (
            build_artist_table(&credits, options.id_offset),
            build_track_table(&credits, options.id_offset),
        )
    });
    let artist_index = ArtistIndex::new(&artists);
    let track_index = TrackIndex::new(&tracks);
    let ambiguous = track_index.ambiguous_names();
    if !ambiguous.is_empty() {
        warn!(
            count = ambiguous.len(),
            names = ?ambiguous,
            "track names shared by several tracks; name lookups are ambiguous"
        );
    }

    let artist_tracks = info_span!("join")
        .in_scope(|| build_artist_track_table(&credits, &artist_index, &track_index))?;
    let metrics = info_span!("metrics")
        .in_scope(|| build_metric_table(&songs, &track_index, options.id_offset))?;
    let platforms = info_span!("platforms")
        .in_scope(|| build_platform_table(&songs, &track_index, options.id_offset))?;

    let tables = NormalizedTables::new(artists, tracks, artist_tracks, metrics, platforms);
    info_span!("integrity").in_scope(|| verify_references(&tables))?;

    for kind in TableKind::ALL {
        info!(table = %kind, rows = tables.row_count(kind), "table built");
    }
    info!(
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    Ok(tables)
}
