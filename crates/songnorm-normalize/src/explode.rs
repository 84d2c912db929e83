//! Artist exploding.
//!
//! One cleaned record with `"Latto, Jung Kook"` becomes two credits that
//! share the same track attributes.

use songnorm_model::{NormalizeOptions, SongRecord, TrackKey};

use crate::error::{NormalizeError, Result};

/// One (artist, track) pair produced by exploding a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistCredit {
    pub artist_name: String,
    pub track: TrackKey,
}

/// Splits an artist field on commas and trims each name.
///
/// Blank segments are dropped. Commas inside a single artist name are not
/// supported.
pub fn split_artists(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Track identity carried by every credit of `record`.
pub fn track_key(record: &SongRecord, options: &NormalizeOptions) -> TrackKey {
    TrackKey {
        name: record.track_name.clone(),
        streams: record.streams,
        released: record.released.clone(),
        cover_url: record
            .cover_url
            .clone()
            .unwrap_or_else(|| options.missing_cover_url.clone()),
    }
}

/// Explodes every record into one credit per artist, in record order.
pub fn explode_artists(
    records: &[SongRecord],
    options: &NormalizeOptions,
) -> Result<Vec<ArtistCredit>> {
    let mut credits = Vec::with_capacity(records.len());
    for record in records {
        let names = split_artists(&record.artists);
        if names.is_empty() {
            return Err(NormalizeError::MissingArtists {
                track: record.track_name.clone(),
            });
        }
        let key = track_key(record, options);
        for artist_name in names {
            credits.push(ArtistCredit {
                artist_name,
                track: key.clone(),
            });
        }
    }
    Ok(credits)
}
