//! Referential checks over a finished table set.

use std::collections::HashSet;

use songnorm_model::{NormalizedTables, SurrogateId};

use crate::error::{NormalizeError, Result};

fn unique_ids<'a, T, I>(table: &'static str, ids: I) -> Result<HashSet<&'a str>>
where
    T: SurrogateId + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(NormalizeError::DuplicateIdentifier {
                table,
                id: id.as_str().to_string(),
            });
        }
    }
    Ok(seen)
}

fn check_reference<T: SurrogateId>(
    known: &HashSet<&str>,
    table: &'static str,
    column: &'static str,
    id: &T,
) -> Result<()> {
    if known.contains(id.as_str()) {
        Ok(())
    } else {
        Err(NormalizeError::DanglingReference {
            table,
            column,
            id: id.as_str().to_string(),
        })
    }
}

/// Verifies identifier uniqueness and every foreign key in `tables`.
pub fn verify_references(tables: &NormalizedTables) -> Result<()> {
    let artist_ids = unique_ids("artist", tables.artists().iter().map(|a| &a.id))?;
    let track_ids = unique_ids("track", tables.tracks().iter().map(|t| &t.id))?;
    unique_ids("metric", tables.metrics().iter().map(|m| &m.id))?;
    unique_ids("platform", tables.platforms().iter().map(|p| &p.id))?;

    for link in tables.artist_tracks() {
        check_reference(&artist_ids, "artist_track", "Artist_ID", &link.artist_id)?;
        check_reference(&track_ids, "artist_track", "Track_ID", &link.track_id)?;
    }
    for metric in tables.metrics() {
        check_reference(&track_ids, "metric", "Track_ID", &metric.track_id)?;
    }
    for entry in tables.platforms() {
        check_reference(&track_ids, "platform", "Track_ID", &entry.track_id)?;
    }
    Ok(())
}
