//! Platform table: playlist and chart counts per (track, platform).

use songnorm_model::{IdSequence, Platform, PlatformEntry, PlatformId, SongRecord};

use crate::error::Result;
use crate::lookup::TrackIndex;

/// Four rows per record, one per [`Platform::ALL`] entry.
///
/// Identifiers come from a single counter local to this call, shared by
/// every platform and record. Tracks are looked up by name, first match.
/// Shazam reports no playlists, so its playlist count is always `0`.
pub fn build_platform_table(
    records: &[SongRecord],
    tracks: &TrackIndex,
    id_offset: u32,
) -> Result<Vec<PlatformEntry>> {
    let mut ids = IdSequence::<PlatformId>::starting_at(id_offset);
    let mut entries = Vec::with_capacity(records.len() * Platform::ALL.len());
    for record in records {
        let track_id = tracks.first_by_name(&record.track_name)?;
        for platform in Platform::ALL {
            let in_playlists = if platform.playlist_column().is_some() {
                record.counts.playlists(platform)
            } else {
                Some("0".to_string())
            };
            entries.push(PlatformEntry {
                id: ids.mint(),
                track_id: track_id.clone(),
                platform,
                in_playlists,
                in_charts: record.counts.charts(platform),
            });
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NormalizeError;
    use songnorm_model::{
        AudioFeatures, PlatformCounts, ReleaseDate, SurrogateId, Track, TrackId, TrackKey,
    };

    fn song(name: &str) -> SongRecord {
        SongRecord {
            track_name: name.to_string(),
            artists: "X".to_string(),
            streams: 0,
            released: ReleaseDate::default(),
            cover_url: None,
            counts: PlatformCounts {
                spotify_playlists: Some("553".to_string()),
                spotify_charts: Some("147".to_string()),
                apple_playlists: Some("43".to_string()),
                apple_charts: Some("263".to_string()),
                deezer_playlists: 45,
                deezer_charts: Some("1,000".to_string()),
                shazam_charts: 826,
            },
            features: AudioFeatures::default(),
        }
    }

    fn index(names: &[&str]) -> TrackIndex {
        let mut ids = IdSequence::<TrackId>::default();
        let rows: Vec<Track> = names
            .iter()
            .map(|name| {
                Track::new(
                    ids.mint(),
                    TrackKey {
                        name: name.to_string(),
                        streams: 0,
                        released: ReleaseDate::default(),
                        cover_url: "Not Found".to_string(),
                    },
                )
            })
            .collect();
        TrackIndex::new(&rows)
    }

    #[test]
    fn four_rows_per_record_with_shared_counter() {
        let records = vec![song("A"), song("B")];
        let entries = build_platform_table(&records, &index(&["A", "B"]), 1000).unwrap();

        assert_eq!(entries.len(), 8);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        insta::assert_snapshot!(ids.join(","), @"Pl1000,Pl1001,Pl1002,Pl1003,Pl1004,Pl1005,Pl1006,Pl1007");
        assert_eq!(entries[4].track_id.as_str(), "Tr1001");
        assert_eq!(entries[4].platform, Platform::Spotify);
    }

    #[test]
    fn counts_copied_and_shazam_playlists_zero() {
        let entries = build_platform_table(&[song("A")], &index(&["A"]), 1000).unwrap();
        let rendered: Vec<String> = entries
            .iter()
            .map(|e| {
                format!(
                    "{}:{}:{}",
                    e.platform,
                    e.in_playlists.as_deref().unwrap_or("-"),
                    e.in_charts.as_deref().unwrap_or("-")
                )
            })
            .collect();
        assert_eq!(
            rendered,
            vec![
                "Spotify:553:147",
                "Apple:43:263",
                "Deezer:45:1,000",
                "Shazam:0:826",
            ]
        );
    }

    #[test]
    fn unknown_track_is_fatal() {
        let err = build_platform_table(&[song("Ghost")], &index(&["A"]), 1000).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnresolvedTrack {
                name: "Ghost".to_string()
            }
        );
    }
}
