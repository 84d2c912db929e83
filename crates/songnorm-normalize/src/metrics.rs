//! Metric table: deduplicated audio features linked to tracks.

use std::collections::HashSet;

use songnorm_model::{IdSequence, Metric, MetricId, SongRecord};

use crate::error::Result;
use crate::lookup::TrackIndex;

/// One metric row per distinct feature tuple, in first-seen order.
///
/// Each row links to the track named by the record that introduced the
/// tuple. When several tracks share that name the latest one wins.
pub fn build_metric_table(
    records: &[SongRecord],
    tracks: &TrackIndex,
    id_offset: u32,
) -> Result<Vec<Metric>> {
    let mut ids = IdSequence::<MetricId>::starting_at(id_offset);
    let mut seen = HashSet::new();
    let mut metrics = Vec::new();
    for record in records {
        if !seen.insert(&record.features) {
            continue;
        }
        metrics.push(Metric {
            id: ids.mint(),
            track_id: tracks.last_by_name(&record.track_name)?.clone(),
            features: record.features.clone(),
        });
    }
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use songnorm_model::{
        AudioFeatures, Mode, PlatformCounts, ReleaseDate, SurrogateId, Track, TrackId, TrackKey,
    };

    fn song(name: &str, danceability: &str) -> SongRecord {
        SongRecord {
            track_name: name.to_string(),
            artists: "X".to_string(),
            streams: 0,
            released: ReleaseDate::default(),
            cover_url: None,
            counts: PlatformCounts::default(),
            features: AudioFeatures {
                danceability: Some(danceability.to_string()),
                mode: Some(Mode::Major),
                ..AudioFeatures::default()
            },
        }
    }

    fn tracks(names: &[(&str, &str)]) -> TrackIndex {
        let mut ids = IdSequence::<TrackId>::default();
        let rows: Vec<Track> = names
            .iter()
            .map(|(name, cover)| {
                Track::new(
                    ids.mint(),
                    TrackKey {
                        name: name.to_string(),
                        streams: 0,
                        released: ReleaseDate::default(),
                        cover_url: cover.to_string(),
                    },
                )
            })
            .collect();
        TrackIndex::new(&rows)
    }

    #[test]
    fn identical_features_collapse() {
        let records = vec![song("A", "80"), song("B", "80"), song("C", "50")];
        let index = tracks(&[("A", "u"), ("B", "u"), ("C", "u")]);
        let metrics = build_metric_table(&records, &index, 1000).unwrap();

        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].id.as_str(), "Mt1000");
        assert_eq!(metrics[0].track_id.as_str(), "Tr1000");
        assert_eq!(metrics[1].id.as_str(), "Mt1001");
        assert_eq!(metrics[1].track_id.as_str(), "Tr1002");
    }

    #[test]
    fn fractional_values_keep_tuples_apart() {
        let mut first = song("A", "80");
        first.features.bpm = Some("120.5".to_string());
        let mut second = song("B", "80");
        second.features.bpm = Some("98.5".to_string());
        let index = tracks(&[("A", "u"), ("B", "u")]);

        let metrics = build_metric_table(&[first, second], &index, 1000).unwrap();

        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].features.bpm.as_deref(), Some("120.5"));
        assert_eq!(metrics[1].features.bpm.as_deref(), Some("98.5"));
    }

    #[test]
    fn shared_name_links_latest_track() {
        let records = vec![song("?u", "80")];
        let index = tracks(&[("?u", "a"), ("?u", "b")]);
        let metrics = build_metric_table(&records, &index, 1000).unwrap();
        assert_eq!(metrics[0].track_id.as_str(), "Tr1001");
    }
}
