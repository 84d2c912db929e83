//! Tests for songnorm-model types.

use songnorm_model::{
    Artist, ArtistId, ArtistTrack, IdSequence, NormalizeOptions, NormalizedTables, Platform,
    PlatformEntry, PlatformId, ReleaseDate, TableKind, Track, TrackId, TrackKey,
};

fn sample_tables() -> NormalizedTables {
    let mut artist_ids = IdSequence::<ArtistId>::default();
    let mut track_ids = IdSequence::<TrackId>::default();
    let artist = Artist {
        id: artist_ids.mint(),
        name: "Miley Cyrus".to_string(),
    };
    let track = Track::new(
        track_ids.mint(),
        TrackKey {
            name: "Flowers".to_string(),
            streams: 1_316_855_716,
            released: ReleaseDate {
                day: Some("12".to_string()),
                month: Some("1".to_string()),
                year: Some("2023".to_string()),
            },
            cover_url: "Not Found".to_string(),
        },
    );
    let link = ArtistTrack {
        artist_id: artist.id.clone(),
        track_id: track.id.clone(),
    };
    let platform = PlatformEntry {
        id: IdSequence::<PlatformId>::default().mint(),
        track_id: track.id.clone(),
        platform: Platform::Spotify,
        in_playlists: Some("12211".to_string()),
        in_charts: Some("115".to_string()),
    };
    NormalizedTables::new(vec![artist], vec![track], vec![link], vec![], vec![platform])
}

#[test]
fn row_counts_follow_tables() {
    let tables = sample_tables();
    assert_eq!(tables.row_count(TableKind::Artist), 1);
    assert_eq!(tables.row_count(TableKind::Track), 1);
    assert_eq!(tables.row_count(TableKind::ArtistTrack), 1);
    assert_eq!(tables.row_count(TableKind::Metric), 0);
    assert_eq!(tables.row_count(TableKind::Platform), 1);
}

#[test]
fn into_parts_hands_back_every_table() {
    let (artists, tracks, links, metrics, platforms) = sample_tables().into_parts();
    assert_eq!(artists[0].id.to_string(), "Ar1000");
    assert_eq!(tracks[0].id.to_string(), "Tr1000");
    assert_eq!(links[0].track_id, tracks[0].id);
    assert!(metrics.is_empty());
    assert_eq!(platforms[0].id.to_string(), "Pl1000");
}

#[test]
fn track_takes_fields_from_key() {
    let tables = sample_tables();
    let track = &tables.tracks()[0];
    assert_eq!(track.name, "Flowers");
    assert_eq!(track.released.year.as_deref(), Some("2023"));
}

#[test]
fn table_files_and_headers() {
    let files: Vec<String> = TableKind::ALL.iter().map(|k| k.file_name()).collect();
    assert_eq!(
        files,
        vec![
            "artist_table.csv",
            "track_table.csv",
            "artist_track_table.csv",
            "metric_table.csv",
            "platform_table.csv",
        ]
    );
    assert_eq!(TableKind::Metric.columns().len(), 11);
    assert_eq!(TableKind::Platform.columns()[2], "Platform_Name");
}

#[test]
fn tables_serialize_with_plain_identifiers() {
    let json = serde_json::to_value(sample_tables()).expect("serialize tables");
    assert_eq!(json["artists"][0]["id"], "Ar1000");
    assert_eq!(json["platforms"][0]["platform"], "Spotify");
}

#[test]
fn default_options() {
    let options = NormalizeOptions::default();
    assert_eq!(options.id_offset, 1000);
    assert_eq!(options.non_ascii_placeholder, '?');
    assert_eq!(options.missing_cover_url, "Not Found");
}
