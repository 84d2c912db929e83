//! Integration tests for loading a source file end to end.

use std::fs;
use std::path::PathBuf;

use songnorm_ingest::{IngestError, load_source};
use songnorm_model::SourceColumn;

fn write_source(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("songs.csv");
    fs::write(&path, contents).expect("write source");
    path
}

const HEADER: &str = "track_name,artist(s)_name,artist_count,released_year,released_month,released_day,in_spotify_playlists,in_spotify_charts,streams,in_apple_playlists,in_apple_charts,in_deezer_playlists,in_deezer_charts,in_shazam_charts,bpm,key,mode,danceability_%,valence_%,energy_%,acousticness_%,instrumentalness_%,liveness_%,speechiness_%,cover_url";

#[test]
fn loads_full_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let contents = format!(
        "{HEADER}\n\
         \"Seven (feat. Latto) (Explicit Ver.)\",\"Latto, Jung Kook\",2,2023,7,14,553,147,141381703,43,263,45,10,826,125,B,Major,80,89,83,31,0,8,4,https://i.scdn.co/image/a\n\
         LALA,Myke Towers,1,2023,3,23,1474,48,133716286,48,126,58,14,382,92,C#,Major,71,61,74,7,0,10,4,\n"
    );
    let path = write_source(&dir, &contents);

    let records = load_source(&path).expect("load source");

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].get(SourceColumn::Artists),
        Some("Latto, Jung Kook")
    );
    assert_eq!(records[0].get(SourceColumn::Mode), Some("Major"));
    assert_eq!(
        records[0].get(SourceColumn::CoverUrl),
        Some("https://i.scdn.co/image/a")
    );
    assert_eq!(records[1].get(SourceColumn::CoverUrl), Some(""));
    assert_eq!(records[1].get(SourceColumn::Streams), Some("133716286"));
}

#[test]
fn absent_optional_column_has_no_cell() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_source(
        &dir,
        "track_name,artist(s)_name,streams,bpm\nFlowers,Miley Cyrus,10,\n",
    );

    let records = load_source(&path).expect("load source");

    assert_eq!(records[0].get(SourceColumn::CoverUrl), None);
    assert_eq!(records[0].get(SourceColumn::Bpm), Some(""));
}

#[test]
fn header_only_file_is_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_source(&dir, &format!("{HEADER}\n"));

    let err = load_source(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn missing_artist_column_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_source(&dir, "track_name,streams\nFlowers,10\n");

    let err = load_source(&path).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn { .. }));
}
