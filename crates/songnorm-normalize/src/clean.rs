//! Source cleaning: dedupe, ASCII-fold track names, coerce counts.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::debug;

use songnorm_common::coerce_count;
use songnorm_model::{
    AudioFeatures, Mode, NormalizeOptions, PlatformCounts, ReleaseDate, SongRecord, SourceColumn,
    SourceRecord,
};

static NON_ASCII_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x00-\x7F]+").expect("Invalid non-ASCII regex"));

/// Replaces every run of non-ASCII characters with one `placeholder`.
///
/// # Examples
///
/// ```
/// use songnorm_normalize::replace_non_ascii;
///
/// assert_eq!(replace_non_ascii("Tití Me Preguntó", '?'), "Tit? Me Pregunt?");
/// assert_eq!(replace_non_ascii("死ぬのがいいわ", '?'), "?");
/// ```
pub fn replace_non_ascii(value: &str, placeholder: char) -> String {
    let replacement = placeholder.to_string();
    NON_ASCII_RUN
        .replace_all(value, NoExpand(&replacement))
        .into_owned()
}

/// Keeps the first record for each raw track name.
///
/// Names are compared as read, before any character substitution.
pub fn dedupe_by_track_name(records: Vec<SourceRecord>) -> Vec<SourceRecord> {
    let mut seen = BTreeSet::new();
    let total = records.len();
    let kept: Vec<SourceRecord> = records
        .into_iter()
        .filter(|record| {
            let name = record.get(SourceColumn::TrackName).unwrap_or("").to_string();
            seen.insert(name)
        })
        .collect();
    debug!(
        dropped = total - kept.len(),
        kept = kept.len(),
        "dropped duplicate track names"
    );
    kept
}

fn text(record: &SourceRecord, column: SourceColumn) -> &str {
    record.get(column).unwrap_or("")
}

/// Cell text carried through unchanged; blank cells are missing.
fn raw(record: &SourceRecord, column: SourceColumn) -> Option<String> {
    record
        .get(column)
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

fn count(record: &SourceRecord, column: SourceColumn) -> i64 {
    coerce_count(text(record, column))
}

/// Types one deduplicated source record.
pub fn clean_record(record: &SourceRecord, options: &NormalizeOptions) -> SongRecord {
    // Only an absent column falls back to the sentinel; a blank cell
    // stays blank.
    let cover_url = record
        .get(SourceColumn::CoverUrl)
        .map(|url| url.trim().to_string());

    SongRecord {
        track_name: replace_non_ascii(
            text(record, SourceColumn::TrackName),
            options.non_ascii_placeholder,
        ),
        artists: text(record, SourceColumn::Artists).to_string(),
        streams: count(record, SourceColumn::Streams),
        released: ReleaseDate {
            day: raw(record, SourceColumn::ReleasedDay),
            month: raw(record, SourceColumn::ReleasedMonth),
            year: raw(record, SourceColumn::ReleasedYear),
        },
        cover_url,
        counts: PlatformCounts {
            spotify_playlists: raw(record, SourceColumn::InSpotifyPlaylists),
            spotify_charts: raw(record, SourceColumn::InSpotifyCharts),
            apple_playlists: raw(record, SourceColumn::InApplePlaylists),
            apple_charts: raw(record, SourceColumn::InAppleCharts),
            deezer_playlists: count(record, SourceColumn::InDeezerPlaylists),
            deezer_charts: raw(record, SourceColumn::InDeezerCharts),
            shazam_charts: count(record, SourceColumn::InShazamCharts),
        },
        features: AudioFeatures {
            danceability: raw(record, SourceColumn::Danceability),
            valence: raw(record, SourceColumn::Valence),
            energy: raw(record, SourceColumn::Energy),
            acousticness: raw(record, SourceColumn::Acousticness),
            instrumentalness: raw(record, SourceColumn::Instrumentalness),
            liveness: raw(record, SourceColumn::Liveness),
            speechiness: raw(record, SourceColumn::Speechiness),
            bpm: raw(record, SourceColumn::Bpm),
            mode: record.get(SourceColumn::Mode).and_then(Mode::from_source),
        },
    }
}

/// Deduplicates and types the source records.
pub fn clean_records(records: Vec<SourceRecord>, options: &NormalizeOptions) -> Vec<SongRecord> {
    dedupe_by_track_name(records)
        .iter()
        .map(|record| clean_record(record, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(name: &str) -> SourceRecord {
        SourceRecord::new()
            .with(SourceColumn::TrackName, name)
            .with(SourceColumn::Artists, "Someone")
    }

    #[test]
    fn first_duplicate_wins() {
        let records = vec![
            record("Flowers").with(SourceColumn::Streams, "1"),
            record("Flowers").with(SourceColumn::Streams, "2"),
            record("Kill Bill"),
        ];
        let kept = dedupe_by_track_name(records);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].get(SourceColumn::Streams), Some("1"));
    }

    #[test]
    fn names_colliding_after_folding_both_survive() {
        let options = NormalizeOptions::default();
        let cleaned = clean_records(vec![record("Ñu"), record("Ôu")], &options);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].track_name, "?u");
        assert_eq!(cleaned[1].track_name, "?u");
    }

    #[test]
    fn coerced_columns_default_to_zero() {
        let options = NormalizeOptions::default();
        let source = record("A")
            .with(SourceColumn::Streams, "2,000")
            .with(SourceColumn::InDeezerPlaylists, "1,021")
            .with(SourceColumn::InShazamCharts, "n/a");
        let cleaned = clean_record(&source, &options);
        assert_eq!(cleaned.streams, 2000);
        assert_eq!(cleaned.counts.deezer_playlists, 1021);
        assert_eq!(cleaned.counts.shazam_charts, 0);
    }

    #[test]
    fn malformed_streams_become_zero() {
        let options = NormalizeOptions::default();
        let source =
            record("A").with(SourceColumn::Streams, "BPM110KeyAModeMajorDanceability53");
        assert_eq!(clean_record(&source, &options).streams, 0);
        assert_eq!(clean_record(&record("B"), &options).streams, 0);
    }

    #[test]
    fn other_columns_keep_source_text() {
        let options = NormalizeOptions::default();
        let source = record("A")
            .with(SourceColumn::InSpotifyPlaylists, "553")
            .with(SourceColumn::InDeezerCharts, "1,000")
            .with(SourceColumn::ReleasedDay, "07")
            .with(SourceColumn::Bpm, "120.5")
            .with(SourceColumn::Valence, "")
            .with(SourceColumn::Mode, "Minor");
        let cleaned = clean_record(&source, &options);
        assert_eq!(cleaned.counts.spotify_playlists.as_deref(), Some("553"));
        assert_eq!(cleaned.counts.deezer_charts.as_deref(), Some("1,000"));
        assert_eq!(cleaned.released.day.as_deref(), Some("07"));
        assert_eq!(cleaned.features.bpm.as_deref(), Some("120.5"));
        assert_eq!(cleaned.features.mode, Some(Mode::Minor));
        assert_eq!(cleaned.features.valence, None);
        assert_eq!(cleaned.features.energy, None);
    }

    #[test]
    fn blank_cover_url_stays_blank() {
        let options = NormalizeOptions::default();
        let source = record("A").with(SourceColumn::CoverUrl, "  ");
        assert_eq!(clean_record(&source, &options).cover_url.as_deref(), Some(""));
    }

    #[test]
    fn absent_cover_url_is_none() {
        let options = NormalizeOptions::default();
        assert_eq!(clean_record(&record("A"), &options).cover_url, None);
    }

    proptest! {
        #[test]
        fn folded_names_are_ascii(name in "\\PC{0,32}") {
            let folded = replace_non_ascii(&name, '?');
            prop_assert!(folded.is_ascii());
        }

        #[test]
        fn ascii_names_are_unchanged(name in "[ -~]{0,32}") {
            prop_assert_eq!(replace_non_ascii(&name, '?'), name);
        }
    }
}
