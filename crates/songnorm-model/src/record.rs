//! Source and cleaned song records.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Columns of the source dataset that the normalizer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourceColumn {
    TrackName,
    Artists,
    Streams,
    ReleasedYear,
    ReleasedMonth,
    ReleasedDay,
    InSpotifyPlaylists,
    InSpotifyCharts,
    InApplePlaylists,
    InAppleCharts,
    InDeezerPlaylists,
    InDeezerCharts,
    InShazamCharts,
    Danceability,
    Valence,
    Energy,
    Acousticness,
    Instrumentalness,
    Liveness,
    Speechiness,
    Bpm,
    Mode,
    CoverUrl,
}

impl SourceColumn {
    /// All columns in source-file order.
    pub const ALL: [SourceColumn; 23] = [
        SourceColumn::TrackName,
        SourceColumn::Artists,
        SourceColumn::Streams,
        SourceColumn::ReleasedYear,
        SourceColumn::ReleasedMonth,
        SourceColumn::ReleasedDay,
        SourceColumn::InSpotifyPlaylists,
        SourceColumn::InSpotifyCharts,
        SourceColumn::InApplePlaylists,
        SourceColumn::InAppleCharts,
        SourceColumn::InDeezerPlaylists,
        SourceColumn::InDeezerCharts,
        SourceColumn::InShazamCharts,
        SourceColumn::Danceability,
        SourceColumn::Valence,
        SourceColumn::Energy,
        SourceColumn::Acousticness,
        SourceColumn::Instrumentalness,
        SourceColumn::Liveness,
        SourceColumn::Speechiness,
        SourceColumn::Bpm,
        SourceColumn::Mode,
        SourceColumn::CoverUrl,
    ];

    /// Columns without which a source file cannot be normalized.
    pub const REQUIRED: [SourceColumn; 3] = [
        SourceColumn::TrackName,
        SourceColumn::Artists,
        SourceColumn::Streams,
    ];

    /// Header name in the source CSV.
    pub fn header(self) -> &'static str {
        match self {
            SourceColumn::TrackName => "track_name",
            SourceColumn::Artists => "artist(s)_name",
            SourceColumn::Streams => "streams",
            SourceColumn::ReleasedYear => "released_year",
            SourceColumn::ReleasedMonth => "released_month",
            SourceColumn::ReleasedDay => "released_day",
            SourceColumn::InSpotifyPlaylists => "in_spotify_playlists",
            SourceColumn::InSpotifyCharts => "in_spotify_charts",
            SourceColumn::InApplePlaylists => "in_apple_playlists",
            SourceColumn::InAppleCharts => "in_apple_charts",
            SourceColumn::InDeezerPlaylists => "in_deezer_playlists",
            SourceColumn::InDeezerCharts => "in_deezer_charts",
            SourceColumn::InShazamCharts => "in_shazam_charts",
            SourceColumn::Danceability => "danceability_%",
            SourceColumn::Valence => "valence_%",
            SourceColumn::Energy => "energy_%",
            SourceColumn::Acousticness => "acousticness_%",
            SourceColumn::Instrumentalness => "instrumentalness_%",
            SourceColumn::Liveness => "liveness_%",
            SourceColumn::Speechiness => "speechiness_%",
            SourceColumn::Bpm => "bpm",
            SourceColumn::Mode => "mode",
            SourceColumn::CoverUrl => "cover_url",
        }
    }

    /// Whether the column is required.
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

impl fmt::Display for SourceColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// One raw row of the source file.
///
/// Cells are kept as text exactly as read. A column that is absent from
/// the file has no entry; a null cell of a present column is empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    cells: BTreeMap<SourceColumn, String>,
}

impl SourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, column: SourceColumn, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: SourceColumn, value: impl Into<String>) {
        self.cells.insert(column, value.into());
    }

    /// Raw cell text, `None` when absent.
    pub fn get(&self, column: SourceColumn) -> Option<&str> {
        self.cells.get(&column).map(String::as_str)
    }
}

/// Musical mode, kept as a category.
///
/// Unknown labels are preserved verbatim so they round-trip to the output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    Major,
    Minor,
    Other(String),
}

impl Mode {
    /// Tags a source cell; blank cells carry no mode.
    pub fn from_source(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        match trimmed {
            "" => None,
            "Major" => Some(Mode::Major),
            "Minor" => Some(Mode::Minor),
            other => Some(Mode::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
            Mode::Other(label) => label,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The nine audio-feature values that make up a metric row.
///
/// Percentages and bpm are carried as the source text, unparsed, so
/// values such as `"120.5"` reach the output unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub danceability: Option<String>,
    pub valence: Option<String>,
    pub energy: Option<String>,
    pub acousticness: Option<String>,
    pub instrumentalness: Option<String>,
    pub liveness: Option<String>,
    pub speechiness: Option<String>,
    pub bpm: Option<String>,
    pub mode: Option<Mode>,
}

/// Release date split into its source parts, as source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReleaseDate {
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

/// Per-platform playlist and chart counts of one record.
///
/// Deezer playlists and Shazam charts are coerced to integers during
/// cleaning and are therefore always present. The other counts are the
/// source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCounts {
    pub spotify_playlists: Option<String>,
    pub spotify_charts: Option<String>,
    pub apple_playlists: Option<String>,
    pub apple_charts: Option<String>,
    pub deezer_playlists: i64,
    pub deezer_charts: Option<String>,
    pub shazam_charts: i64,
}

impl PlatformCounts {
    /// Playlist count recorded for `platform`; Shazam has none.
    pub fn playlists(&self, platform: Platform) -> Option<String> {
        match platform {
            Platform::Spotify => self.spotify_playlists.clone(),
            Platform::Apple => self.apple_playlists.clone(),
            Platform::Deezer => Some(self.deezer_playlists.to_string()),
            Platform::Shazam => None,
        }
    }

    /// Chart count recorded for `platform`.
    pub fn charts(&self, platform: Platform) -> Option<String> {
        match platform {
            Platform::Spotify => self.spotify_charts.clone(),
            Platform::Apple => self.apple_charts.clone(),
            Platform::Deezer => self.deezer_charts.clone(),
            Platform::Shazam => Some(self.shazam_charts.to_string()),
        }
    }
}

/// A cleaned, typed source record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Track name with non-ASCII runs replaced.
    pub track_name: String,
    /// Comma-separated artist names, as in the source.
    pub artists: String,
    pub streams: i64,
    pub released: ReleaseDate,
    /// Cover URL; `None` when the column is absent, empty when the cell is
    /// blank.
    pub cover_url: Option<String>,
    pub counts: PlatformCounts,
    pub features: AudioFeatures,
}
