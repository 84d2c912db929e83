//! Normalized table rows and the table bundle returned by a run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{ArtistId, MetricId, PlatformId, TrackId};
use crate::platform::Platform;
use crate::record::{AudioFeatures, ReleaseDate};

/// Row of the artist dimension table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
}

/// Full identity of a track.
///
/// Two rows that share a name but differ in any other attribute are
/// distinct tracks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackKey {
    pub name: String,
    pub streams: i64,
    pub released: ReleaseDate,
    pub cover_url: String,
}

/// Row of the track dimension table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub streams: i64,
    pub released: ReleaseDate,
    pub cover_url: String,
}

impl Track {
    pub fn new(id: TrackId, key: TrackKey) -> Self {
        Self {
            id,
            name: key.name,
            streams: key.streams,
            released: key.released,
            cover_url: key.cover_url,
        }
    }
}

/// Row of the artist-track join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistTrack {
    pub artist_id: ArtistId,
    pub track_id: TrackId,
}

/// Row of the metric table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub id: MetricId,
    pub track_id: TrackId,
    pub features: AudioFeatures,
}

/// Row of the platform table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformEntry {
    pub id: PlatformId,
    pub track_id: TrackId,
    pub platform: Platform,
    /// Count as written; `None` when the source cell is missing.
    pub in_playlists: Option<String>,
    pub in_charts: Option<String>,
}

/// The five output tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TableKind {
    Artist,
    Track,
    ArtistTrack,
    Metric,
    Platform,
}

impl TableKind {
    /// Tables in the order they are written.
    pub const ALL: [TableKind; 5] = [
        TableKind::Artist,
        TableKind::Track,
        TableKind::ArtistTrack,
        TableKind::Metric,
        TableKind::Platform,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TableKind::Artist => "artist",
            TableKind::Track => "track",
            TableKind::ArtistTrack => "artist_track",
            TableKind::Metric => "metric",
            TableKind::Platform => "platform",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TableKind::Artist => "Unique artists",
            TableKind::Track => "Unique tracks",
            TableKind::ArtistTrack => "Artist-track associations",
            TableKind::Metric => "Audio features per track",
            TableKind::Platform => "Playlist and chart counts per platform",
        }
    }

    /// Output file name inside the output directory.
    pub fn file_name(self) -> String {
        format!("{}_table.csv", self.name())
    }

    /// Output column headers, in order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Artist => &["Artist_ID", "Artist_Name"],
            TableKind::Track => &[
                "Track_ID",
                "Track_Name",
                "Streams",
                "Released_Day",
                "Released_Month",
                "Released_Year",
                "Cover_URL",
            ],
            TableKind::ArtistTrack => &["Artist_ID", "Track_ID"],
            TableKind::Metric => &[
                "Metric_ID",
                "Track_ID",
                "danceability_%",
                "valence_%",
                "energy_%",
                "acousticness_%",
                "instrumentalness_%",
                "liveness_%",
                "speechiness_%",
                "bpm",
                "mode",
            ],
            TableKind::Platform => &[
                "Platform_ID",
                "Track_ID",
                "Platform_Name",
                "In_Playlists",
                "In_Charts",
            ],
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All tables produced by one normalization run.
///
/// The tables are immutable once built; callers read them through the
/// accessors or take ownership with [`NormalizedTables::into_parts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTables {
    artists: Vec<Artist>,
    tracks: Vec<Track>,
    artist_tracks: Vec<ArtistTrack>,
    metrics: Vec<Metric>,
    platforms: Vec<PlatformEntry>,
}

/// Owned tables in output order.
pub type TableParts = (
    Vec<Artist>,
    Vec<Track>,
    Vec<ArtistTrack>,
    Vec<Metric>,
    Vec<PlatformEntry>,
);

impl NormalizedTables {
    pub fn new(
        artists: Vec<Artist>,
        tracks: Vec<Track>,
        artist_tracks: Vec<ArtistTrack>,
        metrics: Vec<Metric>,
        platforms: Vec<PlatformEntry>,
    ) -> Self {
        Self {
            artists,
            tracks,
            artist_tracks,
            metrics,
            platforms,
        }
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn artist_tracks(&self) -> &[ArtistTrack] {
        &self.artist_tracks
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn platforms(&self) -> &[PlatformEntry] {
        &self.platforms
    }

    /// Number of rows in `kind`.
    pub fn row_count(&self, kind: TableKind) -> usize {
        match kind {
            TableKind::Artist => self.artists.len(),
            TableKind::Track => self.tracks.len(),
            TableKind::ArtistTrack => self.artist_tracks.len(),
            TableKind::Metric => self.metrics.len(),
            TableKind::Platform => self.platforms.len(),
        }
    }

    pub fn into_parts(self) -> TableParts {
        (
            self.artists,
            self.tracks,
            self.artist_tracks,
            self.metrics,
            self.platforms,
        )
    }
}
