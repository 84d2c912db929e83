use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::SourceColumn;

/// Streaming/recognition platforms reported in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    Spotify,
    Apple,
    Deezer,
    Shazam,
}

impl Platform {
    /// Platforms in the order rows are emitted for each record.
    pub const ALL: [Platform; 4] = [
        Platform::Spotify,
        Platform::Apple,
        Platform::Deezer,
        Platform::Shazam,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Platform::Spotify => "Spotify",
            Platform::Apple => "Apple",
            Platform::Deezer => "Deezer",
            Platform::Shazam => "Shazam",
        }
    }

    /// Source column holding the playlist count, if the platform has one.
    pub fn playlist_column(self) -> Option<SourceColumn> {
        match self {
            Platform::Spotify => Some(SourceColumn::InSpotifyPlaylists),
            Platform::Apple => Some(SourceColumn::InApplePlaylists),
            Platform::Deezer => Some(SourceColumn::InDeezerPlaylists),
            Platform::Shazam => None,
        }
    }

    /// Source column holding the chart count.
    pub fn chart_column(self) -> SourceColumn {
        match self {
            Platform::Spotify => SourceColumn::InSpotifyCharts,
            Platform::Apple => SourceColumn::InAppleCharts,
            Platform::Deezer => SourceColumn::InDeezerCharts,
            Platform::Shazam => SourceColumn::InShazamCharts,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_platform_name() {
        assert_eq!(Platform::Deezer.to_string(), "Deezer");
    }

    #[test]
    fn only_shazam_lacks_playlists() {
        let without: Vec<Platform> = Platform::ALL
            .into_iter()
            .filter(|p| p.playlist_column().is_none())
            .collect();
        assert_eq!(without, vec![Platform::Shazam]);
    }
}
