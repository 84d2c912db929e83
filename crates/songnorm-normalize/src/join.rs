//! Artist-track join table.

use songnorm_model::ArtistTrack;

use crate::error::Result;
use crate::explode::ArtistCredit;
use crate::lookup::{ArtistIndex, TrackIndex};

/// One link row per credit, in credit order.
///
/// Tracks are resolved by name, first match. When several tracks share a
/// name every credit links to the earliest of them, the same row the
/// platform table uses.
pub fn build_artist_track_table(
    credits: &[ArtistCredit],
    artists: &ArtistIndex,
    tracks: &TrackIndex,
) -> Result<Vec<ArtistTrack>> {
    credits
        .iter()
        .map(|credit| {
            Ok(ArtistTrack {
                artist_id: artists.resolve(&credit.artist_name)?.clone(),
                track_id: tracks.first_by_name(&credit.track.name)?.clone(),
            })
        })
        .collect()
}
