//! Artist and track dimension tables.

use std::collections::HashSet;

use songnorm_model::{Artist, ArtistId, IdSequence, Track, TrackId};

use crate::explode::ArtistCredit;

/// Unique artists in first-seen order.
pub fn build_artist_table(credits: &[ArtistCredit], id_offset: u32) -> Vec<Artist> {
    let mut ids = IdSequence::<ArtistId>::starting_at(id_offset);
    let mut seen = HashSet::new();
    let mut artists = Vec::new();
    for credit in credits {
        if seen.insert(credit.artist_name.as_str()) {
            artists.push(Artist {
                id: ids.mint(),
                name: credit.artist_name.clone(),
            });
        }
    }
    artists
}

/// Unique tracks, by full identity, in first-seen order.
pub fn build_track_table(credits: &[ArtistCredit], id_offset: u32) -> Vec<Track> {
    let mut ids = IdSequence::<TrackId>::starting_at(id_offset);
    let mut seen = HashSet::new();
    let mut tracks = Vec::new();
    for credit in credits {
        if seen.insert(&credit.track) {
            tracks.push(Track::new(ids.mint(), credit.track.clone()));
        }
    }
    tracks
}
