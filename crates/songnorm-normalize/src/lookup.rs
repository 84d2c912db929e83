//! Keyed lookups from fact rows back to dimension identifiers.

use std::collections::{BTreeMap, HashMap};

use songnorm_model::{Artist, ArtistId, Track, TrackId};

use crate::error::{NormalizeError, Result};

/// Artist name to identifier.
#[derive(Debug, Default)]
pub struct ArtistIndex {
    by_name: HashMap<String, ArtistId>,
}

impl ArtistIndex {
    pub fn new(artists: &[Artist]) -> Self {
        let mut by_name = HashMap::with_capacity(artists.len());
        for artist in artists {
            by_name
                .entry(artist.name.clone())
                .or_insert_with(|| artist.id.clone());
        }
        Self { by_name }
    }

    pub fn resolve(&self, name: &str) -> Result<&ArtistId> {
        self.by_name
            .get(name)
            .ok_or_else(|| NormalizeError::UnresolvedArtist {
                name: name.to_string(),
            })
    }
}

/// Track lookups by display name.
///
/// A display name can belong to several tracks. Name lookups therefore
/// come in two flavors: [`TrackIndex::first_by_name`] returns the
/// earliest track table row with the name, [`TrackIndex::last_by_name`]
/// the latest.
#[derive(Debug, Default)]
pub struct TrackIndex {
    first_by_name: HashMap<String, TrackId>,
    last_by_name: HashMap<String, TrackId>,
    name_counts: BTreeMap<String, usize>,
}

impl TrackIndex {
    pub fn new(tracks: &[Track]) -> Self {
        let mut index = Self::default();
        for track in tracks {
            index
                .first_by_name
                .entry(track.name.clone())
                .or_insert_with(|| track.id.clone());
            index
                .last_by_name
                .insert(track.name.clone(), track.id.clone());
            *index.name_counts.entry(track.name.clone()).or_default() += 1;
        }
        index
    }

    pub fn first_by_name(&self, name: &str) -> Result<&TrackId> {
        self.first_by_name
            .get(name)
            .ok_or_else(|| NormalizeError::UnresolvedTrack {
                name: name.to_string(),
            })
    }

    pub fn last_by_name(&self, name: &str) -> Result<&TrackId> {
        self.last_by_name
            .get(name)
            .ok_or_else(|| NormalizeError::UnresolvedTrack {
                name: name.to_string(),
            })
    }

    /// Names shared by more than one track, in sorted order.
    pub fn ambiguous_names(&self) -> Vec<&str> {
        self.name_counts
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use songnorm_model::{IdSequence, ReleaseDate, SurrogateId, TrackKey};

    fn key(name: &str, cover_url: &str) -> TrackKey {
        TrackKey {
            name: name.to_string(),
            streams: 1,
            released: ReleaseDate::default(),
            cover_url: cover_url.to_string(),
        }
    }

    #[test]
    fn shared_names_resolve_first_and_last() {
        let mut ids = IdSequence::<TrackId>::default();
        let tracks = vec![
            Track::new(ids.mint(), key("?u", "a")),
            Track::new(ids.mint(), key("?u", "b")),
            Track::new(ids.mint(), key("Flowers", "c")),
        ];
        let index = TrackIndex::new(&tracks);

        assert_eq!(index.first_by_name("?u").unwrap().as_str(), "Tr1000");
        assert_eq!(index.last_by_name("?u").unwrap().as_str(), "Tr1001");
        assert_eq!(index.ambiguous_names(), vec!["?u"]);
    }

    #[test]
    fn unknown_names_are_errors() {
        let index = TrackIndex::new(&[]);
        assert_eq!(
            index.first_by_name("Ghost"),
            Err(NormalizeError::UnresolvedTrack {
                name: "Ghost".to_string()
            })
        );
        let artists = ArtistIndex::new(&[]);
        assert!(artists.resolve("Nobody").is_err());
    }
}
