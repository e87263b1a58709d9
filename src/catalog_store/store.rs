//! In-memory entity store for artists, albums and songs.
//!
//! The three collections are owned by a single `Catalog` value so that a
//! cascading delete is one `&mut self` call: callers either see the catalog
//! before the sweep or after it, never in between.

use super::models::*;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Artist {0} not found")]
    ArtistNotFound(ArtistId),
    #[error("Album {0} not found")]
    AlbumNotFound(AlbumId),
    #[error("Song {0} not found")]
    SongNotFound(SongId),
    #[error("No {0} ids left to assign")]
    IdsExhausted(&'static str),
}

/// Monotonic id source for one collection. Ids are never handed out twice;
/// once `u64::MAX` has been used the generator is exhausted.
#[derive(Debug, Clone)]
struct IdGenerator {
    collection: &'static str,
    next: Option<u64>,
}

impl IdGenerator {
    /// Starts one above the highest existing id, or at 1 for an empty collection.
    fn above<I: IntoIterator<Item = u64>>(collection: &'static str, existing: I) -> Self {
        let next = match existing.into_iter().max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        IdGenerator { collection, next }
    }

    fn next_id(&mut self) -> Result<u64, StoreError> {
        let id = self.next.ok_or(StoreError::IdsExhausted(self.collection))?;
        self.next = id.checked_add(1);
        Ok(id)
    }

    fn peek(&self) -> Option<u64> {
        self.next
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    artists: HashMap<ArtistId, Artist>,
    albums: HashMap<AlbumId, Album>,
    songs: HashMap<SongId, Song>,
    artist_ids: IdGenerator,
    album_ids: IdGenerator,
    song_ids: IdGenerator,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::from_records(vec![], vec![], vec![])
    }
}

fn sorted_values<V>(map: &HashMap<u64, V>) -> Vec<&V> {
    let mut entries: Vec<(&u64, &V)> = map.iter().collect();
    entries.sort_by_key(|(id, _)| **id);
    entries.into_iter().map(|(_, v)| v).collect()
}

impl Catalog {
    /// Builds a catalog around already-validated records. Each id counter is
    /// seeded above the highest id of its collection.
    pub fn from_records(artists: Vec<Artist>, albums: Vec<Album>, songs: Vec<Song>) -> Catalog {
        let artist_ids = IdGenerator::above("artist", artists.iter().map(|a| a.artist_id));
        let album_ids = IdGenerator::above("album", albums.iter().map(|a| a.album_id));
        let song_ids = IdGenerator::above("song", songs.iter().map(|s| s.song_id));

        Catalog {
            artists: artists.into_iter().map(|a| (a.artist_id, a)).collect(),
            albums: albums.into_iter().map(|a| (a.album_id, a)).collect(),
            songs: songs.into_iter().map(|s| (s.song_id, s)).collect(),
            artist_ids,
            album_ids,
            song_ids,
        }
    }

    // =========================================================================
    // Counts
    // =========================================================================

    pub fn get_artists_count(&self) -> usize {
        self.artists.len()
    }

    pub fn get_albums_count(&self) -> usize {
        self.albums.len()
    }

    pub fn get_songs_count(&self) -> usize {
        self.songs.len()
    }

    /// Ids the next creates will receive, as (artist, album, song). `None`
    /// means that collection has run out of ids.
    pub fn next_ids(&self) -> (Option<ArtistId>, Option<AlbumId>, Option<SongId>) {
        (
            self.artist_ids.peek(),
            self.album_ids.peek(),
            self.song_ids.peek(),
        )
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    pub fn get_artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(&id)
    }

    pub fn get_album(&self, id: AlbumId) -> Option<&Album> {
        self.albums.get(&id)
    }

    pub fn get_song(&self, id: SongId) -> Option<&Song> {
        self.songs.get(&id)
    }

    /// All artists in id order, which is also creation order.
    pub fn artists(&self) -> Vec<&Artist> {
        sorted_values(&self.artists)
    }

    pub fn albums(&self) -> Vec<&Album> {
        sorted_values(&self.albums)
    }

    pub fn songs(&self) -> Vec<&Song> {
        sorted_values(&self.songs)
    }

    // =========================================================================
    // Write Operations
    // =========================================================================

    pub fn create_artist(&mut self, name: String) -> Result<Artist, StoreError> {
        let artist = Artist {
            artist_id: self.artist_ids.next_id()?,
            name,
        };
        debug!("Created artist {}", artist.artist_id);
        self.artists.insert(artist.artist_id, artist.clone());
        Ok(artist)
    }

    pub fn create_album(&mut self, artist_id: ArtistId, name: String) -> Result<Album, StoreError> {
        if !self.artists.contains_key(&artist_id) {
            return Err(StoreError::ArtistNotFound(artist_id));
        }
        let album = Album {
            album_id: self.album_ids.next_id()?,
            name,
            artist_id,
        };
        debug!("Created album {} for artist {}", album.album_id, artist_id);
        self.albums.insert(album.album_id, album.clone());
        Ok(album)
    }

    pub fn create_song(&mut self, album_id: AlbumId, content: SongContent) -> Result<Song, StoreError> {
        if !self.albums.contains_key(&album_id) {
            return Err(StoreError::AlbumNotFound(album_id));
        }
        let song = Song {
            song_id: self.song_ids.next_id()?,
            name: content.name,
            lyrics: content.lyrics,
            track_number: content.track_number,
            album_id,
        };
        debug!("Created song {} on album {}", song.song_id, album_id);
        self.songs.insert(song.song_id, song.clone());
        Ok(song)
    }

    pub fn update_artist(&mut self, id: ArtistId, name: String) -> Result<Artist, StoreError> {
        let artist = self
            .artists
            .get_mut(&id)
            .ok_or(StoreError::ArtistNotFound(id))?;
        artist.name = name;
        Ok(artist.clone())
    }

    pub fn update_album(&mut self, id: AlbumId, name: String) -> Result<Album, StoreError> {
        let album = self
            .albums
            .get_mut(&id)
            .ok_or(StoreError::AlbumNotFound(id))?;
        album.name = name;
        Ok(album.clone())
    }

    pub fn update_song(&mut self, id: SongId, content: SongContent) -> Result<Song, StoreError> {
        let song = self.songs.get_mut(&id).ok_or(StoreError::SongNotFound(id))?;
        song.name = content.name;
        song.lyrics = content.lyrics;
        song.track_number = content.track_number;
        Ok(song.clone())
    }

    /// Removes the artist, its albums and their songs. Returns false if the
    /// artist did not exist, in which case nothing is touched.
    pub fn delete_artist(&mut self, id: ArtistId) -> bool {
        if self.artists.remove(&id).is_none() {
            return false;
        }
        let album_ids: Vec<AlbumId> = self
            .albums
            .values()
            .filter(|album| album.artist_id == id)
            .map(|album| album.album_id)
            .collect();
        let mut removed_songs = 0;
        for album_id in album_ids.iter() {
            self.albums.remove(album_id);
            removed_songs += self.remove_album_songs(*album_id);
        }
        debug!(
            "Deleted artist {} with {} albums and {} songs",
            id,
            album_ids.len(),
            removed_songs
        );
        true
    }

    /// Removes the album and its songs.
    pub fn delete_album(&mut self, id: AlbumId) -> bool {
        if self.albums.remove(&id).is_none() {
            return false;
        }
        let removed_songs = self.remove_album_songs(id);
        debug!("Deleted album {} with {} songs", id, removed_songs);
        true
    }

    pub fn delete_song(&mut self, id: SongId) -> bool {
        let deleted = self.songs.remove(&id).is_some();
        if deleted {
            debug!("Deleted song {}", id);
        }
        deleted
    }

    fn remove_album_songs(&mut self, album_id: AlbumId) -> usize {
        let before = self.songs.len();
        self.songs.retain(|_, song| song.album_id != album_id);
        before - self.songs.len()
    }
}
