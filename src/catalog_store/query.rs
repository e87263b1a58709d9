//! Read-side joins over the catalog.
//!
//! Nothing in here mutates the store. Result sequences follow id order, which
//! matches insertion order since ids only grow.

use super::models::*;
use super::store::Catalog;

pub struct QueryResolver<'a> {
    catalog: &'a Catalog,
    omit_empty_relations: bool,
    album_artist_with_songs_only: bool,
}

impl<'a> QueryResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        QueryResolver {
            catalog,
            omit_empty_relations: true,
            album_artist_with_songs_only: false,
        }
    }

    /// When true (the default), artist and album views leave out their
    /// `albums`/`songs` field instead of sending an empty list.
    pub fn omit_empty_relations(mut self, omit: bool) -> Self {
        self.omit_empty_relations = omit;
        self
    }

    /// When true, an album view carries its artist only alongside a
    /// non-empty `songs` list, so a song-less album is sent bare.
    pub fn album_artist_with_songs_only(mut self, only: bool) -> Self {
        self.album_artist_with_songs_only = only;
        self
    }

    pub fn albums_by_artist(&self, artist_id: ArtistId) -> Vec<Album> {
        self.catalog
            .albums()
            .into_iter()
            .filter(|album| album.artist_id == artist_id)
            .cloned()
            .collect()
    }

    pub fn songs_by_album(&self, album_id: AlbumId) -> Vec<Song> {
        self.catalog
            .songs()
            .into_iter()
            .filter(|song| song.album_id == album_id)
            .cloned()
            .collect()
    }

    /// Songs of every album of the artist, grouped album by album.
    pub fn songs_by_artist(&self, artist_id: ArtistId) -> Vec<Song> {
        self.albums_by_artist(artist_id)
            .iter()
            .flat_map(|album| self.songs_by_album(album.album_id))
            .collect()
    }

    pub fn songs_by_track_number(&self, track_number: u32) -> Vec<Song> {
        self.catalog
            .songs()
            .into_iter()
            .filter(|song| song.track_number == track_number)
            .cloned()
            .collect()
    }

    pub fn enrich_artist(&self, artist: &Artist) -> ArtistView {
        let albums = self.albums_by_artist(artist.artist_id);
        ArtistView {
            artist: artist.clone(),
            albums: self.relation(albums),
        }
    }

    pub fn enrich_album(&self, album: &Album) -> AlbumView {
        let songs = self.songs_by_album(album.album_id);
        let artist = if songs.is_empty() && self.album_artist_with_songs_only {
            None
        } else {
            self.catalog.get_artist(album.artist_id).cloned()
        };
        AlbumView {
            album: album.clone(),
            artist,
            songs: self.relation(songs),
        }
    }

    pub fn enrich_song(&self, song: &Song) -> SongView {
        let album = self.catalog.get_album(song.album_id).cloned();
        let artist = album
            .as_ref()
            .and_then(|album| self.catalog.get_artist(album.artist_id))
            .cloned();
        SongView {
            song: song.clone(),
            album,
            artist,
        }
    }

    fn relation<T>(&self, items: Vec<T>) -> Option<Vec<T>> {
        if items.is_empty() && self.omit_empty_relations {
            None
        } else {
            Some(items)
        }
    }
}
