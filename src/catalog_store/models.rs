//! Catalog records and the enriched views returned by the API.
//!
//! Records serialize with the camelCase field names of the public JSON
//! contract (`artistId`, `trackNumber`, ...).

use serde::{Deserialize, Serialize};

pub type ArtistId = u64;
pub type AlbumId = u64;
pub type SongId = u64;

// =============================================================================
// Core Entities
// =============================================================================

/// Artist entity
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: ArtistId,
    pub name: String,
}

/// Album entity, owned by exactly one artist.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub album_id: AlbumId,
    pub name: String,
    pub artist_id: ArtistId,
}

/// Song entity, owned by exactly one album.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub song_id: SongId,
    pub name: String,
    pub lyrics: String,
    pub track_number: u32,
    pub album_id: AlbumId,
}

// =============================================================================
// Mutable content
// =============================================================================

/// Updatable fields of a song. Identity and parent are not part of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongContent {
    pub name: String,
    pub lyrics: String,
    pub track_number: u32,
}

// =============================================================================
// Resolved/Composite Types (API Responses)
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct ArtistView {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<Album>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AlbumView {
    #[serde(flatten)]
    pub album: Album,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<Song>>,
}

/// Songs are always enriched; `album` and `artist` serialize as `null` only if
/// the parent chain cannot be resolved.
#[derive(Clone, Debug, Serialize)]
pub struct SongView {
    #[serde(flatten)]
    pub song: Song,
    pub album: Option<Album>,
    pub artist: Option<Artist>,
}
