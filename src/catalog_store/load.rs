//! Seed loading
//!
//! A seed directory holds `artists.json`, `albums.json` and `songs.json`,
//! each a JSON object from stringified id to record.

use super::models::*;
use super::store::Catalog;
use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{info, warn};

pub const ARTISTS_FILE: &str = "artists.json";
pub const ALBUMS_FILE: &str = "albums.json";
pub const SONGS_FILE: &str = "songs.json";

#[derive(Debug, PartialEq, Eq)]
pub enum Problem {
    InvalidKey { file: &'static str, key: String },
    MismatchingId { file: &'static str, key: String, id: u64 },
    DanglingArtist { album_id: AlbumId, artist_id: ArtistId },
    DanglingAlbum { song_id: SongId, album_id: AlbumId },
}

fn read_seed_file<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<HashMap<String, T>> {
    let path = dir.join(file);
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse seed file {}", path.display()))
}

/// Keeps records whose key matches their id and reports the rest.
fn check_keys<T>(
    file: &'static str,
    records: HashMap<String, T>,
    id_of: impl Fn(&T) -> u64,
    problems: &mut Vec<Problem>,
) -> Vec<T> {
    let mut out = Vec::with_capacity(records.len());
    for (key, record) in records {
        let id = id_of(&record);
        match key.parse::<u64>() {
            Err(_) => problems.push(Problem::InvalidKey { file, key }),
            Ok(parsed) if parsed != id => problems.push(Problem::MismatchingId { file, key, id }),
            Ok(_) => out.push(record),
        }
    }
    out
}

/// Checks the seed records and builds a catalog from them. All problems are
/// returned together so they can be reported in one go.
pub fn build_catalog(
    artists: HashMap<String, Artist>,
    albums: HashMap<String, Album>,
    songs: HashMap<String, Song>,
) -> std::result::Result<Catalog, Vec<Problem>> {
    let mut problems = vec![];
    let artists = check_keys(ARTISTS_FILE, artists, |a| a.artist_id, &mut problems);
    let albums = check_keys(ALBUMS_FILE, albums, |a| a.album_id, &mut problems);
    let songs = check_keys(SONGS_FILE, songs, |s| s.song_id, &mut problems);

    let artist_ids: HashSet<ArtistId> = artists.iter().map(|a| a.artist_id).collect();
    let album_ids: HashSet<AlbumId> = albums.iter().map(|a| a.album_id).collect();

    for album in albums.iter() {
        if !artist_ids.contains(&album.artist_id) {
            problems.push(Problem::DanglingArtist {
                album_id: album.album_id,
                artist_id: album.artist_id,
            });
        }
    }
    for song in songs.iter() {
        if !album_ids.contains(&song.album_id) {
            problems.push(Problem::DanglingAlbum {
                song_id: song.song_id,
                album_id: song.album_id,
            });
        }
    }

    if problems.is_empty() {
        Ok(Catalog::from_records(artists, albums, songs))
    } else {
        Err(problems)
    }
}

pub fn load_catalog<P: AsRef<Path>>(dir: P) -> Result<Catalog> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("{} is not a valid directory.", dir.display());
    }

    let artists = read_seed_file(dir, ARTISTS_FILE)?;
    let albums = read_seed_file(dir, ALBUMS_FILE)?;
    let songs = read_seed_file(dir, SONGS_FILE)?;

    match build_catalog(artists, albums, songs) {
        Ok(catalog) => {
            let (next_artist, next_album, next_song) = catalog.next_ids();
            info!(
                "Catalog has:\n{} artists\n{} albums\n{} songs",
                catalog.get_artists_count(),
                catalog.get_albums_count(),
                catalog.get_songs_count()
            );
            info!(
                "Next ids: artist {:?}, album {:?}, song {:?}",
                next_artist, next_album, next_song
            );
            if next_artist.is_none() || next_album.is_none() || next_song.is_none() {
                warn!("Some seed ids reach u64::MAX, creates in that collection will fail.");
            }
            Ok(catalog)
        }
        Err(problems) => {
            info!("Found {} problems:", problems.len());
            for problem in problems.iter() {
                info!("- {:?}", problem);
            }
            bail!(
                "Could not load catalog from {}, check the {} problems above.",
                dir.display(),
                problems.len()
            );
        }
    }
}
