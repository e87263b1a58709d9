//! Seed fixtures written to a temporary directory

use super::constants::*;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes the three seed files and returns the directory holding them.
///
/// Song 3 and song 4 share track number 3 so the track number listing has
/// more than one hit.
pub fn create_test_seeds() -> anyhow::Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().to_path_buf();

    let artists = json!({
        "1": { "artistId": ARTIST_1_ID, "name": ARTIST_1_NAME },
        "2": { "artistId": ARTIST_2_ID, "name": ARTIST_2_NAME },
    });
    let albums = json!({
        "1": { "albumId": ALBUM_1_ID, "name": ALBUM_1_TITLE, "artistId": ARTIST_1_ID },
        "2": { "albumId": ALBUM_2_ID, "name": ALBUM_2_TITLE, "artistId": ARTIST_2_ID },
    });
    let songs = json!({
        "1": song(SONG_1_ID, SONG_1_TITLE, 1, ALBUM_1_ID),
        "2": song(SONG_2_ID, SONG_2_TITLE, 2, ALBUM_1_ID),
        "3": song(SONG_3_ID, SONG_3_TITLE, 3, ALBUM_1_ID),
        "4": song(SONG_4_ID, SONG_4_TITLE, 3, ALBUM_2_ID),
        "5": song(SONG_5_ID, SONG_5_TITLE, 4, ALBUM_2_ID),
    });

    std::fs::write(path.join("artists.json"), artists.to_string())?;
    std::fs::write(path.join("albums.json"), albums.to_string())?;
    std::fs::write(path.join("songs.json"), songs.to_string())?;

    Ok((dir, path))
}

fn song(id: u64, name: &str, track_number: u32, album_id: u64) -> serde_json::Value {
    json!({
        "songId": id,
        "name": name,
        "lyrics": format!("Lyrics of {}", name),
        "trackNumber": track_number,
        "albumId": album_id,
    })
}
