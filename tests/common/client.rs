//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all catalog endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }

    pub async fn post_form(&self, path: &str, body: &str) -> Response {
        self.client
            .post(self.url(path))
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await
            .expect("POST request failed")
    }

    pub async fn put_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PUT request failed")
    }

    pub async fn patch_json(&self, path: &str, body: &Value) -> Response {
        self.client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PATCH request failed")
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE request failed")
    }

    // ========================================================================
    // Artist Endpoints
    // ========================================================================

    /// GET /artists
    pub async fn get_artists(&self) -> Response {
        self.get("/artists").await
    }

    /// GET /artists/{id}
    pub async fn get_artist(&self, id: u64) -> Response {
        self.get(&format!("/artists/{}", id)).await
    }

    /// POST /artists
    pub async fn create_artist(&self, body: &Value) -> Response {
        self.post_json("/artists", body).await
    }

    /// PUT /artists/{id}
    pub async fn update_artist(&self, id: u64, body: &Value) -> Response {
        self.put_json(&format!("/artists/{}", id), body).await
    }

    /// DELETE /artists/{id}
    pub async fn delete_artist(&self, id: u64) -> Response {
        self.delete(&format!("/artists/{}", id)).await
    }

    /// GET /artists/{id}/albums
    pub async fn get_artist_albums(&self, id: u64) -> Response {
        self.get(&format!("/artists/{}/albums", id)).await
    }

    /// GET /artists/{id}/songs
    pub async fn get_artist_songs(&self, id: u64) -> Response {
        self.get(&format!("/artists/{}/songs", id)).await
    }

    // ========================================================================
    // Album Endpoints
    // ========================================================================

    /// GET /albums/{id}
    pub async fn get_album(&self, id: u64) -> Response {
        self.get(&format!("/albums/{}", id)).await
    }

    /// POST /artists/{artist_id}/albums
    pub async fn create_album(&self, artist_id: u64, body: &Value) -> Response {
        self.post_json(&format!("/artists/{}/albums", artist_id), body)
            .await
    }

    /// PUT /albums/{id}
    pub async fn update_album(&self, id: u64, body: &Value) -> Response {
        self.put_json(&format!("/albums/{}", id), body).await
    }

    /// DELETE /albums/{id}
    pub async fn delete_album(&self, id: u64) -> Response {
        self.delete(&format!("/albums/{}", id)).await
    }

    /// GET /albums/{id}/songs
    pub async fn get_album_songs(&self, id: u64) -> Response {
        self.get(&format!("/albums/{}/songs", id)).await
    }

    // ========================================================================
    // Song Endpoints
    // ========================================================================

    /// GET /songs/{id}
    pub async fn get_song(&self, id: u64) -> Response {
        self.get(&format!("/songs/{}", id)).await
    }

    /// POST /albums/{album_id}/songs
    pub async fn create_song(&self, album_id: u64, body: &Value) -> Response {
        self.post_json(&format!("/albums/{}/songs", album_id), body)
            .await
    }

    /// PUT /songs/{id}
    pub async fn update_song(&self, id: u64, body: &Value) -> Response {
        self.put_json(&format!("/songs/{}", id), body).await
    }

    /// DELETE /songs/{id}
    pub async fn delete_song(&self, id: u64) -> Response {
        self.delete(&format!("/songs/{}", id)).await
    }

    /// GET /trackNumbers/{track_number}/songs
    pub async fn get_track_number_songs(&self, track_number: &str) -> Response {
        self.get(&format!("/trackNumbers/{}/songs", track_number))
            .await
    }
}
