//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When the seed data changes, update only this file and `fixtures.rs`.

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// Artist ID for "The Test Band"
pub const ARTIST_1_ID: u64 = 1;

/// Artist ID for "Jazz Ensemble"
pub const ARTIST_2_ID: u64 = 2;

/// Album ID for "First Album" by The Test Band
pub const ALBUM_1_ID: u64 = 1;

/// Album ID for "Jazz Collection" by Jazz Ensemble
pub const ALBUM_2_ID: u64 = 2;

/// Song ID for "Opening Track" on First Album
pub const SONG_1_ID: u64 = 1;

/// Song ID for "Middle Track" on First Album
pub const SONG_2_ID: u64 = 2;

/// Song ID for "Closing Track" on First Album
pub const SONG_3_ID: u64 = 3;

/// Song ID for "Smooth Jazz" on Jazz Collection
pub const SONG_4_ID: u64 = 4;

/// Song ID for "Upbeat Jazz" on Jazz Collection
pub const SONG_5_ID: u64 = 5;

/// Id the server hands out to the next artist, album and song it creates.
pub const NEXT_ARTIST_ID: u64 = 3;
pub const NEXT_ALBUM_ID: u64 = 3;
pub const NEXT_SONG_ID: u64 = 6;

// ============================================================================
// Test Catalog Metadata
// ============================================================================

pub const ARTIST_1_NAME: &str = "The Test Band";
pub const ARTIST_2_NAME: &str = "Jazz Ensemble";

pub const ALBUM_1_TITLE: &str = "First Album";
pub const ALBUM_2_TITLE: &str = "Jazz Collection";

pub const SONG_1_TITLE: &str = "Opening Track";
pub const SONG_2_TITLE: &str = "Middle Track";
pub const SONG_3_TITLE: &str = "Closing Track";
pub const SONG_4_TITLE: &str = "Smooth Jazz";
pub const SONG_5_TITLE: &str = "Upbeat Jazz";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Per-request timeout for the test client (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
