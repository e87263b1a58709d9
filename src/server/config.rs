use super::RequestsLoggingLevel;

/// Switches for the legacy wire behavior. The first three flags are on by
/// default; turning one off gives the more conventional HTTP answer instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyPolicy {
    /// Leave `albums` / `songs` out of artist and album views when empty.
    pub omit_empty_relations: bool,
    /// Answer 404 "No X found" for empty nested listings instead of `[]`.
    pub empty_list_is_not_found: bool,
    /// Answer 404 rather than 400 for bodies that fail validation.
    pub validation_as_not_found: bool,
    /// Send an album's artist only when the album also has songs. Off by
    /// default; on gives the oldest album shape.
    pub album_artist_with_songs_only: bool,
}

impl Default for LegacyPolicy {
    fn default() -> Self {
        LegacyPolicy {
            omit_empty_relations: true,
            empty_list_is_not_found: true,
            validation_as_not_found: true,
            album_artist_with_songs_only: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub bind_address: String,
    pub policy: LegacyPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
            policy: LegacyPolicy::default(),
        }
    }
}
