use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub seeds_dir: Option<String>,
    pub logging_level: Option<String>,

    pub compat: Option<CompatConfig>,
}

/// `[compat]` table. A missing key keeps the legacy behavior.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct CompatConfig {
    pub omit_empty_relations: Option<bool>,
    pub empty_list_is_not_found: Option<bool>,
    pub validation_as_not_found: Option<bool>,
    pub album_artist_with_songs_only: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
