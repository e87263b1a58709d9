mod file_config;

pub use file_config::{CompatConfig, FileConfig};

use crate::server::{LegacyPolicy, RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// Seeds directory used when none is configured, relative to the working
/// directory.
pub const DEFAULT_SEEDS_DIR: &str = "seeds";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub port: u16,
    pub bind_address: String,
    /// `None` only when seeding was explicitly turned off.
    pub seeds_dir: Option<PathBuf>,
    pub logging_level: RequestsLoggingLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        let server = ServerConfig::default();
        CliConfig {
            port: server.port,
            bind_address: server.bind_address,
            seeds_dir: Some(PathBuf::from(DEFAULT_SEEDS_DIR)),
            logging_level: server.requests_logging_level,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub bind_address: String,
    /// No seeds directory means seeding was turned off and the catalog
    /// starts empty.
    pub seeds_dir: Option<PathBuf>,
    pub logging_level: RequestsLoggingLevel,
    pub policy: LegacyPolicy,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let seeds_dir = file
            .seeds_dir
            .map(PathBuf::from)
            .or_else(|| cli.seeds_dir.clone());

        if let Some(dir) = &seeds_dir {
            if !dir.exists() {
                bail!("Seeds directory does not exist: {:?}", dir);
            }
            if !dir.is_dir() {
                bail!("seeds_dir is not a directory: {:?}", dir);
            }
        }

        let port = file.port.unwrap_or(cli.port);
        let bind_address = file
            .bind_address
            .unwrap_or_else(|| cli.bind_address.clone());

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let compat = file.compat.unwrap_or_default();
        let defaults = LegacyPolicy::default();
        let policy = LegacyPolicy {
            omit_empty_relations: compat
                .omit_empty_relations
                .unwrap_or(defaults.omit_empty_relations),
            empty_list_is_not_found: compat
                .empty_list_is_not_found
                .unwrap_or(defaults.empty_list_is_not_found),
            validation_as_not_found: compat
                .validation_as_not_found
                .unwrap_or(defaults.validation_as_not_found),
            album_artist_with_songs_only: compat
                .album_artist_with_songs_only
                .unwrap_or(defaults.album_artist_with_songs_only),
        };

        Ok(AppConfig {
            port,
            bind_address,
            seeds_dir,
            logging_level,
            policy,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            bind_address: self.bind_address.clone(),
            policy: self.policy.clone(),
        }
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
