use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use music_catalog_server::catalog_store::{load_catalog, Catalog};
use music_catalog_server::config::{AppConfig, CliConfig, FileConfig, DEFAULT_SEEDS_DIR};
use music_catalog_server::server::{run_server, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Directory holding artists.json, albums.json and songs.json.
    #[clap(long, value_parser = parse_path, default_value = DEFAULT_SEEDS_DIR)]
    pub seeds_dir: PathBuf,

    /// Start with an empty catalog instead of loading the seeds directory.
    #[clap(long)]
    pub no_seeds: bool,

    /// The port to listen on.
    #[clap(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// The address to bind to.
    #[clap(long, default_value = "127.0.0.1")]
    pub bind_address: String,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Optional TOML config file. Its values override the CLI.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Could not initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Reading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config = CliConfig {
        port: cli_args.port,
        bind_address: cli_args.bind_address,
        seeds_dir: (!cli_args.no_seeds).then_some(cli_args.seeds_dir),
        logging_level: cli_args.logging_level,
    };
    let app_config = AppConfig::resolve(&cli_config, file_config)?;

    let catalog = match &app_config.seeds_dir {
        Some(dir) => {
            info!("Loading catalog from {:?}...", dir);
            load_catalog(dir)?
        }
        None => {
            info!("No seeds directory given, starting with an empty catalog.");
            Catalog::default()
        }
    };

    info!("Ready to serve at port {}!", app_config.port);
    run_server(app_config.server_config(), catalog).await
}
