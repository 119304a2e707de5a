use clap::Parser;
use money_map_core::models::settings::Settings;
use std::path::PathBuf;

/// Money Map: personal asset tracker served on localhost.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(short, long, env = "MONEY_MAP_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory holding the JSON data files
    #[arg(long, env = "MONEY_MAP_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory with the web UI's static files
    #[arg(long, env = "MONEY_MAP_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// goldapi.io access token; without it spot prices come from the cache only
    #[arg(long, env = "GOLDAPI_KEY", hide_env_values = true)]
    pub goldapi_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServerConfig {
    /// Provider settings derived from the command line.
    pub fn settings(&self) -> Settings {
        match &self.goldapi_key {
            Some(key) if !key.trim().is_empty() => Settings::with_api_key("goldapi", key.trim()),
            _ => Settings::default(),
        }
    }
}
