use clap::{Parser, ValueEnum};

use crate::rawg::DEFAULT_RAWG_API_URL;
use crate::steam::DEFAULT_STEAM_API_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Human,
    Json,
}

/// Server settings. Every flag can also come from the environment or `.env`.
#[derive(Debug, Parser)]
#[command(
    name = "steam-library",
    version,
    about = "Serve a Steam user's library ranked by playtime, with RAWG genres"
)]
pub struct Cli {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "STEAM_API_KEY", hide_env_values = true)]
    pub steam_api_key: Option<String>,
    #[arg(long, env = "RAWG_API_KEY", hide_env_values = true)]
    pub rawg_api_key: Option<String>,
    #[arg(long, env = "STEAM_API_URL", default_value = DEFAULT_STEAM_API_URL)]
    pub steam_api_url: String,
    #[arg(long, env = "RAWG_API_URL", default_value = DEFAULT_RAWG_API_URL)]
    pub rawg_api_url: String,
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Human)]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
