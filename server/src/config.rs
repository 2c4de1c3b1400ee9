use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Real-time leaderboard server
#[derive(Parser, Serialize, Deserialize, Clone, Debug)]
#[command(
    name = "leaderboard-server",
    version,
    about = "Real-time leaderboard server"
)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "LEADERBOARD_PORT", default_value = "8080")]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "LEADERBOARD_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,

    /// Redis connection URL for the score store
    #[arg(
        long,
        env = "LEADERBOARD_REDIS_URL",
        default_value = "redis://127.0.0.1:6379"
    )]
    pub redis_url: String,

    /// Redis password (overrides any credential in the URL)
    #[arg(long, env = "LEADERBOARD_REDIS_PASSWORD")]
    pub redis_password: Option<String>,

    /// Keys fetched per page during leaderboard scans
    #[arg(long, env = "LEADERBOARD_SCAN_PAGE_SIZE", default_value = "100")]
    pub scan_page_size: usize,

    /// Path to TOML config file
    #[arg(long, default_value = "./leaderboard.toml")]
    pub config: String,

    /// Enable structured JSON logging (for Docker/production)
    #[arg(long, env = "LEADERBOARD_JSON_LOGS")]
    pub json_logs: bool,

    /// Output a commented TOML config template and exit
    #[arg(long)]
    pub generate_config: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "0.0.0.0".to_string(),
            redis_url: "redis://127.0.0.1:6379".to_string(),
            redis_password: None,
            scan_page_size: 100,
            config: "./leaderboard.toml".to_string(),
            json_logs: false,
            generate_config: false,
        }
    }
}

impl Config {
    /// Load config with layered precedence:
    /// built-in defaults < TOML file < env vars (LEADERBOARD_*) < CLI args
    pub fn load() -> Result<Self, figment::Error> {
        let cli = Config::parse();
        let config_path = cli.config.clone();

        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("LEADERBOARD_"))
            .merge(Serialized::defaults(cli))
            .extract()
    }
}

/// Generate a commented TOML config template
pub fn generate_config_template() -> String {
    r#"# Leaderboard Server Configuration
# Place this file at ./leaderboard.toml or specify with --config <path>
# All settings can be overridden via environment variables (LEADERBOARD_PORT,
# etc.) or CLI flags (--port, etc.)

# Server port (default: 8080)
# port = 8080

# Bind address (default: 0.0.0.0 — all interfaces)
# bind_address = "0.0.0.0"

# Redis connection URL for the score store
# redis_url = "redis://127.0.0.1:6379"

# Redis password, if the store requires one
# redis_password = ""

# Keys fetched per page during leaderboard scans (default: 100)
# scan_page_size = 100

# Enable structured JSON logging for Docker/production
# json_logs = false
"#
    .to_string()
}
