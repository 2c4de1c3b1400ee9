use std::sync::Arc;

use tokio::net::TcpListener;

use leaderboard_server::config::{generate_config_template, Config};
use leaderboard_server::state::AppState;
use leaderboard_server::store::redis::RedisStore;
use leaderboard_server::{routes, ws};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load config with layered precedence: defaults < TOML < env < CLI
    let config = Config::load()?;

    // Handle --generate-config: print template and exit
    if config.generate_config {
        print!("{}", generate_config_template());
        return Ok(());
    }

    // Initialize tracing/logging
    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "leaderboard_server=info".parse().unwrap()),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "leaderboard_server=info".parse().unwrap()),
            )
            .init();
    }

    tracing::info!("leaderboard server v{} starting", env!("CARGO_PKG_VERSION"));

    // Connect the score store; startup fails fast if Redis is unreachable
    let store = RedisStore::connect(&config.redis_url, config.redis_password.as_deref()).await?;

    let app_state = AppState {
        store: Arc::new(store),
        subscribers: ws::new_subscriber_registry(),
        scan_page_size: config.scan_page_size,
    };

    // Build router
    let app = routes::build_router(app_state);

    // Bind and serve
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
