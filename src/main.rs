use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use blackjack_table::{cors_layer, create_router, AppState, Config, SessionRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    info!(
        "Allowed origins: {}, session limit {}",
        config.allowed_origins.join(", "),
        config.max_sessions
    );
    if let Some(seed) = config.seed {
        info!("Using fixed deck seed {seed}");
    }

    let cors = cors_layer(&config.allowed_origins).context("invalid allowed origin")?;
    let state = AppState::new(SessionRegistry::from_config(&config));
    let app = create_router(state, cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Blackjack table listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Received shutdown signal");
}
